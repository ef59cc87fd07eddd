pub mod installer;
pub mod materializer;
pub mod template_locator;

pub use installer::PackageManager;
pub use materializer::CopyReport;
pub use template_locator::TemplateLocator;
