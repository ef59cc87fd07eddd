mod fake_clock;
mod fake_command_runner;
mod fake_tool_locator;
mod template_tree;

pub use fake_clock::FixedClock;
pub use fake_command_runner::FakeCommandRunner;
pub use fake_tool_locator::FakeToolLocator;
pub use template_tree::TemplateTree;
