mod clock;
mod command_runner;
mod tool_locator;

pub use clock::Clock;
pub use command_runner::CommandRunner;
pub use tool_locator::ToolLocator;
