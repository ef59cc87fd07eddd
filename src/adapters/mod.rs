pub mod path_tool_locator;
pub mod process_command;
pub mod system_clock;

pub use path_tool_locator::PathToolLocator;
pub use process_command::ProcessCommandRunner;
pub use system_clock::SystemClock;
