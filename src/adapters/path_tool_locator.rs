use crate::ports::ToolLocator;

/// Looks tools up on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathToolLocator;

impl ToolLocator for PathToolLocator {
    fn is_available(&self, tool: &str) -> bool {
        which::which(tool).is_ok()
    }
}
