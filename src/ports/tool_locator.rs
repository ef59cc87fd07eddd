/// Answers whether an executable can be found on the host.
pub trait ToolLocator {
    fn is_available(&self, tool: &str) -> bool;
}
