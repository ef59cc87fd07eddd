use std::collections::HashSet;

use crate::ports::ToolLocator;

#[derive(Default)]
pub struct FakeToolLocator {
    pub available: HashSet<String>,
}

impl FakeToolLocator {
    pub fn with(tools: &[&str]) -> Self {
        Self { available: tools.iter().map(|t| t.to_string()).collect() }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

impl ToolLocator for FakeToolLocator {
    fn is_available(&self, tool: &str) -> bool {
        self.available.contains(tool)
    }
}
