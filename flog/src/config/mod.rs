use crate::inspect::StackOrder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlogConfig {
    /// Prefix used by `print`, `log` and `throw`.
    pub prefix: String,
    /// Suffix for ordinary lines.
    pub suffix: String,
    /// Suffix for raised lines.
    pub raise_suffix: String,
    /// Prefix for executor and introspection lines.
    pub tag: String,
    /// Suffix for callee, trace and type lines.
    pub tag_suffix: String,
    /// Emit ANSI escapes. When false every style token renders empty.
    pub color: bool,
    pub stack_order: StackOrder,
}

impl Default for FlogConfig {
    fn default() -> Self {
        Self {
            prefix: "+".to_string(),
            suffix: "->".to_string(),
            raise_suffix: "!!!".to_string(),
            tag: "flog".to_string(),
            tag_suffix: "-".to_string(),
            color: true,
            stack_order: StackOrder::OutermostFirst,
        }
    }
}

impl FlogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_raise_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.raise_suffix = suffix.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_tag_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.tag_suffix = suffix.into();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn with_stack_order(mut self, order: StackOrder) -> Self {
        self.stack_order = order;
        self
    }
}
