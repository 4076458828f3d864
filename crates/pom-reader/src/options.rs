//! Reader configuration.

use crate::config_tree::ElementNaming;

/// Nesting bound applied when no other is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling a transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Deepest nesting accepted inside opaque configuration blocks.
    pub max_depth: usize,

    /// How elements of a sequence inside a configuration block are named.
    pub element_naming: ElementNaming,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            element_naming: ElementNaming::Singular,
        }
    }
}

impl ReaderOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_element_naming(mut self, element_naming: ElementNaming) -> Self {
        self.element_naming = element_naming;
        self
    }
}
