//! Type definitions for node paths.

/// One segment of a node path.
///
/// Object keys encode as `.key`, array indices as `[n]`. A segment whose
/// text is entirely decimal digits always tokenizes as [`Step::Index`],
/// even when it was written in dot form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Object-key step.
    Key(String),
    /// Array-index step.
    Index(usize),
}

/// A tokenized node path, root segment stripped.
pub type Path = Vec<Step>;

impl Step {
    /// Build an object-key step.
    pub fn key(text: impl Into<String>) -> Self {
        Step::Key(text.into())
    }

    /// Build an array-index step.
    pub fn index(index: usize) -> Self {
        Step::Index(index)
    }

    /// Check if this step addresses an array element.
    pub fn is_index(&self) -> bool {
        matches!(self, Step::Index(_))
    }

    /// Get the key text if this is a key step.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Step::Key(key) => Some(key),
            Step::Index(_) => None,
        }
    }

    /// Get the numeric index if this is an index step.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Step::Key(_) => None,
            Step::Index(index) => Some(*index),
        }
    }
}
