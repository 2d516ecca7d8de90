//! Tag classification.

use asana::Tag;

/// Recognized priority classes, highest priority first.
const DEFAULT_CLASSES: [&str; 3] = ["P0", "P1", "P2"];

/// Ordered table of recognized tag classes.
///
/// Classification is first-match-wins over the *table* order, so earlier
/// entries take precedence when a task carries several recognized tags.
#[derive(Debug, Clone)]
pub struct TagClassTable {
    classes: Vec<String>,
}

impl Default for TagClassTable {
    fn default() -> Self {
        Self::new(DEFAULT_CLASSES)
    }
}

impl TagClassTable {
    /// Create a table from an ordered list of class names.
    pub fn new(classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// The recognized class names, in precedence order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Classify a task by its tags.
    ///
    /// Returns the first table entry present among the tags, or `None`
    /// when no tag is recognized (the untagged bucket).
    #[must_use]
    pub fn classify(&self, tags: &[Tag]) -> Option<&str> {
        self.classes
            .iter()
            .find(|class| tags.iter().any(|tag| tag.name == **class))
            .map(String::as_str)
    }
}
