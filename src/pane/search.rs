//! Shared search query for the roster sections.

/// The pane's single search string, shared by every roster section.
///
/// No trimming, validation or debouncing happens here; each roster decides
/// how to match against the raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    query: String,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, next: impl Into<String>) {
        self.query = next.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Direct access for text inputs bound to the query.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.query
    }
}
