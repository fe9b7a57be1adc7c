/// Default placeholder text.
pub const DEFAULT_EMPTY_MESSAGE: &str = "Nothing here yet.";

/// Placeholder for an empty list, with an optional call to action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateView {
    /// Placeholder text.
    pub message: String,
    /// Button label; no button when absent.
    pub cta_label: Option<String>,
}

impl EmptyStateView {
    /// Placeholder with a custom message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cta_label: None,
        }
    }

    /// Add a call-to-action button. Blank labels are ignored.
    #[must_use]
    pub fn with_cta(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.cta_label = (!label.trim().is_empty()).then_some(label);
        self
    }
}

impl Default for EmptyStateView {
    fn default() -> Self {
        Self::new(DEFAULT_EMPTY_MESSAGE)
    }
}
