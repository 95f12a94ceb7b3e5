//! Configuration for the dispatcher.

/// Configuration for building a [`Dispatcher`](crate::Dispatcher).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Register the catch-all unknown-command responder at startup.
    pub add_default_handler: bool,

    /// Character that marks a line as a command.
    pub prefix: char,

    /// Separator between labels in the unknown-command listing.
    pub label_separator: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            add_default_handler: true,
            prefix: '-',
            label_separator: ", ".to_string(),
        }
    }
}

impl DispatchConfig {
    /// Creates a configuration that leaves unmatched commands unhandled.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            add_default_handler: false,
            ..Self::default()
        }
    }

    /// Builder method to enable or disable the fallback handler.
    #[must_use]
    pub fn with_default_handler(mut self, enabled: bool) -> Self {
        self.add_default_handler = enabled;
        self
    }

    /// Builder method to set the command prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: char) -> Self {
        self.prefix = prefix;
        self
    }

    /// Builder method to set the label separator.
    #[must_use]
    pub fn with_label_separator(mut self, separator: impl Into<String>) -> Self {
        self.label_separator = separator.into();
        self
    }
}
