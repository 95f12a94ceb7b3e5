//! Runtime configuration.
//!
//! Settings come from, in increasing priority: defaults, a TOML file, the
//! `CHATCMD_ADD_DEFAULT_HANDLER` environment variable, and command-line flags.
//!
//! ```toml
//! actor = "alice"
//! prompt = "> "
//! show_banner = true
//!
//! [dispatch]
//! add_default_handler = true
//! prefix = "-"
//! label_separator = ", "
//! ```

use std::fs;
use std::path::Path;

use chatcmd_dispatch::DispatchConfig;
use chatcmd_foundation::error::ErrorContext;
use chatcmd_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `dispatch.add_default_handler`.
pub const ADD_DEFAULT_HANDLER_ENV: &str = "CHATCMD_ADD_DEFAULT_HANDLER";

/// Configuration for a console session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Dispatcher settings.
    pub dispatch: DispatchConfig,

    /// Name of the actor typing at the console.
    pub actor: String,

    /// Prompt shown before each line.
    pub prompt: String,

    /// Whether to show the welcome banner.
    pub show_banner: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            dispatch: DispatchConfig::default(),
            actor: "guest".to_string(),
            prompt: "> ".to_string(),
            show_banner: true,
        }
    }
}

impl RuntimeConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this structure.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::from(e).with_context(ErrorContext::new().with_path(path)))?;
        Self::from_toml_str(&text).map_err(|e| e.with_context(ErrorContext::new().with_path(path)))
    }

    /// Applies an `ADD_DEFAULT_HANDLER` override value.
    ///
    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`.
    ///
    /// # Errors
    ///
    /// Returns an error for any other value.
    pub fn apply_default_handler_override(&mut self, value: &str) -> Result<()> {
        self.dispatch.add_default_handler = parse_flag(value).ok_or_else(|| {
            Error::invalid_option(ADD_DEFAULT_HANDLER_ENV, format!("not a boolean: {value}"))
        })?;
        Ok(())
    }

    /// Applies the environment override, if the variable is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable holds something other than a boolean.
    pub fn apply_env(&mut self) -> Result<()> {
        match std::env::var(ADD_DEFAULT_HANDLER_ENV) {
            Ok(value) => self.apply_default_handler_override(&value),
            Err(_) => Ok(()),
        }
    }

    /// Builder method to set the actor name.
    #[must_use]
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to replace the dispatcher settings.
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: DispatchConfig) -> Self {
        self.dispatch = dispatch;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
