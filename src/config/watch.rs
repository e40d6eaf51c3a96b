use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Diagnostics emitted around watch channels.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Warn when a notifier is dropped while its holder is still waiting.
    ///
    /// The holder always observes `WatchError::NotifierDropped`; this only
    /// controls whether the transport side leaves a trace of it.
    /// Default: true
    #[serde(default = "default_warn_on_unresolved_drop")]
    pub warn_on_unresolved_drop: bool,

    /// Log resolution attempts refused because the watch already resolved or
    /// was cancelled.
    /// Default: true
    #[serde(default = "default_log_rejected_resolutions")]
    pub log_rejected_resolutions: bool,

    /// Attached to every watch log record, to tell clients apart
    /// Default: "watch"
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            warn_on_unresolved_drop: default_warn_on_unresolved_drop(),
            log_rejected_resolutions: default_log_rejected_resolutions(),
            label: default_label(),
        }
    }
}

impl WatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::Config(ConfigError::Message(
                "watch.label must not be empty".into(),
            )));
        }
        Ok(())
    }
}

fn default_warn_on_unresolved_drop() -> bool {
    true
}
fn default_log_rejected_resolutions() -> bool {
    true
}
fn default_label() -> String {
    "watch".into()
}
