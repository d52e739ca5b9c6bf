//! Widget configuration
//!
//! Everything the render adapters would otherwise hard-code: where the
//! host app leaves its data, which keys it uses, and where a tap sends
//! the user.  Values can be overridden through the [`ConfigPort`].
//!
//! [`ConfigPort`]: crate::app::ports::ConfigPort

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Core widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    // --- Shared storage ---
    /// Shared-storage namespace (iOS app group / Android prefs file)
    pub app_group: String,
    /// Key holding the raw pet identifier
    pub pet_key: String,
    /// Key holding the speech-bubble message
    pub message_key: String,

    // --- Launch ---
    /// URI opened when the widget is tapped
    pub deep_link: String,

    // --- Registration ---
    /// Widget kind identifier
    pub widget_kind: String,
    /// Name shown in the widget gallery
    pub display_name: String,
    /// Gallery description
    pub description: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            // Shared storage
            app_group: "group.com.ssseregi.petWidgetApp".into(),
            pet_key: "pet_emoji".into(),
            message_key: "pet_message".into(),

            // Launch
            deep_link: "petwidget://yard".into(),

            // Registration
            widget_kind: "PetWidget".into(),
            display_name: "우리펫위젯".into(),
            description: "친구의 펫을 확인하세요!".into(),
        }
    }
}

impl WidgetConfig {
    /// Reject configurations the render adapters cannot use.
    ///
    /// Storage identifiers and the deep link must be printable ASCII;
    /// gallery strings are free text.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (value, field) in [
            (&self.app_group, "app_group must be non-empty printable ASCII"),
            (&self.pet_key, "pet_key must be non-empty printable ASCII"),
            (&self.message_key, "message_key must be non-empty printable ASCII"),
            (&self.widget_kind, "widget_kind must be non-empty printable ASCII"),
        ] {
            if value.is_empty() || !is_printable_ascii(value) {
                return Err(ConfigError::ValidationFailed(field));
            }
        }
        if self.pet_key == self.message_key {
            return Err(ConfigError::ValidationFailed(
                "pet_key and message_key must differ",
            ));
        }
        match self.deep_link.split_once("://") {
            Some((scheme, _))
                if !scheme.is_empty()
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
                    && is_printable_ascii(&self.deep_link)
                    && !self.deep_link.contains(' ') => {}
            _ => {
                return Err(ConfigError::ValidationFailed(
                    "deep_link must be an absolute scheme://path URI",
                ));
            }
        }
        Ok(())
    }
}

/// Returns `true` if every byte of `s` is in the printable ASCII range
/// `0x20..=0x7E` (space through tilde, inclusive).
fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}
