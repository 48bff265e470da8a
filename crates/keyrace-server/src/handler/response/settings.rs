//! User settings response types.

use keyrace_postgres::model;
use keyrace_postgres::types::CaretStyle;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Typing preferences of a user.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Shape of the caret drawn in the typing area.
    pub caret_style: CaretStyle,
}

impl Settings {
    /// Creates a settings response, falling back to defaults when no row exists.
    pub fn from_model(settings: Option<model::UserSettings>) -> Self {
        settings
            .map(|settings| Self {
                caret_style: settings.caret_style,
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_settings_default_to_line() -> anyhow::Result<()> {
        let settings = Settings::from_model(None);
        assert_eq!(settings.caret_style, CaretStyle::Line);

        let json = serde_json::to_value(settings)?;
        assert_eq!(json["caretStyle"], "LINE");
        Ok(())
    }
}
