use serde_json::{Map, Value};
use shared::SettingsUpdate;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown settings field '{0}'")]
    UnknownField(String),
    #[error("Invalid settings form: {0}")]
    Malformed(String),
}

/// Field names accepted from the settings form, besides the `logo` upload
pub const SETTINGS_FIELDS: [&str; 3] = ["theme", "business_name", "currency"];

/// Build an allow-listed update from raw `(name, value)` form fields.
///
/// Any field outside [`SETTINGS_FIELDS`] rejects the whole submission.
pub fn settings_update_from_fields<I>(fields: I) -> Result<SettingsUpdate, SettingsError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut map = Map::new();
    for (name, value) in fields {
        if !SETTINGS_FIELDS.contains(&name.as_str()) {
            return Err(SettingsError::UnknownField(name));
        }
        map.insert(name, Value::String(value));
    }

    serde_json::from_value(Value::Object(map)).map_err(|e| SettingsError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_known_fields_are_accepted() {
        let update = settings_update_from_fields(vec![
            field("business_name", "Asha Stores"),
            field("currency", "$"),
        ])
        .unwrap();

        assert_eq!(update.business_name.as_deref(), Some("Asha Stores"));
        assert_eq!(update.currency.as_deref(), Some("$"));
        assert_eq!(update.theme, None);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = settings_update_from_fields(vec![
            field("business_name", "Asha Stores"),
            field("logo_path", "/etc/passwd"),
        ]);

        assert_eq!(result, Err(SettingsError::UnknownField("logo_path".to_string())));
    }

    #[test]
    fn test_no_fields_is_an_empty_update() {
        let update = settings_update_from_fields(Vec::new()).unwrap();
        assert_eq!(update, SettingsUpdate::default());
    }
}
