use std::fs;
use std::path::Path;

use tracing::info;

use super::FormState;
use crate::error::Result;

/// Load form state from a JSON file.
///
/// A missing file is an empty form.
pub fn load_form<P: AsRef<Path>>(path: P) -> Result<FormState> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "no saved form, starting empty");
        return Ok(FormState::default());
    }

    let content = fs::read_to_string(path)?;
    let form: FormState = serde_json::from_str(&content)?;
    Ok(form)
}

/// Save form state to a JSON file.
pub fn save_form<P: AsRef<Path>>(path: P, form: &FormState) -> Result<()> {
    let json = serde_json::to_string_pretty(form)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "form saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Group;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_missing_file_is_empty_form() {
        let dir = tempdir().unwrap();
        let form = load_form(dir.path().join("absent.json")).unwrap();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_load_partial_document() {
        let json = r#"{
            "budget": "2000",
            "groups": {
                "lunch": [
                    {"name_id": "lunch-1-name", "calories_id": "lunch-1-calories", "calories": "450"}
                ]
            }
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let form = load_form(file.path()).unwrap();
        assert_eq!(form.budget, "2000");
        assert_eq!(form.entries(Group::Lunch)[0].calories, "450");
        assert!(form.entries(Group::Lunch)[0].name.is_empty());
        assert!(!form.output_visible);
    }

    #[test]
    fn test_save_and_reload() {
        let mut form = FormState::new();
        form.push_entry(Group::Exercise, "Run", "300");
        form.set_budget("1800");

        let file = NamedTempFile::new().unwrap();
        save_form(file.path(), &form).unwrap();

        let reloaded = load_form(file.path()).unwrap();
        assert_eq!(reloaded, form);
    }

    #[test]
    fn test_malformed_json_errors() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(load_form(file.path()).is_err());
    }
}
