use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    De,
}

impl Lang {
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "de" => Self::De,
            "en" => Self::En,
            _ => Self::En,
        }
    }

    fn folder(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
        }
    }
}

fn load_message_file(dir: &Path, lang: Lang, namespace: &Namespace) -> Value {
    let file_path = dir
        .join(lang.folder())
        .join(format!("{}.json", namespace.as_str()));

    match fs::read_to_string(&file_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(json) => {
                log::debug!("Loaded messages from {:?}", file_path);
                json
            }
            Err(err) => {
                log::error!("Failed to parse JSON from {:?}: {}", file_path, err);
                Value::Null
            }
        },
        Err(err) => {
            log::warn!("Failed to read file {:?}: {}", file_path, err);
            Value::Null
        }
    }
}

#[derive(Debug, Clone)]
pub enum Namespace {
    Validation,
    Submission,
}

impl Namespace {
    fn as_str(&self) -> &'static str {
        match self {
            Namespace::Validation => "validation",
            Namespace::Submission => "submission",
        }
    }
}

/// Message catalogue; any key missing from the loaded files resolves to the
/// caller's English fallback.
#[derive(Debug, Clone)]
pub struct Messages {
    pub validation: Value,
    pub submission: Value,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            validation: Value::Null,
            submission: Value::Null,
        }
    }
}

impl Messages {
    pub fn new(dir: impl AsRef<Path>, lang: Lang) -> Self {
        let dir = dir.as_ref();
        Self {
            validation: load_message_file(dir, lang, &Namespace::Validation),
            submission: load_message_file(dir, lang, &Namespace::Submission),
        }
    }

    pub fn get(&self, namespace: &Namespace, path: &str) -> Option<&Value> {
        let root = match namespace {
            Namespace::Validation => &self.validation,
            Namespace::Submission => &self.submission,
        };

        let mut current = root;
        for key in path.split('.') {
            match current.get(key) {
                Some(next) => {
                    current = next;
                }
                None => {
                    log::trace!(
                        "Key '{}' not found in path '{}.{}'",
                        key,
                        namespace.as_str(),
                        path
                    );
                    return None;
                }
            }
        }

        Some(current)
    }

    pub fn get_str(&self, namespace: Namespace, path: &str, fallback: &str) -> String {
        self.get(&namespace, path)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn get_validation_message(&self, path: &str, fallback: &str) -> String {
        self.get_str(Namespace::Validation, path, fallback)
    }

    pub fn get_submission_message(&self, path: &str, fallback: &str) -> String {
        self.get_str(Namespace::Submission, path, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn locales_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("locales")
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Lang::from_code("DE"), Lang::De);
        assert_eq!(Lang::from_code("el"), Lang::En);
    }

    #[test]
    fn empty_catalogue_returns_fallback() {
        let messages = Messages::default();
        assert_eq!(
            messages.get_validation_message("city.required", "City is required"),
            "City is required"
        );
    }

    #[test]
    fn english_files_match_built_in_fallbacks() {
        let messages = Messages::new(locales_dir(), Lang::En);
        assert_eq!(
            messages.get_validation_message("contactEmail.invalid", "-"),
            "Please enter a valid email address"
        );
        assert_eq!(
            messages.get_submission_message("network_error", "-"),
            "Network error. Please check your connection and try again."
        );
    }

    #[test]
    fn german_files_override_fallbacks() {
        let messages = Messages::new(locales_dir(), Lang::De);
        assert_eq!(
            messages.get_validation_message("city.required", "City is required"),
            "Stadt ist erforderlich"
        );
    }

    #[test]
    fn missing_directory_yields_fallbacks() {
        let dir = tempfile::tempdir().expect("tempdir");
        let messages = Messages::new(dir.path(), Lang::En);
        assert_eq!(
            messages.get_submission_message("success", "ok"),
            "ok"
        );
    }
}
