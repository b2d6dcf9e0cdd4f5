use std::path::PathBuf;

use crate::{
    constants::{APP_LANG, LOCALES_DIR, REGISTRATION_API_URL, SUBMIT_REGISTRATION_PATH},
    utils::locale_utils::{Lang, Messages},
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub lang: Lang,
    pub locales_dir: PathBuf,
}

impl AppConfig {
    /// Reads `.env` (if any) and the process environment.
    pub fn from_env() -> Self {
        if let Err(err) = dotenv::dotenv() {
            log::debug!("No .env file loaded: {}", err);
        }

        Self {
            api_base_url: REGISTRATION_API_URL.clone(),
            lang: Lang::from_code(&APP_LANG),
            locales_dir: PathBuf::from(LOCALES_DIR.as_str()),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn submission_url(&self) -> String {
        submission_url(&self.api_base_url)
    }

    pub fn messages(&self) -> Messages {
        Messages::new(&self.locales_dir, self.lang)
    }
}

pub fn submission_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), SUBMIT_REGISTRATION_PATH)
}
