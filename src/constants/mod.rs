use std::env;
use std::sync::LazyLock;

macro_rules! lazy_env_var {
    ($name:ident, $default:expr) => {
        pub static $name: LazyLock<String> = LazyLock::new(|| {
            let var_name = stringify!($name);
            env::var(var_name).unwrap_or_else(|_| {
                log::debug!("{} not set, using default '{}'", var_name, $default);
                $default.to_string()
            })
        });
    };
}

lazy_env_var!(REGISTRATION_API_URL, DEFAULT_API_URL);
lazy_env_var!(APP_LANG, "en");
lazy_env_var!(LOCALES_DIR, "locales");

pub const DEFAULT_API_URL: &str = "http://localhost/wordpress";
pub const SUBMIT_REGISTRATION_PATH: &str = "/wp-json/gostudent/v1/submit-registration";

pub const BASE_PRICE: f64 = 29.60;
pub const DISCOUNT_RATE: f64 = 0.04;
pub const ADVANCE_PAYMENT_FACTOR: f64 = 0.95;
pub const SETUP_FEE: f64 = 0.0;

pub const DURATION_OPTIONS: [u32; 6] = [6, 9, 12, 18, 24, 36];
pub const DEFAULT_DURATION_MONTHS: u32 = 6;
