use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Country {
    #[serde(rename = "GR")]
    #[strum(serialize = "GR")]
    Greece,
    #[serde(rename = "US")]
    #[strum(serialize = "US")]
    UnitedStates,
    #[serde(rename = "GB")]
    #[strum(serialize = "GB")]
    UnitedKingdom,
}

impl Country {
    pub fn label(&self) -> &'static str {
        match self {
            Country::Greece => "Greece",
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
        }
    }
}
