//! Farmer profile value object.
//!
//! A snapshot of the farmer's circumstances used to ground prompts. The
//! durable profile store lives outside this crate; callers pass a profile
//! in per request.

use serde::{Deserialize, Serialize};

/// Structured farmer profile data used for prompt construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    /// Farmer's name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Village name, if known.
    #[serde(default)]
    pub village: String,
    /// District name, if known.
    #[serde(default)]
    pub district: String,
    /// State name, if known.
    #[serde(default)]
    pub state: String,
    /// Land available for the business.
    pub land_size: f64,
    /// Unit for land figures (acres by default).
    #[serde(default = "default_land_unit")]
    pub land_unit: String,
    /// Starting capital in rupees.
    pub capital: f64,
    /// Years of relevant experience.
    pub experience_years: u32,
    /// Market access: good / moderate / poor.
    pub market_access: String,
    /// Risk preference: low / medium / high.
    pub risk_level: String,
}

impl FarmerProfile {
    /// Default profile used when no stored profile is available.
    pub fn guest() -> Self {
        Self {
            name: "Guest Farmer".to_string(),
            age: 35,
            village: "Unknown".to_string(),
            district: "Unknown".to_string(),
            state: "Unknown".to_string(),
            land_size: 5.0,
            land_unit: default_land_unit(),
            capital: 100_000.0,
            experience_years: 5,
            market_access: "Moderate".to_string(),
            risk_level: "Medium".to_string(),
        }
    }

    /// Renders the location as "village, district, state".
    pub fn location(&self) -> String {
        format!("{}, {}, {}", self.village, self.district, self.state)
    }

    /// Renders the land holding with its unit.
    pub fn land(&self) -> String {
        format!("{} {}", self.land_size, self.land_unit)
    }
}

impl Default for FarmerProfile {
    fn default() -> Self {
        Self::guest()
    }
}

fn default_land_unit() -> String {
    "acres".to_string()
}
