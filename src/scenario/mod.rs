//! What-if scenario levers
//!
//! The two user-adjustable simulation inputs. Values are clamped to their
//! declared ranges on every write so downstream math never sees an
//! out-of-range lever (the ROI denominator relies on `ad_spend_level >= 5`).

use serde::Serialize;

/// Minimum monthly ad spend lever, in thousands of currency
pub const AD_SPEND_MIN: u32 = 5;
/// Maximum monthly ad spend lever, in thousands of currency
pub const AD_SPEND_MAX: u32 = 100;
/// Minimum operational efficiency lever, in percent
pub const EFFICIENCY_MIN: u32 = 20;
/// Maximum operational efficiency lever, in percent
pub const EFFICIENCY_MAX: u32 = 100;

const DEFAULT_AD_SPEND: u32 = 24;
const DEFAULT_EFFICIENCY: u32 = 82;

/// User-controlled levers for the what-if simulation
///
/// Fields are private so every entry point goes through clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioParameters {
    /// Monthly growth investment (ad spend) in thousands, [5, 100]
    ad_spend_level: u32,

    /// Operational efficiency in percent, [20, 100]
    efficiency_level: u32,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            ad_spend_level: DEFAULT_AD_SPEND,
            efficiency_level: DEFAULT_EFFICIENCY,
        }
    }
}

impl ScenarioParameters {
    /// Create parameters, clamping both levers into range
    pub fn new(ad_spend_level: u32, efficiency_level: u32) -> Self {
        Self {
            ad_spend_level: ad_spend_level.clamp(AD_SPEND_MIN, AD_SPEND_MAX),
            efficiency_level: efficiency_level.clamp(EFFICIENCY_MIN, EFFICIENCY_MAX),
        }
    }

    /// Monthly ad spend lever, in thousands of currency
    pub fn ad_spend_level(&self) -> u32 {
        self.ad_spend_level
    }

    /// Operational efficiency lever, in percent
    pub fn efficiency_level(&self) -> u32 {
        self.efficiency_level
    }

    /// Update the ad spend lever (slider event), clamped into range
    pub fn set_ad_spend(&mut self, level: u32) {
        self.ad_spend_level = level.clamp(AD_SPEND_MIN, AD_SPEND_MAX);
    }

    /// Update the efficiency lever (slider event), clamped into range
    pub fn set_efficiency(&mut self, level: u32) {
        self.efficiency_level = level.clamp(EFFICIENCY_MIN, EFFICIENCY_MAX);
    }
}
