//! Pour step model shared by the calculator, the tracker and the front ends.

use serde::{Deserialize, Serialize};

/// Which pour a step represents. Doubles as the lookup key front ends use to
/// pick a localized label, so the serialized names are part of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    #[serde(rename = "flavor-pour-1")]
    FlavorPour1,
    #[serde(rename = "flavor-pour-2")]
    FlavorPour2,
    #[serde(rename = "strength-pour-1")]
    StrengthPour1,
    #[serde(rename = "strength-pour-2")]
    StrengthPour2,
    #[serde(rename = "strength-pour-3")]
    StrengthPour3,
    #[serde(rename = "finish")]
    Finish,
}

/// Where a step sits relative to the running clock. Owned by the tracker;
/// the calculator always emits `Upcoming`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    #[default]
    Upcoming,
    Next,
    Current,
    Completed,
}

/// One event in the brew sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PourStep {
    /// Seconds from brew start. Unique and strictly increasing across a schedule.
    pub time_s: u32,
    /// Grams of water added at this step. Zero for the finish marker.
    pub pour_g: f64,
    /// Cumulative grams through and including this step.
    pub total_g: f64,
    pub kind: StepKind,
    pub status: StepStatus,
}
