//! Validation policy configuration.

use civ_core::enums::{EmptyIdPolicy, ReportMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Which identifiers get the blank-value pre-check.
    #[serde(default)]
    pub empty_ids: EmptyIdPolicy,

    /// Whether join checks stop at the first failure.
    #[serde(default)]
    pub report: ReportMode,
}
