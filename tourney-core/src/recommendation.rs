//! Win recommendation for a single matchup

use serde::{Deserialize, Serialize};

/// A confidence-scored pick of a matchup winner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub winner: String,
    /// Always within 0..=100
    pub confidence: u8,
    pub rationale: String,
}
