// ABOUTME: Training-percentage ladder derived from a one-rep max
// ABOUTME: Fixed 55%-95% prescription table used for warm-up and working set loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

use serde::{Deserialize, Serialize};

/// Percentage-of-max training ladder.
///
/// Nine fixed steps from 55% to 95% of a one-rep max in five-point increments,
/// each rounded independently to the nearest whole kilogram. Adjacent steps
/// may round to the same load for small maxes; that is expected, the ladder
/// mirrors what a coach writes on a program sheet.
///
/// Serializes with the percentage labels as keys (`"55%"`, `"60%"`, ...),
/// matching the platform's program-prescription payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPercentages {
    /// Load at 55% of the one-rep max
    #[serde(rename = "55%")]
    pub pct_55: f64,
    /// Load at 60% of the one-rep max
    #[serde(rename = "60%")]
    pub pct_60: f64,
    /// Load at 65% of the one-rep max
    #[serde(rename = "65%")]
    pub pct_65: f64,
    /// Load at 70% of the one-rep max
    #[serde(rename = "70%")]
    pub pct_70: f64,
    /// Load at 75% of the one-rep max
    #[serde(rename = "75%")]
    pub pct_75: f64,
    /// Load at 80% of the one-rep max
    #[serde(rename = "80%")]
    pub pct_80: f64,
    /// Load at 85% of the one-rep max
    #[serde(rename = "85%")]
    pub pct_85: f64,
    /// Load at 90% of the one-rep max
    #[serde(rename = "90%")]
    pub pct_90: f64,
    /// Load at 95% of the one-rep max
    #[serde(rename = "95%")]
    pub pct_95: f64,
}

impl TrainingPercentages {
    /// Build the ladder for a one-rep max.
    ///
    /// Each step is `round(one_rep_max_kg x percentage)`, rounded on its own
    /// rather than derived from a neighboring step. The transform is pure
    /// arithmetic: zero or negative input produces a mathematically consistent
    /// (zero or negative) ladder rather than an error, and callers gate on
    /// their own input validation.
    #[must_use]
    pub fn from_one_rep_max(one_rep_max_kg: f64) -> Self {
        let load = |fraction: f64| (one_rep_max_kg * fraction).round();
        Self {
            pct_55: load(0.55),
            pct_60: load(0.6),
            pct_65: load(0.65),
            pct_70: load(0.7),
            pct_75: load(0.75),
            pct_80: load(0.8),
            pct_85: load(0.85),
            pct_90: load(0.9),
            pct_95: load(0.95),
        }
    }

    /// Ladder entries in ascending percentage order, with their labels
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, f64); 9] {
        [
            ("55%", self.pct_55),
            ("60%", self.pct_60),
            ("65%", self.pct_65),
            ("70%", self.pct_70),
            ("75%", self.pct_75),
            ("80%", self.pct_80),
            ("85%", self.pct_85),
            ("90%", self.pct_90),
            ("95%", self.pct_95),
        ]
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_ladder_for_round_max() {
        let table = TrainingPercentages::from_one_rep_max(100.0);
        assert_eq!(table.pct_55, 55.0);
        assert_eq!(table.pct_75, 75.0);
        assert_eq!(table.pct_95, 95.0);
    }

    #[test]
    fn test_each_step_rounds_independently() {
        // 87.5 x 0.60 = 52.5 rounds up to 53, while 87.5 x 0.55 = 48.125 rounds down
        let table = TrainingPercentages::from_one_rep_max(87.5);
        assert_eq!(table.pct_55, 48.0);
        assert_eq!(table.pct_60, 53.0);
        assert_eq!(table.pct_95, 83.0);
    }

    #[test]
    fn test_zero_input_gives_zero_ladder() {
        let table = TrainingPercentages::from_one_rep_max(0.0);
        for (_, load) in table.entries() {
            assert_eq!(load, 0.0);
        }
    }

    #[test]
    fn test_entries_are_ascending() {
        let table = TrainingPercentages::from_one_rep_max(142.5);
        let entries = table.entries();
        for pair in entries.windows(2) {
            assert!(
                pair[0].1 <= pair[1].1,
                "{} step {} exceeds {} step {}",
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1
            );
        }
    }

    #[test]
    fn test_serializes_with_percent_labels() {
        let table = TrainingPercentages::from_one_rep_max(100.0);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["55%"], 55.0);
        assert_eq!(json["95%"], 95.0);
    }
}
