// ABOUTME: Integration tests for one-rep-max estimation through the public formula API
// ABOUTME: Covers fixed points, known estimates, saturation, monotonicity, and parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sbdsa_strength::algorithms::OneRepMaxFormula;
use std::str::FromStr;

const ALL_FORMULAS: [OneRepMaxFormula; 6] = [
    OneRepMaxFormula::Brzycki,
    OneRepMaxFormula::Epley,
    OneRepMaxFormula::Lombardi,
    OneRepMaxFormula::OConnor,
    OneRepMaxFormula::Lander,
    OneRepMaxFormula::Average,
];

fn assert_estimate(formula: OneRepMaxFormula, weight_kg: f64, reps: i32, expected: f64) {
    let estimate = formula.estimate(weight_kg, reps);
    assert!(
        (estimate - expected).abs() < f64::EPSILON,
        "{formula} at {weight_kg}kg x {reps} should be {expected}, got {estimate}"
    );
}

// === Fixed Points ===

#[test]
fn test_one_rep_returns_weight_exactly() {
    // A single max is its own maximum; 137.4 must come back unrounded
    for formula in ALL_FORMULAS {
        let estimate = formula.estimate(137.4, 1);
        assert!(
            (estimate - 137.4).abs() < f64::EPSILON,
            "{formula} should return the weight unchanged at 1 rep, got {estimate}"
        );
    }
}

#[test]
fn test_non_positive_reps_return_zero_sentinel() {
    for formula in ALL_FORMULAS {
        assert_estimate(formula, 100.0, 0, 0.0);
        assert_estimate(formula, 100.0, -3, 0.0);
    }
}

#[test]
fn test_invalid_weight_returns_zero_sentinel() {
    for formula in ALL_FORMULAS {
        assert_estimate(formula, 0.0, 5, 0.0);
        assert_estimate(formula, -80.0, 5, 0.0);
        assert_estimate(formula, f64::NAN, 5, 0.0);
        assert_estimate(formula, f64::INFINITY, 5, 0.0);
    }
}

// === Known Estimates ===

#[test]
fn test_brzycki_known_values() {
    // 100 x 36 / (37 - 5) = 112.5, rounds up to 113
    assert_estimate(OneRepMaxFormula::Brzycki, 100.0, 5, 113.0);
    assert_estimate(OneRepMaxFormula::Brzycki, 80.0, 8, 99.0);
    assert_estimate(OneRepMaxFormula::Brzycki, 60.0, 10, 80.0);
    assert_estimate(OneRepMaxFormula::Brzycki, 100.0, 2, 103.0);
    assert_estimate(OneRepMaxFormula::Brzycki, 120.0, 3, 127.0);
    assert_estimate(OneRepMaxFormula::Brzycki, 100.0, 12, 144.0);
}

#[test]
fn test_epley_known_values() {
    // 100 x (1 + 5/30) = 116.67, rounds to 117
    assert_estimate(OneRepMaxFormula::Epley, 100.0, 5, 117.0);
    assert_estimate(OneRepMaxFormula::Epley, 80.0, 8, 101.0);
    assert_estimate(OneRepMaxFormula::Epley, 60.0, 10, 80.0);
    assert_estimate(OneRepMaxFormula::Epley, 100.0, 2, 107.0);
    assert_estimate(OneRepMaxFormula::Epley, 120.0, 3, 132.0);
    assert_estimate(OneRepMaxFormula::Epley, 100.0, 12, 140.0);
}

#[test]
fn test_lombardi_known_values() {
    // 100 x 5^0.1 = 117.46, rounds to 117
    assert_estimate(OneRepMaxFormula::Lombardi, 100.0, 5, 117.0);
    assert_estimate(OneRepMaxFormula::Lombardi, 80.0, 8, 98.0);
    assert_estimate(OneRepMaxFormula::Lombardi, 60.0, 10, 76.0);
    assert_estimate(OneRepMaxFormula::Lombardi, 100.0, 2, 107.0);
    assert_estimate(OneRepMaxFormula::Lombardi, 120.0, 3, 134.0);
    assert_estimate(OneRepMaxFormula::Lombardi, 100.0, 12, 128.0);
}

#[test]
fn test_oconnor_known_values() {
    // 100 x (1 + 5/40) = 112.5, rounds up to 113
    assert_estimate(OneRepMaxFormula::OConnor, 100.0, 5, 113.0);
    assert_estimate(OneRepMaxFormula::OConnor, 80.0, 8, 96.0);
    assert_estimate(OneRepMaxFormula::OConnor, 60.0, 10, 75.0);
    assert_estimate(OneRepMaxFormula::OConnor, 100.0, 2, 105.0);
    assert_estimate(OneRepMaxFormula::OConnor, 120.0, 3, 129.0);
    assert_estimate(OneRepMaxFormula::OConnor, 100.0, 12, 130.0);
}

#[test]
fn test_lander_known_values() {
    // 100 x 100 / (101.3 - 2.67123 x 5) = 113.71, rounds to 114
    assert_estimate(OneRepMaxFormula::Lander, 100.0, 5, 114.0);
    assert_estimate(OneRepMaxFormula::Lander, 80.0, 8, 100.0);
    assert_estimate(OneRepMaxFormula::Lander, 60.0, 10, 80.0);
    assert_estimate(OneRepMaxFormula::Lander, 100.0, 2, 104.0);
    assert_estimate(OneRepMaxFormula::Lander, 120.0, 3, 129.0);
    assert_estimate(OneRepMaxFormula::Lander, 100.0, 12, 144.0);
}

#[test]
fn test_average_known_values() {
    // Mean of Brzycki 113, Epley 117, Lombardi 117, O'Connor 113 = 115
    assert_estimate(OneRepMaxFormula::Average, 100.0, 5, 115.0);
    // Mean of 99, 101, 98, 96 = 98.5, rounds up to 99
    assert_estimate(OneRepMaxFormula::Average, 80.0, 8, 99.0);
    assert_estimate(OneRepMaxFormula::Average, 60.0, 10, 78.0);
    assert_estimate(OneRepMaxFormula::Average, 100.0, 2, 106.0);
    assert_estimate(OneRepMaxFormula::Average, 120.0, 3, 131.0);
    assert_estimate(OneRepMaxFormula::Average, 100.0, 12, 136.0);
}

// === Saturation and Monotonicity ===

#[test]
fn test_brzycki_saturates_at_36_reps() {
    // 37 - 35 = 2 keeps the curve finite; at 36 the denominator bottoms out at 1
    assert_estimate(OneRepMaxFormula::Brzycki, 100.0, 35, 1800.0);
    assert_estimate(OneRepMaxFormula::Brzycki, 100.0, 36, 3600.0);
    assert_estimate(OneRepMaxFormula::Brzycki, 100.0, 50, 3600.0);
}

#[test]
fn test_lander_saturates_at_37_reps() {
    let at_cap = OneRepMaxFormula::Lander.estimate(100.0, 37);
    let past_cap = OneRepMaxFormula::Lander.estimate(100.0, 80);
    assert!(
        (at_cap - past_cap).abs() < f64::EPSILON,
        "Lander should plateau past 37 reps, got {at_cap} then {past_cap}"
    );
    assert!(at_cap > 0.0, "Lander estimate at the cap must stay positive");
}

#[test]
fn test_estimates_are_monotonic_in_reps() {
    for formula in ALL_FORMULAS {
        let mut previous = 0.0;
        for reps in 1..=20 {
            let estimate = formula.estimate(100.0, reps);
            assert!(
                estimate >= previous,
                "{formula} dropped from {previous} to {estimate} at {reps} reps"
            );
            previous = estimate;
        }
    }
}

#[test]
fn test_estimates_are_rounded_to_whole_kilograms() {
    for formula in ALL_FORMULAS {
        for reps in 2..=15 {
            let estimate = formula.estimate(82.3, reps);
            assert!(
                (estimate - estimate.round()).abs() < f64::EPSILON,
                "{formula} at {reps} reps returned unrounded {estimate}"
            );
        }
    }
}

// === Metadata and Parsing ===

#[test]
fn test_formula_name_and_description() {
    assert_eq!(OneRepMaxFormula::Brzycki.name(), "brzycki");
    assert_eq!(OneRepMaxFormula::OConnor.name(), "o_connor");
    assert!(OneRepMaxFormula::Brzycki.description().contains("Brzycki"));
    assert!(OneRepMaxFormula::Average.description().contains("mean"));
    assert!(OneRepMaxFormula::Epley.formula().contains("reps / 30"));
    assert!(OneRepMaxFormula::Lander.formula().contains("101.3"));
}

#[test]
fn test_default_is_brzycki() {
    assert_eq!(OneRepMaxFormula::default(), OneRepMaxFormula::Brzycki);
}

#[test]
fn test_from_str_parsing() {
    assert_eq!(
        OneRepMaxFormula::from_str("brzycki").unwrap(),
        OneRepMaxFormula::Brzycki
    );
    assert_eq!(
        OneRepMaxFormula::from_str("O'Connor").unwrap(),
        OneRepMaxFormula::OConnor
    );
    assert_eq!(
        OneRepMaxFormula::from_str("avg").unwrap(),
        OneRepMaxFormula::Average
    );

    let invalid = OneRepMaxFormula::from_str("cyborg");
    assert!(invalid.is_err());
    assert!(invalid
        .unwrap_err()
        .to_string()
        .contains("Unknown one-rep-max formula"));
}

#[test]
fn test_serde_round_trip() {
    let json = serde_json::to_string(&OneRepMaxFormula::OConnor).unwrap();
    assert_eq!(json, "\"o_connor\"");
    let parsed: OneRepMaxFormula = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, OneRepMaxFormula::OConnor);
}
