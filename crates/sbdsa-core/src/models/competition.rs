// ABOUTME: IPF-derived competition classification used by South African federations
// ABOUTME: Bodyweight class labels and age categories, including birth-date derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

use crate::errors::{AppError, AppResult};
use crate::models::Gender;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bodyweight class boundaries (kg) with their display labels
mod class_bounds {
    /// Men's classes; a class covers bodyweights up to and including its boundary
    pub const MALE: [(f64, &str); 9] = [
        (52.0, "52kg"),
        (56.0, "56kg"),
        (59.0, "59kg"),
        (66.0, "66kg"),
        (74.0, "74kg"),
        (83.0, "83kg"),
        (93.0, "93kg"),
        (105.0, "105kg"),
        (120.0, "120kg"),
    ];
    /// Men's super-heavyweight label (above the last boundary)
    pub const MALE_SUPER: &str = "120kg+";

    /// Women's classes
    pub const FEMALE: [(f64, &str); 8] = [
        (43.0, "43kg"),
        (47.0, "47kg"),
        (52.0, "52kg"),
        (57.0, "57kg"),
        (63.0, "63kg"),
        (69.0, "69kg"),
        (76.0, "76kg"),
        (84.0, "84kg"),
    ];
    /// Women's super-heavyweight label
    pub const FEMALE_SUPER: &str = "84kg+";
}

/// Look up the competition bodyweight class label for a lifter.
///
/// A class covers bodyweights above the previous boundary up to and including
/// its own (an 83.0kg lifter is in the 83kg class; 83.1kg moves up to 93kg).
/// Bodyweights above the heaviest boundary fall into the open-ended
/// super-heavyweight class.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if `body_weight_kg` is not a positive
/// finite number.
///
/// # Example
///
/// ```
/// use sbdsa_core::models::{weight_class, Gender};
///
/// assert_eq!(weight_class(Gender::Male, 81.3).unwrap(), "83kg");
/// assert_eq!(weight_class(Gender::Female, 90.0).unwrap(), "84kg+");
/// ```
pub fn weight_class(gender: Gender, body_weight_kg: f64) -> AppResult<&'static str> {
    if !body_weight_kg.is_finite() || body_weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Body weight {body_weight_kg}kg must be a positive number"
        )));
    }

    let label = match gender {
        Gender::Male => class_label(&class_bounds::MALE, class_bounds::MALE_SUPER, body_weight_kg),
        Gender::Female => class_label(
            &class_bounds::FEMALE,
            class_bounds::FEMALE_SUPER,
            body_weight_kg,
        ),
    };
    Ok(label)
}

/// First class whose boundary covers the bodyweight, else the super class
fn class_label(
    bounds: &[(f64, &'static str)],
    super_label: &'static str,
    body_weight_kg: f64,
) -> &'static str {
    bounds
        .iter()
        .find(|(limit, _)| body_weight_kg <= *limit)
        .map_or(super_label, |(_, label)| *label)
}

/// Competition age category.
///
/// Categories follow the South African federations' IPF-derived rules; the
/// platform's competition minimum is 14 years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeCategory {
    /// Sub-Junior (14-18)
    #[serde(rename = "sub-junior")]
    SubJunior,
    /// Junior (19-23)
    #[serde(rename = "junior")]
    Junior,
    /// Open (24-39)
    #[serde(rename = "open")]
    Open,
    /// Masters 1 (40-49)
    #[serde(rename = "masters-1")]
    Masters1,
    /// Masters 2 (50-59)
    #[serde(rename = "masters-2")]
    Masters2,
    /// Masters 3 (60-69)
    #[serde(rename = "masters-3")]
    Masters3,
    /// Masters 4 (70+)
    #[serde(rename = "masters-4")]
    Masters4,
}

impl AgeCategory {
    /// Category for a lifter's age in whole years.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` for ages below the competition
    /// minimum of 14.
    pub fn for_age(age: u32) -> AppResult<Self> {
        match age {
            0..=13 => Err(AppError::invalid_input(format!(
                "Age {age} is below the competition minimum of 14"
            ))),
            14..=18 => Ok(Self::SubJunior),
            19..=23 => Ok(Self::Junior),
            24..=39 => Ok(Self::Open),
            40..=49 => Ok(Self::Masters1),
            50..=59 => Ok(Self::Masters2),
            60..=69 => Ok(Self::Masters3),
            _ => Ok(Self::Masters4),
        }
    }

    /// Category on a given date for a lifter born on `birth_date`.
    ///
    /// Age is completed whole years between the two dates.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `birth_date` is after `on`, or if
    /// the derived age is below the competition minimum of 14.
    pub fn on_date(birth_date: NaiveDate, on: NaiveDate) -> AppResult<Self> {
        let age = on.years_since(birth_date).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Birth date {birth_date} is after the reference date {on}"
            ))
        })?;
        Self::for_age(age)
    }

    /// Canonical kebab-case key, as used in the platform's JSON vocabulary
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubJunior => "sub-junior",
            Self::Junior => "junior",
            Self::Open => "open",
            Self::Masters1 => "masters-1",
            Self::Masters2 => "masters-2",
            Self::Masters3 => "masters-3",
            Self::Masters4 => "masters-4",
        }
    }

    /// Human-readable label with the age range
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SubJunior => "Sub-Junior (14-18)",
            Self::Junior => "Junior (19-23)",
            Self::Open => "Open (24-39)",
            Self::Masters1 => "Masters 1 (40-49)",
            Self::Masters2 => "Masters 2 (50-59)",
            Self::Masters3 => "Masters 3 (60-69)",
            Self::Masters4 => "Masters 4 (70+)",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sub-junior" | "subjunior" => Ok(Self::SubJunior),
            "junior" => Ok(Self::Junior),
            "open" => Ok(Self::Open),
            "masters-1" | "masters1" => Ok(Self::Masters1),
            "masters-2" | "masters2" => Ok(Self::Masters2),
            "masters-3" | "masters3" => Ok(Self::Masters3),
            "masters-4" | "masters4" => Ok(Self::Masters4),
            other => Err(AppError::invalid_input(format!(
                "Unknown age category: '{other}'. Valid options: sub-junior, junior, open, masters-1, masters-2, masters-3, masters-4"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_male_weight_classes() {
        assert_eq!(weight_class(Gender::Male, 52.0).unwrap(), "52kg");
        assert_eq!(weight_class(Gender::Male, 52.1).unwrap(), "56kg");
        assert_eq!(weight_class(Gender::Male, 83.0).unwrap(), "83kg");
        assert_eq!(weight_class(Gender::Male, 100.0).unwrap(), "105kg");
        assert_eq!(weight_class(Gender::Male, 120.0).unwrap(), "120kg");
        assert_eq!(weight_class(Gender::Male, 132.5).unwrap(), "120kg+");
    }

    #[test]
    fn test_female_weight_classes() {
        assert_eq!(weight_class(Gender::Female, 43.0).unwrap(), "43kg");
        assert_eq!(weight_class(Gender::Female, 63.0).unwrap(), "63kg");
        assert_eq!(weight_class(Gender::Female, 84.0).unwrap(), "84kg");
        assert_eq!(weight_class(Gender::Female, 84.5).unwrap(), "84kg+");
    }

    #[test]
    fn test_weight_class_rejects_bad_input() {
        assert!(weight_class(Gender::Male, 0.0).is_err());
        assert!(weight_class(Gender::Male, -80.0).is_err());
        assert!(weight_class(Gender::Female, f64::NAN).is_err());
    }

    #[test]
    fn test_age_category_boundaries() {
        assert!(AgeCategory::for_age(13).is_err());
        assert_eq!(AgeCategory::for_age(14).unwrap(), AgeCategory::SubJunior);
        assert_eq!(AgeCategory::for_age(18).unwrap(), AgeCategory::SubJunior);
        assert_eq!(AgeCategory::for_age(19).unwrap(), AgeCategory::Junior);
        assert_eq!(AgeCategory::for_age(24).unwrap(), AgeCategory::Open);
        assert_eq!(AgeCategory::for_age(39).unwrap(), AgeCategory::Open);
        assert_eq!(AgeCategory::for_age(40).unwrap(), AgeCategory::Masters1);
        assert_eq!(AgeCategory::for_age(69).unwrap(), AgeCategory::Masters3);
        assert_eq!(AgeCategory::for_age(70).unwrap(), AgeCategory::Masters4);
        assert_eq!(AgeCategory::for_age(92).unwrap(), AgeCategory::Masters4);
    }

    #[test]
    fn test_age_category_from_birth_date() {
        let birth = NaiveDate::from_ymd_opt(1985, 6, 15).unwrap();
        let on = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        // One day short of the 40th birthday
        assert_eq!(AgeCategory::on_date(birth, on).unwrap(), AgeCategory::Open);

        let on = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(
            AgeCategory::on_date(birth, on).unwrap(),
            AgeCategory::Masters1
        );
    }

    #[test]
    fn test_age_category_rejects_future_birth_date() {
        let birth = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let on = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(AgeCategory::on_date(birth, on).is_err());
    }

    #[test]
    fn test_age_category_labels() {
        assert_eq!(AgeCategory::Masters2.as_str(), "masters-2");
        assert_eq!(AgeCategory::SubJunior.display_name(), "Sub-Junior (14-18)");
        assert_eq!(
            serde_json::to_string(&AgeCategory::Masters1).unwrap(),
            "\"masters-1\""
        );
        assert_eq!("masters-1".parse::<AgeCategory>().unwrap(), AgeCategory::Masters1);
    }
}
