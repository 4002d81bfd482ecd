// ABOUTME: Greedy plate-loading solver for barbell loading on the gym floor
// ABOUTME: Decomposes a target weight into per-side plates for a rack or a bounded inventory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SBD SA Platform

use sbdsa_core::errors::{AppError, AppResult};
use sbdsa_core::models::WeightUnit;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Standard rack configurations
mod standard {
    /// IPF-pattern kg plate set stocked by South African gyms
    pub const KG_PLATES: [f64; 8] = [25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25, 0.5];
    /// Gym-stock pairs of each kg denomination, down to the 0.25kg change plate
    pub const KG_STOCK_PAIRS: [(f64, u32); 9] = [
        (25.0, 1),
        (20.0, 1),
        (15.0, 1),
        (10.0, 1),
        (5.0, 2),
        (2.5, 2),
        (1.25, 2),
        (0.5, 2),
        (0.25, 2),
    ];
    /// Common American lb plate set
    pub const LB_PLATES: [f64; 7] = [45.0, 35.0, 25.0, 15.0, 10.0, 5.0, 2.5];
    /// Men's competition bar (kg)
    pub const MENS_BAR_KG: f64 = 20.0;
    /// Women's competition bar (kg)
    pub const WOMENS_BAR_KG: f64 = 15.0;
    /// Standard American power bar (lb)
    pub const BAR_LB: f64 = 45.0;
}

/// A plate weight and how many of it to load per side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateCount {
    /// Plate weight in the configuration's unit
    pub weight: f64,
    /// Copies loaded on each side of the bar
    pub count: u32,
}

/// Result of a plate-loading calculation.
///
/// `total_weight` is what actually lands on the bar:
/// `bar_weight + 2 x sum(weight x count)`. `remaining_weight` is the gap to
/// the requested target. The solver never overshoots, so the gap is positive
/// when the plate increments cannot reach the target exactly, zero when they
/// can, and negative only when the bar alone already exceeds the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateCalculation {
    /// Plates to load per side, heaviest first
    pub plates: Vec<PlateCount>,
    /// Achieved total including the bar
    pub total_weight: f64,
    /// Requested target minus the achieved total
    pub remaining_weight: f64,
    /// Bar weight used for the calculation
    pub bar_weight: f64,
    /// Unit all weights are expressed in
    pub unit: WeightUnit,
}

/// Barbell rack configuration: the plate denominations on the rack and the bar.
///
/// Plates are held in descending order and assumed unlimited in supply; use
/// [`PlateInventory`] when the number of physical plates matters. The standard
/// kg and lb sets have the property that greedy decomposition is also optimal
/// (each denomination is reachable from the next larger one), which does not
/// hold for arbitrary custom sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateConfig {
    plate_weights: Vec<f64>,
    bar_weight: f64,
    unit: WeightUnit,
}

impl Default for PlateConfig {
    fn default() -> Self {
        // The platform's home federation loads kg racks with a 20kg bar
        Self::south_african()
    }
}

impl PlateConfig {
    /// South African standard: 20kg men's bar with the full IPF kg plate set
    #[must_use]
    pub fn south_african() -> Self {
        Self {
            plate_weights: standard::KG_PLATES.to_vec(),
            bar_weight: standard::MENS_BAR_KG,
            unit: WeightUnit::Kg,
        }
    }

    /// South African women's standard: 15kg bar with the same kg plate set
    #[must_use]
    pub fn south_african_womens() -> Self {
        Self {
            plate_weights: standard::KG_PLATES.to_vec(),
            bar_weight: standard::WOMENS_BAR_KG,
            unit: WeightUnit::Kg,
        }
    }

    /// American standard: 45lb bar with the common lb plate set
    #[must_use]
    pub fn american() -> Self {
        Self {
            plate_weights: standard::LB_PLATES.to_vec(),
            bar_weight: standard::BAR_LB,
            unit: WeightUnit::Lb,
        }
    }

    /// Build a custom configuration.
    ///
    /// Plate weights may arrive in any order; they are sorted descending for
    /// the greedy pass.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if the plate list is empty, or if the
    /// bar weight or any plate weight is not a positive finite number.
    pub fn new(plate_weights: Vec<f64>, bar_weight: f64, unit: WeightUnit) -> AppResult<Self> {
        validate_bar_weight(bar_weight)?;
        if plate_weights.is_empty() {
            return Err(AppError::invalid_input(
                "Plate configuration requires at least one plate weight".to_owned(),
            ));
        }
        for &weight in &plate_weights {
            validate_plate_weight(weight)?;
        }

        let mut plate_weights = plate_weights;
        plate_weights.sort_unstable_by(|a, b| b.total_cmp(a));

        Ok(Self {
            plate_weights,
            bar_weight,
            unit,
        })
    }

    /// Replace the bar weight, keeping the plate set.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `bar_weight` is not a positive
    /// finite number.
    pub fn with_bar_weight(mut self, bar_weight: f64) -> AppResult<Self> {
        validate_bar_weight(bar_weight)?;
        self.bar_weight = bar_weight;
        Ok(self)
    }

    /// Plate denominations in descending order
    #[must_use]
    pub fn plate_weights(&self) -> &[f64] {
        &self.plate_weights
    }

    /// Bar weight in the configuration's unit
    #[must_use]
    pub const fn bar_weight(&self) -> f64 {
        self.bar_weight
    }

    /// Unit the configuration is expressed in
    #[must_use]
    pub const fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Decompose a target total into per-side plates.
    ///
    /// Greedy decomposition, heaviest denomination first: each plate weight is
    /// taken as many times as fits into the remaining per-side weight before
    /// moving to the next smaller one, with no backtracking. The achieved
    /// total never exceeds the target; `remaining_weight` reports any
    /// unreachable leftover. A target below the bar weight, or a non-finite
    /// target, returns an empty plate list with the gap in
    /// `remaining_weight`.
    ///
    /// # Example
    ///
    /// ```
    /// use sbdsa_strength::plates::PlateConfig;
    ///
    /// let result = PlateConfig::south_african().calculate(100.0);
    /// // 40kg per side: one 25 and one 15
    /// assert_eq!(result.plates.len(), 2);
    /// assert!((result.total_weight - 100.0).abs() < f64::EPSILON);
    /// assert!(result.remaining_weight.abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn calculate(&self, target_weight: f64) -> PlateCalculation {
        let weight_per_side = (target_weight - self.bar_weight) / 2.0;

        if !weight_per_side.is_finite() || weight_per_side < 0.0 {
            debug!(
                target_weight,
                bar_weight = self.bar_weight,
                "Target is below the bar weight or not finite, returning bar-only result"
            );
            return bar_only(self.bar_weight, self.unit, target_weight);
        }

        let mut remaining_per_side = weight_per_side;
        let mut plates = Vec::new();
        for &plate_weight in &self.plate_weights {
            let count = (remaining_per_side / plate_weight)
                .floor()
                .min(f64::from(u32::MAX));
            if count < 1.0 {
                continue;
            }
            remaining_per_side = count.mul_add(-plate_weight, remaining_per_side);
            plates.push(PlateCount {
                weight: plate_weight,
                count: count as u32,
            });
        }

        if remaining_per_side > 0.0 {
            debug!(
                target_weight,
                residual = 2.0 * remaining_per_side,
                "Target not exactly reachable with the rack's plate increments"
            );
        }

        solved(
            self.bar_weight,
            self.unit,
            weight_per_side,
            remaining_per_side,
            plates,
        )
    }
}

/// A plate weight and the number of pairs of it on hand.
///
/// One pair is one plate per side, the way plates leave the rack in practice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateStock {
    /// Plate weight in the inventory's unit
    pub weight: f64,
    /// Pairs available, i.e. copies loadable per side
    pub pairs: u32,
}

/// A bounded plate inventory: denominations with a finite pair count each.
///
/// Solves the same greedy decomposition as [`PlateConfig`] but caps every
/// denomination at the pairs actually on hand, continuing to smaller plates
/// once a stack runs out. Used for home-gym setups where the rack is not
/// fully stocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateInventory {
    stock: Vec<PlateStock>,
    bar_weight: f64,
    unit: WeightUnit,
}

impl Default for PlateInventory {
    fn default() -> Self {
        Self::south_african()
    }
}

impl PlateInventory {
    /// South African gym stock: one pair of each heavy plate and two pairs of
    /// each change plate down to 0.25kg, on the 20kg men's bar
    #[must_use]
    pub fn south_african() -> Self {
        Self {
            stock: standard::KG_STOCK_PAIRS
                .into_iter()
                .map(|(weight, pairs)| PlateStock { weight, pairs })
                .collect(),
            bar_weight: standard::MENS_BAR_KG,
            unit: WeightUnit::Kg,
        }
    }

    /// Build an inventory from the stock on hand.
    ///
    /// Stock entries may arrive in any order; they are sorted descending by
    /// plate weight. Entries with zero pairs are kept but never used.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if the stock list is empty, or if the
    /// bar weight or any plate weight is not a positive finite number.
    pub fn new(stock: Vec<PlateStock>, bar_weight: f64, unit: WeightUnit) -> AppResult<Self> {
        validate_bar_weight(bar_weight)?;
        if stock.is_empty() {
            return Err(AppError::invalid_input(
                "Plate inventory requires at least one stock entry".to_owned(),
            ));
        }
        for entry in &stock {
            validate_plate_weight(entry.weight)?;
        }

        let mut stock = stock;
        stock.sort_unstable_by(|a, b| b.weight.total_cmp(&a.weight));

        Ok(Self {
            stock,
            bar_weight,
            unit,
        })
    }

    /// Stock entries in descending plate-weight order
    #[must_use]
    pub fn stock(&self) -> &[PlateStock] {
        &self.stock
    }

    /// Bar weight in the inventory's unit
    #[must_use]
    pub const fn bar_weight(&self) -> f64 {
        self.bar_weight
    }

    /// Unit the inventory is expressed in
    #[must_use]
    pub const fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Decompose a target total into per-side plates from the stock on hand.
    ///
    /// Greedy like [`PlateConfig::calculate`], but each denomination
    /// contributes at most its available pairs. When the heavy stacks run out
    /// the solver keeps filling from the smaller ones, so the achieved total
    /// is the closest the inventory can get without overshooting.
    ///
    /// # Example
    ///
    /// ```
    /// use sbdsa_core::errors::AppResult;
    /// use sbdsa_core::models::WeightUnit;
    /// use sbdsa_strength::plates::{PlateInventory, PlateStock};
    ///
    /// # fn example() -> AppResult<()> {
    /// let inventory = PlateInventory::new(
    ///     vec![
    ///         PlateStock { weight: 25.0, pairs: 1 },
    ///         PlateStock { weight: 15.0, pairs: 1 },
    ///     ],
    ///     20.0,
    ///     WeightUnit::Kg,
    /// )?;
    /// let result = inventory.calculate(100.0);
    /// assert!((result.total_weight - 100.0).abs() < f64::EPSILON);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    #[must_use]
    pub fn calculate(&self, target_weight: f64) -> PlateCalculation {
        let weight_per_side = (target_weight - self.bar_weight) / 2.0;

        if !weight_per_side.is_finite() || weight_per_side < 0.0 {
            debug!(
                target_weight,
                bar_weight = self.bar_weight,
                "Target is below the bar weight or not finite, returning bar-only result"
            );
            return bar_only(self.bar_weight, self.unit, target_weight);
        }

        let mut remaining_per_side = weight_per_side;
        let mut plates = Vec::new();
        for entry in &self.stock {
            if entry.pairs == 0 {
                continue;
            }
            let unbounded = (remaining_per_side / entry.weight).floor();
            let count = unbounded.min(f64::from(entry.pairs));
            if count < 1.0 {
                continue;
            }
            if unbounded > count {
                debug!(
                    plate_weight = entry.weight,
                    available_pairs = entry.pairs,
                    "Plate stock exhausted before reaching the target"
                );
            }
            remaining_per_side = count.mul_add(-entry.weight, remaining_per_side);
            plates.push(PlateCount {
                weight: entry.weight,
                count: count as u32,
            });
        }

        if remaining_per_side > 0.0 {
            debug!(
                target_weight,
                residual = 2.0 * remaining_per_side,
                "Target not exactly reachable with the stock on hand"
            );
        }

        solved(
            self.bar_weight,
            self.unit,
            weight_per_side,
            remaining_per_side,
            plates,
        )
    }
}

/// Bar weights must be positive and finite
fn validate_bar_weight(bar_weight: f64) -> AppResult<()> {
    if !bar_weight.is_finite() || bar_weight <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Bar weight {bar_weight} must be a positive number"
        )));
    }
    Ok(())
}

/// Plate weights must be positive and finite
fn validate_plate_weight(weight: f64) -> AppResult<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Plate weight {weight} must be a positive number"
        )));
    }
    Ok(())
}

/// Result for a target the bar alone already satisfies or exceeds
fn bar_only(bar_weight: f64, unit: WeightUnit, target_weight: f64) -> PlateCalculation {
    PlateCalculation {
        plates: Vec::new(),
        total_weight: bar_weight,
        remaining_weight: target_weight - bar_weight,
        bar_weight,
        unit,
    }
}

/// Assemble the result from the per-side decomposition
fn solved(
    bar_weight: f64,
    unit: WeightUnit,
    weight_per_side: f64,
    remaining_per_side: f64,
    plates: Vec<PlateCount>,
) -> PlateCalculation {
    PlateCalculation {
        plates,
        total_weight: 2.0_f64.mul_add(weight_per_side - remaining_per_side, bar_weight),
        remaining_weight: 2.0 * remaining_per_side,
        bar_weight,
        unit,
    }
}
