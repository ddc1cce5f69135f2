//! Pricing engine: deterministic mapping from selections to a price
//!
//! `estimate()` is a pure function of the store and catalog. It is
//! recomputed after every mutation; the cost is O(selections) so no
//! caching is needed. Labels missing from the catalog contribute
//! zero rather than erroring.

use crate::catalog::{BaseRate, PriceCatalog};
use crate::selections::SelectionStore;
use serde::Serialize;

/// A ±10% presentation of the estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// The engine's output: a single total, presentable either as-is or
/// as a ±10% range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceEstimate {
    total: i64,
}

impl PriceEstimate {
    pub fn zero() -> Self {
        Self { total: 0 }
    }

    /// The underlying total in whole currency units
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Range presentation: [round(total * 0.9), round(total * 1.1)],
    /// rounding half away from zero
    pub fn range(&self) -> PriceRange {
        PriceRange {
            min: round_half_away(self.total as f64 * 0.9),
            max: round_half_away(self.total as f64 * 1.1),
        }
    }
}

/// Serialized form of the estimate in the submission payload: either
/// a bare number or a `{min, max}` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PriceQuote {
    Total(i64),
    Range(PriceRange),
}

/// Compute the estimate for the current selections.
///
/// Base price comes from the branch's base rate; deliverables,
/// add-ons, and pre-production services add on top. Returns zero
/// before the branch is chosen.
pub fn estimate(store: &SelectionStore, catalog: &PriceCatalog) -> PriceEstimate {
    let Some(branch) = store.branch else {
        return PriceEstimate::zero();
    };

    let base = match catalog.base_rate(branch) {
        Some(BaseRate::PerDay(rate)) => rate * i64::from(store.event_days),
        Some(BaseRate::Flat(fee)) => *fee,
        Some(BaseRate::HourlyMatrix(rates)) => {
            let rate = store
                .crew
                .as_ref()
                .and_then(|crew| {
                    rates
                        .get(&(crew.production_type.clone(), crew.hours.clone()))
                        .copied()
                })
                .unwrap_or(0);
            if branch.is_event() {
                rate * i64::from(store.event_days)
            } else {
                rate
            }
        }
        None => 0,
    };

    let mut additional = 0;

    if branch.is_event() {
        for label in &store.event_deliverables {
            additional += catalog.deliverable_price(branch, label).unwrap_or(0);
        }
    } else {
        for item in &store.line_items {
            if let (Some(duration), true) = (&item.duration, item.is_complete()) {
                additional += catalog.deliverable_price(branch, duration).unwrap_or(0);
            }
        }
    }

    for label in &store.add_ons {
        additional += catalog.add_on_price(branch, label).unwrap_or(0);
    }

    if store.select_all_pre_production {
        additional += catalog.pre_production_all_price();
    } else {
        for label in &store.pre_production {
            additional += catalog.pre_production_price(label).unwrap_or(0);
        }
    }

    PriceEstimate {
        total: base + additional,
    }
}

/// Round half away from zero (standard commercial rounding)
fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}
