//! Validation errors surfaced before any metrics calculation runs.
//!
//! Only genuinely invalid input configurations are errors. "Cannot compute"
//! outcomes that a well-behaved host simply displays as empty (zero risk per
//! unit, an empty journal, a diverging break-even price) are modeled as
//! `Option` returns on the calculators instead.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::inputs::TradeDirection;

/// Error returned by input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The stop-loss price is on the wrong side of the entry price for the
    /// trade direction (long stops must sit below entry, short stops above).
    #[error("{direction}: stop-loss is on the wrong side of the entry price")]
    StopOnWrongSide {
        /// Direction of the trade being validated.
        direction: TradeDirection,
    },

    /// Take-profit percentages sum above 100% of the position.
    #[error("take-profit percentages sum to {total_percent}%, which exceeds 100%")]
    OverAllocated {
        /// The offending sum across all targets.
        total_percent: Decimal,
        /// Names of the offending target fields (e.g. `targets[2].percent`).
        fields: Vec<String>,
    },

    /// Locked take-profit rows alone already allocate 100% or more, leaving
    /// nothing for the rebalancer to distribute.
    #[error("locked take-profit rows already allocate {locked_percent}%")]
    LockedAllocationExhausted {
        /// Sum of percentages over locked rows.
        locked_percent: Decimal,
    },
}
