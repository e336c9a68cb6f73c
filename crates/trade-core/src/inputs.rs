//! Trade input types and pre-calculation validation.
//!
//! `TradeInputs` is assembled by the host's form layer from already-parsed
//! decimals; this module never touches raw strings. Validation runs before
//! the metrics pipeline and rejects configurations the calculators must not
//! see (stop on the wrong side, over-allocated take-profit percentages).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::metrics::constants::HUNDRED;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    /// Buy first, sell higher.
    Long,
    /// Sell first, buy back lower.
    Short,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "LONG"),
            Self::Short => write!(f, "SHORT"),
        }
    }
}

/// One take-profit row: a price level, the percentage of the original
/// position to close there, and whether the row is locked against
/// rebalancing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeProfit {
    /// Target price level.
    pub price: Decimal,
    /// Percentage of the original position (not of the remainder).
    pub percent: Decimal,
    /// Locked rows keep their percentage during rebalancing.
    pub locked: bool,
}

impl TakeProfit {
    /// A target only contributes to projections when both its price and its
    /// percentage are set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.price > Decimal::ZERO && self.percent > Decimal::ZERO
    }
}

/// Input parameters for a single trade calculation pass.
///
/// All monetary and percentage fields are non-negative decimals. The stop
/// loss must differ from the entry price for a defined result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInputs {
    /// Total account size in quote currency.
    pub account_size: Decimal,
    /// Risk budget as a percentage of the account size.
    pub risk_percentage: Decimal,
    /// Planned entry price.
    pub entry_price: Decimal,
    /// Stop-loss price.
    pub stop_loss_price: Decimal,
    /// Leverage multiplier (0 or 1 = spot).
    pub leverage: Decimal,
    /// Taker/maker fee rate as a percentage per fill.
    pub fees_percent: Decimal,
    /// Take-profit rows (the UI typically allows up to 5).
    pub targets: Vec<TakeProfit>,
}

impl TradeInputs {
    /// Fee rate as a fraction (`fees_percent / 100`).
    #[must_use]
    pub fn fee_factor(&self) -> Decimal {
        self.fees_percent / HUNDRED
    }

    /// Sum of take-profit percentages across all targets.
    #[must_use]
    pub fn total_percent_sold(&self) -> Decimal {
        self.targets.iter().map(|t| t.percent).sum()
    }

    /// Sum of take-profit percentages across locked targets.
    #[must_use]
    pub fn locked_percent(&self) -> Decimal {
        self.targets
            .iter()
            .filter(|t| t.locked)
            .map(|t| t.percent)
            .sum()
    }
}

/// Validate trade inputs before running the metrics pipeline.
///
/// # Errors
///
/// - [`ValidationError::StopOnWrongSide`] when the stop-loss sits on the
///   wrong side of the entry price for the direction
/// - [`ValidationError::OverAllocated`] when take-profit percentages sum
///   above 100, naming each contributing target field
/// - [`ValidationError::LockedAllocationExhausted`] when locked rows alone
///   allocate 100% or more
pub fn validate_inputs(
    inputs: &TradeInputs,
    direction: TradeDirection,
) -> Result<(), ValidationError> {
    let wrong_side = match direction {
        TradeDirection::Long => inputs.entry_price <= inputs.stop_loss_price,
        TradeDirection::Short => inputs.entry_price >= inputs.stop_loss_price,
    };
    if wrong_side {
        return Err(ValidationError::StopOnWrongSide { direction });
    }

    let total_percent = inputs.total_percent_sold();
    if total_percent > HUNDRED {
        let fields = inputs
            .targets
            .iter()
            .enumerate()
            .filter(|(_, t)| t.percent > Decimal::ZERO)
            .map(|(i, _)| format!("targets[{i}].percent"))
            .collect();
        return Err(ValidationError::OverAllocated {
            total_percent,
            fields,
        });
    }

    let locked_percent = inputs.locked_percent();
    if locked_percent >= HUNDRED && inputs.targets.iter().any(|t| !t.locked) {
        return Err(ValidationError::LockedAllocationExhausted { locked_percent });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inputs(entry: Decimal, stop: Decimal, targets: Vec<TakeProfit>) -> TradeInputs {
        TradeInputs {
            account_size: dec!(1000),
            risk_percentage: dec!(1),
            entry_price: entry,
            stop_loss_price: stop,
            leverage: dec!(10),
            fees_percent: dec!(0.1),
            targets,
        }
    }

    fn tp(price: Decimal, percent: Decimal, locked: bool) -> TakeProfit {
        TakeProfit {
            price,
            percent,
            locked,
        }
    }

    #[test]
    fn test_long_stop_must_be_below_entry() {
        let bad = inputs(dec!(100), dec!(101), vec![]);
        assert_eq!(
            validate_inputs(&bad, TradeDirection::Long),
            Err(ValidationError::StopOnWrongSide {
                direction: TradeDirection::Long
            })
        );

        let good = inputs(dec!(100), dec!(99), vec![]);
        assert!(validate_inputs(&good, TradeDirection::Long).is_ok());
    }

    #[test]
    fn test_short_stop_must_be_above_entry() {
        let bad = inputs(dec!(100), dec!(99), vec![]);
        assert_eq!(
            validate_inputs(&bad, TradeDirection::Short),
            Err(ValidationError::StopOnWrongSide {
                direction: TradeDirection::Short
            })
        );

        let good = inputs(dec!(100), dec!(101), vec![]);
        assert!(validate_inputs(&good, TradeDirection::Short).is_ok());
    }

    #[test]
    fn test_over_allocated_targets_rejected_with_field_names() {
        let bad = inputs(
            dec!(100),
            dec!(99),
            vec![
                tp(dec!(102), dec!(60), false),
                tp(dec!(104), dec!(0), false),
                tp(dec!(106), dec!(50), false),
            ],
        );
        let Err(ValidationError::OverAllocated {
            total_percent,
            fields,
        }) = validate_inputs(&bad, TradeDirection::Long)
        else {
            panic!("expected OverAllocated");
        };
        assert_eq!(total_percent, dec!(110));
        assert_eq!(fields, vec!["targets[0].percent", "targets[2].percent"]);
    }

    #[test]
    fn test_locked_rows_consuming_everything_rejected() {
        let bad = inputs(
            dec!(100),
            dec!(99),
            vec![tp(dec!(102), dec!(100), true), tp(dec!(104), dec!(0), false)],
        );
        assert_eq!(
            validate_inputs(&bad, TradeDirection::Long),
            Err(ValidationError::LockedAllocationExhausted {
                locked_percent: dec!(100)
            })
        );
    }

    #[test]
    fn test_exactly_100_percent_is_valid() {
        let good = inputs(
            dec!(100),
            dec!(99),
            vec![tp(dec!(102), dec!(50), false), tp(dec!(104), dec!(50), false)],
        );
        assert!(validate_inputs(&good, TradeDirection::Long).is_ok());
    }

    #[test]
    fn test_serde_shape() {
        let v = inputs(dec!(100), dec!(99), vec![tp(dec!(102), dec!(50), false)]);
        let json = serde_json::to_string(&v).unwrap();
        let back: TradeInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
