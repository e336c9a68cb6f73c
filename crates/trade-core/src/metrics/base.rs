//! Base metrics: position sizing against a fixed risk budget.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::{HUNDRED, ONE};
use crate::inputs::{TradeDirection, TradeInputs};

/// Metrics derived once per calculation pass from the risk budget and the
/// entry/stop prices. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseMetrics {
    /// Quantity of the asset such that reaching the stop loses exactly the
    /// configured risk amount.
    pub position_size: Decimal,
    /// Margin required to open the position at the configured leverage.
    pub required_margin: Decimal,
    /// Total loss if the stop is hit: risk amount plus entry fee plus the
    /// exit fee paid at the stop price.
    pub net_loss: Decimal,
    /// Price at which cumulative fees exactly offset gross profit.
    ///
    /// `None` when the long-side formula diverges (fee rate of 100%);
    /// callers display "N/A" rather than a bogus price.
    pub break_even_price: Option<Decimal>,
    /// Estimated liquidation price; zero when leverage is not positive.
    pub liquidation_price: Decimal,
    /// Fee paid on entry for the full position.
    pub entry_fee: Decimal,
    /// Monetary risk budget (`account_size * risk_percentage / 100`).
    pub risk_amount: Decimal,
}

/// Derive [`BaseMetrics`] from trade inputs.
///
/// Returns `None` when the entry price equals the stop-loss price: the risk
/// per unit is zero and no finite position size exists.
#[must_use]
pub fn calculate_base_metrics(
    inputs: &TradeInputs,
    direction: TradeDirection,
) -> Option<BaseMetrics> {
    let risk_amount = inputs.account_size * (inputs.risk_percentage / HUNDRED);
    let risk_per_unit = (inputs.entry_price - inputs.stop_loss_price).abs();
    if risk_per_unit.is_zero() {
        return None;
    }

    let position_size = risk_amount / risk_per_unit;
    let order_volume = position_size * inputs.entry_price;
    let required_margin = if inputs.leverage > Decimal::ZERO {
        order_volume / inputs.leverage
    } else {
        order_volume
    };

    let fee_factor = inputs.fee_factor();
    let entry_fee = order_volume * fee_factor;
    let sl_exit_fee = position_size * inputs.stop_loss_price * fee_factor;
    let net_loss = risk_amount + entry_fee + sl_exit_fee;

    let break_even_price = match direction {
        TradeDirection::Long => {
            let denominator = ONE - fee_factor;
            if denominator.is_zero() {
                None
            } else {
                Some(inputs.entry_price * (ONE + fee_factor) / denominator)
            }
        }
        TradeDirection::Short => {
            Some(inputs.entry_price * (ONE - fee_factor) / (ONE + fee_factor))
        }
    };

    let liquidation_price = if inputs.leverage > Decimal::ZERO {
        match direction {
            TradeDirection::Long => inputs.entry_price * (ONE - ONE / inputs.leverage),
            TradeDirection::Short => inputs.entry_price * (ONE + ONE / inputs.leverage),
        }
    } else {
        Decimal::ZERO
    };

    Some(BaseMetrics {
        position_size,
        required_margin,
        net_loss,
        break_even_price,
        liquidation_price,
        entry_fee,
        risk_amount,
    })
}
