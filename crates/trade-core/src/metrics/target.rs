//! Per-target projections: profit, risk/reward, and return on capital for
//! one take-profit level.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::base::BaseMetrics;
use super::constants::HUNDRED;
use crate::inputs::TradeInputs;

/// Projection for a single take-profit target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetResult {
    /// Profit on the partial position after entry and exit fees.
    pub net_profit: Decimal,
    /// Net profit divided by the net risk actually allocated to this
    /// partial (risk per unit on the part plus both fee legs at the stop).
    pub risk_reward_ratio: Decimal,
    /// Gross gain per unit divided by risk per unit, ignoring fees.
    pub gross_risk_reward_ratio: Decimal,
    /// Price change from entry to target as a percentage of entry.
    ///
    /// The sign follows `target - entry` regardless of trade direction;
    /// short-side callers negate for a "gain %" framing.
    pub price_change_percent: Decimal,
    /// Net profit as a percentage of the margin allocated to this partial.
    pub return_on_capital: Decimal,
    /// Quantity closed at this target.
    pub partial_volume: Decimal,
    /// Fee paid when exiting the partial at the target price.
    pub exit_fee: Decimal,
    /// Index of the target row in the input list.
    pub index: usize,
    /// Percentage of the original position closed at this target.
    pub percent_sold: Decimal,
}

/// Project a single take-profit target against the base metrics.
///
/// `tp_percent` is a percentage of the ORIGINAL position, not of whatever
/// remains after earlier targets.
#[must_use]
pub fn calculate_target(
    tp_price: Decimal,
    tp_percent: Decimal,
    base: &BaseMetrics,
    inputs: &TradeInputs,
    index: usize,
) -> TargetResult {
    let fee_factor = inputs.fee_factor();
    let gain_per_unit = (tp_price - inputs.entry_price).abs();
    let partial_volume = base.position_size * (tp_percent / HUNDRED);

    let gross_profit = gain_per_unit * partial_volume;
    let entry_fee_part = partial_volume * inputs.entry_price * fee_factor;
    let exit_fee = partial_volume * tp_price * fee_factor;
    let net_profit = gross_profit - entry_fee_part - exit_fee;

    let risk_per_unit = (inputs.entry_price - inputs.stop_loss_price).abs();
    let gross_risk_reward_ratio = if risk_per_unit > Decimal::ZERO {
        gain_per_unit / risk_per_unit
    } else {
        Decimal::ZERO
    };

    let sl_exit_fee_part = partial_volume * inputs.stop_loss_price * fee_factor;
    let net_risk_on_part = risk_per_unit * partial_volume + entry_fee_part + sl_exit_fee_part;
    let risk_reward_ratio = if net_risk_on_part > Decimal::ZERO {
        net_profit / net_risk_on_part
    } else {
        Decimal::ZERO
    };

    let price_change_percent = if inputs.entry_price > Decimal::ZERO {
        (tp_price - inputs.entry_price) / inputs.entry_price * HUNDRED
    } else {
        Decimal::ZERO
    };

    let margin_part = base.required_margin * (tp_percent / HUNDRED);
    let return_on_capital = if margin_part > Decimal::ZERO {
        net_profit / margin_part * HUNDRED
    } else {
        Decimal::ZERO
    };

    TargetResult {
        net_profit,
        risk_reward_ratio,
        gross_risk_reward_ratio,
        price_change_percent,
        return_on_capital,
        partial_volume,
        exit_fee,
        index,
        percent_sold: tp_percent,
    }
}
