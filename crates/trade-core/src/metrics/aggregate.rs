//! Trade-level aggregates across all take-profit targets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::base::BaseMetrics;
use super::constants::HUNDRED;
use super::target::calculate_target;
use crate::inputs::{TakeProfit, TradeDirection, TradeInputs};

/// Totals for a trade with multiple take-profit targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Sum of net profit across all active targets.
    pub total_net_profit: Decimal,
    /// Risk/reward ratio weighted by percent sold, normalized by the total
    /// percent sold.
    pub total_rr: Decimal,
    /// Full-position entry fee plus the exit fees across all active
    /// targets. The entry fee is paid on the whole position regardless of
    /// how much of it the targets cover.
    pub total_fees: Decimal,
    /// Profit if the whole position exited at the single best target price,
    /// net of the full entry fee and the exit fee at that price.
    pub max_potential_profit: Decimal,
    /// Monetary risk budget carried over from the base metrics.
    pub risk_amount: Decimal,
}

/// Fold all targets into trade-level totals.
///
/// Only targets with a positive price and a positive percentage contribute.
/// Over-allocation (percent sum above 100) is a validation failure the
/// caller rejects before this stage; this function does not clamp.
#[must_use]
pub fn calculate_aggregate(
    targets: &[TakeProfit],
    base: &BaseMetrics,
    inputs: &TradeInputs,
    direction: TradeDirection,
) -> AggregateMetrics {
    let fee_factor = inputs.fee_factor();
    let mut total_net_profit = Decimal::ZERO;
    let mut total_fees = base.entry_fee;
    let mut weighted_rr_sum = Decimal::ZERO;
    let mut total_percent_sold = Decimal::ZERO;

    for (index, tp) in targets.iter().enumerate() {
        if !tp.is_active() {
            continue;
        }
        let result = calculate_target(tp.price, tp.percent, base, inputs, index);

        total_net_profit += result.net_profit;
        total_fees += result.exit_fee;
        weighted_rr_sum += result.risk_reward_ratio * (tp.percent / HUNDRED);
        total_percent_sold += tp.percent;
    }

    let total_rr = if total_percent_sold > Decimal::ZERO {
        weighted_rr_sum / (total_percent_sold / HUNDRED)
    } else {
        Decimal::ZERO
    };

    let max_potential_profit = best_target_price(targets, direction).map_or(
        Decimal::ZERO,
        |best| {
            let gross = (best - inputs.entry_price).abs() * base.position_size;
            let exit_fee_full = base.position_size * best * fee_factor;
            gross - base.entry_fee - exit_fee_full
        },
    );

    AggregateMetrics {
        total_net_profit,
        total_rr,
        total_fees,
        max_potential_profit,
        risk_amount: base.risk_amount,
    }
}

/// Best exit among priced targets: highest for longs, lowest for shorts.
fn best_target_price(targets: &[TakeProfit], direction: TradeDirection) -> Option<Decimal> {
    let priced = targets
        .iter()
        .filter(|t| t.price > Decimal::ZERO)
        .map(|t| t.price);
    match direction {
        TradeDirection::Long => priced.max(),
        TradeDirection::Short => priced.min(),
    }
}
