//! Proportional take-profit percentage rebalancing.
//!
//! After any edit (a new percentage typed, or a lock toggled) the target
//! list is rebalanced so the percentages across all rows sum to exactly
//! 100, with locked rows held fixed. Unlocked rows scale proportionally, so
//! relatively larger rows absorb a proportionally larger share of any
//! surplus or deficit.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::inputs::TakeProfit;
use crate::metrics::constants::HUNDRED;

/// Rebalance take-profit percentages so the full set sums to 100.
///
/// `changed_index` is the row the user just edited, if any. A changed index
/// pointing at a locked row is ignored and the list is returned unchanged;
/// the UI is expected not to allow such edits in the first place.
///
/// When the locked rows alone already allocate 100% or more, no
/// redistribution is attempted and the list is returned unchanged (the
/// host surfaces this as a validation failure).
///
/// Every unlocked row except the last is rounded half-up to a whole
/// percent; the last unlocked row receives the exact remainder (rounded the
/// same way), so for integer locked percentages the set sums to exactly
/// 100 with no drift. Calling this twice with the same arguments is a
/// fixed point.
#[must_use]
pub fn rebalance_targets(targets: &[TakeProfit], changed_index: Option<usize>) -> Vec<TakeProfit> {
    let mut result: Vec<TakeProfit> = targets.to_vec();

    if let Some(index) = changed_index
        && targets.get(index).is_some_and(|t| t.locked)
    {
        return result;
    }

    let locked_sum: Decimal = result
        .iter()
        .filter(|t| t.locked)
        .map(|t| t.percent)
        .sum();
    if locked_sum >= HUNDRED {
        debug!(%locked_sum, "locked rows exhaust the allocation, skipping rebalance");
        return result;
    }

    let unlocked: Vec<usize> = result
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.locked)
        .map(|(i, _)| i)
        .collect();
    if unlocked.is_empty() {
        return result;
    }

    let target_sum = HUNDRED - locked_sum;
    let current_sum: Decimal = unlocked.iter().map(|&i| result[i].percent).sum();

    if current_sum.is_zero() {
        let share = target_sum / Decimal::from(unlocked.len() as u64);
        for &i in &unlocked {
            result[i].percent = share;
        }
    } else {
        let factor = target_sum / current_sum;
        debug!(%current_sum, %target_sum, %factor, "scaling unlocked rows");
        for &i in &unlocked {
            result[i].percent *= factor;
        }
    }

    // Integer rounding with remainder correction: the last unlocked row
    // takes up whatever the rounded rows left over.
    let mut rounded_sum = Decimal::ZERO;
    for &i in &unlocked[..unlocked.len() - 1] {
        let rounded = round_half_up(result[i].percent);
        result[i].percent = rounded;
        rounded_sum += rounded;
    }
    let last = unlocked[unlocked.len() - 1];
    result[last].percent = round_half_up(target_sum - rounded_sum);

    result
}

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn tp(percent: Decimal, locked: bool) -> TakeProfit {
        TakeProfit {
            price: dec!(100),
            percent,
            locked,
        }
    }

    fn percents(targets: &[TakeProfit]) -> Vec<Decimal> {
        targets.iter().map(|t| t.percent).collect()
    }

    fn total(targets: &[TakeProfit]) -> Decimal {
        targets.iter().map(|t| t.percent).sum()
    }

    #[test]
    fn test_edit_scales_all_unlocked_rows() {
        // User bumps the first row to 60; the whole set scales back to 100.
        let targets = vec![tp(dec!(60), false), tp(dec!(25), false), tp(dec!(25), false)];
        let result = rebalance_targets(&targets, Some(0));

        assert_eq!(percents(&result), vec![dec!(55), dec!(23), dec!(22)]);
        assert_eq!(total(&result), dec!(100));
    }

    #[test]
    fn test_locked_row_is_held_fixed() {
        let targets = vec![tp(dec!(50), true), tp(dec!(30), false), tp(dec!(30), false)];
        let result = rebalance_targets(&targets, Some(1));

        assert_eq!(result[0].percent, dec!(50));
        assert_eq!(percents(&result), vec![dec!(50), dec!(25), dec!(25)]);
        assert_eq!(total(&result), dec!(100));
    }

    #[test]
    fn test_changed_index_on_locked_row_is_ignored() {
        let targets = vec![tp(dec!(70), true), tp(dec!(10), false), tp(dec!(10), false)];
        let result = rebalance_targets(&targets, Some(0));
        assert_eq!(result, targets);
    }

    #[test]
    fn test_locked_sum_at_or_above_100_is_left_alone() {
        let targets = vec![tp(dec!(100), true), tp(dec!(50), false)];
        assert_eq!(rebalance_targets(&targets, Some(1)), targets);

        let over = vec![tp(dec!(60), true), tp(dec!(60), true), tp(dec!(20), false)];
        assert_eq!(rebalance_targets(&over, None), over);
    }

    #[test]
    fn test_zero_unlocked_sum_splits_evenly() {
        let targets = vec![tp(dec!(40), true), tp(dec!(0), false), tp(dec!(0), false)];
        let result = rebalance_targets(&targets, None);

        assert_eq!(percents(&result), vec![dec!(40), dec!(30), dec!(30)]);
        assert_eq!(total(&result), dec!(100));
    }

    #[test]
    fn test_all_rows_locked_returns_unchanged() {
        let targets = vec![tp(dec!(30), true), tp(dec!(30), true)];
        assert_eq!(rebalance_targets(&targets, None), targets);
    }

    #[test]
    fn test_remainder_goes_to_last_unlocked_row() {
        // Three equal rows: 100/3 rounds to 33, 33, and the remainder 34.
        let targets = vec![
            tp(dec!(20), false),
            tp(dec!(20), false),
            tp(dec!(20), false),
        ];
        let result = rebalance_targets(&targets, None);

        assert_eq!(percents(&result), vec![dec!(33), dec!(33), dec!(34)]);
        assert_eq!(total(&result), dec!(100));
    }

    #[test]
    fn test_rebalance_is_a_fixed_point() {
        let targets = vec![
            tp(dec!(47), false),
            tp(dec!(19), true),
            tp(dec!(16), false),
            tp(dec!(11), false),
        ];
        let once = rebalance_targets(&targets, Some(0));
        let twice = rebalance_targets(&once, Some(0));

        assert_eq!(once, twice);
        assert_eq!(total(&once), dec!(100));
    }

    proptest! {
        /// Whenever the locked rows leave room and at least one unlocked
        /// row exists, the rebalanced set sums to exactly 100 and locked
        /// rows are untouched.
        #[test]
        fn prop_rebalanced_set_sums_to_100(
            rows in proptest::collection::vec((0u32..=100, any::<bool>()), 1..=5),
        ) {
            let targets: Vec<TakeProfit> = rows
                .iter()
                .map(|&(pct, locked)| tp(Decimal::from(pct), locked))
                .collect();

            let locked_sum: Decimal = targets
                .iter()
                .filter(|t| t.locked)
                .map(|t| t.percent)
                .sum();
            let has_unlocked = targets.iter().any(|t| !t.locked);
            prop_assume!(locked_sum < dec!(100) && has_unlocked);

            let result = rebalance_targets(&targets, None);

            prop_assert_eq!(total(&result), dec!(100));
            for (before, after) in targets.iter().zip(&result) {
                if before.locked {
                    prop_assert_eq!(before.percent, after.percent);
                }
            }
        }
    }
}
