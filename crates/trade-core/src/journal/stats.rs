//! Performance statistics over closed journal entries.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{JournalEntry, TradeStatus};
use crate::inputs::TradeDirection;
use crate::metrics::constants::HUNDRED;

/// A run of consecutive outcomes at the end of the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Streak {
    /// Trailing run of winning trades.
    Wins(u64),
    /// Trailing run of losing trades.
    Losses(u64),
}

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wins(n) => write!(f, "W{n}"),
            Self::Losses(n) => write!(f, "L{n}"),
        }
    }
}

/// Aggregate performance figures for a set of closed trades.
///
/// Losses are measured by the risk budget the trade was sized against, not
/// the recorded PnL: a stopped-out trade costs its risk amount by
/// construction, and the risk figure is always present even when the exact
/// fill was sloppy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Number of closed trades considered.
    pub total_trades: u64,
    /// Winning trades as a percentage of closed trades.
    pub win_rate: Decimal,
    /// Gross profit divided by gross loss. `None` encodes "no losses yet"
    /// (an infinite factor).
    pub profit_factor: Option<Decimal>,
    /// Expected value per trade:
    /// `win_rate * avg_win - loss_rate * avg_loss_only` (rates as fractions).
    pub expectancy: Decimal,
    /// Mean R-multiple over trades with a positive risk budget: wins score
    /// `pnl / risk`, losses score -1.
    pub avg_r_multiple: Decimal,
    /// Mean realized profit of winning trades.
    pub avg_win: Decimal,
    /// Mean loss magnitude of losing trades (positive number).
    pub avg_loss_only: Decimal,
    /// `avg_win / avg_loss_only`; `None` when there are no losses to divide
    /// by but there are wins.
    pub win_loss_ratio: Option<Decimal>,
    /// Largest single realized win.
    pub largest_profit: Decimal,
    /// Largest single loss magnitude.
    pub largest_loss: Decimal,
    /// Deepest peak-to-trough fall of the running equity curve.
    pub max_drawdown: Decimal,
    /// Final equity divided by max drawdown; zero when there was no
    /// drawdown.
    pub recovery_factor: Decimal,
    /// Trailing run of identical outcomes.
    pub current_streak: Streak,
    /// Longest run of consecutive wins.
    pub longest_winning_streak: u64,
    /// Longest run of consecutive losses.
    pub longest_losing_streak: u64,
    /// Realized profit summed over winning long trades.
    pub total_profit_long: Decimal,
    /// Loss magnitude summed over losing long trades.
    pub total_loss_long: Decimal,
    /// Realized profit summed over winning short trades.
    pub total_profit_short: Decimal,
    /// Loss magnitude summed over losing short trades.
    pub total_loss_short: Decimal,
}

/// Compute performance statistics over the closed entries of a journal.
///
/// Entries that are still open, or that are marked closed but have no
/// realized outcome recorded, are skipped. The remainder is sorted by date
/// ascending before the equity walk and streak scan, so callers may hand
/// the journal over in any order. Returns `None` when nothing remains.
#[must_use]
pub fn calculate_performance_stats(entries: &[JournalEntry]) -> Option<PerformanceStats> {
    let mut closed: Vec<&JournalEntry> = entries.iter().filter(|e| e.is_closed()).collect();
    if closed.is_empty() {
        return None;
    }
    closed.sort_by_key(|e| e.date);
    debug!(
        total = entries.len(),
        closed = closed.len(),
        "computing performance statistics"
    );

    let total_trades = closed.len() as u64;
    let mut wins = 0u64;
    let mut losses = 0u64;
    let mut total_profit = Decimal::ZERO;
    let mut total_loss = Decimal::ZERO;
    let mut largest_profit = Decimal::ZERO;
    let mut largest_loss = Decimal::ZERO;

    let mut r_sum = Decimal::ZERO;
    let mut r_count = 0u64;

    let mut equity = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;

    let mut current_run = 0u64;
    let mut current_is_win = true;
    let mut longest_winning_streak = 0u64;
    let mut longest_losing_streak = 0u64;

    let mut total_profit_long = Decimal::ZERO;
    let mut total_loss_long = Decimal::ZERO;
    let mut total_profit_short = Decimal::ZERO;
    let mut total_loss_short = Decimal::ZERO;

    for entry in &closed {
        // is_closed guarantees the outcome is present.
        let pnl = entry.realized_pnl.unwrap_or_default();
        let won = entry.status == TradeStatus::Won;

        if won {
            wins += 1;
            total_profit += pnl;
            largest_profit = largest_profit.max(pnl);
            equity += pnl;
            match entry.direction {
                TradeDirection::Long => total_profit_long += pnl,
                TradeDirection::Short => total_profit_short += pnl,
            }
            if entry.risk_amount > Decimal::ZERO {
                r_sum += pnl / entry.risk_amount;
                r_count += 1;
            }
        } else {
            losses += 1;
            total_loss += entry.risk_amount;
            largest_loss = largest_loss.max(entry.risk_amount);
            equity -= entry.risk_amount;
            match entry.direction {
                TradeDirection::Long => total_loss_long += entry.risk_amount,
                TradeDirection::Short => total_loss_short += entry.risk_amount,
            }
            if entry.risk_amount > Decimal::ZERO {
                r_sum -= Decimal::ONE;
                r_count += 1;
            }
        }

        peak = peak.max(equity);
        max_drawdown = max_drawdown.max(peak - equity);

        if current_run > 0 && won == current_is_win {
            current_run += 1;
        } else {
            current_run = 1;
            current_is_win = won;
        }
        if current_is_win {
            longest_winning_streak = longest_winning_streak.max(current_run);
        } else {
            longest_losing_streak = longest_losing_streak.max(current_run);
        }
    }

    let total = Decimal::from(total_trades);
    let win_rate = Decimal::from(wins) / total * HUNDRED;
    let loss_rate = Decimal::from(losses) / total * HUNDRED;

    let avg_win = if wins > 0 {
        total_profit / Decimal::from(wins)
    } else {
        Decimal::ZERO
    };
    let avg_loss_only = if losses > 0 {
        total_loss / Decimal::from(losses)
    } else {
        Decimal::ZERO
    };

    let profit_factor = if total_loss.is_zero() {
        if total_profit > Decimal::ZERO {
            None
        } else {
            Some(Decimal::ZERO)
        }
    } else {
        Some(total_profit / total_loss)
    };

    let win_loss_ratio = if avg_loss_only.is_zero() {
        if avg_win > Decimal::ZERO {
            None
        } else {
            Some(Decimal::ZERO)
        }
    } else {
        Some(avg_win / avg_loss_only)
    };

    let expectancy = win_rate / HUNDRED * avg_win - loss_rate / HUNDRED * avg_loss_only;

    let avg_r_multiple = if r_count > 0 {
        r_sum / Decimal::from(r_count)
    } else {
        Decimal::ZERO
    };

    let recovery_factor = if max_drawdown > Decimal::ZERO {
        equity / max_drawdown
    } else {
        Decimal::ZERO
    };

    let current_streak = if current_is_win {
        Streak::Wins(current_run)
    } else {
        Streak::Losses(current_run)
    };

    Some(PerformanceStats {
        total_trades,
        win_rate,
        profit_factor,
        expectancy,
        avg_r_multiple,
        avg_win,
        avg_loss_only,
        win_loss_ratio,
        largest_profit,
        largest_loss,
        max_drawdown,
        recovery_factor,
        current_streak,
        longest_winning_streak,
        longest_losing_streak,
        total_profit_long,
        total_loss_long,
        total_profit_short,
        total_loss_short,
    })
}
