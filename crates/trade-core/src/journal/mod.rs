//! Trade journal records and the analytics derived from them.
//!
//! A [`JournalEntry`] snapshots a planned or executed trade together with
//! the projections that were current when it was saved. The analytics
//! functions treat the journal as input only and never mutate it.

mod stats;
mod symbols;

pub use stats::{PerformanceStats, Streak, calculate_performance_stats};
pub use symbols::{SymbolStats, calculate_symbol_performance};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inputs::{TakeProfit, TradeDirection};
use crate::metrics::TargetResult;

/// Lifecycle state of a journaled trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    /// Still running; excluded from performance statistics.
    Open,
    /// Closed at a profit.
    Won,
    /// Closed at a loss.
    Lost,
}

/// One saved trade with the plan and projections it was entered under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Stable identifier assigned by the host.
    pub id: u64,
    /// When the trade was journaled.
    pub date: DateTime<Utc>,
    /// Instrument symbol, e.g. "BTCUSDT". May be empty for drafts.
    pub symbol: String,
    /// Long or short.
    pub direction: TradeDirection,
    /// Lifecycle state.
    pub status: TradeStatus,
    /// Actual profit or loss once closed, signed. `None` until the host
    /// records an outcome.
    pub realized_pnl: Option<Decimal>,
    /// Monetary risk budget the trade was sized against.
    pub risk_amount: Decimal,
    /// Projected net profit across all targets at save time.
    pub total_net_profit: Decimal,
    /// Free-form notes.
    pub notes: String,
    /// Take-profit plan as saved.
    pub targets: Vec<TakeProfit>,
    /// Per-target projections as saved.
    pub target_details: Vec<TargetResult>,
}

impl JournalEntry {
    /// Whether this entry contributes to performance statistics: it must be
    /// marked won or lost AND carry a realized outcome.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.status, TradeStatus::Won | TradeStatus::Lost) && self.realized_pnl.is_some()
    }
}
