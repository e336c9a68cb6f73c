//! Per-symbol performance rollup.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{JournalEntry, TradeStatus};

/// Rollup of closed trades on one instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolStats {
    /// Closed trades on this symbol.
    pub total_trades: u64,
    /// Closed trades that ended in profit.
    pub won_trades: u64,
    /// Signed sum of realized outcomes. Losses are already negative in the
    /// recorded PnL, so this is a plain sum.
    pub total_profit_loss: Decimal,
}

/// Group closed entries by symbol.
///
/// Entries with an empty symbol (unsaved drafts) are skipped. The result is
/// ordered by symbol for stable presentation.
#[must_use]
pub fn calculate_symbol_performance(entries: &[JournalEntry]) -> BTreeMap<String, SymbolStats> {
    let mut by_symbol: BTreeMap<String, SymbolStats> = BTreeMap::new();

    for entry in entries {
        if !entry.is_closed() || entry.symbol.is_empty() {
            continue;
        }
        let stats = by_symbol.entry(entry.symbol.clone()).or_default();
        stats.total_trades += 1;
        if entry.status == TradeStatus::Won {
            stats.won_trades += 1;
        }
        stats.total_profit_loss += entry.realized_pnl.unwrap_or_default();
    }

    by_symbol
}
