// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Trade Core - Calculation Engine
//!
//! Pure, synchronous calculation core for a discretionary trading
//! calculator and journal. The host (UI and persistence layers) owns all
//! state and I/O; this crate only maps immutable inputs to freshly
//! constructed results.
//!
//! # Engines
//!
//! - `metrics`: position size, margin, fees, break-even and liquidation
//!   prices; per-target profit projections; trade-level aggregates
//! - `atr`: Average True Range estimation and ATR-derived stop-loss
//! - `allocation`: proportional take-profit percentage rebalancing under
//!   lock constraints
//! - `journal`: performance statistics and per-symbol aggregation over
//!   closed journal entries
//!
//! All monetary values are `rust_decimal::Decimal`; the engine never uses
//! binary floating point for financial quantities.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Take-profit percentage rebalancing under lock constraints.
pub mod allocation;

/// Average True Range estimation and ATR-derived stop placement.
pub mod atr;

/// Validation error types surfaced to the host.
pub mod error;

/// Trade input types and pre-calculation validation.
pub mod inputs;

/// Journal analytics - performance statistics and symbol aggregation.
pub mod journal;

/// Trade metrics - base, per-target, and aggregate calculators.
pub mod metrics;

pub use allocation::rebalance_targets;
pub use atr::{
    Candle, DEFAULT_ATR_PERIOD, calculate_atr, stop_loss_from_atr, true_range, wilder_step,
};
pub use error::ValidationError;
pub use inputs::{TakeProfit, TradeDirection, TradeInputs, validate_inputs};
pub use journal::{
    JournalEntry, PerformanceStats, Streak, SymbolStats, TradeStatus,
    calculate_performance_stats, calculate_symbol_performance,
};
pub use metrics::{
    AggregateMetrics, BaseMetrics, TargetResult, calculate_aggregate, calculate_base_metrics,
    calculate_target,
};
