//! Trade metrics calculators.
//!
//! The metrics pipeline runs in three stages, each a pure function:
//!
//! 1. [`calculate_base_metrics`] derives position size, margin, net loss,
//!    break-even and liquidation prices from the risk budget
//! 2. [`calculate_target`] projects one take-profit target (net profit,
//!    risk/reward ratios, return on capital)
//! 3. [`calculate_aggregate`] folds all targets plus the best-target
//!    scenario into trade-level totals
//!
//! The host re-runs the pipeline whenever inputs change; each pass is
//! O(number of targets) and side-effect free.

mod aggregate;
mod base;
pub(crate) mod constants;
mod target;

pub use aggregate::{AggregateMetrics, calculate_aggregate};
pub use base::{BaseMetrics, calculate_base_metrics};
pub use target::{TargetResult, calculate_target};
