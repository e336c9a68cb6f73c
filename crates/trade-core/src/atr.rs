//! Average True Range estimation.
//!
//! [`calculate_atr`] is a single-window estimate: the arithmetic mean of the
//! true ranges over the trailing `period + 1` candles (the seed SMA step of
//! Wilder smoothing). Hosts that want a fully smoothed rolling series carry
//! the prior ATR forward through [`wilder_step`] themselves.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inputs::TradeDirection;

/// Default lookback period for ATR estimation.
pub const DEFAULT_ATR_PERIOD: usize = 14;

/// One candle of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Highest traded price.
    pub high: Decimal,
    /// Lowest traded price.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
}

/// True range of a candle against the previous close: the largest of
/// `high - low`, `|high - prev_close|`, and `|low - prev_close|`.
#[must_use]
pub fn true_range(candle: &Candle, prev_close: Decimal) -> Decimal {
    let high_low = candle.high - candle.low;
    let high_prev = (candle.high - prev_close).abs();
    let low_prev = (candle.low - prev_close).abs();
    high_low.max(high_prev).max(low_prev)
}

/// One incremental Wilder smoothing step:
/// `((prior_atr * (period - 1)) + current_tr) / period`.
#[must_use]
pub fn wilder_step(prior_atr: Decimal, current_tr: Decimal, period: usize) -> Decimal {
    if period == 0 {
        return Decimal::ZERO;
    }
    let p = Decimal::from(period as u64);
    (prior_atr * (p - Decimal::ONE) + current_tr) / p
}

/// Average True Range over the trailing `period + 1` candles.
///
/// Returns the arithmetic mean of the `period` true ranges in that window,
/// or zero when fewer than `period + 1` candles are available.
#[must_use]
pub fn calculate_atr(candles: &[Candle], period: usize) -> Decimal {
    if period == 0 || candles.len() < period + 1 {
        return Decimal::ZERO;
    }

    let window = &candles[candles.len() - (period + 1)..];
    let sum: Decimal = window
        .windows(2)
        .map(|pair| true_range(&pair[1], pair[0].close))
        .sum();
    sum / Decimal::from(period as u64)
}

/// Derive a stop-loss price from an ATR value: long stops sit
/// `atr * multiplier` below entry, short stops the same distance above.
#[must_use]
pub fn stop_loss_from_atr(
    entry_price: Decimal,
    atr: Decimal,
    multiplier: Decimal,
    direction: TradeDirection,
) -> Decimal {
    let offset = atr * multiplier;
    match direction {
        TradeDirection::Long => entry_price - offset,
        TradeDirection::Short => entry_price + offset,
    }
}
