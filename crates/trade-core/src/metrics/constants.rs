//! Decimal constants shared across the calculators.

use rust_decimal::Decimal;

pub const ONE: Decimal = Decimal::ONE;
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
