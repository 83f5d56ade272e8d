use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Monetary helpers shared across the commission engine.
///
/// All accumulation happens on full-precision `Decimal`s; rounding to the
/// 2-decimal report scale happens only at the serialization boundary and at
/// the month→year rollup, where yearly totals are sums of already-rounded
/// month values.
pub struct Money;

impl Money {
    /// Report scale: 2 decimal places
    pub const SCALE: u32 = 2;

    /// Rounds to the report scale with standard half-away-from-zero rounding.
    pub fn round(amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Formats an amount as a fixed 2-decimal-place string for responses.
    pub fn format(amount: Decimal) -> String {
        format!("{:.2}", Self::round(amount))
    }

    /// Coerces a loosely typed numeric value to a `Decimal`.
    ///
    /// Missing, null, or non-numeric input degrades to zero rather than
    /// failing; a malformed field costs that row its contribution, never the
    /// whole aggregation.
    pub fn coerce(value: Option<&Value>) -> Decimal {
        match value {
            Some(Value::Number(n)) => n
                .as_f64()
                .and_then(Decimal::from_f64_retain)
                .unwrap_or(Decimal::ZERO),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }

    /// Percentage application: `base × pct / 100`.
    pub fn apply_percentage(base: Decimal, pct: Decimal) -> Decimal {
        base * pct / Decimal::ONE_HUNDRED
    }
}
