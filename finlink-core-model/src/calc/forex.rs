//! Currency conversion over a fixed rate table.
//!
//! Rates are hardcoded units-per-USD; there is no live rate feed.

use rust_decimal::Decimal;

use crate::models::wallet::CurrencyCode;

/// Units of `code` per one USD (the base unit)
pub fn unit_rate(code: CurrencyCode) -> Decimal {
    match code {
        CurrencyCode::USD => Decimal::new(100, 2),   // 1.00
        CurrencyCode::EUR => Decimal::new(92, 2),    // 0.92
        CurrencyCode::GBP => Decimal::new(79, 2),    // 0.79
        CurrencyCode::INR => Decimal::new(8_331, 2), // 83.31
    }
}

/// Converts `amount` of `from` into `to` through the base unit:
/// `(amount / rate(from)) * rate(to)`.
pub fn convert(amount: Decimal, from: CurrencyCode, to: CurrencyCode) -> Decimal {
    (amount / unit_rate(from)) * unit_rate(to)
}
