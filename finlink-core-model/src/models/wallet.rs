use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Currencies supported by the multi-currency wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    USD,
    EUR,
    GBP,
    INR,
}

impl CurrencyCode {
    /// All supported codes, in wallet display order
    pub const ALL: [CurrencyCode; 4] = [
        CurrencyCode::USD,
        CurrencyCode::EUR,
        CurrencyCode::GBP,
        CurrencyCode::INR,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "US Dollar",
            CurrencyCode::EUR => "Euro",
            CurrencyCode::GBP => "British Pound",
            CurrencyCode::INR => "Indian Rupee",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "$",
            CurrencyCode::EUR => "€",
            CurrencyCode::GBP => "£",
            CurrencyCode::INR => "₹",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrencyCode::USD => write!(f, "USD"),
            CurrencyCode::EUR => write!(f, "EUR"),
            CurrencyCode::GBP => write!(f, "GBP"),
            CurrencyCode::INR => write!(f, "INR"),
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(CurrencyCode::USD),
            "EUR" => Ok(CurrencyCode::EUR),
            "GBP" => Ok(CurrencyCode::GBP),
            "INR" => Ok(CurrencyCode::INR),
            _ => Err(()),
        }
    }
}

/// One wallet position. Codes are unique within a user's wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletCurrency {
    pub code: CurrencyCode,
    pub name: HeaplessString<50>,
    pub balance: Decimal,
    pub symbol: HeaplessString<8>,
}

impl WalletCurrency {
    /// Builds a position with the display name and symbol derived from
    /// the currency code.
    pub fn new(code: CurrencyCode, balance: Decimal) -> Self {
        let mut name = HeaplessString::new();
        let _ = name.push_str(code.display_name());
        let mut symbol = HeaplessString::new();
        let _ = symbol.push_str(code.symbol());

        Self {
            code,
            name,
            balance,
            symbol,
        }
    }
}
