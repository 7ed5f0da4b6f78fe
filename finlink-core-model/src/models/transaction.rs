use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::identifiable::Identifiable;

/// Kind of movement recorded on the account ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    Payment,
    #[serde(rename = "Loan Disbursement")]
    LoanDisbursement,
    #[serde(rename = "Forex Conversion")]
    ForexConversion,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Deposit => write!(f, "Deposit"),
            TransactionType::Withdrawal => write!(f, "Withdrawal"),
            TransactionType::Transfer => write!(f, "Transfer"),
            TransactionType::Payment => write!(f, "Payment"),
            TransactionType::LoanDisbursement => write!(f, "Loan Disbursement"),
            TransactionType::ForexConversion => write!(f, "Forex Conversion"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Deposit" => Ok(TransactionType::Deposit),
            "Withdrawal" => Ok(TransactionType::Withdrawal),
            "Transfer" => Ok(TransactionType::Transfer),
            "Payment" => Ok(TransactionType::Payment),
            "Loan Disbursement" => Ok(TransactionType::LoanDisbursement),
            "Forex Conversion" => Ok(TransactionType::ForexConversion),
            _ => Err(()),
        }
    }
}

/// Immutable ledger record. A positive amount is a credit, a negative
/// amount is a debit. Records are append-only; the seeded ledger is
/// never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,

    /// Calendar date the movement was booked
    pub date: NaiveDate,

    pub description: HeaplessString<100>,

    /// Signed amount in account currency (USD)
    pub amount: Decimal,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Identifiable for Transaction {
    fn get_id(&self) -> &str {
        &self.id
    }
}
