use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::identifiable::Identifiable;

/// One-shot review lifecycle shared by loan and KYC requests.
///
/// A record is created `Pending`, transitions at most once to `Approved`
/// or `Rejected` via an admin decision, and is terminal thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "Pending"),
            RequestStatus::Approved => write!(f, "Approved"),
            RequestStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

impl FromStr for RequestStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(RequestStatus::Pending),
            "Approved" => Ok(RequestStatus::Approved),
            "Rejected" => Ok(RequestStatus::Rejected),
            _ => Err(()),
        }
    }
}

/// User-facing view of a loan application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,

    /// Requested principal
    pub amount: Decimal,

    /// Free-text purpose supplied on application
    pub purpose: HeaplessString<200>,

    pub status: RequestStatus,

    /// Application date
    pub date: NaiveDate,
}

impl Identifiable for Loan {
    fn get_id(&self) -> &str {
        &self.id
    }
}

/// Admin-facing view of a loan application: the loan tagged with the
/// owning user's identity. Shares its id with the user-facing `Loan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    pub id: String,
    pub user_id: String,
    pub user_name: HeaplessString<100>,
    pub amount: Decimal,
    pub purpose: HeaplessString<200>,
    pub status: RequestStatus,
    pub date: NaiveDate,
}

impl Identifiable for LoanRequest {
    fn get_id(&self) -> &str {
        &self.id
    }
}
