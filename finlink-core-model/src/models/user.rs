use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::bank::Bank;
use crate::models::identifiable::Identifiable;
use crate::models::loan::Loan;
use crate::models::notification::Notification;
use crate::models::wallet::WalletCurrency;

/// Account snapshot returned to the client: identity, USD balance and
/// the collections hanging off the account.
///
/// `balance` never goes negative; a withdrawal that would overdraw is
/// rejected rather than clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: HeaplessString<100>,
    pub email: HeaplessString<100>,

    /// Primary account balance in USD
    pub balance: Decimal,

    pub partner_bank: Option<Bank>,
    pub wallet: Vec<WalletCurrency>,
    pub loans: Vec<Loan>,
    pub notifications: Vec<Notification>,
}

impl Identifiable for User {
    fn get_id(&self) -> &str {
        &self.id
    }
}

/// Read-only projection of a user for the admin listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: HeaplessString<100>,
    pub email: HeaplessString<100>,
    pub join_date: NaiveDate,
}

impl Identifiable for AdminUser {
    fn get_id(&self) -> &str {
        &self.id
    }
}
