use finlink_core_model::{AdminUser, KycRequest, Loan, LoanRequest, Transaction, User};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Successful authentication: an opaque session token plus the account
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Landing-page payload: the account snapshot and the five most recent
/// ledger entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub user: User,
    pub recent_transactions: Vec<Transaction>,
}

/// Generic mutation acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanApplicationResponse {
    pub success: bool,
    pub message: String,
    pub new_loan: Loan,
}

/// Balance after a deposit or withdrawal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceUpdate {
    pub success: bool,
    pub new_balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub text: String,
}

/// Admin panel payload. The request lists are filtered to pending
/// status at read time, so a decision disappears from the next fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboardSnapshot {
    pub users: Vec<AdminUser>,
    pub kyc_requests: Vec<KycRequest>,
    pub loan_requests: Vec<LoanRequest>,
}
