use async_trait::async_trait;
use finlink_core_model::{Bank, Loan, Notification, Transaction, User, WalletCurrency};
use rust_decimal::Decimal;

use crate::error::ServiceResult;
use crate::requests::{
    BroadcastRequest, KycUploadRequest, LoanApplicationRequest, LoginRequest,
    ProfileUpdateRequest, RequestDecision,
};
use crate::responses::{
    Acknowledgement, AdminDashboardSnapshot, AssistantReply, BalanceUpdate, DashboardSnapshot,
    LoanApplicationResponse, LoginResponse,
};

/// Request/response contract of the banking backend.
///
/// Every operation resolves after a simulated network round-trip; none
/// support cancellation. The only modeled rejection besides input
/// validation is `InsufficientFunds` on withdrawal. Back-to-back calls
/// observe each other's effects in call order.
#[async_trait]
pub trait BankingApi: Send + Sync {
    /// Authenticates and returns a session token with the account
    /// snapshot. Credentials are not checked against stored data.
    async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse>;

    /// Account snapshot plus the five most recent transactions
    async fn dashboard(&self) -> ServiceResult<DashboardSnapshot>;

    /// Full transaction ledger, newest first
    async fn all_transactions(&self) -> ServiceResult<Vec<Transaction>>;

    /// Static partner bank list
    async fn partner_banks(&self) -> ServiceResult<Vec<Bank>>;

    /// Accepts two verification documents. Documents are acknowledged
    /// but never stored.
    async fn upload_kyc_documents(
        &self,
        request: KycUploadRequest,
    ) -> ServiceResult<Acknowledgement>;

    /// Creates a `Pending` loan visible to both the user's loan list
    /// and the admin review queue under one id.
    async fn apply_for_loan(
        &self,
        request: LoanApplicationRequest,
    ) -> ServiceResult<LoanApplicationResponse>;

    /// Credits the primary balance. `amount` must be positive.
    async fn make_deposit(&self, amount: Decimal) -> ServiceResult<BalanceUpdate>;

    /// Debits the primary balance. Rejects with `InsufficientFunds`
    /// when `amount` exceeds the balance, leaving it unchanged.
    async fn make_withdrawal(&self, amount: Decimal) -> ServiceResult<BalanceUpdate>;

    /// Wallet positions, one per supported currency
    async fn wallet(&self) -> ServiceResult<Vec<WalletCurrency>>;

    /// Deterministic keyword-matched support reply; unmatched input
    /// resolves to a default reply, never an error.
    async fn assistant_reply(&self, message: &str) -> ServiceResult<AssistantReply>;

    /// The user's loan applications in submission order
    async fn user_loans(&self) -> ServiceResult<Vec<Loan>>;

    /// The user's notifications in display order
    async fn notifications(&self) -> ServiceResult<Vec<Notification>>;

    /// Marks every existing notification as read
    async fn mark_notifications_read(&self) -> ServiceResult<Acknowledgement>;

    /// Overwrites the account name and email, returning the new snapshot
    async fn update_profile(&self, request: ProfileUpdateRequest) -> ServiceResult<User>;

    /// Admin view: user listing plus pending-only KYC and loan queues
    async fn admin_dashboard(&self) -> ServiceResult<AdminDashboardSnapshot>;

    /// Applies a one-shot decision to a pending KYC request. Unknown
    /// ids are silently ignored.
    async fn decide_kyc_request(
        &self,
        id: &str,
        decision: RequestDecision,
    ) -> ServiceResult<Acknowledgement>;

    /// Applies a one-shot decision to a pending loan request. The
    /// user-facing loan and the admin-facing request share one record,
    /// so the two views cannot diverge. Unknown ids are silently
    /// ignored.
    async fn decide_loan_request(
        &self,
        id: &str,
        decision: RequestDecision,
    ) -> ServiceResult<Acknowledgement>;

    /// Prepends a new unread notification to the user's list
    async fn broadcast_notification(
        &self,
        request: BroadcastRequest,
    ) -> ServiceResult<Acknowledgement>;
}
