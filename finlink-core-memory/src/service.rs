//! `BankingApi` implementation over the in-memory store.
//!
//! Every operation applies its state change synchronously under the
//! store lock and only then awaits the simulated latency, so two calls
//! issued back to back observe each other's effects in call order.

use async_trait::async_trait;
use chrono::Utc;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use finlink_core_api::{
    Acknowledgement, AdminDashboardSnapshot, AssistantReply, BalanceUpdate, BankingApi,
    BroadcastRequest, DashboardSnapshot, KycUploadRequest, LoanApplicationRequest,
    LoanApplicationResponse, LoginRequest, LoginResponse, ProfileUpdateRequest, RequestDecision,
    ServiceError, ServiceResult,
};
use finlink_core_model::{
    Bank, Loan, Notification, Transaction, User, WalletCurrency,
};

use crate::assistant;
use crate::latency::LatencyProfile;
use crate::store::{InMemoryStore, LoanRecord};

/// Number of ledger entries surfaced on the dashboard
const RECENT_TRANSACTION_COUNT: usize = 5;

/// Mock banking backend. State lives for the lifetime of the injected
/// store; nothing is persisted across process restarts.
pub struct MemoryBankingService {
    store: Arc<InMemoryStore>,
    latency: LatencyProfile,
}

impl MemoryBankingService {
    /// Seeded store with the default latency profile
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryStore::seeded()), LatencyProfile::default())
    }

    pub fn with_latency(latency: LatencyProfile) -> Self {
        Self::with_store(Arc::new(InMemoryStore::seeded()), latency)
    }

    /// Injects an externally owned store, e.g. one shared with a test
    /// harness that wants to inspect or reset state directly.
    pub fn with_store(store: Arc<InMemoryStore>, latency: LatencyProfile) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &Arc<InMemoryStore> {
        &self.store
    }
}

impl Default for MemoryBankingService {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_positive(amount: Decimal, operation: &str) -> ServiceResult<()> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!(
            "{operation} amount must be positive, got {amount}"
        )))
    }
}

fn bounded<const N: usize>(value: &str, field: &str) -> ServiceResult<HeaplessString<N>> {
    let mut out = HeaplessString::new();
    out.push_str(value)
        .map_err(|()| ServiceError::Validation(format!("{field} exceeds {N} characters")))?;
    Ok(out)
}

#[async_trait]
impl BankingApi for MemoryBankingService {
    async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        request.validate()?;
        // Credentials are not checked against stored data in this scope
        info!(email = %request.email, "processing login");

        let user = self.store.read(|state| state.user_snapshot());
        let token = format!("session-{}", Uuid::new_v4());

        self.latency.request_delay().await;
        Ok(LoginResponse { token, user })
    }

    async fn dashboard(&self) -> ServiceResult<DashboardSnapshot> {
        debug!("fetching dashboard snapshot");
        let snapshot = self.store.read(|state| DashboardSnapshot {
            user: state.user_snapshot(),
            recent_transactions: state
                .transactions
                .iter()
                .take(RECENT_TRANSACTION_COUNT)
                .cloned()
                .collect(),
        });

        self.latency.request_delay().await;
        Ok(snapshot)
    }

    async fn all_transactions(&self) -> ServiceResult<Vec<Transaction>> {
        debug!("fetching full transaction ledger");
        let transactions = self.store.read(|state| state.transactions.clone());

        self.latency.request_delay().await;
        Ok(transactions)
    }

    async fn partner_banks(&self) -> ServiceResult<Vec<Bank>> {
        debug!("fetching partner banks");
        let banks = self.store.read(|state| state.banks.clone());

        self.latency.request_delay().await;
        Ok(banks)
    }

    async fn upload_kyc_documents(
        &self,
        request: KycUploadRequest,
    ) -> ServiceResult<Acknowledgement> {
        request.validate()?;
        // Documents are acknowledged but never stored
        info!(
            identity = %request.identity_document.file_name,
            supporting = %request.supporting_document.file_name,
            "received KYC documents"
        );

        self.latency.request_delay().await;
        Ok(Acknowledgement::ok(
            "KYC documents uploaded successfully! Your request is pending review.",
        ))
    }

    async fn apply_for_loan(
        &self,
        request: LoanApplicationRequest,
    ) -> ServiceResult<LoanApplicationResponse> {
        request.validate()?;
        ensure_positive(request.amount, "loan")?;
        let purpose = bounded::<200>(&request.purpose, "purpose")?;

        let record = self.store.write(|state| {
            let record = LoanRecord {
                id: format!("loan-{}", Uuid::new_v4()),
                owner_id: state.user.id.clone(),
                owner_name: state.user.name.clone(),
                amount: request.amount,
                purpose,
                status: finlink_core_model::RequestStatus::Pending,
                date: Utc::now().date_naive(),
            };
            state.loans.push(record.clone());
            record
        });
        info!(loan_id = %record.id, amount = %record.amount, "loan application submitted");

        self.latency.request_delay().await;
        Ok(LoanApplicationResponse {
            success: true,
            message: format!("Loan application for ${} submitted.", record.amount.round_dp(2)),
            new_loan: record.as_loan(),
        })
    }

    async fn make_deposit(&self, amount: Decimal) -> ServiceResult<BalanceUpdate> {
        ensure_positive(amount, "deposit")?;

        // The deposit is not mirrored into the transaction ledger; the
        // seeded ledger is static display data.
        let new_balance = self.store.write(|state| {
            state.user.balance += amount;
            state.user.balance
        });
        info!(amount = %amount, balance = %new_balance, "deposit applied");

        self.latency.request_delay().await;
        Ok(BalanceUpdate {
            success: true,
            new_balance,
        })
    }

    async fn make_withdrawal(&self, amount: Decimal) -> ServiceResult<BalanceUpdate> {
        ensure_positive(amount, "withdrawal")?;

        let outcome = self.store.write(|state| {
            if state.user.balance >= amount {
                state.user.balance -= amount;
                Ok(state.user.balance)
            } else {
                Err(ServiceError::InsufficientFunds {
                    requested: amount,
                    available: state.user.balance,
                })
            }
        });

        match outcome {
            Ok(new_balance) => {
                info!(amount = %amount, balance = %new_balance, "withdrawal applied");
                self.latency.request_delay().await;
                Ok(BalanceUpdate {
                    success: true,
                    new_balance,
                })
            }
            Err(err) => {
                // The rejection is computed synchronously and delivered
                // without the artificial delay.
                warn!(amount = %amount, "withdrawal rejected: insufficient funds");
                Err(err)
            }
        }
    }

    async fn wallet(&self) -> ServiceResult<Vec<WalletCurrency>> {
        debug!("fetching wallet positions");
        let wallet = self.store.read(|state| state.user.wallet.clone());

        self.latency.request_delay().await;
        Ok(wallet)
    }

    async fn assistant_reply(&self, message: &str) -> ServiceResult<AssistantReply> {
        debug!(len = message.len(), "resolving assistant reply");
        let text = assistant::reply_for(message).to_string();

        self.latency.assistant_delay().await;
        Ok(AssistantReply { text })
    }

    async fn user_loans(&self) -> ServiceResult<Vec<Loan>> {
        debug!("fetching user loans");
        let loans = self.store.read(|state| state.user_loans());

        self.latency.request_delay().await;
        Ok(loans)
    }

    async fn notifications(&self) -> ServiceResult<Vec<Notification>> {
        debug!("fetching notifications");
        let notifications = self.store.read(|state| state.user.notifications.clone());

        self.latency.request_delay().await;
        Ok(notifications)
    }

    async fn mark_notifications_read(&self) -> ServiceResult<Acknowledgement> {
        let marked = self.store.write(|state| {
            for notification in &mut state.user.notifications {
                notification.read = true;
            }
            state.user.notifications.len()
        });
        info!(count = marked, "notifications marked as read");

        self.latency.request_delay().await;
        Ok(Acknowledgement::ok("All notifications marked as read."))
    }

    async fn update_profile(&self, request: ProfileUpdateRequest) -> ServiceResult<User> {
        request.validate()?;
        let name = bounded::<100>(&request.name, "name")?;
        let email = bounded::<100>(&request.email, "email")?;

        let user = self.store.write(|state| {
            state.user.name = name;
            state.user.email = email;
            state.user_snapshot()
        });
        info!(user_id = %user.id, "profile updated");

        self.latency.request_delay().await;
        Ok(user)
    }

    async fn admin_dashboard(&self) -> ServiceResult<AdminDashboardSnapshot> {
        debug!("fetching admin dashboard");
        let snapshot = self.store.read(|state| AdminDashboardSnapshot {
            users: state.admin_users.clone(),
            kyc_requests: state.pending_kyc_requests(),
            loan_requests: state.pending_loan_requests(),
        });

        self.latency.request_delay().await;
        Ok(snapshot)
    }

    async fn decide_kyc_request(
        &self,
        id: &str,
        decision: RequestDecision,
    ) -> ServiceResult<Acknowledgement> {
        self.store.write(|state| {
            match state.kyc_requests.iter_mut().find(|r| r.id == id) {
                Some(request) if request.status.is_pending() => {
                    request.status = decision.as_status();
                    info!(kyc_id = %id, %decision, "KYC request decided");
                }
                Some(request) => {
                    // Decisions are one-shot; a decided request is terminal
                    warn!(kyc_id = %id, status = %request.status, "KYC request already decided");
                }
                None => {
                    warn!(kyc_id = %id, "KYC decision for unknown id ignored");
                }
            }
        });

        self.latency.request_delay().await;
        Ok(Acknowledgement::ok("KYC request updated."))
    }

    async fn decide_loan_request(
        &self,
        id: &str,
        decision: RequestDecision,
    ) -> ServiceResult<Acknowledgement> {
        self.store.write(|state| {
            match state.loans.iter_mut().find(|l| l.id == id) {
                Some(loan) if loan.status.is_pending() => {
                    loan.status = decision.as_status();
                    info!(loan_id = %id, %decision, "loan request decided");
                }
                Some(loan) => {
                    warn!(loan_id = %id, status = %loan.status, "loan request already decided");
                }
                None => {
                    warn!(loan_id = %id, "loan decision for unknown id ignored");
                }
            }
        });

        self.latency.request_delay().await;
        Ok(Acknowledgement::ok("Loan request updated."))
    }

    async fn broadcast_notification(
        &self,
        request: BroadcastRequest,
    ) -> ServiceResult<Acknowledgement> {
        request.validate()?;
        let title = bounded::<100>(&request.title, "title")?;
        let message = bounded::<255>(&request.message, "message")?;

        let id = self.store.write(|state| {
            let notification = Notification {
                id: format!("notif-{}", Uuid::new_v4()),
                title,
                message,
                date: Utc::now().date_naive(),
                read: false,
            };
            let id = notification.id.clone();
            // Newest notifications render first
            state.user.notifications.insert(0, notification);
            id
        });
        info!(notification_id = %id, "notification broadcast");

        self.latency.request_delay().await;
        Ok(Acknowledgement::ok("Notification broadcast."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::test_service;
    use finlink_core_model::RequestStatus;

    fn usd(minor: i64) -> Decimal {
        Decimal::new(minor, 2)
    }

    const SEED_BALANCE: i64 = 1_349_802; // 13,498.02

    #[tokio::test]
    async fn deposit_increases_balance_by_exact_amount() {
        let service = test_service();
        let update = service.make_deposit(usd(25_000)).await.unwrap();
        assert!(update.success);
        assert_eq!(update.new_balance, usd(SEED_BALANCE + 25_000));
    }

    #[tokio::test]
    async fn deposit_rejects_non_positive_amount() {
        let service = test_service();
        assert!(matches!(
            service.make_deposit(Decimal::ZERO).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            service.make_deposit(usd(-100)).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn withdrawal_decreases_balance_by_exact_amount() {
        let service = test_service();
        let update = service.make_withdrawal(usd(100_000)).await.unwrap();
        assert_eq!(update.new_balance, usd(SEED_BALANCE - 100_000));
    }

    #[tokio::test]
    async fn overdraw_rejects_and_leaves_balance_unchanged() {
        let service = test_service();
        let result = service.make_withdrawal(usd(SEED_BALANCE + 1)).await;
        assert!(matches!(
            result,
            Err(ServiceError::InsufficientFunds { .. })
        ));

        let dashboard = service.dashboard().await.unwrap();
        assert_eq!(dashboard.user.balance, usd(SEED_BALANCE));
    }

    #[tokio::test]
    async fn withdrawal_of_entire_balance_is_allowed() {
        let service = test_service();
        let update = service.make_withdrawal(usd(SEED_BALANCE)).await.unwrap();
        assert_eq!(update.new_balance, Decimal::ZERO);
    }

    #[tokio::test]
    async fn back_to_back_mutations_observe_call_order() {
        let service = test_service();
        service.make_deposit(usd(10_000)).await.unwrap();
        let update = service.make_withdrawal(usd(10_000)).await.unwrap();
        assert_eq!(update.new_balance, usd(SEED_BALANCE));
    }

    #[tokio::test]
    async fn loan_application_lands_in_both_views_under_one_id() {
        let service = test_service();
        let response = service
            .apply_for_loan(LoanApplicationRequest {
                amount: usd(500_000),
                purpose: "Car".to_string(),
            })
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.new_loan.status, RequestStatus::Pending);

        let id = response.new_loan.id;
        let loans = service.user_loans().await.unwrap();
        assert!(loans.iter().any(|l| l.id == id));

        let admin = service.admin_dashboard().await.unwrap();
        assert!(admin.loan_requests.iter().any(|r| r.id == id));
    }

    #[tokio::test]
    async fn loan_decision_updates_user_view_and_leaves_pending_queue() {
        let service = test_service();
        service
            .decide_loan_request("loan-2", RequestDecision::Approved)
            .await
            .unwrap();

        let admin = service.admin_dashboard().await.unwrap();
        assert!(!admin.loan_requests.iter().any(|r| r.id == "loan-2"));

        let loans = service.user_loans().await.unwrap();
        let decided = loans.iter().find(|l| l.id == "loan-2").unwrap();
        assert_eq!(decided.status, RequestStatus::Approved);
    }

    #[tokio::test]
    async fn loan_decision_is_one_shot() {
        let service = test_service();
        service
            .decide_loan_request("loan-2", RequestDecision::Approved)
            .await
            .unwrap();
        service
            .decide_loan_request("loan-2", RequestDecision::Rejected)
            .await
            .unwrap();

        let loans = service.user_loans().await.unwrap();
        let decided = loans.iter().find(|l| l.id == "loan-2").unwrap();
        assert_eq!(decided.status, RequestStatus::Approved);
    }

    #[tokio::test]
    async fn kyc_decision_removes_request_from_pending_queue() {
        let service = test_service();
        service
            .decide_kyc_request("kyc-1", RequestDecision::Rejected)
            .await
            .unwrap();

        let admin = service.admin_dashboard().await.unwrap();
        assert!(!admin.kyc_requests.iter().any(|r| r.id == "kyc-1"));
        assert!(admin.kyc_requests.iter().any(|r| r.id == "kyc-2"));
    }

    #[tokio::test]
    async fn decisions_for_unknown_ids_are_silent_noops() {
        let service = test_service();
        let ack = service
            .decide_kyc_request("kyc-999", RequestDecision::Approved)
            .await
            .unwrap();
        assert!(ack.success);

        let ack = service
            .decide_loan_request("loan-999", RequestDecision::Approved)
            .await
            .unwrap();
        assert!(ack.success);

        let admin = service.admin_dashboard().await.unwrap();
        assert_eq!(admin.kyc_requests.len(), 2);
        assert_eq!(admin.loan_requests.len(), 2);
    }

    #[tokio::test]
    async fn mark_all_read_then_broadcast_starts_unread() {
        let service = test_service();
        service.mark_notifications_read().await.unwrap();
        assert!(service
            .notifications()
            .await
            .unwrap()
            .iter()
            .all(|n| n.read));

        service
            .broadcast_notification(BroadcastRequest {
                title: "Scheduled Maintenance".to_string(),
                message: "FinLink will be unavailable on Sunday 02:00-03:00 UTC.".to_string(),
            })
            .await
            .unwrap();

        let notifications = service.notifications().await.unwrap();
        let newest = notifications.first().unwrap();
        assert!(!newest.read);
        assert_eq!(newest.title.as_str(), "Scheduled Maintenance");
    }

    #[tokio::test]
    async fn dashboard_returns_five_most_recent_transactions() {
        let service = test_service();
        let dashboard = service.dashboard().await.unwrap();
        assert_eq!(dashboard.recent_transactions.len(), 5);
        assert_eq!(dashboard.recent_transactions[0].id, "t-1");

        let all = service.all_transactions().await.unwrap();
        assert_eq!(all.len(), 9);
    }

    #[tokio::test]
    async fn balance_changes_do_not_append_ledger_entries() {
        // The ledger stays static while the balance moves; it is
        // display data, not an audit trail.
        let service = test_service();
        service.make_deposit(usd(10_000)).await.unwrap();
        service.make_withdrawal(usd(5_000)).await.unwrap();
        assert_eq!(service.all_transactions().await.unwrap().len(), 9);
    }

    #[tokio::test]
    async fn login_returns_token_and_snapshot() {
        let service = test_service();
        let response = service
            .login(LoginRequest {
                email: "alex.j@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();
        assert!(response.token.starts_with("session-"));
        assert_eq!(response.user.id, "user-123");
        assert_eq!(response.user.loans.len(), 2);
    }

    #[tokio::test]
    async fn login_rejects_malformed_credentials() {
        let service = test_service();
        let result = service
            .login(LoginRequest {
                email: "not-an-email".to_string(),
                password: "pw".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn profile_update_overwrites_name_and_email() {
        let service = test_service();
        let user = service
            .update_profile(ProfileUpdateRequest {
                name: "Alexandra Johnson".to_string(),
                email: "alexandra.j@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.name.as_str(), "Alexandra Johnson");
        assert_eq!(user.email.as_str(), "alexandra.j@example.com");

        let dashboard = service.dashboard().await.unwrap();
        assert_eq!(dashboard.user.name.as_str(), "Alexandra Johnson");
    }

    #[tokio::test]
    async fn assistant_reply_applies_rule_precedence() {
        let service = test_service();
        let reply = service
            .assistant_reply("I want to open an account and also ask about loan")
            .await
            .unwrap();
        assert!(reply.text.contains("open a foreign bank account"));
    }

    #[tokio::test]
    async fn kyc_upload_is_acknowledged_but_not_stored() {
        let service = test_service();
        let ack = service
            .upload_kyc_documents(KycUploadRequest {
                identity_document: finlink_core_api::KycDocument {
                    file_name: "passport.png".to_string(),
                    content_type: "image/png".to_string(),
                    bytes: vec![1, 2, 3],
                },
                supporting_document: finlink_core_api::KycDocument {
                    file_name: "pan-card.png".to_string(),
                    content_type: "image/png".to_string(),
                    bytes: vec![4, 5, 6],
                },
            })
            .await
            .unwrap();
        assert!(ack.success);
        assert!(ack.message.contains("pending review"));

        // The admin queue is unchanged; nothing was persisted
        let admin = service.admin_dashboard().await.unwrap();
        assert_eq!(admin.kyc_requests.len(), 2);
    }

    #[tokio::test]
    async fn partner_banks_and_wallet_return_seeded_collections() {
        let service = test_service();
        let banks = service.partner_banks().await.unwrap();
        assert_eq!(banks.len(), 4);
        assert_eq!(banks[0].name.as_str(), "Chase Bank");

        let wallet = service.wallet().await.unwrap();
        assert_eq!(wallet.len(), 4);
    }
}
