//! Explicitly constructed, injectable in-memory store.
//!
//! The store is the single source of truth for the mock backend. Loans
//! live in one canonical collection; the user-facing loan list and the
//! admin-facing request queue are both read-time projections of it, so
//! a decision can never leave the two views inconsistent.

use chrono::NaiveDate;
use heapless::String as HeaplessString;
use parking_lot::RwLock;
use rust_decimal::Decimal;

use finlink_core_model::{
    AdminUser, Bank, KycRequest, Loan, LoanRequest, Notification, RequestStatus, Transaction,
    User, WalletCurrency,
};

/// Canonical account record. Unlike the `User` snapshot it does not
/// carry a loan list; loans are joined in at read time.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: String,
    pub name: HeaplessString<100>,
    pub email: HeaplessString<100>,
    pub balance: Decimal,
    pub partner_bank: Option<Bank>,
    pub wallet: Vec<WalletCurrency>,
    pub notifications: Vec<Notification>,
}

/// Canonical loan application, tagged with its owner
#[derive(Debug, Clone)]
pub struct LoanRecord {
    pub id: String,
    pub owner_id: String,
    pub owner_name: HeaplessString<100>,
    pub amount: Decimal,
    pub purpose: HeaplessString<200>,
    pub status: RequestStatus,
    pub date: NaiveDate,
}

impl LoanRecord {
    /// User-facing projection
    pub fn as_loan(&self) -> Loan {
        Loan {
            id: self.id.clone(),
            amount: self.amount,
            purpose: self.purpose.clone(),
            status: self.status,
            date: self.date,
        }
    }

    /// Admin-facing projection
    pub fn as_request(&self) -> LoanRequest {
        LoanRequest {
            id: self.id.clone(),
            user_id: self.owner_id.clone(),
            user_name: self.owner_name.clone(),
            amount: self.amount,
            purpose: self.purpose.clone(),
            status: self.status,
            date: self.date,
        }
    }
}

/// Everything the mock backend knows. One logical client; collections
/// keep insertion order because the views render them in list order.
#[derive(Debug, Clone)]
pub struct StoreState {
    pub user: UserRecord,
    pub banks: Vec<Bank>,
    pub transactions: Vec<Transaction>,
    pub admin_users: Vec<AdminUser>,
    pub kyc_requests: Vec<KycRequest>,
    pub loans: Vec<LoanRecord>,
}

impl StoreState {
    /// Assembles the account snapshot, joining in the user's loans
    pub fn user_snapshot(&self) -> User {
        User {
            id: self.user.id.clone(),
            name: self.user.name.clone(),
            email: self.user.email.clone(),
            balance: self.user.balance,
            partner_bank: self.user.partner_bank.clone(),
            wallet: self.user.wallet.clone(),
            loans: self.user_loans(),
            notifications: self.user.notifications.clone(),
        }
    }

    pub fn user_loans(&self) -> Vec<Loan> {
        self.loans
            .iter()
            .filter(|record| record.owner_id == self.user.id)
            .map(LoanRecord::as_loan)
            .collect()
    }

    /// Pending filter applied at read time, never materialized
    pub fn pending_loan_requests(&self) -> Vec<LoanRequest> {
        self.loans
            .iter()
            .filter(|record| record.status.is_pending())
            .map(LoanRecord::as_request)
            .collect()
    }

    pub fn pending_kyc_requests(&self) -> Vec<KycRequest> {
        self.kyc_requests
            .iter()
            .filter(|request| request.status.is_pending())
            .cloned()
            .collect()
    }
}

/// Process-lifetime mutable store behind a reader/writer lock.
///
/// Mutating operations take the write lock for the whole mutation, so
/// within one process they are serialized; there is no cross-process or
/// multi-tab coordination.
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new(state: StoreState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Store loaded with the built-in seed data set
    pub fn seeded() -> Self {
        Self::new(crate::seed::seed_state())
    }

    /// Restores the seed data set. Intended for test isolation.
    pub fn reset(&self) {
        *self.state.write() = crate::seed::seed_state();
    }

    /// Runs `f` under the read lock. The guard never crosses an await.
    pub fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        f(&self.state.read())
    }

    /// Runs `f` under the write lock. The guard never crosses an await.
    pub fn write<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        f(&mut self.state.write())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}
