//! Built-in seed data set loaded into a fresh store.
//!
//! The ledger is static display data: balance-changing operations do
//! not append to it, so the transaction list and the balance can
//! visibly diverge. That mismatch is intentional and load-bearing for
//! consumers that render both.

use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;

use finlink_core_model::{
    AdminUser, Bank, CurrencyCode, KycRequest, Notification, RequestStatus, Transaction,
    TransactionType, WalletCurrency,
};

use crate::store::{LoanRecord, StoreState, UserRecord};

fn hs<const N: usize>(value: &str) -> HeaplessString<N> {
    let mut out = HeaplessString::new();
    let _ = out.push_str(value);
    out
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Amount in minor units (cents) to a two-digit decimal
fn money(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

fn bank(id: &str, name: &str, logo_seed: &str, country: &str) -> Bank {
    Bank {
        id: id.to_string(),
        name: hs(name),
        logo_url: hs(&format!("https://picsum.photos/seed/{logo_seed}/48/48")),
        country: hs(country),
    }
}

fn transaction(
    id: &str,
    booked: NaiveDate,
    description: &str,
    amount: Decimal,
    transaction_type: TransactionType,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: booked,
        description: hs(description),
        amount,
        transaction_type,
    }
}

fn loan(
    id: &str,
    owner_id: &str,
    owner_name: &str,
    amount: Decimal,
    purpose: &str,
    status: RequestStatus,
    applied: NaiveDate,
) -> LoanRecord {
    LoanRecord {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        owner_name: hs(owner_name),
        amount,
        purpose: hs(purpose),
        status,
        date: applied,
    }
}

pub fn seed_banks() -> Vec<Bank> {
    vec![
        bank("bank-1", "Chase Bank", "bank1", "USA"),
        bank("bank-2", "Revolut", "bank2", "UK"),
        bank("bank-3", "Wise", "bank3", "EU"),
        bank("bank-4", "Citibank", "bank4", "Singapore"),
    ]
}

pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        transaction("t-1", date(2024, 7, 29), "Netflix Subscription", money(-1_599), TransactionType::Payment),
        transaction("t-2", date(2024, 7, 28), "Salary Deposit", money(350_000), TransactionType::Deposit),
        transaction("t-3", date(2024, 7, 28), "Grocery Shopping", money(-8_550), TransactionType::Payment),
        transaction("t-4", date(2024, 7, 27), "ATM Withdrawal", money(-10_000), TransactionType::Withdrawal),
        transaction("t-5", date(2024, 7, 26), "Transfer to John Doe", money(-25_000), TransactionType::Transfer),
        transaction("t-6", date(2024, 7, 25), "Loan Disbursement", money(1_000_000), TransactionType::LoanDisbursement),
        transaction("t-7", date(2024, 7, 24), "Online Course Purchase", money(-19_999), TransactionType::Payment),
        transaction("t-8", date(2024, 7, 23), "Refund from Amazon", money(4_500), TransactionType::Deposit),
        transaction("t-9", date(2024, 7, 22), "USD to EUR Conversion", money(-50_000), TransactionType::ForexConversion),
    ]
}

pub fn seed_wallet() -> Vec<WalletCurrency> {
    vec![
        WalletCurrency::new(CurrencyCode::USD, money(1_349_802)),
        WalletCurrency::new(CurrencyCode::EUR, money(523_050)),
        WalletCurrency::new(CurrencyCode::GBP, money(120_000)),
        WalletCurrency::new(CurrencyCode::INR, money(8_500_000)),
    ]
}

pub fn seed_loans() -> Vec<LoanRecord> {
    vec![
        loan("loan-1", "user-123", "Alex Johnson", money(1_000_000), "Home Renovation", RequestStatus::Approved, date(2024, 7, 20)),
        loan("loan-2", "user-123", "Alex Johnson", money(500_000), "Debt Consolidation", RequestStatus::Pending, date(2024, 7, 28)),
        loan("loan-3", "user-456", "Jane Doe", money(1_500_000), "Car Purchase", RequestStatus::Pending, date(2024, 7, 27)),
    ]
}

pub fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "notif-1".to_string(),
            title: hs("Withdrawal Successful"),
            message: hs("Your withdrawal of $100.00 has been processed."),
            date: date(2024, 7, 27),
            read: false,
        },
        Notification {
            id: "notif-2".to_string(),
            title: hs("Loan Approved!"),
            message: hs("Congratulations! Your loan for $10,000 has been approved."),
            date: date(2024, 7, 20),
            read: true,
        },
    ]
}

pub fn seed_admin_users() -> Vec<AdminUser> {
    vec![
        AdminUser {
            id: "user-123".to_string(),
            name: hs("Alex Johnson"),
            email: hs("alex.j@example.com"),
            join_date: date(2024, 1, 15),
        },
        AdminUser {
            id: "user-456".to_string(),
            name: hs("Jane Doe"),
            email: hs("jane.d@example.com"),
            join_date: date(2024, 3, 22),
        },
        AdminUser {
            id: "user-789".to_string(),
            name: hs("Sam Wilson"),
            email: hs("sam.w@example.com"),
            join_date: date(2024, 5, 10),
        },
    ]
}

pub fn seed_kyc_requests() -> Vec<KycRequest> {
    vec![
        KycRequest {
            id: "kyc-1".to_string(),
            user_id: "user-456".to_string(),
            user_name: hs("Jane Doe"),
            status: RequestStatus::Pending,
            submission_date: date(2024, 7, 29),
        },
        KycRequest {
            id: "kyc-2".to_string(),
            user_id: "user-789".to_string(),
            user_name: hs("Sam Wilson"),
            status: RequestStatus::Pending,
            submission_date: date(2024, 7, 28),
        },
    ]
}

/// Full seed state: one account plus the shared admin collections
pub fn seed_state() -> StoreState {
    let banks = seed_banks();
    let partner_bank = banks.first().cloned();

    StoreState {
        user: UserRecord {
            id: "user-123".to_string(),
            name: hs("Alex Johnson"),
            email: hs("alex.j@example.com"),
            balance: money(1_349_802),
            partner_bank,
            wallet: seed_wallet(),
            notifications: seed_notifications(),
        },
        banks,
        transactions: seed_transactions(),
        admin_users: seed_admin_users(),
        kyc_requests: seed_kyc_requests(),
        loans: seed_loans(),
    }
}
