//! Income/expense aggregation backing the dashboard spend chart.

use rust_decimal::Decimal;

use crate::models::transaction::Transaction;

/// Totals of credits and debits over a transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashflowSummary {
    /// Sum of positive amounts
    pub income: Decimal,

    /// Sum of absolute values of negative amounts
    pub expenses: Decimal,
}

impl CashflowSummary {
    /// Denominator for relative bar scaling. Never below one, so an
    /// empty ledger cannot divide by zero.
    pub fn chart_scale(&self) -> Decimal {
        self.income.max(self.expenses).max(Decimal::ONE)
    }
}

/// Single pass over the ledger splitting credits from debits
pub fn summarize(transactions: &[Transaction]) -> CashflowSummary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;

    for tx in transactions {
        if tx.amount > Decimal::ZERO {
            income += tx.amount;
        } else {
            expenses += tx.amount.abs();
        }
    }

    CashflowSummary { income, expenses }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::TransactionType;
    use chrono::NaiveDate;
    use heapless::String as HeaplessString;

    fn tx(id: &str, amount: Decimal, transaction_type: TransactionType) -> Transaction {
        let mut description = HeaplessString::new();
        let _ = description.push_str("test entry");

        Transaction {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid calendar date"),
            description,
            amount,
            transaction_type,
        }
    }

    #[test]
    fn empty_ledger_yields_zero_totals_and_unit_scale() {
        let summary = summarize(&[]);
        assert_eq!(summary.income, Decimal::ZERO);
        assert_eq!(summary.expenses, Decimal::ZERO);
        assert_eq!(summary.chart_scale(), Decimal::ONE);
    }

    #[test]
    fn credits_and_debits_split() {
        let ledger = vec![
            tx("t-1", Decimal::new(350_000, 2), TransactionType::Deposit),
            tx("t-2", Decimal::new(-1_599, 2), TransactionType::Payment),
            tx("t-3", Decimal::new(-10_000, 2), TransactionType::Withdrawal),
        ];

        let summary = summarize(&ledger);
        assert_eq!(summary.income, Decimal::new(350_000, 2));
        assert_eq!(summary.expenses, Decimal::new(11_599, 2));
        assert_eq!(summary.chart_scale(), Decimal::new(350_000, 2));
    }
}
