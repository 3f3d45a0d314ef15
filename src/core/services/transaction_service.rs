//! Normalization of candidate transactions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::utils::MAX_AMOUNT;
use crate::domain::category::Category;
use crate::domain::common::UserId;
use crate::domain::transaction::{RawTransaction, Transaction};
use crate::errors::ValidationError;

/// Turns raw candidate records into normalized [`Transaction`]s.
pub struct TransactionService;

impl TransactionService {
    /// Validates and normalizes `raw` for `owner`, using `now` when no date was given.
    ///
    /// Fails only on an empty title or on an amount that is missing,
    /// non-finite or larger in magnitude than [`MAX_AMOUNT`]. Unknown
    /// categories become [`Category::Others`].
    pub fn normalize(
        owner: &UserId,
        raw: RawTransaction,
        now: DateTime<Utc>,
    ) -> Result<Transaction, ValidationError> {
        let title = raw.title.trim();
        if title.is_empty() {
            return Err(ValidationError::new("title", "must not be empty"));
        }
        let amount = match raw.amount {
            Some(amount) if amount.is_finite() && amount.abs() <= MAX_AMOUNT => amount,
            Some(amount) if amount.is_finite() => {
                return Err(ValidationError::new("amount", "exceeds the maximum amount"))
            }
            Some(_) => return Err(ValidationError::new("amount", "must be a finite number")),
            None => return Err(ValidationError::new("amount", "is required")),
        };

        let category = match raw.category.as_deref() {
            Some(label) => Category::recognise(label).unwrap_or_else(|| {
                tracing::debug!(label, "unrecognised category, using Others");
                Category::Others
            }),
            None => Category::Others,
        };

        let tags = raw
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Transaction {
            id: raw.id.unwrap_or_else(Uuid::new_v4),
            owner: owner.clone(),
            title: title.to_string(),
            amount,
            category,
            note: raw.note.map(|note| note.trim().to_string()).unwrap_or_default(),
            tags,
            date: raw.date.unwrap_or(now),
        })
    }

    /// Same as [`TransactionService::normalize`] with the wall clock as `now`.
    pub fn normalize_now(
        owner: &UserId,
        raw: RawTransaction,
    ) -> Result<Transaction, ValidationError> {
        Self::normalize(owner, raw, Utc::now())
    }

    /// Transactions in `category` (any when `None`) whose title contains
    /// `query`, ignoring case. Input order is kept.
    pub fn filter(
        transactions: &[Transaction],
        category: Option<Category>,
        query: &str,
    ) -> Vec<Transaction> {
        let needle = query.trim().to_lowercase();
        transactions
            .iter()
            .filter(|txn| category.map_or(true, |wanted| txn.category == wanted))
            .filter(|txn| needle.is_empty() || txn.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn owner() -> UserId {
        UserId::new("user-1")
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = TransactionService::normalize(&owner(), RawTransaction::new("", 5.0), fixed_now())
            .expect_err("empty title must fail");
        assert_eq!(err.field, "title");
    }

    #[test]
    fn whitespace_title_counts_as_empty() {
        let err =
            TransactionService::normalize(&owner(), RawTransaction::new("   ", 5.0), fixed_now())
                .expect_err("blank title must fail");
        assert_eq!(err.field, "title");
    }

    #[test]
    fn non_finite_amount_is_rejected() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = TransactionService::normalize(
                &owner(),
                RawTransaction::new("Lunch", amount),
                fixed_now(),
            )
            .expect_err("non-finite amount must fail");
            assert_eq!(err.field, "amount");
        }
    }

    #[test]
    fn oversized_amount_is_rejected() {
        for amount in [f64::MAX, -f64::MAX, MAX_AMOUNT * 2.0] {
            let err = TransactionService::normalize(
                &owner(),
                RawTransaction::new("Lottery", amount),
                fixed_now(),
            )
            .expect_err("oversized amount must fail");
            assert_eq!(err.field, "amount");
        }
        let at_cap =
            TransactionService::normalize(&owner(), RawTransaction::new("Cap", -MAX_AMOUNT), fixed_now())
                .unwrap();
        assert_eq!(at_cap.amount, -MAX_AMOUNT);
    }

    #[test]
    fn missing_amount_is_rejected() {
        let raw = RawTransaction {
            title: "Lunch".into(),
            ..RawTransaction::default()
        };
        let err = TransactionService::normalize(&owner(), raw, fixed_now())
            .expect_err("missing amount must fail");
        assert_eq!(err.field, "amount");
    }

    #[test]
    fn defaults_are_filled_in() {
        let txn =
            TransactionService::normalize(&owner(), RawTransaction::new("Salary", 5000.0), fixed_now())
                .unwrap();
        assert_eq!(txn.category, Category::Others);
        assert!(txn.tags.is_empty());
        assert_eq!(txn.note, "");
        assert_eq!(txn.date, fixed_now());
        assert_eq!(txn.owner, owner());
    }

    #[test]
    fn unknown_category_becomes_others() {
        let raw = RawTransaction::new("Gift", -40.0).with_category("Presents");
        let txn = TransactionService::normalize(&owner(), raw, fixed_now()).unwrap();
        assert_eq!(txn.category, Category::Others);
    }

    #[test]
    fn supplied_fields_are_kept() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let id = Uuid::new_v4();
        let raw = RawTransaction {
            id: Some(id),
            ..RawTransaction::new("  Groceries ", -1200.0)
                .with_category("food")
                .with_note(" weekly ")
                .with_tags(["home", " ", "weekly "])
                .with_date(date)
        };
        let txn = TransactionService::normalize(&owner(), raw, fixed_now()).unwrap();
        assert_eq!(txn.id, id);
        assert_eq!(txn.title, "Groceries");
        assert_eq!(txn.amount, -1200.0);
        assert_eq!(txn.category, Category::Food);
        assert_eq!(txn.note, "weekly");
        assert_eq!(txn.tags, vec!["home".to_string(), "weekly".to_string()]);
        assert_eq!(txn.date, date);
    }

    fn ledger() -> Vec<Transaction> {
        [
            RawTransaction::new("Monthly Salary", 5000.0).with_category("Income"),
            RawTransaction::new("Grocery run", -120.0).with_category("Food"),
            RawTransaction::new("Train to Pune", -300.0).with_category("Travel"),
            RawTransaction::new("GROCERY top-up", -30.0).with_category("Food"),
        ]
        .into_iter()
        .map(|raw| TransactionService::normalize(&owner(), raw, fixed_now()).unwrap())
        .collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let ledger = ledger();
        assert_eq!(TransactionService::filter(&ledger, None, ""), ledger);
        assert_eq!(TransactionService::filter(&ledger, None, "   "), ledger);
    }

    #[test]
    fn category_filter_matches_exactly() {
        let food = TransactionService::filter(&ledger(), Some(Category::Food), "");
        assert_eq!(food.len(), 2);
        assert!(food.iter().all(|txn| txn.category == Category::Food));
        assert!(TransactionService::filter(&ledger(), Some(Category::Bills), "").is_empty());
    }

    #[test]
    fn title_search_ignores_case() {
        let titles: Vec<String> = TransactionService::filter(&ledger(), None, "gRoCeRy")
            .into_iter()
            .map(|txn| txn.title)
            .collect();
        assert_eq!(titles, vec!["Grocery run", "GROCERY top-up"]);
    }

    #[test]
    fn category_and_search_must_both_match() {
        let hits = TransactionService::filter(&ledger(), Some(Category::Travel), "grocery");
        assert!(hits.is_empty());
        let hits = TransactionService::filter(&ledger(), Some(Category::Food), "top");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].amount, -30.0);
    }
}
