use crate::domain::value_objects::{BookId, UserId};
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// 記録された貸出（台帳の1エントリ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanRecord {
    pub user_id: UserId,
    pub book_id: BookId,
}

/// BookStoreのモック実装
///
/// デモ用の貸出可能性ポリシー：偶数の書籍IDのみ貸出可能。
/// 記録された貸出をインスタンス内の台帳に保持し、テストから検証可能。
pub struct BookStore {
    ledger: Mutex<Vec<LoanRecord>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(Vec::new()),
        }
    }

    /// テスト用に記録済みの貸出を取得
    pub fn recorded_loans(&self) -> Vec<LoanRecord> {
        self.ledger.lock().unwrap().clone()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    /// デモ用のポリシーで貸出可能かチェック（偶数IDのみ可）
    async fn is_available(&self, book_id: BookId) -> Result<bool> {
        Ok(book_id.value() % 2 == 0)
    }

    /// 台帳に貸出を追記する（重複排除は行わない）
    async fn record_loan(&self, user_id: UserId, book_id: BookId) -> Result<bool> {
        let record = LoanRecord { user_id, book_id };
        self.ledger.lock().unwrap().push(record);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // TDD: 貸出可能性ポリシーのテスト
    #[tokio::test]
    async fn test_even_book_is_available() {
        let store = BookStore::new();
        assert!(store.is_available(BookId::new(2)).await.unwrap());
        assert!(store.is_available(BookId::new(100)).await.unwrap());
    }

    #[tokio::test]
    async fn test_odd_book_is_not_available() {
        let store = BookStore::new();
        assert!(!store.is_available(BookId::new(3)).await.unwrap());
        assert!(!store.is_available(BookId::new(5)).await.unwrap());
    }

    // TDD: 台帳のテスト
    #[tokio::test]
    async fn test_record_loan_appends_to_ledger() {
        let store = BookStore::new();
        let user = UserId::new(1);
        let book = BookId::new(2);
        let other_user = UserId::new(42);
        let other_book = BookId::new(10);

        store.record_loan(user, book).await.unwrap();
        store.record_loan(other_user, other_book).await.unwrap();

        let records = store.recorded_loans();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].user_id, user);
        assert_eq!(records[0].book_id, book);
        assert_eq!(records[1].user_id, other_user);
        assert_eq!(records[1].book_id, other_book);
    }

    #[tokio::test]
    async fn test_record_loan_does_not_deduplicate() {
        let store = BookStore::new();
        let user = UserId::new(1);
        let book = BookId::new(2);

        store.record_loan(user, book).await.unwrap();
        store.record_loan(user, book).await.unwrap();

        assert_eq!(store.recorded_loans().len(), 2);
    }

    #[tokio::test]
    async fn test_new_store_has_empty_ledger() {
        let store = BookStore::new();
        assert!(store.recorded_loans().is_empty());
    }
}
