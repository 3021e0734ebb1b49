use crate::domain::value_objects::{BookId, UserId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書庫ポート
///
/// 貸出コンテキストと在庫管理コンテキストの境界を維持する。
/// 貸出コンテキストはBookIDのみを知り、書籍詳細は知らない。
#[async_trait]
pub trait BookStore: Send + Sync {
    /// 書籍が貸出可能か確認する
    ///
    /// ビジネスルール: 貸出不可の書籍は貸し出せない。
    async fn is_available(&self, book_id: BookId) -> Result<bool>;

    /// 貸出を記録する
    ///
    /// 呼び出しごとに1件記録される（重複排除は行わない）。
    /// 戻り値は記録の成否を示すが、現時点で呼び出し側は使用しない。
    async fn record_loan(&self, user_id: UserId, book_id: BookId) -> Result<bool>;
}
