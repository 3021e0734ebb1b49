use crate::domain::value_objects::UserId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 認可サービスポート
///
/// 貸出コンテキストと利用者管理コンテキストの境界を維持する。
/// 貸出コンテキストはUserIDのみを知り、利用者詳細は知らない。
#[async_trait]
pub trait AuthorizationService: Send + Sync {
    /// 利用者が貸出を申請できるか確認する
    ///
    /// ビジネスルール: 認可されていない利用者には貸出不可。
    /// 書庫への問い合わせより前に必ず確認される。
    async fn is_authorized(&self, user_id: UserId) -> Result<bool>;
}
