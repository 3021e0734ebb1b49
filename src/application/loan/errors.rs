use thiserror::Error;

/// 貸出承認アプリケーション層のエラー
///
/// 拒否（Unauthorized / Unavailable）は正常系の結果タグであり、ここには含まれない。
/// コラボレーター自体の失敗のみをエラーとして扱う。
#[derive(Debug, Error)]
pub enum LoanApplicationError {
    /// AuthorizationServiceのエラー
    #[error("Authorization service error")]
    AuthorizationServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// BookStoreのエラー
    #[error("Book store error")]
    BookStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LoanApplicationError>;
