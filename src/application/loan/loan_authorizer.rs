use crate::domain::commands::RequestLoan;
use crate::domain::value_objects::LoanOutcome;
use crate::ports::*;
use std::sync::Arc;

use super::errors::{LoanApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
///
/// このパターンにより：
/// - すべての依存が明示的
/// - データと振る舞いの分離
/// - テストが明確
#[derive(Clone)]
pub struct ServiceDependencies {
    pub authorization_service: Arc<dyn AuthorizationService>,
    pub book_store: Arc<dyn BookStore>,
}

/// 貸出を申請する（純粋な関数）
///
/// ビジネスルール：
/// - 利用者が認可されていること（未認可の場合、書庫には一切問い合わせない）
/// - 書籍が貸出可能であること
/// - 両方を満たす場合のみ、コマンドの (user_id, book_id) ペアで1回だけ貸出を記録する
///
/// 確認の順序は固定で、満たされない条件が見つかった時点で対応する結果タグを返す。
/// すべての依存が引数として明示的に渡される（関数型の原則）。
///
/// # 冪等性
///
/// **警告**: この関数は冪等ではありません。同一引数での再呼び出しは貸出を再記録します。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `cmd` - 貸出申請コマンド
///
/// # 戻り値
/// 結果タグ（Success / Unauthorized / Unavailable）
///
/// # エラー
/// コラボレーター自体が失敗した場合のみエラーを返す
pub async fn request_loan(deps: &ServiceDependencies, cmd: RequestLoan) -> Result<LoanOutcome> {
    let RequestLoan { user_id, book_id } = cmd;

    // 1. 利用者の認可確認
    let authorized = deps
        .authorization_service
        .is_authorized(user_id)
        .await
        .map_err(LoanApplicationError::AuthorizationServiceError)?;

    if !authorized {
        return Ok(LoanOutcome::Unauthorized);
    }

    // 2. 書籍の貸出可能性確認
    let available = deps
        .book_store
        .is_available(book_id)
        .await
        .map_err(LoanApplicationError::BookStoreError)?;

    if !available {
        return Ok(LoanOutcome::Unavailable);
    }

    // 3. 貸出を記録（戻り値は現時点で使用しない）
    deps.book_store
        .record_loan(user_id, book_id)
        .await
        .map_err(LoanApplicationError::BookStoreError)?;

    tracing::info!("Loan: user={}, book={}", user_id.value(), book_id.value());

    Ok(LoanOutcome::Success)
}
