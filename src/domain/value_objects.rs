use serde::{Deserialize, Serialize};

/// 利用者ID - 利用者管理コンテキストへの参照
///
/// 符号や範囲の検証は行わない。認可判定はポート側の責務。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 書籍ID - 書庫コンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(i64);

impl BookId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 貸出申請の結果タグ
///
/// 呼び出しごとに新しく生成される値であり、どこにも保存されない。
/// 文字列表現は外部から観測されるため固定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanOutcome {
    /// 貸出が承認され、記録された
    Success,
    /// 利用者が認可されていない
    Unauthorized,
    /// 書籍が貸出可能でない
    Unavailable,
}

impl LoanOutcome {
    /// 固定の文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanOutcome::Success => "success",
            LoanOutcome::Unauthorized => "unauthorized",
            LoanOutcome::Unavailable => "unavailable",
        }
    }
}
