use serde::{Deserialize, Serialize};

use super::{BookId, UserId};

/// コマンド：貸出を申請する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLoan {
    pub user_id: UserId,
    pub book_id: BookId,
}
