//! 愚痴（Complaint）实体

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 愚痴
///
/// `complaint_id` 由存储层分配；`avatar_id` 指向发帖身份，但不强制外键约束。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub complaint_id: i64,
    pub complaint_text: String,
    pub avatar_id: i64,
    /// 由存储层维护，不对外序列化
    #[serde(skip)]
    #[sqlx(default)]
    pub last_update: Option<NaiveDateTime>,
}

/// 新建愚痴的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComplaint {
    pub complaint_text: String,
    pub avatar_id: i64,
}

impl NewComplaint {
    pub fn new(complaint_text: impl Into<String>, avatar_id: i64) -> Self {
        Self {
            complaint_text: complaint_text.into(),
            avatar_id,
        }
    }

    /// 以存储层分配的 id 和时间戳落成实体
    pub fn into_complaint(self, complaint_id: i64, last_update: NaiveDateTime) -> Complaint {
        Complaint {
            complaint_id,
            complaint_text: self.complaint_text,
            avatar_id: self.avatar_id,
            last_update: Some(last_update),
        }
    }
}
