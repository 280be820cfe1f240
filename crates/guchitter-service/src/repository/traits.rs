//! 仓储 Trait 定义
//!
//! 用例层依赖抽象而非具体实现，便于替换为内存实现或 mock

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Avatar, Complaint, NewAvatar, NewComplaint, TimeRange};

/// 愚痴仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintRepositoryTrait: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Complaint>>;
    /// 按发帖身份取第一条（complaint_id 最小者），查无返回 `None`
    async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Complaint>>;
    async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Complaint>>;
    async fn create(&self, complaint: NewComplaint) -> Result<Complaint>;
    /// 删除不存在的 id 不视为错误
    async fn delete_by_id(&self, complaint_id: i64) -> Result<()>;
}

/// Avatar 仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvatarRepositoryTrait: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Avatar>>;
    async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Avatar>>;
    async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Avatar>>;
    async fn create(&self, avatar: NewAvatar) -> Result<Avatar>;
    async fn delete_by_id(&self, avatar_id: i64) -> Result<()>;
}
