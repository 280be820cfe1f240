//! 内存仓储
//!
//! 仓储接口的进程内实现，用于测试与本地演示。
//! 每个实例独占自己的数据，读写都经过 `RwLock`。

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use parking_lot::RwLock;

use super::traits::{AvatarRepositoryTrait, ComplaintRepositoryTrait};
use crate::error::{Result, ServiceError};
use crate::models::{Avatar, Complaint, NewAvatar, NewComplaint, TimeRange};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// 内存愚痴仓储
#[derive(Default)]
pub struct InMemoryComplaintRepository {
    rows: RwLock<Vec<Complaint>>,
}

impl InMemoryComplaintRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定数据初始化；未带 last_update 的记录取当前时间
    pub fn with_complaints(complaints: impl IntoIterator<Item = Complaint>) -> Self {
        let repo = Self::new();
        for complaint in complaints {
            repo.seed(complaint);
        }
        repo
    }

    /// 直接写入一条完整记录（保留给定的 id 与时间戳）
    pub fn seed(&self, mut complaint: Complaint) {
        complaint.last_update.get_or_insert_with(now);
        let mut rows = self.rows.write();
        rows.retain(|c| c.complaint_id != complaint.complaint_id);
        rows.push(complaint);
        rows.sort_by_key(|c| c.complaint_id);
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl ComplaintRepositoryTrait for InMemoryComplaintRepository {
    async fn find_all(&self) -> Result<Vec<Complaint>> {
        Ok(self.rows.read().clone())
    }

    async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Complaint>> {
        Ok(self
            .rows
            .read()
            .iter()
            .find(|c| c.avatar_id == avatar_id)
            .cloned())
    }

    async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Complaint>> {
        Ok(self
            .rows
            .read()
            .iter()
            .filter(|c| c.last_update.is_some_and(|ts| range.contains(ts)))
            .cloned()
            .collect())
    }

    async fn create(&self, complaint: NewComplaint) -> Result<Complaint> {
        let mut rows = self.rows.write();
        let next_id = rows
            .iter()
            .map(|c| c.complaint_id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| ServiceError::Internal("complaint_id 溢出".to_string()))?;

        let created = complaint.into_complaint(next_id, now());
        rows.push(created.clone());
        Ok(created)
    }

    async fn delete_by_id(&self, complaint_id: i64) -> Result<()> {
        self.rows.write().retain(|c| c.complaint_id != complaint_id);
        Ok(())
    }
}

/// 内存 Avatar 仓储
#[derive(Default)]
pub struct InMemoryAvatarRepository {
    rows: RwLock<Vec<Avatar>>,
}

impl InMemoryAvatarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_avatars(avatars: impl IntoIterator<Item = Avatar>) -> Self {
        let repo = Self::new();
        for avatar in avatars {
            repo.seed(avatar);
        }
        repo
    }

    pub fn seed(&self, mut avatar: Avatar) {
        avatar.last_update.get_or_insert_with(now);
        let mut rows = self.rows.write();
        rows.retain(|a| a.avatar_id != avatar.avatar_id);
        rows.push(avatar);
        rows.sort_by_key(|a| a.avatar_id);
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl AvatarRepositoryTrait for InMemoryAvatarRepository {
    async fn find_all(&self) -> Result<Vec<Avatar>> {
        Ok(self.rows.read().clone())
    }

    async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Avatar>> {
        Ok(self
            .rows
            .read()
            .iter()
            .find(|a| a.avatar_id == avatar_id)
            .cloned())
    }

    async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Avatar>> {
        Ok(self
            .rows
            .read()
            .iter()
            .filter(|a| a.last_update.is_some_and(|ts| range.contains(ts)))
            .cloned()
            .collect())
    }

    /// 与主键约束一致：重复 id 视为存储错误
    async fn create(&self, avatar: NewAvatar) -> Result<Avatar> {
        let mut rows = self.rows.write();
        if rows.iter().any(|a| a.avatar_id == avatar.avatar_id) {
            return Err(ServiceError::Internal(format!(
                "avatar_id 重复: {}",
                avatar.avatar_id
            )));
        }

        let created = avatar.into_avatar(now());
        rows.push(created.clone());
        rows.sort_by_key(|a| a.avatar_id);
        Ok(created)
    }

    async fn delete_by_id(&self, avatar_id: i64) -> Result<()> {
        self.rows.write().retain(|a| a.avatar_id != avatar_id);
        Ok(())
    }
}
