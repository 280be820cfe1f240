//! 愚痴用例
//!
//! 处理器与仓储之间的注入点，逐一转发，不做额外校验或错误转换。

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::error::Result;
use crate::models::{Complaint, NewComplaint, TimeRange};
use crate::repository::ComplaintRepositoryTrait;

/// 愚痴用例接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintUseCaseTrait: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Complaint>>;
    async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Complaint>>;
    async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Complaint>>;
    async fn create(&self, complaint: NewComplaint) -> Result<Complaint>;
    async fn delete_by_id(&self, complaint_id: i64) -> Result<()>;
}

/// 愚痴用例
pub struct ComplaintUseCase<R>
where
    R: ComplaintRepositoryTrait,
{
    repo: Arc<R>,
}

impl<R> ComplaintUseCase<R>
where
    R: ComplaintRepositoryTrait,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ComplaintUseCaseTrait for ComplaintUseCase<R>
where
    R: ComplaintRepositoryTrait + 'static,
{
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Complaint>> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Complaint>> {
        self.repo.find_by_owner_id(avatar_id).await
    }

    #[instrument(skip(self))]
    async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Complaint>> {
        self.repo.find_between_timestamp(range).await
    }

    #[instrument(skip(self, complaint), fields(avatar_id = complaint.avatar_id))]
    async fn create(&self, complaint: NewComplaint) -> Result<Complaint> {
        self.repo.create(complaint).await
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, complaint_id: i64) -> Result<()> {
        self.repo.delete_by_id(complaint_id).await
    }
}
