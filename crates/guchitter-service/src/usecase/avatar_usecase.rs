//! Avatar 用例

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::error::Result;
use crate::models::{Avatar, NewAvatar, TimeRange};
use crate::repository::AvatarRepositoryTrait;

/// Avatar 用例接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvatarUseCaseTrait: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Avatar>>;
    async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Avatar>>;
    async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Avatar>>;
    async fn create(&self, avatar: NewAvatar) -> Result<Avatar>;
    async fn delete_by_id(&self, avatar_id: i64) -> Result<()>;
}

pub struct AvatarUseCase<R>
where
    R: AvatarRepositoryTrait,
{
    repo: Arc<R>,
}

impl<R> AvatarUseCase<R>
where
    R: AvatarRepositoryTrait,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> AvatarUseCaseTrait for AvatarUseCase<R>
where
    R: AvatarRepositoryTrait + 'static,
{
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Avatar>> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Avatar>> {
        self.repo.find_by_owner_id(avatar_id).await
    }

    #[instrument(skip(self))]
    async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Avatar>> {
        self.repo.find_between_timestamp(range).await
    }

    #[instrument(skip(self, avatar), fields(avatar_id = avatar.avatar_id))]
    async fn create(&self, avatar: NewAvatar) -> Result<Avatar> {
        self.repo.create(avatar).await
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, avatar_id: i64) -> Result<()> {
        self.repo.delete_by_id(avatar_id).await
    }
}
