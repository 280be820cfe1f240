//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use guchitter_shared::database::Database;

use crate::repository::{
    AvatarRepository, ComplaintRepository, InMemoryAvatarRepository, InMemoryComplaintRepository,
};
use crate::usecase::{AvatarUseCase, AvatarUseCaseTrait, ComplaintUseCase, ComplaintUseCaseTrait};

/// Axum 应用共享状态
///
/// 只持有用例句柄，处理器之间没有共享的可变状态
#[derive(Clone)]
pub struct AppState {
    pub complaints: Arc<dyn ComplaintUseCaseTrait>,
    pub avatars: Arc<dyn AvatarUseCaseTrait>,
    /// 就绪检查用；内存存储时为 `None`
    pub database: Option<Database>,
}

impl AppState {
    pub fn new(
        complaints: Arc<dyn ComplaintUseCaseTrait>,
        avatars: Arc<dyn AvatarUseCaseTrait>,
    ) -> Self {
        Self {
            complaints,
            avatars,
            database: None,
        }
    }

    /// PostgreSQL 仓储装配
    pub fn with_database(database: Database) -> Self {
        let pool = database.pool().clone();
        let complaints = ComplaintUseCase::new(Arc::new(ComplaintRepository::new(pool.clone())));
        let avatars = AvatarUseCase::new(Arc::new(AvatarRepository::new(pool)));

        Self {
            complaints: Arc::new(complaints),
            avatars: Arc::new(avatars),
            database: Some(database),
        }
    }

    /// 内存仓储装配
    pub fn in_memory(
        complaints: Arc<InMemoryComplaintRepository>,
        avatars: Arc<InMemoryAvatarRepository>,
    ) -> Self {
        Self::new(
            Arc::new(ComplaintUseCase::new(complaints)),
            Arc::new(AvatarUseCase::new(avatars)),
        )
    }
}
