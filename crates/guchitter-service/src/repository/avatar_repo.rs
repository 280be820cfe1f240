//! Avatar 仓储（PostgreSQL）

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::traits::AvatarRepositoryTrait;
use crate::error::Result;
use crate::models::{Avatar, NewAvatar, TimeRange};

/// Avatar 仓储
pub struct AvatarRepository {
    pool: PgPool,
}

impl AvatarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Avatar>> {
        let avatars = sqlx::query_as::<_, Avatar>(
            r#"
            SELECT avatar_id, avatar_name, avatar_text, image_url, color, last_update
            FROM avatars
            ORDER BY avatar_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(avatars)
    }

    pub async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Avatar>> {
        let avatar = sqlx::query_as::<_, Avatar>(
            r#"
            SELECT avatar_id, avatar_name, avatar_text, image_url, color, last_update
            FROM avatars
            WHERE avatar_id = $1
            "#,
        )
        .bind(avatar_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(avatar)
    }

    pub async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Avatar>> {
        let avatars = sqlx::query_as::<_, Avatar>(
            r#"
            SELECT avatar_id, avatar_name, avatar_text, image_url, color, last_update
            FROM avatars
            WHERE ($1::timestamp IS NULL OR last_update >= $1)
              AND ($2::timestamp IS NULL OR last_update <= $2)
            ORDER BY avatar_id ASC
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .fetch_all(&self.pool)
        .await?;

        Ok(avatars)
    }

    /// 新建 Avatar，avatar_id 沿用客户端给出的值；重复 id 由主键约束拒绝
    pub async fn create(&self, avatar: NewAvatar) -> Result<Avatar> {
        let created = sqlx::query_as::<_, Avatar>(
            r#"
            INSERT INTO avatars (avatar_id, avatar_name, avatar_text, image_url, color)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING avatar_id, avatar_name, avatar_text, image_url, color, last_update
            "#,
        )
        .bind(avatar.avatar_id)
        .bind(&avatar.avatar_name)
        .bind(&avatar.avatar_text)
        .bind(&avatar.image_url)
        .bind(&avatar.color)
        .fetch_one(&self.pool)
        .await?;

        debug!(avatar = ?created, "Avatar inserted");

        Ok(created)
    }

    pub async fn delete_by_id(&self, avatar_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM avatars WHERE avatar_id = $1")
            .bind(avatar_id)
            .execute(&self.pool)
            .await?;

        debug!(
            avatar_id,
            rows_affected = result.rows_affected(),
            "Avatar delete executed"
        );

        Ok(())
    }
}

#[async_trait]
impl AvatarRepositoryTrait for AvatarRepository {
    async fn find_all(&self) -> Result<Vec<Avatar>> {
        self.find_all().await
    }

    async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Avatar>> {
        self.find_by_owner_id(avatar_id).await
    }

    async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Avatar>> {
        self.find_between_timestamp(range).await
    }

    async fn create(&self, avatar: NewAvatar) -> Result<Avatar> {
        self.create(avatar).await
    }

    async fn delete_by_id(&self, avatar_id: i64) -> Result<()> {
        self.delete_by_id(avatar_id).await
    }
}
