//! 愚痴仓储（PostgreSQL）

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::traits::ComplaintRepositoryTrait;
use crate::error::Result;
use crate::models::{Complaint, NewComplaint, TimeRange};

/// 愚痴仓储
pub struct ComplaintRepository {
    pool: PgPool,
}

impl ComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 列出全部愚痴
    pub async fn find_all(&self) -> Result<Vec<Complaint>> {
        let complaints = sqlx::query_as::<_, Complaint>(
            r#"
            SELECT complaint_id, complaint_text, avatar_id, last_update
            FROM complaints
            ORDER BY complaint_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(complaints)
    }

    /// 按发帖身份查找第一条
    pub async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Complaint>> {
        let complaint = sqlx::query_as::<_, Complaint>(
            r#"
            SELECT complaint_id, complaint_text, avatar_id, last_update
            FROM complaints
            WHERE avatar_id = $1
            ORDER BY complaint_id ASC
            LIMIT 1
            "#,
        )
        .bind(avatar_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(complaint)
    }

    /// 按更新时间区间查找
    pub async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Complaint>> {
        let complaints = sqlx::query_as::<_, Complaint>(
            r#"
            SELECT complaint_id, complaint_text, avatar_id, last_update
            FROM complaints
            WHERE ($1::timestamp IS NULL OR last_update >= $1)
              AND ($2::timestamp IS NULL OR last_update <= $2)
            ORDER BY complaint_id ASC
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .fetch_all(&self.pool)
        .await?;

        Ok(complaints)
    }

    /// 新建愚痴，id 与 last_update 由数据库生成
    pub async fn create(&self, complaint: NewComplaint) -> Result<Complaint> {
        let created = sqlx::query_as::<_, Complaint>(
            r#"
            INSERT INTO complaints (complaint_text, avatar_id)
            VALUES ($1, $2)
            RETURNING complaint_id, complaint_text, avatar_id, last_update
            "#,
        )
        .bind(&complaint.complaint_text)
        .bind(complaint.avatar_id)
        .fetch_one(&self.pool)
        .await?;

        debug!(complaint_id = created.complaint_id, "Complaint inserted");

        Ok(created)
    }

    /// 按 complaint_id 删除
    pub async fn delete_by_id(&self, complaint_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM complaints WHERE complaint_id = $1")
            .bind(complaint_id)
            .execute(&self.pool)
            .await?;

        debug!(
            complaint_id,
            rows_affected = result.rows_affected(),
            "Complaint delete executed"
        );

        Ok(())
    }
}

#[async_trait]
impl ComplaintRepositoryTrait for ComplaintRepository {
    async fn find_all(&self) -> Result<Vec<Complaint>> {
        self.find_all().await
    }

    async fn find_by_owner_id(&self, avatar_id: i64) -> Result<Option<Complaint>> {
        self.find_by_owner_id(avatar_id).await
    }

    async fn find_between_timestamp(&self, range: TimeRange) -> Result<Vec<Complaint>> {
        self.find_between_timestamp(range).await
    }

    async fn create(&self, complaint: NewComplaint) -> Result<Complaint> {
        self.create(complaint).await
    }

    async fn delete_by_id(&self, complaint_id: i64) -> Result<()> {
        self.delete_by_id(complaint_id).await
    }
}
