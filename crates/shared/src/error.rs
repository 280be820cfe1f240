//! 基础设施错误
//!
//! 配置加载、数据库连接等共享组件的错误类型。

use thiserror::Error;

/// 共享组件错误类型
#[derive(Debug, Error)]
pub enum SharedError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("环境文件错误: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        let err: SharedError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, SharedError::Database(_)));

        let err: SharedError = config::ConfigError::NotFound("server.port".into()).into();
        assert!(matches!(err, SharedError::Config(_)));
        assert!(err.to_string().contains("server.port"));
    }
}
