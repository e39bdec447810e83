use crate::domain::entities::ChannelConfig;
use crate::domain::errors::ChannelResult;
use crate::ports::channel_directory_port::ChannelDirectoryPort;
use async_trait::async_trait;
use sqlx::{MySql, Pool};
use std::sync::Arc;
use tracing::debug;

/// MySQL渠道目录实现
#[derive(Clone)]
pub struct MySqlChannelDirectory {
    pool: Arc<Pool<MySql>>,
}

impl MySqlChannelDirectory {
    pub fn new(pool: Arc<Pool<MySql>>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelDirectoryPort for MySqlChannelDirectory {
    /// 根据项目名查找渠道配置
    async fn get_channel_config(
        &self,
        project_name: &str,
    ) -> ChannelResult<Option<ChannelConfig>> {
        let query = r#"
            SELECT project_name, mer_id, mer_key, pay_query_url
            FROM channels
            WHERE project_name = ?
        "#;

        let result = sqlx::query_as::<_, ChannelRow>(query)
            .bind(project_name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        debug!(
            "Channel config lookup for {}: found={}",
            project_name,
            result.is_some()
        );
        Ok(result.map(|row| row.into_config()))
    }
}

/// 数据库行结构体
#[derive(Debug, sqlx::FromRow)]
struct ChannelRow {
    project_name: String,
    mer_id: String,
    mer_key: String,
    pay_query_url: String,
}

impl ChannelRow {
    fn into_config(self) -> ChannelConfig {
        ChannelConfig::new(
            self.project_name,
            self.mer_id,
            self.mer_key,
            self.pay_query_url,
        )
    }
}
