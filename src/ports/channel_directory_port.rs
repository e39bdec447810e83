use crate::domain::entities::ChannelConfig;
use crate::domain::errors::ChannelResult;
use async_trait::async_trait;

/// 渠道目录端口，按项目名解析渠道配置
#[async_trait]
pub trait ChannelDirectoryPort: Send + Sync {
    /// 查找项目对应的渠道配置，未配置时返回 None
    async fn get_channel_config(&self, project_name: &str) -> ChannelResult<Option<ChannelConfig>>;
}
