use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 监听地址
    pub server_host: String,

    /// 监听端口
    pub server_port: u16,

    /// MySQL连接串
    pub database_url: String,

    /// 渠道调用超时（秒）
    pub channel_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            channel_timeout_secs: std::env::var("CHANNEL_TIMEOUT_SECS")
                .ok()
                .and_then(|secs| secs.parse().ok())
                .unwrap_or(20),
        }
    }

    /// 渠道调用超时
    pub fn channel_timeout(&self) -> Duration {
        Duration::from_secs(self.channel_timeout_secs)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_timeout_uses_configured_seconds() {
        let config = AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            database_url: "mysql://localhost/channels".to_string(),
            channel_timeout_secs: 20,
        };

        assert_eq!(config.channel_timeout(), Duration::from_secs(20));
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }
}
