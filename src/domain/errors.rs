use thiserror::Error;

/// 渠道查单错误分类，code 用于对外返回稳定错误码
#[derive(Error, Debug)]
pub enum ChannelError {
    /// 请求参数或渠道配置非法
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// 渠道网络请求失败（超时、连接失败等）
    #[error("Channel transport error: {0}")]
    Transport(String),

    /// 渠道返回了非 200 的 HTTP 状态码
    #[error("Error HTTP Status: {0}")]
    InvalidStatusCode(u16),

    /// 渠道应答无法解码或业务层面拒绝
    #[error("Channel reply error: {0}")]
    ChannelReply(String),

    /// 其余未分类异常
    #[error("General exception: {0}")]
    General(String),
}

impl ChannelError {
    /// 稳定错误码，调用方据此分支而不必解析错误文案
    pub fn code(&self) -> &'static str {
        match self {
            ChannelError::InvalidParameter(_) => "INVALID_PARAMETER",
            ChannelError::Transport(_) => "SERVICE_RESPONSE_ERROR",
            ChannelError::InvalidStatusCode(_) => "INVALID_STATUS_CODE",
            ChannelError::ChannelReply(_) => "CHANNEL_REPLY_ERROR",
            ChannelError::General(_) => "GENERAL_EXCEPTION",
        }
    }
}

impl From<reqwest::Error> for ChannelError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChannelError::Transport(format!("request timed out: {err}"))
        } else if err.is_connect() {
            ChannelError::Transport(format!("connection failed: {err}"))
        } else {
            ChannelError::Transport(err.to_string())
        }
    }
}

impl From<sqlx::Error> for ChannelError {
    fn from(err: sqlx::Error) -> Self {
        ChannelError::General(format!("database error: {err}"))
    }
}

pub type ChannelResult<T> = Result<T, ChannelError>;
