use serde::{Deserialize, Serialize};
use std::fmt;

/// 订单状态（渠道无关的统一口径）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// 待处理
    Pending,
    /// 处理中
    Processing,
    /// 成功
    Success,
    /// 失败
    Failed,
    /// 冻结
    Frozen,
}

impl OrderStatus {
    /// 是否为终态（成功或失败）
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Success | OrderStatus::Failed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Success => write!(f, "success"),
            OrderStatus::Failed => write!(f, "failed"),
            OrderStatus::Frozen => write!(f, "frozen"),
        }
    }
}

/// 查询调用本身的结果标志（拿到可解析的渠道回覆即为成功，其余走错误通道）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOutcome {
    Success,
    Failure,
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Success => write!(f, "success"),
            QueryOutcome::Failure => write!(f, "failure"),
        }
    }
}

/// 货币金额（最小单位计，避免浮点数精度问题）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// 金额（最小单位，如分）
    pub amount_minor: i64,
}

impl Money {
    /// 零金额（渠道未回报金额时使用）
    pub fn zero() -> Self {
        Self { amount_minor: 0 }
    }

    /// 以最小单位创建金额
    pub fn from_minor_units(minor: i64) -> Self {
        Self { amount_minor: minor }
    }

    /// 以主单位浮点数创建金额（渠道以元为单位回报时使用）
    pub fn from_major_f64(amount: f64) -> Self {
        Self {
            amount_minor: (amount * 100.0).round() as i64,
        }
    }

    /// 转换为最小单位
    pub fn to_minor_units(&self) -> i64 {
        self.amount_minor
    }

    /// 转换为主单位
    pub fn to_major(&self) -> f64 {
        self.amount_minor as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_major())
    }
}
