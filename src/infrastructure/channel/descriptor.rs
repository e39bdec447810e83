use crate::domain::value_objects::OrderStatus;
use serde_json::Value;

/// 渠道描述符，声明一个渠道的请求字段映射、签名方案与应答解析规则。
/// 新增渠道只需提供一份描述符，无需新的适配器代码。
pub struct ChannelDescriptor {
    /// 渠道名（与渠道目录的项目名一致）
    pub name: &'static str,

    /// 出站请求的字段映射
    pub request: RequestSpec,

    /// 签名方案
    pub signing: SigningSpec,

    /// 应答解析规则
    pub reply: ReplySpec,
}

/// 出站请求字段映射
pub struct RequestSpec {
    /// 商户号参数名
    pub merchant_field: &'static str,

    /// 订单号参数名
    pub order_field: &'static str,

    /// 签名参数名
    pub sign_field: &'static str,

    /// 渠道要求的固定附加参数
    pub extra_params: &'static [(&'static str, &'static str)],
}

/// 签名方案
pub enum SigningSpec {
    /// 按渠道文档顺序取各参数值直接拼接，末尾拼接密钥后摘要
    Concat {
        order: &'static [&'static str],
        algo: HashAlgo,
    },

    /// 参数按名称升序排列成 k=v&k=v，末尾拼 &key=密钥后摘要
    SortedQuery {
        algo: HashAlgo,
        include_empty: bool,
    },
}

/// 摘要算法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgo {
    Md5,
    Sha256,
}

/// 应答解析规则，取值路径均为 JSON Pointer
pub struct ReplySpec {
    /// 成功标记字段路径
    pub success_marker_path: &'static str,

    /// 成功标记的期望值
    pub success_marker: SuccessMarker,

    /// 渠道错误文案字段路径
    pub message_path: &'static str,

    /// 渠道原生订单状态字段路径
    pub status_path: &'static str,

    /// 原生状态到规范状态的映射表，未收录的状态一律归为处理中
    pub status_map: &'static [(&'static str, OrderStatus)],

    /// 渠道侧订单号路径，渠道应答未包含时为 None
    pub channel_order_no_path: Option<&'static str>,

    /// 渠道应答时间路径
    pub reply_date_path: Option<&'static str>,

    /// 渠道手续费路径
    pub fee_path: Option<&'static str>,

    /// 手续费的金额单位
    pub fee_unit: AmountUnit,

    /// 订单金额路径
    pub order_amount_path: Option<&'static str>,

    /// 订单金额的金额单位
    pub order_amount_unit: AmountUnit,
}

impl ReplySpec {
    /// 原生状态查表，查不到时返回处理中而非终态
    pub fn map_status(&self, native: &str) -> OrderStatus {
        self.status_map
            .iter()
            .find(|(code, _)| *code == native)
            .map(|(_, status)| *status)
            .unwrap_or(OrderStatus::Processing)
    }
}

/// 成功标记匹配规则
pub enum SuccessMarker {
    /// 标记字段为数值且等于期望值
    NumberEquals(i64),

    /// 标记字段为字符串且等于期望值
    StringEquals(&'static str),
}

impl SuccessMarker {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            SuccessMarker::NumberEquals(expected) => value.as_i64() == Some(*expected),
            SuccessMarker::StringEquals(expected) => value.as_str() == Some(*expected),
        }
    }
}

/// 渠道返回金额时使用的单位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountUnit {
    /// 最小货币单位（分）
    Minor,

    /// 主单位（元），换算时乘 100
    Major,
}
