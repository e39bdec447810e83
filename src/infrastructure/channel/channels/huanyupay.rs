use crate::domain::value_objects::OrderStatus;
use crate::infrastructure::channel::descriptor::{
    AmountUnit, ChannelDescriptor, HashAlgo, ReplySpec, RequestSpec, SigningSpec, SuccessMarker,
};

/// huanyupay 代付查单。
/// 签名为商户号、订单号、密钥的顺序拼接后取 MD5；
/// 应答为扁平 JSON，Success 为 1 时有效，status 给出订单状态，
/// 金额以元为单位，应答不含渠道单号与应答时间。
pub static DESCRIPTOR: ChannelDescriptor = ChannelDescriptor {
    name: "huanyupay",
    request: RequestSpec {
        merchant_field: "merNo",
        order_field: "tradeNo",
        sign_field: "sign",
        extra_params: &[],
    },
    signing: SigningSpec::Concat {
        order: &["merNo", "tradeNo"],
        algo: HashAlgo::Md5,
    },
    reply: ReplySpec {
        success_marker_path: "/Success",
        success_marker: SuccessMarker::NumberEquals(1),
        message_path: "/Message",
        status_path: "/status",
        status_map: &[
            ("1", OrderStatus::Success),
            ("-1", OrderStatus::Failed),
            ("-2", OrderStatus::Failed),
        ],
        channel_order_no_path: None,
        reply_date_path: None,
        fee_path: None,
        fee_unit: AmountUnit::Minor,
        order_amount_path: Some("/orderAmount"),
        order_amount_unit: AmountUnit::Major,
    },
};
