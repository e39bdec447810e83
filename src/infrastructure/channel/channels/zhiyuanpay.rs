use crate::domain::value_objects::OrderStatus;
use crate::infrastructure::channel::descriptor::{
    AmountUnit, ChannelDescriptor, HashAlgo, ReplySpec, RequestSpec, SigningSpec, SuccessMarker,
};

/// zhiyuanpay 支付查单。
/// 签名为参数按名称升序排列的 k=v 串加 &key=密钥后取 MD5，空值不参与签名；
/// 应答嵌套在 data 节点下，retCode 为 SUCCESS 时有效，
/// state 为 "2" 表示支付成功，cashier 金额以分为单位。
pub static DESCRIPTOR: ChannelDescriptor = ChannelDescriptor {
    name: "zhiyuanpay",
    request: RequestSpec {
        merchant_field: "mchId",
        order_field: "mchOrderNo",
        sign_field: "sign",
        extra_params: &[],
    },
    signing: SigningSpec::SortedQuery {
        algo: HashAlgo::Md5,
        include_empty: false,
    },
    reply: ReplySpec {
        success_marker_path: "/retCode",
        success_marker: SuccessMarker::StringEquals("SUCCESS"),
        message_path: "/retMsg",
        status_path: "/data/state",
        status_map: &[("2", OrderStatus::Success)],
        channel_order_no_path: None,
        reply_date_path: None,
        fee_path: None,
        fee_unit: AmountUnit::Minor,
        order_amount_path: Some("/data/cashier"),
        order_amount_unit: AmountUnit::Minor,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        assert_eq!(DESCRIPTOR.reply.map_status("2"), OrderStatus::Success);
    }

    #[test]
    fn test_undocumented_status_never_reaches_terminal_state() {
        for code in ["0", "1", "3", "99", "SUCCESS", ""] {
            assert_eq!(DESCRIPTOR.reply.map_status(code), OrderStatus::Processing);
        }
    }
}
