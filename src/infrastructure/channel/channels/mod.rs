pub mod huanyupay;
pub mod zhiyuanpay;

use crate::infrastructure::channel::descriptor::ChannelDescriptor;

static ALL: [&ChannelDescriptor; 2] = [&huanyupay::DESCRIPTOR, &zhiyuanpay::DESCRIPTOR];

/// 全部内置渠道描述符
pub fn all() -> impl Iterator<Item = &'static ChannelDescriptor> {
    ALL.iter().copied()
}
