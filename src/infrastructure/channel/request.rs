use crate::domain::entities::ChannelConfig;
use crate::domain::errors::ChannelResult;
use crate::infrastructure::channel::descriptor::ChannelDescriptor;
use crate::infrastructure::channel::signer::{self, SignaturePayload};
use crate::ports::channel_query_port::OrderQueryRequest;

/// 已签名的出站请求
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub url: String,
    pub form: SignaturePayload,
}

/// 按渠道描述符把规范请求映射为渠道参数并附加签名，不修改入参
pub fn build(
    request: &OrderQueryRequest,
    config: &ChannelConfig,
    descriptor: &ChannelDescriptor,
) -> ChannelResult<SignedRequest> {
    let mut form = SignaturePayload::new();
    form.set(descriptor.request.merchant_field, config.merchant_id.clone());
    form.set(descriptor.request.order_field, request.order_no.clone());
    for (name, value) in descriptor.request.extra_params.iter().copied() {
        form.set(name, value);
    }

    // 签名基于不含签名参数的载荷计算
    let signature = signer::sign(&form, &config.merchant_key, &descriptor.signing)?;
    form.set(descriptor.request.sign_field, signature);

    Ok(SignedRequest {
        url: config.query_url.clone(),
        form,
    })
}
