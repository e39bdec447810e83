use crate::domain::errors::{ChannelError, ChannelResult};
use crate::domain::value_objects::{Money, OrderStatus, QueryOutcome};
use crate::infrastructure::channel::descriptor::{AmountUnit, ChannelDescriptor};
use crate::infrastructure::channel::transport::RawReply;
use crate::ports::channel_query_port::{OrderQueryResponse, QueryContext};
use serde_json::Value;
use tracing::{debug, warn};

/// 把渠道原始应答规范化为统一查单应答
pub fn normalize(
    reply: &RawReply,
    descriptor: &ChannelDescriptor,
    ctx: &QueryContext,
) -> ChannelResult<OrderQueryResponse> {
    // 1. 校验 HTTP 状态码
    if reply.status != 200 {
        return Err(ChannelError::InvalidStatusCode(reply.status));
    }

    // 2. 解码 JSON 应答
    let body: Value = serde_json::from_str(&reply.body)
        .map_err(|e| ChannelError::ChannelReply(format!("failed to decode channel reply: {e}")))?;

    // 3. 校验成功标记，失败时带上渠道自己的文案
    let marker_ok = body
        .pointer(descriptor.reply.success_marker_path)
        .map(|value| descriptor.reply.success_marker.matches(value))
        .unwrap_or(false);
    if !marker_ok {
        let message = body
            .pointer(descriptor.reply.message_path)
            .and_then(Value::as_str)
            .unwrap_or("channel reported failure without message");
        warn!(
            trace_id = %ctx.trace_id,
            channel = descriptor.name,
            message = %message,
            "channel rejected the query"
        );
        return Err(ChannelError::ChannelReply(message.to_string()));
    }

    // 4. 原生状态查表，缺字段或未收录一律视为处理中
    let order_status = body
        .pointer(descriptor.reply.status_path)
        .and_then(json_value_code)
        .map(|code| descriptor.reply.map_status(&code))
        .unwrap_or(OrderStatus::Processing);

    // 5. 按描述符声明的路径与单位提取金额
    let channel_fee = extract_amount(&body, descriptor.reply.fee_path, descriptor.reply.fee_unit)?;
    let order_amount = extract_amount(
        &body,
        descriptor.reply.order_amount_path,
        descriptor.reply.order_amount_unit,
    )?;

    debug!(
        trace_id = %ctx.trace_id,
        channel = descriptor.name,
        order_status = %order_status,
        "channel reply normalized"
    );

    // 6. 组装规范应答
    Ok(OrderQueryResponse {
        status: QueryOutcome::Success,
        channel_order_no: extract_string(&body, descriptor.reply.channel_order_no_path),
        order_status,
        channel_reply_date: extract_string(&body, descriptor.reply.reply_date_path),
        channel_fee,
        order_amount,
    })
}

/// 把 JSON 状态值统一转成字符串，数字与字符串形态同等对待
fn json_value_code(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn extract_string(body: &Value, path: Option<&'static str>) -> String {
    path.and_then(|p| body.pointer(p))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// 金额字段缺失或为 null 按零处理，存在但不是数字则判为应答异常
fn extract_amount(
    body: &Value,
    path: Option<&'static str>,
    unit: AmountUnit,
) -> ChannelResult<Money> {
    let path = match path {
        Some(path) => path,
        None => return Ok(Money::zero()),
    };
    let value = match body.pointer(path) {
        None | Some(Value::Null) => return Ok(Money::zero()),
        Some(value) => value,
    };
    let amount = value.as_f64().ok_or_else(|| {
        ChannelError::ChannelReply(format!("non-numeric amount at {path}: {value}"))
    })?;
    match unit {
        AmountUnit::Minor => {
            // 最小货币单位金额必须是整数
            if amount.fract() != 0.0 {
                return Err(ChannelError::ChannelReply(format!(
                    "fractional minor-unit amount at {path}: {amount}"
                )));
            }
            Ok(Money::from_minor_units(amount as i64))
        }
        AmountUnit::Major => Ok(Money::from_major_f64(amount)),
    }
}
