//! 三种时长书写格式的编解码器。
//!
//! 注册顺序：`hh:mm:ss`、`hhmmss`、`minutes`。自动探测取第一个命中的格式，
//! 因此顺序决定了歧义内容的解读方式。

use std::sync::Arc;

use regex::{Captures, Regex};
use serde_json::Value;
use spoke_core::{Opts, SharedCodec, Spoke};

use crate::error::DurationError;
use crate::hub::{DurationHub, DurationParams};
use crate::value::DurationValue;

const COLON_PATTERN: &str = r"(\d+)\s*:\s*(\d{1,2})\s*:\s*(\d{1,2})";
const HHMMSS_PATTERN: &str = r"(?i)(\d+)\s*hh\s*(\d{1,2})\s*mm\s*(\d{1,2})\s*ss";
const MINUTES_PATTERN: &str = r"(?i)(\d+|\d+\.?\d+)\s*min";

/// `minutes` 解码缺省保留的小数位数。
const DEFAULT_PRECISION: usize = 6;
/// 格式化器可接受的最大精度，超出时按缺省精度处理。
const MAX_PRECISION: u64 = u16::MAX as u64;

/// 返回时长族的全部编解码器。
///
/// # Errors
/// 内置格式的正则无法编译时返回 [`DurationError::Pattern`]。
pub fn duration_codecs() -> Result<Vec<SharedCodec<DurationValue, DurationHub>>, DurationError> {
    Ok(vec![
        Arc::new(colon_codec()?),
        Arc::new(hhmmss_codec()?),
        Arc::new(minutes_codec()?),
    ])
}

/// `hh:mm:ss` 格式，例如 `"01:30:00"`；冒号两侧允许空白。
///
/// 只要时长为正，小时数就取总小时数（可超过 24）。
pub fn colon_codec() -> Result<Spoke<DurationValue, DurationHub>, DurationError> {
    let re = Regex::new(COLON_PATTERN)?;
    Ok(clock_codec("hh:mm:ss", re, |hub| {
        let hours = if hub.total_days() > 0.0 {
            hub.total_hours().floor() as u64
        } else {
            u64::from(hub.hours())
        };
        format!("{hours}:{}:{}", hub.minutes(), hub.seconds())
    }))
}

/// `_hh _mm _ss` 格式，例如 `"1hh 30mm 0ss"`；标记不区分大小写。
///
/// 满一天时小时数取总小时数，否则取小时分量。
pub fn hhmmss_codec() -> Result<Spoke<DurationValue, DurationHub>, DurationError> {
    let re = Regex::new(HHMMSS_PATTERN)?;
    Ok(clock_codec("hhmmss", re, |hub| {
        let hours = if hub.total_days().floor() > 0.0 {
            hub.total_hours().floor() as u64
        } else {
            u64::from(hub.hours())
        };
        format!("{hours}hh {}mm {}ss", hub.minutes(), hub.seconds())
    }))
}

/// 时、分、秒三段式格式共享的骨架：三个捕获组依次为时、分、秒。
fn clock_codec<F>(name: &str, re: Regex, render: F) -> Spoke<DurationValue, DurationHub>
where
    F: Fn(&DurationHub) -> String + Send + Sync + 'static,
{
    let check = re.clone();
    Spoke::new(name)
        .with_encoder(move |content: &DurationValue, _| -> Result<DurationHub, DurationError> {
            let caps = captures(&re, content)?;
            Ok(DurationHub::from(DurationParams {
                h: number(&caps, 1, content)?,
                m: number(&caps, 2, content)?,
                s: number(&caps, 3, content)?,
                ..DurationParams::default()
            }))
        })
        .with_decoder(move |hub: &DurationHub, _| {
            Ok::<_, DurationError>(DurationValue::from(render(hub)))
        })
        .with_evaluator(move |content: &DurationValue| check.is_match(content.as_str()))
}

/// `_ minutes` 格式，例如 `"60 mins"`、`"60.5 minute"`。
///
/// 解码时读取 `precision` 解码选项（不超过 65535 的非负整数）决定小数位数，缺省六位。
pub fn minutes_codec() -> Result<Spoke<DurationValue, DurationHub>, DurationError> {
    let re = Regex::new(MINUTES_PATTERN)?;
    let check = re.clone();
    Ok(Spoke::new("minutes")
        .with_encoder(move |content: &DurationValue, _| -> Result<DurationHub, DurationError> {
            let caps = captures(&re, content)?;
            Ok(DurationHub::from(DurationParams {
                m: number(&caps, 1, content)?,
                ..DurationParams::default()
            }))
        })
        .with_decoder(|hub: &DurationHub, opts: Option<&Opts>| {
            let precision = precision(opts).unwrap_or(DEFAULT_PRECISION);
            Ok::<_, DurationError>(DurationValue::from(format!(
                "{:.precision$} minutes",
                hub.total_minutes()
            )))
        })
        .with_evaluator(move |content: &DurationValue| check.is_match(content.as_str())))
}

fn precision(opts: Option<&Opts>) -> Option<usize> {
    let value = opts?.dec_value("precision")?;
    match value {
        Value::Number(n) => n
            .as_u64()
            .filter(|&p| p <= MAX_PRECISION)
            .and_then(|p| usize::try_from(p).ok()),
        _ => None,
    }
}

fn captures<'a>(re: &Regex, content: &'a DurationValue) -> Result<Captures<'a>, DurationError> {
    re.captures(content.as_str()).ok_or_else(|| unparsable(content))
}

fn number(
    caps: &Captures<'_>,
    group: usize,
    content: &DurationValue,
) -> Result<f64, DurationError> {
    caps.get(group)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .ok_or_else(|| unparsable(content))
}

fn unparsable(content: &DurationValue) -> DurationError {
    DurationError::Unparsable {
        input: content.as_str().to_owned(),
    }
}
