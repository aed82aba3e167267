use std::num::ParseIntError;

use spoke_core::TranslateError;
use thiserror::Error;

/// 进制编解码族的错误域。
///
/// # 教案式说明
/// - **意图 (Why)**：编解码函数的失败经引擎原样透传，消息需要直接可读；
/// - **契约 (What)**：`InvalidNumber` 保留底层 [`ParseIntError`] 作为 `source`，
///   `Translate` 透明包装引擎错误，使 [`BaseTranslator`](crate::BaseTranslator) 的调用方只面对一个类型。
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// 内容不是给定进制下的合法整数，或超出 64 位范围。
    #[error("invalid base {radix} number [ {input} ]")]
    InvalidNumber {
        /// 期望的进制。
        radix: u32,
        /// 规范化后的输入。
        input: String,
        /// 底层解析错误；一进制校验失败时为空。
        #[source]
        source: Option<ParseIntError>,
    },

    /// 一进制无法表示负数。
    #[error("base 1 can only represent non-negative integers")]
    NegativeUnary,

    /// 一进制输出过长，超出可分配范围。
    #[error("base 1 cannot represent {value}: output too long")]
    UnaryTooLong {
        /// 被拒绝的数值。
        value: i64,
    },

    /// 请求了未注册的进制名称。
    #[error("unknown base [ {input} ]")]
    UnknownBase {
        /// 调用方给出的原始写法。
        input: String,
    },

    /// 引擎层面的失败。
    #[error(transparent)]
    Translate(#[from] TranslateError),
}
