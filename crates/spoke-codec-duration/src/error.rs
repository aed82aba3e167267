use spoke_core::TranslateError;
use thiserror::Error;

/// 时长编解码族的错误域。
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DurationError {
    /// 内容不符合编解码器的格式。
    #[error("could not parse -- {input}")]
    Unparsable {
        /// 原始内容。
        input: String,
    },

    /// 请求了未注册的格式名称。
    #[error("unknown format [ {input} ]")]
    UnknownFormat {
        /// 调用方给出的原始写法。
        input: String,
    },

    /// 没有任何格式能够读取该内容。
    #[error("no available interpreter for \"{content}\"")]
    NoInterpreter {
        /// 原始内容。
        content: String,
    },

    /// 内置格式的正则无法编译。
    #[error("invalid duration pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// 引擎层面的失败。
    #[error(transparent)]
    Translate(#[from] TranslateError),
}
