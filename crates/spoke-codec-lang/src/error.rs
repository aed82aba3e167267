use spoke_core::TranslateError;
use thiserror::Error;

/// 语言编解码族的错误域。
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LanguageError {
    /// 词表中没有该单词（报告规范化后的写法）。
    #[error("unknown word: '{word}'")]
    UnknownWord {
        /// 规范化后的单词。
        word: String,
    },

    /// 目标语言无法拼写该数字。
    #[error("{{unknown: {number}}}")]
    UnknownNumber {
        /// 无法拼写的数字。
        number: i64,
    },

    /// 请求了未注册的语言。
    #[error("unknown language [ {input} ]")]
    UnknownLanguage {
        /// 调用方给出的原始写法。
        input: String,
    },

    /// 没有任何语言能够读取该内容。
    #[error("no available interpreter for \"{content}\"")]
    NoInterpreter {
        /// 原始内容。
        content: String,
    },

    /// 引擎层面的失败。
    #[error(transparent)]
    Translate(#[from] TranslateError),
}
