#![warn(missing_docs)]

//! `spoke-codec-lang` 提供数字单词编解码族：以 `Vec<i64>` 为枢纽，在多种语言的 0 到 10 之间互译。
//!
//! # 使用概览（How）
//! - [`language_codecs`] 返回全部语言；[`word_codec`] 可用自定义拼写表补充新语言；
//! - [`LanguageTranslator`] 自动识别源语言。
//!
//! # 合约说明（What）
//! - 大多数语言大小写不敏感；克林贡语大小写敏感；
//! - 日语接受 `use` 解码选项：`kunyomi`、`kunyomi2`、`onyomi`、`onyomi2`、`kanji`，
//!   缺省或无法识别时使用常用读法。
//!
//! ```
//! use spoke_codec_lang::{Phrase, language_codecs};
//! use spoke_core::Interpreter;
//!
//! let languages = Interpreter::new(language_codecs()).expect("codec list is valid");
//! let said = languages
//!     .to("haitian creole", "spanish", &Phrase::from("dos cinco uno"), None)
//!     .expect("translate");
//! assert_eq!(said.as_str(), "de senk en");
//! ```

mod codecs;
mod error;
mod phrase;
mod tables;
mod translator;

pub use crate::codecs::{
    JapaneseReading, Normalize, english_codec, ga_codec, haitian_creole_codec, hawaiian_codec,
    japanese_codec, klingon_codec, language_codecs, spanish_codec, word_codec,
};
pub use crate::error::LanguageError;
pub use crate::phrase::Phrase;
pub use crate::tables::Spellings;
pub use crate::translator::LanguageTranslator;
