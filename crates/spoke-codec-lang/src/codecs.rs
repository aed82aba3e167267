//! # 数字单词编解码器
//!
//! ## 核心意图（Why）
//! - 每种语言只需提供一张拼写表与一个单词规范化函数，编码、解码、评估三项能力都由
//!   [`word_codec`] 统一生成；
//! - 日语在生成后替换解码槽位，以支持 `use` 解码选项选择读法。
//!
//! ## 行为契约（What）
//! - 内容按单个空格切分，每个单词规范化后查表，任一单词未知即编码失败；
//! - 空内容编码为空序列，空序列解码为空内容；
//! - 解码遇到拼写表之外的数字时报告 `{unknown: n}`。

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use spoke_core::{Opts, SharedCodec, Spoke};

use crate::error::LanguageError;
use crate::phrase::Phrase;
use crate::tables::{self, Spellings};

/// 单词规范化函数。
pub type Normalize = fn(&str) -> String;

/// 返回语言族的全部编解码器。
///
/// 注册顺序：english、haitian creole、klingon、japanese、spanish、ga、hawaiian。
pub fn language_codecs() -> Vec<SharedCodec<Phrase, Vec<i64>>> {
    vec![
        Arc::new(english_codec()),
        Arc::new(haitian_creole_codec()),
        Arc::new(klingon_codec()),
        Arc::new(japanese_codec()),
        Arc::new(spanish_codec()),
        Arc::new(ga_codec()),
        Arc::new(hawaiian_codec()),
    ]
}

/// 英语，大小写不敏感。
pub fn english_codec() -> Spoke<Phrase, Vec<i64>> {
    word_codec("english", &tables::ENGLISH, &[], fold_case)
}

/// 西班牙语，大小写不敏感。
pub fn spanish_codec() -> Spoke<Phrase, Vec<i64>> {
    word_codec("spanish", &tables::SPANISH, &[], fold_case)
}

/// 海地克里奥尔语，大小写不敏感。
pub fn haitian_creole_codec() -> Spoke<Phrase, Vec<i64>> {
    word_codec("haitian creole", &tables::HAITIAN_CREOLE, &[], fold_case)
}

/// 加语（Ga），大小写不敏感。
pub fn ga_codec() -> Spoke<Phrase, Vec<i64>> {
    word_codec("ga", &tables::GA, &[], fold_case)
}

/// 克林贡语：大小写敏感（`Soch` 与 `soch` 不同），`'` 与 `` ` `` 视同 `’`。
pub fn klingon_codec() -> Spoke<Phrase, Vec<i64>> {
    word_codec("klingon", &tables::KLINGON, &[], klingon_word)
}

/// 夏威夷语：`'`、`’` 与 `` ` `` 视同 `῾`，大小写不敏感。
pub fn hawaiian_codec() -> Spoke<Phrase, Vec<i64>> {
    word_codec("hawaiian", &tables::HAWAIIAN, tables::HAWAIIAN_ALIASES, hawaiian_word)
}

/// 日语：可读罗马字（训读、音读）与汉字，解码读法由 `use` 解码选项决定。
pub fn japanese_codec() -> Spoke<Phrase, Vec<i64>> {
    let mut spoke = word_codec(
        "japanese",
        &tables::JAPANESE_COMMON,
        tables::JAPANESE_ALIASES,
        fold_case,
    );
    spoke.set_decoder(|hub: &Vec<i64>, opts: Option<&Opts>| {
        let reading = JapaneseReading::from_opts(opts).unwrap_or_default();
        spell(hub, reading.spellings())
    });
    spoke
}

/// 日语解码读法。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JapaneseReading {
    /// 常用读法（缺省）。
    #[default]
    Common,
    /// 训读。
    Kunyomi,
    /// 训读变体。
    Kunyomi2,
    /// 音读。
    Onyomi,
    /// 音读变体。
    Onyomi2,
    /// 汉字。
    Kanji,
}

impl JapaneseReading {
    /// 由选项值解析，未识别的写法返回 `None`。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "kunyomi" => Some(Self::Kunyomi),
            "kunyomi2" => Some(Self::Kunyomi2),
            "onyomi" => Some(Self::Onyomi),
            "onyomi2" => Some(Self::Onyomi2),
            "kanji" => Some(Self::Kanji),
            _ => None,
        }
    }

    /// 读取 `use` 解码选项；非字符串或未识别的值视为未指定。
    pub fn from_opts(opts: Option<&Opts>) -> Option<Self> {
        match opts?.dec_value("use")? {
            Value::String(s) => Self::parse(s),
            _ => None,
        }
    }

    fn spellings(self) -> &'static Spellings {
        match self {
            Self::Common => &tables::JAPANESE_COMMON,
            Self::Kunyomi => &tables::JAPANESE_KUNYOMI,
            Self::Kunyomi2 => &tables::JAPANESE_KUNYOMI2,
            Self::Onyomi => &tables::JAPANESE_ONYOMI,
            Self::Onyomi2 => &tables::JAPANESE_ONYOMI2,
            Self::Kanji => &tables::JAPANESE_KANJI,
        }
    }
}

/// 由拼写表构造一个语言编解码器。
///
/// `spellings` 的写法与 `aliases` 共同组成可读词表（同形词以 `aliases` 为准）；
/// 词表按 `normalize` 之后的形式比对，因此表中写法应已是规范形式。
pub fn word_codec(
    name: &str,
    spellings: &'static Spellings,
    aliases: &'static [(&'static str, i64)],
    normalize: Normalize,
) -> Spoke<Phrase, Vec<i64>> {
    let words: Arc<HashMap<&'static str, i64>> = Arc::new(
        (0_i64..)
            .zip(spellings.iter().copied())
            .map(|(n, word)| (word, n))
            .chain(aliases.iter().map(|&(word, n)| (word, n)))
            .collect(),
    );
    let known = Arc::clone(&words);

    Spoke::new(name)
        .with_encoder(move |content: &Phrase, _| read(content, &words, normalize))
        .with_decoder(move |hub: &Vec<i64>, _| spell(hub, spellings))
        .with_evaluator(move |content: &Phrase| {
            content
                .words()
                .all(|word| known.contains_key(normalize(word).as_str()))
        })
}

fn read(
    content: &Phrase,
    words: &HashMap<&'static str, i64>,
    normalize: Normalize,
) -> Result<Vec<i64>, LanguageError> {
    if content.is_empty() {
        return Ok(Vec::new());
    }
    content
        .words()
        .map(|word| {
            let word = normalize(word);
            words
                .get(word.as_str())
                .copied()
                .ok_or(LanguageError::UnknownWord { word })
        })
        .collect()
}

fn spell(hub: &[i64], spellings: &Spellings) -> Result<Phrase, LanguageError> {
    let words = hub
        .iter()
        .map(|&number| {
            usize::try_from(number)
                .ok()
                .and_then(|i| spellings.get(i).copied())
                .ok_or(LanguageError::UnknownNumber { number })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Phrase::from(words.join(" ")))
}

fn fold_case(word: &str) -> String {
    word.trim().to_lowercase()
}

fn klingon_word(word: &str) -> String {
    word.trim().replace(['\'', '`'], "’")
}

fn hawaiian_word(word: &str) -> String {
    word.trim().replace(['\'', '’', '`'], "῾").to_lowercase()
}
