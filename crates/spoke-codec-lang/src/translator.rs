use spoke_core::{Interpreter, Opts};

use crate::codecs::language_codecs;
use crate::error::LanguageError;
use crate::phrase::Phrase;

/// 自动识别源语言的数字翻译前端。
///
/// # 教案式注释
/// - **意图 (Why)**：说话的人不会先声明自己用的是哪种语言，调用方只需指明目标语言；
/// - **契约 (What)**：目标语言名称先去除首尾空白并转小写，未知时以原始写法报告；
///   源语言取 `origins` 的第一个结果，无人认领时报告 `no available interpreter`；
/// - **风险 (Trade-offs)**：同一句话可能被多种语言认领（例如只含汉字的内容），此时按注册顺序择一。
#[derive(Clone, Debug)]
pub struct LanguageTranslator {
    languages: Interpreter<Phrase, Vec<i64>>,
}

impl LanguageTranslator {
    /// 以完整的语言族构造。
    pub fn new() -> Result<Self, LanguageError> {
        Ok(Self {
            languages: Interpreter::new(language_codecs())?,
        })
    }

    /// 用 `language` 说出 `text`。
    pub fn tell_me_in(
        &self,
        language: &str,
        text: &str,
        opts: Option<&Opts>,
    ) -> Result<String, LanguageError> {
        let destination = language.trim().to_lowercase();
        if !self.languages.knows(&destination) {
            return Err(LanguageError::UnknownLanguage {
                input: language.to_owned(),
            });
        }

        let content = Phrase::from(text);
        let origin = self.detect(&content)?;
        tracing::trace!(origin, %destination, "translating number words");
        let said = self.languages.to(&destination, origin, &content, opts)?;
        Ok(said.into_inner())
    }

    /// 返回首个能够读取 `content` 的语言名称。
    pub fn detect(&self, content: &Phrase) -> Result<&str, LanguageError> {
        self.languages
            .origins(std::slice::from_ref(content))
            .first()
            .copied()
            .ok_or_else(|| LanguageError::NoInterpreter {
                content: content.as_str().to_owned(),
            })
    }

    /// 底层引擎。
    pub fn interpreter(&self) -> &Interpreter<Phrase, Vec<i64>> {
        &self.languages
    }
}
