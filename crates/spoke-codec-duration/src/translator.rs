use spoke_core::{Interpreter, Opts};

use crate::codecs::duration_codecs;
use crate::error::DurationError;
use crate::hub::DurationHub;
use crate::value::DurationValue;

/// 自动探测输入格式的时长改写前端。
///
/// # 教案式注释
/// - **意图 (Why)**：人们给出时长时通常不会说明格式，调用方只应关心“要显示成什么样”；
/// - **契约 (What)**：目标格式名称先去除首尾空白并转小写；未知目标以原始写法报告；
///   源格式取 `origins` 的第一个结果，无人认领时报告 `no available interpreter`；
/// - **风险 (Trade-offs)**：同时满足多种格式的内容按注册顺序择一解读，不会提示歧义。
#[derive(Clone, Debug)]
pub struct DurationTranslator {
    formats: Interpreter<DurationValue, DurationHub>,
}

impl DurationTranslator {
    /// 以完整的时长族构造。
    pub fn new() -> Result<Self, DurationError> {
        Ok(Self {
            formats: Interpreter::new(duration_codecs()?)?,
        })
    }

    /// 将 `value` 改写为 `format` 格式。
    pub fn display_in(
        &self,
        format: &str,
        value: &str,
        opts: Option<&Opts>,
    ) -> Result<String, DurationError> {
        let destination = format.trim().to_lowercase();
        if !self.formats.knows(&destination) {
            return Err(DurationError::UnknownFormat {
                input: format.to_owned(),
            });
        }

        let content = DurationValue::from(value);
        let origin = self.detect(&content)?;
        tracing::trace!(origin, %destination, "reformatting duration");
        let shown = self.formats.to(&destination, origin, &content, opts)?;
        Ok(shown.into_inner())
    }

    /// 返回首个能够读取 `content` 的格式名称。
    pub fn detect(&self, content: &DurationValue) -> Result<&str, DurationError> {
        self.formats
            .origins(std::slice::from_ref(content))
            .first()
            .copied()
            .ok_or_else(|| DurationError::NoInterpreter {
                content: content.as_str().to_owned(),
            })
    }

    /// 底层引擎。
    pub fn interpreter(&self) -> &Interpreter<DurationValue, DurationHub> {
        &self.formats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_the_first_matching_format() {
        let t = DurationTranslator::new().expect("应可构造");
        assert_eq!(t.detect(&"1:2:3 or 4 min".into()).expect("应可识别"), "hh:mm:ss");
        assert_eq!(t.detect(&"4 min".into()).expect("应可识别"), "minutes");
    }

    #[test]
    fn format_names_are_trimmed_and_lowercased() {
        let t = DurationTranslator::new().expect("应可构造");
        assert_eq!(t.display_in("  HHMMSS ", "90 min", None).expect("应可改写"), "1hh 30mm 0ss");
        let err = t.display_in("fortnights", "90 min", None).expect_err("未知格式");
        assert_eq!(err.to_string(), "unknown format [ fortnights ]");
    }
}
