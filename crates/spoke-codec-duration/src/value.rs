use std::fmt;

/// 时长族的内容类型：一段人类书写的时长文本。
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DurationValue(String);

impl DurationValue {
    /// 包装一段文本。
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// 原始文本。
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 取出原始文本。
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for DurationValue {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for DurationValue {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
