use std::fmt;

/// 语言族的内容类型：以单个空格分隔的数字单词序列。
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Phrase(String);

impl Phrase {
    /// 包装一段文本。
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// 原始文本。
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否为空串。
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 按单个空格切分；连续空格会产生空单词。
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split(' ')
    }

    /// 取出原始文本。
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Phrase {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Phrase {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
