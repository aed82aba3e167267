use std::fmt;

/// 进制族的内容类型：某种进制下书写的一个整数。
///
/// 保留调用方给出的原始文本，编码前通过 [`Numeral::normalized`] 统一去除首尾空白并转小写，
/// 因此 `" FF "` 与 `"ff"` 在十六进制下等价。
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Numeral(String);

impl Numeral {
    /// 包装一段文本。
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// 原始文本。
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 编码使用的规范形式。
    pub fn normalized(&self) -> String {
        self.0.trim().to_lowercase()
    }

    /// 取出原始文本。
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Numeral {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Numeral {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 以小写数字输出 `value` 在 `radix` 进制下的写法，负数带 `-` 前缀。
///
/// `radix` 须位于 `2..=36`；超出范围时按 36 截断、低于 2 时按 2 处理。
pub fn to_radix(value: i64, radix: u32) -> String {
    let radix = u64::from(radix.clamp(2, 36));
    let mut rest = value.unsigned_abs();
    if rest == 0 {
        return "0".to_owned();
    }

    let mut digits = Vec::with_capacity(65);
    while rest > 0 {
        digits.push(DIGITS[(rest % radix) as usize]);
        rest /= radix;
    }
    if value < 0 {
        digits.push(b'-');
    }
    digits.iter().rev().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(Numeral::from("  C0FFEE \n").normalized(), "c0ffee");
        assert_eq!(Numeral::from("  C0FFEE ").as_str(), "  C0FFEE ");
    }

    #[test]
    fn formats_edge_values() {
        assert_eq!(to_radix(0, 2), "0");
        assert_eq!(to_radix(-12_632_256, 16), "-c0c0c0");
        assert_eq!(to_radix(35, 36), "z");
        assert_eq!(to_radix(i64::MIN, 2), format!("-1{}", "0".repeat(63)));
        assert_eq!(to_radix(i64::MAX, 16), "7fffffffffffffff");
    }

    proptest! {
        #[test]
        fn prop_formatting_inverts_parsing(value in any::<i64>(), radix in 2_u32..=36) {
            let text = to_radix(value, radix);
            prop_assert_eq!(i64::from_str_radix(&text, radix).expect("输出应可解析"), value);
            prop_assert_eq!(text.to_lowercase(), text);
        }
    }
}
