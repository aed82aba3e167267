use spoke_core::{Interpreter, Opts};

use crate::codecs::base_codecs;
use crate::error::BaseError;
use crate::numeral::Numeral;

/// 规范化进制名称：去除首尾空白与内部空格并转小写，纯整数写法补全为 `base{n}`。
///
/// `"Base 10"` → `"base10"`，`" 16 "` → `"base16"`，`"-10"` → `"base-10"`（不会命中任何编解码器）。
pub fn base_name(input: &str) -> String {
    let name = input.trim().replace(' ', "").to_lowercase();
    match name.parse::<i64>() {
        Ok(n) => format!("base{n}"),
        Err(_) => name,
    }
}

/// 面向人类输入的进制换算前端。
///
/// # 教案式注释
/// - **意图 (Why)**：引擎的名称查找大小写敏感、精确匹配，而人们习惯写 `"Base 10"`、`"Hex"`、`"2"`；
///   本类型在引擎之前补上一层名称规范化；
/// - **契约 (What)**：先校验目标再校验源，未知名称以调用方的原始写法报告
///   （`unknown base [ -10 ]`）；其余失败原样来自引擎或编解码器；
/// - **风险 (Trade-offs)**：规范化会吞掉部分拼写差异，如 `"h e x"` 也会被识别为 `hex`。
#[derive(Clone, Debug)]
pub struct BaseTranslator {
    bases: Interpreter<Numeral, i64>,
}

impl BaseTranslator {
    /// 以完整的进制族构造。
    pub fn new() -> Result<Self, BaseError> {
        Ok(Self {
            bases: Interpreter::new(base_codecs())?,
        })
    }

    /// 将 `original` 进制书写的 `numeral` 改写为 `requested` 进制。
    pub fn display_in(
        &self,
        requested: &str,
        original: &str,
        numeral: &str,
        opts: Option<&Opts>,
    ) -> Result<String, BaseError> {
        let destination = base_name(requested);
        let origin = base_name(original);

        if !self.bases.knows(&destination) {
            return Err(BaseError::UnknownBase {
                input: requested.to_owned(),
            });
        }
        if !self.bases.knows(&origin) {
            return Err(BaseError::UnknownBase {
                input: original.to_owned(),
            });
        }

        tracing::trace!(%origin, %destination, "converting numeral");
        let converted = self
            .bases
            .to(&destination, &origin, &Numeral::from(numeral), opts)?;
        Ok(converted.into_inner())
    }

    /// 底层引擎。
    pub fn interpreter(&self) -> &Interpreter<Numeral, i64> {
        &self.bases
    }
}
