//! 进制编解码器的构造函数。
//!
//! 每个进制只构造一个 [`Spoke`]，别名通过 [`Spoke::renamed`] 共享同一组函数槽位。
//! 注册顺序：`base2` 至 `base36`（别名紧随其后），最后是 `base1` 与 `unary`。

use std::sync::Arc;

use spoke_core::{SharedCodec, Spoke};

use crate::error::BaseError;
use crate::numeral::{Numeral, to_radix};

/// 一进制解码输出的最大长度。
const MAX_UNARY_LEN: i64 = 1 << 24;

/// 返回进制族的全部编解码器，每次调用都会新建实例。
pub fn base_codecs() -> Vec<SharedCodec<Numeral, i64>> {
    let mut codecs: Vec<SharedCodec<Numeral, i64>> = Vec::new();
    for radix in 2..=36 {
        let spoke = radix_codec(radix);
        let aliased: Vec<_> = aliases(radix).iter().map(|alias| spoke.renamed(*alias)).collect();
        codecs.push(Arc::new(spoke));
        for alias in aliased {
            codecs.push(Arc::new(alias));
        }
    }

    let unary = unary_codec();
    codecs.push(Arc::new(unary.renamed("base1")));
    codecs.push(Arc::new(unary));
    codecs
}

fn aliases(radix: u32) -> &'static [&'static str] {
    match radix {
        2 => &["binary"],
        10 => &["dec", "decimal"],
        16 => &["hex", "hexadecimal"],
        _ => &[],
    }
}

/// 构造 `base{radix}` 编解码器，`radix` 取值 `2..=36`。
pub fn radix_codec(radix: u32) -> Spoke<Numeral, i64> {
    Spoke::new(format!("base{radix}"))
        .with_encoder(move |content: &Numeral, _| parse(content, radix))
        .with_decoder(move |hub: &i64, _| Ok::<_, BaseError>(Numeral::from(to_radix(*hub, radix))))
        .with_evaluator(move |content: &Numeral| parse(content, radix).is_ok())
}

fn parse(content: &Numeral, radix: u32) -> Result<i64, BaseError> {
    let input = content.normalized();
    i64::from_str_radix(&input, radix).map_err(|source| BaseError::InvalidNumber {
        radix,
        input,
        source: Some(source),
    })
}

/// 构造一进制编解码器（名称 `unary`）：内容只能由 `1` 组成，数值即其长度。
pub fn unary_codec() -> Spoke<Numeral, i64> {
    Spoke::new("unary")
        .with_encoder(|content: &Numeral, _| {
            let input = content.normalized();
            if is_unary(&input) {
                i64::try_from(input.len()).map_err(|_| BaseError::InvalidNumber {
                    radix: 1,
                    input,
                    source: None,
                })
            } else {
                Err(BaseError::InvalidNumber {
                    radix: 1,
                    input,
                    source: None,
                })
            }
        })
        .with_decoder(|hub: &i64, _| match *hub {
            n if n < 0 => Err(BaseError::NegativeUnary),
            n if n > MAX_UNARY_LEN => Err(BaseError::UnaryTooLong { value: n }),
            n => Ok(Numeral::from("1".repeat(n as usize))),
        })
        .with_evaluator(|content: &Numeral| is_unary(&content.normalized()))
}

fn is_unary(input: &str) -> bool {
    input.bytes().all(|b| b == b'1')
}

#[cfg(test)]
mod tests {
    use spoke_core::Codec;

    use super::*;

    fn names() -> Vec<String> {
        base_codecs().iter().map(|c| c.name().to_owned()).collect()
    }

    #[test]
    fn registers_every_radix_with_aliases() {
        let names = names();
        assert_eq!(names.len(), 35 + 5 + 2);
        assert_eq!(&names[..2], ["base2", "binary"]);
        assert_eq!(&names[names.len() - 2..], ["base1", "unary"]);
        for alias in ["dec", "decimal", "hex", "hexadecimal"] {
            assert!(names.iter().any(|n| n == alias), "missing alias {alias}");
        }
        assert!(base_codecs().iter().all(|c| c.is_valid()));
    }

    #[test]
    fn aliases_share_behaviour() {
        let codecs = base_codecs();
        let find = |name: &str| {
            codecs
                .iter()
                .find(|c| c.name() == name)
                .cloned()
                .expect("应已注册")
        };
        let content = Numeral::from(" FF ");
        assert_eq!(find("hex").encode(&content, None).expect("应可编码"), 255);
        assert_eq!(find("base16").encode(&content, None).expect("应可编码"), 255);
        assert!(!find("decimal").evaluate(&content));
    }

    #[test]
    fn radix_codec_accepts_signs_and_rejects_garbage() {
        let bin = radix_codec(2);
        assert_eq!(bin.encode(&"-101".into(), None).expect("负数应可编码"), -5);
        assert_eq!(bin.encode(&"+11".into(), None).expect("正号应可编码"), 3);
        let err = bin.encode(&"102".into(), None).expect_err("非法数字应报错");
        assert_eq!(err.to_string(), "invalid base 2 number [ 102 ]");
        assert!(!bin.evaluate(&"".into()));
    }

    #[test]
    fn radix_codec_rejects_overflow() {
        let dec = radix_codec(10);
        assert!(!dec.evaluate(&"9223372036854775808".into()));
        assert!(dec.encode(&"-9223372036854775808".into(), None).is_ok());
    }

    #[test]
    fn unary_handles_zero_and_negatives() {
        let unary = unary_codec();
        assert!(unary.evaluate(&"".into()));
        assert_eq!(unary.encode(&" 111 ".into(), None).expect("应可编码"), 3);
        assert_eq!(unary.decode(&0, None).expect("零应可解码"), Numeral::from(""));
        assert_eq!(unary.decode(&4, None).expect("应可解码"), Numeral::from("1111"));

        let err = unary.decode(&-3, None).expect_err("负数应报错");
        assert_eq!(err.to_string(), "base 1 can only represent non-negative integers");
        let err = unary.encode(&"1121".into(), None).expect_err("非一进制应报错");
        assert_eq!(err.to_string(), "invalid base 1 number [ 1121 ]");
        assert!(unary.decode(&i64::MAX, None).is_err());
    }
}
