//! `BaseTranslator::display_in` 与进制引擎的场景回归。

use spoke_codec_base::{BaseError, BaseTranslator, Numeral, base_codecs};
use spoke_core::{ErrorKind, Interpreter, TranslateError};

fn translator() -> BaseTranslator {
    BaseTranslator::new().expect("进制族应可构造")
}

#[test]
fn converts_between_named_bases() {
    let t = translator();
    let cases = [
        ("32", "Decimal", "Base10", "32"),
        ("33", "Binary", "Base10", "100001"),
        ("15", "hex", "Base 10", "f"),
        ("f", "base2", "hexadecimal", "1111"),
        ("c0c0c0", "hex", "base 16", "c0c0c0"),
        ("-c0c0c0", "hex", "base 16", "-c0c0c0"),
        ("111", "unary", "binary", "1111111"),
        ("1111111", "Decimal", "base 1", "7"),
    ];
    for (numeral, requested, original, expected) in cases {
        let got = t
            .display_in(requested, original, numeral, None)
            .unwrap_or_else(|err| panic!("{numeral} {original} -> {requested} 应成功：{err}"));
        assert_eq!(got, expected, "{numeral} {original} -> {requested}");
    }
}

#[test]
fn unknown_base_reports_the_callers_spelling() {
    let err = translator()
        .display_in("10", "-10", "32", None)
        .expect_err("负进制不存在");
    assert!(matches!(&err, BaseError::UnknownBase { input } if input == "-10"));
    assert_eq!(err.to_string(), "unknown base [ -10 ]");
}

#[test]
fn negative_values_cannot_be_unary() {
    let err = translator()
        .display_in("Unary", "base 10", "-3", None)
        .expect_err("一进制不能表示负数");
    assert_eq!(err.to_string(), "base 1 can only represent non-negative integers");
    match err {
        BaseError::Translate(inner) => assert_eq!(inner.kind(), ErrorKind::Codec),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn engine_scenarios() {
    let bases = Interpreter::new(base_codecs()).expect("应可构造");

    let seven = bases
        .to("decimal", "binary", &Numeral::from("111"), None)
        .expect("二进制应可转十进制");
    assert_eq!(seven.as_str(), "7");

    let hub = bases.encode("hex", &Numeral::from("FF"), None).expect("应可编码");
    assert_eq!(hub, 255);

    let err = bases
        .to("decimal", "octal", &Numeral::from("7"), None)
        .expect_err("octal 未注册");
    assert!(matches!(err, TranslateError::NoEncoder { ref origin } if origin == "octal"));
    assert_eq!(err.to_string(), "no encoder [ <-'octal' ]");

    let err = bases
        .to("Decimal", "binary", &Numeral::from("1"), None)
        .expect_err("名称大小写敏感");
    assert_eq!(err.to_string(), "no decoder [ 'Decimal'<- ]");
}

#[test]
fn discovery_lists_every_base_that_reads_the_content() {
    let bases = Interpreter::new(base_codecs()).expect("应可构造");
    let found = bases.origins(&[Numeral::from("z")]);
    assert_eq!(found, ["base36"]);

    let found = bases.origins(&[Numeral::from("1")]);
    assert!(found.contains(&"base1") && found.contains(&"unary") && found.contains(&"binary"));
    assert_eq!(found.len(), bases.len());
}

#[test]
fn overflowing_numbers_fail_to_encode() {
    let err = translator()
        .display_in("hex", "decimal", "9223372036854775808", None)
        .expect_err("超出 i64 范围");
    assert_eq!(err.to_string(), "invalid base 10 number [ 9223372036854775808 ]");
}
