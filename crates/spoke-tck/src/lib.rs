#![doc = r#"
# spoke-tck

## 章节定位（Why）
- 为各编解码族提供统一的契约回归入口：族内 `tests/tck.rs` 只需准备样本并调用本 crate 的断言，
  具体校验逻辑集中在此维护；
- 断言只依赖 `spoke-core` 暴露的 [`Codec`] 与 [`Interpreter`] 契约，不感知任何具体族。

## 结构概览（How）
- `check_*` 系列返回 `anyhow::Result<()>`，失败时携带逐层上下文，适合组合或在自定义测试中检视；
- `assert_*` 系列是对应的 panic 包装，直接用于 `#[test]` 函数体。
"#]

use std::fmt::Debug;

use anyhow::{Context, bail, ensure};
use spoke_core::{Codec, Interpreter, TranslateError};

/// 校验单个编解码器的基础契约。
///
/// # 教案式说明
/// - **意图（Why）**：注册表只会接纳 `is_valid` 为真的实例，而来源探测依赖 `evaluate`
///   与 `encode` 的一致性；两者任一走样，引擎层面的行为都会悄然偏离；
/// - **流程（How）**：
///   1. 名称非空且 `is_valid` 为真；
///   2. `accepted` 中每项内容 `evaluate` 为真且 `encode` 成功；
///   3. `rejected` 中每项内容 `evaluate` 为假且 `encode` 失败；
/// - **契约（What）**：`evaluate` 是启发式过滤，样本应避开“评估为真但编码溢出”一类灰区。
pub fn check_codec_contract<P, H, C>(
    codec: &C,
    accepted: &[P],
    rejected: &[P],
) -> anyhow::Result<()>
where
    P: Debug,
    H: Debug,
    C: Codec<P, H> + ?Sized,
{
    let name = codec.name();
    ensure!(!name.is_empty(), "codec name must not be empty");
    ensure!(codec.is_valid(), "codec '{name}' reports itself invalid");

    for content in accepted {
        ensure!(
            codec.evaluate(content),
            "codec '{name}' should evaluate {content:?} as encodable"
        );
        codec
            .encode(content, None)
            .with_context(|| format!("codec '{name}' failed to encode {content:?}"))?;
    }

    for content in rejected {
        ensure!(
            !codec.evaluate(content),
            "codec '{name}' should not evaluate {content:?} as encodable"
        );
        if let Ok(hub) = codec.encode(content, None) {
            bail!("codec '{name}' encoded rejected content {content:?} into {hub:?}");
        }
    }
    Ok(())
}

/// 校验无损编解码器的往返性质：`decode(encode(x)) == x`。
///
/// 样本应使用编解码器的规范形式（例如已去除空白、统一大小写），否则往返结果只会“等价”而非相等。
pub fn check_lossless_roundtrip<P, H, C>(codec: &C, samples: &[P]) -> anyhow::Result<()>
where
    P: Debug + PartialEq,
    H: Debug,
    C: Codec<P, H> + ?Sized,
{
    let name = codec.name();
    for sample in samples {
        let hub = codec
            .encode(sample, None)
            .with_context(|| format!("codec '{name}' failed to encode {sample:?}"))?;
        let back = codec
            .decode(&hub, None)
            .with_context(|| format!("codec '{name}' failed to decode {hub:?}"))?;
        ensure!(
            &back == sample,
            "codec '{name}' round trip changed {sample:?} into {back:?} (hub {hub:?})"
        );
    }
    Ok(())
}

/// 校验引擎层面的定律。
///
/// - 至少注册了两个编解码器，且 `knows` 与 `origins()` 的列举结果一致；
/// - 未注册的源名称先于目标名称被报告；
/// - `origins(samples)` 无重复，且每个名称对至少一项样本 `evaluate` 为真。
pub fn check_interpreter_laws<P, H>(
    interpreter: &Interpreter<P, H>,
    samples: &[P],
) -> anyhow::Result<()>
where
    P: Debug,
{
    let names = interpreter.origins(&[]);
    ensure!(names.len() >= 2, "interpreter holds {} codecs", names.len());
    for name in &names {
        ensure!(interpreter.knows(name), "listed codec '{name}' is not known");
    }

    const MISSING: &str = "\u{0}unregistered";
    ensure!(!interpreter.knows(MISSING), "sentinel name must stay unregistered");
    if let Some(content) = samples.first() {
        match interpreter.to(MISSING, MISSING, content, None) {
            Err(TranslateError::NoEncoder { origin }) => {
                ensure!(origin == MISSING, "unexpected origin in error: {origin}");
            }
            other => bail!("unknown origin must be reported first, got {other:?}"),
        }
        match interpreter.to(MISSING, names[0], content, None) {
            Err(TranslateError::NoDecoder { destination }) => {
                ensure!(destination == MISSING, "unexpected destination in error: {destination}");
            }
            other => bail!("unknown destination must be reported, got {other:?}"),
        }
    }

    let found = interpreter.origins(samples);
    for (i, name) in found.iter().enumerate() {
        ensure!(!found[..i].contains(name), "origin '{name}' reported twice");
        let codec = interpreter
            .codec(name)
            .with_context(|| format!("origin '{name}' is not registered"))?;
        ensure!(
            samples.iter().any(|sample| codec.evaluate(sample)),
            "origin '{name}' does not evaluate any sample as encodable"
        );
    }
    Ok(())
}

/// [`check_codec_contract`] 的 panic 包装。
#[track_caller]
pub fn assert_codec_contract<P, H, C>(codec: &C, accepted: &[P], rejected: &[P])
where
    P: Debug,
    H: Debug,
    C: Codec<P, H> + ?Sized,
{
    if let Err(err) = check_codec_contract(codec, accepted, rejected) {
        panic!("codec contract violated: {err:#}");
    }
}

/// [`check_lossless_roundtrip`] 的 panic 包装。
#[track_caller]
pub fn assert_lossless_roundtrip<P, H, C>(codec: &C, samples: &[P])
where
    P: Debug + PartialEq,
    H: Debug,
    C: Codec<P, H> + ?Sized,
{
    if let Err(err) = check_lossless_roundtrip(codec, samples) {
        panic!("lossless round trip violated: {err:#}");
    }
}

/// [`check_interpreter_laws`] 的 panic 包装。
#[track_caller]
pub fn assert_interpreter_laws<P, H>(interpreter: &Interpreter<P, H>, samples: &[P])
where
    P: Debug,
{
    if let Err(err) = check_interpreter_laws(interpreter, samples) {
        panic!("interpreter laws violated: {err:#}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use spoke_core::{BoxError, SharedCodec, Spoke};

    use super::*;

    fn digits(name: &str, radix: u32) -> Spoke<String, i64> {
        Spoke::new(name)
            .with_encoder(move |v: &String, _| i64::from_str_radix(v, radix))
            .with_decoder(move |h: &i64, _| {
                Ok::<_, BoxError>(match radix {
                    2 => format!("{h:b}"),
                    16 => format!("{h:x}"),
                    _ => h.to_string(),
                })
            })
            .with_evaluator(move |v: &String| i64::from_str_radix(v, radix).is_ok())
    }

    #[test]
    fn well_behaved_codec_passes() {
        let codec = digits("bin", 2);
        assert_codec_contract(&codec, &["101".to_owned()], &["2".to_owned()]);
        assert_lossless_roundtrip(&codec, &["101".to_owned(), "0".to_owned()]);
    }

    #[test]
    fn lying_evaluator_is_caught() {
        let codec = digits("dec", 10).with_evaluator(|_: &String| false);
        let err = check_codec_contract(&codec, &["7".to_owned()], &[]).expect_err("评估与编码不一致应失败");
        assert!(err.to_string().contains("should evaluate"));

        let codec = digits("dec", 10).with_evaluator(|_: &String| false);
        let err = check_codec_contract(&codec, &[], &["7".to_owned()]).expect_err("被拒内容却可编码应失败");
        assert!(err.to_string().contains("encoded rejected content"));
    }

    #[test]
    fn lossy_codec_is_caught() {
        let codec = digits("dec", 10);
        let err = check_lossless_roundtrip(&codec, &["007".to_owned()]).expect_err("前导零不可往返");
        assert!(format!("{err:#}").contains("round trip changed"));
    }

    #[test]
    fn interpreter_laws_hold_for_registered_codecs() {
        let codecs: Vec<SharedCodec<String, i64>> = vec![
            Arc::new(digits("bin", 2)),
            Arc::new(digits("dec", 10)),
            Arc::new(digits("hex", 16)),
        ];
        let interpreter = Interpreter::new(codecs).expect("应可构造");
        assert_interpreter_laws(&interpreter, &["19".to_owned(), "ff".to_owned()]);
        assert_interpreter_laws(&interpreter, &[]);
    }
}
