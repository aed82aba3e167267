//! # Interpreter：辐条-枢纽互译编排层
//!
//! ## 核心意图（Why）
//! - 持有一个只读注册表，对外提供完整互译（先编码再解码）、单向编码、单向解码、
//!   来源探测与成员判断五项操作；
//! - 所有操作都是独立的同步请求/响应，除注册表外不保存任何状态。
//!
//! ## 行为契约（What）
//! - 构造时有效编解码器少于两个即失败，错误中携带实际数量；
//! - `to` 先查源、再查目标，随后编码、解码；任一步失败立即返回该错误，不再继续后续步骤；
//! - `origins` 的结果按注册顺序排列且无重复；
//! - 选项原样转交给编解码函数，引擎不做解释。

use crate::codec::{Codec, SharedCodec};
use crate::error::{Result, TranslateError};
use crate::options::Opts;
use crate::registry::CodecMap;

/// 以共享枢纽数据 `H` 为中介，在多种内容表示 `P` 之间互译的引擎。
///
/// # 教案式注释
/// - **意图 (Why)**：N 个编解码器即可覆盖 N×N 种互译路径；
/// - **契约 (What)**：实例构造后不可变；当编解码器满足 `Send + Sync` 时，可通过 `Arc`
///   在多线程间共享而无需加锁；
/// - **风险 (Trade-offs)**：引擎信任编解码器的语义正确性，不校验编码与解码是否互逆。
pub struct Interpreter<P, H> {
    codecs: CodecMap<P, H>,
}

impl<P, H> Interpreter<P, H> {
    /// 由候选编解码器构造引擎。
    ///
    /// # Errors
    /// 有效编解码器不足两个时返回 [`TranslateError::InsufficientCodecs`]。
    pub fn new<I>(codecs: I) -> Result<Self>
    where
        I: IntoIterator<Item = SharedCodec<P, H>>,
    {
        let codecs = CodecMap::from_codecs(codecs);
        let count = codecs.len();
        if count < 2 {
            tracing::debug!(count, "interpreter construction rejected");
            return Err(TranslateError::InsufficientCodecs { count });
        }
        tracing::debug!(count, "interpreter constructed");
        Ok(Self { codecs })
    }

    /// 将 `origin` 表示的内容翻译为 `destination` 表示。
    ///
    /// 执行路径：`content →(origin.encode)→ hub →(destination.decode)→ content'`。
    pub fn to(
        &self,
        destination: &str,
        origin: &str,
        content: &P,
        opts: Option<&Opts>,
    ) -> Result<P> {
        let encoder = self.encoder(origin)?;
        let decoder = self.decoder(destination)?;
        tracing::trace!(origin, destination, "routing content through hub");
        let hub = encoder.encode(content, opts)?;
        decoder.decode(&hub, opts)
    }

    /// 使用 `origin` 的编码函数将内容转换为枢纽数据。
    pub fn encode(&self, origin: &str, content: &P, opts: Option<&Opts>) -> Result<H> {
        self.encoder(origin)?.encode(content, opts)
    }

    /// 使用 `destination` 的解码函数将枢纽数据转换为内容。
    pub fn decode(&self, destination: &str, hub: &H, opts: Option<&Opts>) -> Result<P> {
        self.decoder(destination)?.decode(hub, opts)
    }

    /// 来源探测。
    ///
    /// - 不传内容时返回全部已注册名称；
    /// - 传入内容时返回对至少一项内容 `evaluate` 为真的编解码器名称，每个名称至多出现一次。
    ///
    /// 两种情况下结果都按注册顺序排列。
    pub fn origins(&self, contents: &[P]) -> Vec<&str> {
        if contents.is_empty() {
            return self.codecs.names().collect();
        }
        self.codecs
            .iter()
            .filter(|(_, codec)| contents.iter().any(|content| codec.evaluate(content)))
            .map(|(name, _)| name)
            .collect()
    }

    /// 名称是否已注册（大小写敏感）。
    pub fn knows(&self, name: &str) -> bool {
        self.codecs.contains(name)
    }

    /// 按注册顺序列举全部名称。
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.codecs.names()
    }

    /// 已注册编解码器数量，恒不小于 2。
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// 构造成功的引擎不会为空，提供该方法仅为与 `len` 配套。
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// 取得已注册编解码器的共享句柄。
    pub fn codec(&self, name: &str) -> Option<&SharedCodec<P, H>> {
        self.codecs.lookup(name)
    }

    /// 只读访问底层注册表。
    pub fn registry(&self) -> &CodecMap<P, H> {
        &self.codecs
    }

    fn encoder(&self, origin: &str) -> Result<&SharedCodec<P, H>> {
        self.codecs
            .lookup(origin)
            .ok_or_else(|| TranslateError::NoEncoder {
                origin: origin.to_owned(),
            })
    }

    fn decoder(&self, destination: &str) -> Result<&SharedCodec<P, H>> {
        self.codecs
            .lookup(destination)
            .ok_or_else(|| TranslateError::NoDecoder {
                destination: destination.to_owned(),
            })
    }
}

impl<P, H> Clone for Interpreter<P, H> {
    fn clone(&self) -> Self {
        Self {
            codecs: self.codecs.clone(),
        }
    }
}

impl<P, H> core::fmt::Debug for Interpreter<P, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interpreter")
            .field("codecs", &self.codecs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{BoxError, ErrorKind, Spoke};

    fn digits(name: &str, radix: u32) -> SharedCodec<String, i64> {
        Arc::new(
            Spoke::new(name)
                .with_encoder(move |v: &String, _| i64::from_str_radix(v, radix))
                .with_decoder(move |h: &i64, _| match radix {
                    10 => Ok(h.to_string()),
                    16 => Ok(format!("{h:x}")),
                    2 => Ok(format!("{h:b}")),
                    _ => Err(BoxError::from(format!("radix {radix} unsupported"))),
                })
                .with_evaluator(move |v: &String| i64::from_str_radix(v, radix).is_ok()),
        )
    }

    fn interpreter() -> Interpreter<String, i64> {
        Interpreter::new([digits("dec", 10), digits("hex", 16), digits("bin", 2)])
            .expect("三个有效编解码器应可构造")
    }

    #[test]
    fn translates_through_the_hub() {
        let x = interpreter();
        assert_eq!(x.to("bin", "dec", &"5".to_owned(), None).expect("应成功"), "101");
        assert_eq!(x.to("dec", "hex", &"ff".to_owned(), None).expect("应成功"), "255");
        assert_eq!(x.encode("hex", &"10".to_owned(), None).expect("应成功"), 16);
        assert_eq!(x.decode("hex", &255, None).expect("应成功"), "ff");
    }

    #[test]
    fn origin_is_checked_before_destination() {
        let x = interpreter();
        let err = x
            .to("nowhere", "nothing", &"1".to_owned(), None)
            .expect_err("两端均未注册");
        assert!(matches!(err, TranslateError::NoEncoder { ref origin } if origin == "nothing"));

        let err = x.to("nowhere", "dec", &"1".to_owned(), None).expect_err("目标未注册");
        assert!(
            matches!(err, TranslateError::NoDecoder { ref destination } if destination == "nowhere")
        );
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn encode_failure_short_circuits_decode() {
        let decodes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&decodes);
        let counting: SharedCodec<String, i64> = Arc::new(
            Spoke::new("counting")
                .with_encoder(|v: &String, _| v.parse::<i64>())
                .with_decoder(move |h: &i64, _| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, BoxError>(h.to_string())
                })
                .with_evaluator(|_: &String| true),
        );
        let x = Interpreter::new([digits("dec", 10), counting]).expect("应可构造");

        let err = x
            .to("counting", "dec", &"zz".to_owned(), None)
            .expect_err("非法十进制应编码失败");
        assert_eq!(err.kind(), ErrorKind::Codec);
        assert_eq!(decodes.load(Ordering::SeqCst), 0);

        x.to("counting", "dec", &"7".to_owned(), None).expect("应成功");
        assert_eq!(decodes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn origins_lists_registry_or_matches_without_duplicates() {
        let x = interpreter();
        assert_eq!(x.origins(&[]), ["dec", "hex", "bin"]);
        assert_eq!(x.origins(&["ff".to_owned()]), ["hex"]);
        assert_eq!(x.origins(&["101".to_owned()]), ["dec", "hex", "bin"]);
        assert_eq!(
            x.origins(&["ff".to_owned(), "a".to_owned(), "9".to_owned()]),
            ["dec", "hex"]
        );
        assert!(x.origins(&["xyz".to_owned()]).is_empty());
    }

    #[test]
    fn construction_requires_two_valid_codecs() {
        let err = Interpreter::new([digits("dec", 10)]).expect_err("单个编解码器不足");
        assert!(matches!(err, TranslateError::InsufficientCodecs { count: 1 }));

        let err = Interpreter::new([digits("dec", 10), digits("dec", 16)])
            .expect_err("同名覆盖后仅剩一个");
        assert_eq!(err.to_string(), "need codecs > 1, received [ 1 ]");

        let hollow: SharedCodec<String, i64> = Arc::new(Spoke::new("hollow"));
        let err = Interpreter::new([hollow]).expect_err("无效编解码器不计数");
        assert!(matches!(err, TranslateError::InsufficientCodecs { count: 0 }));
    }

    #[test]
    fn knows_matches_registry_listing() {
        let x = interpreter();
        for name in x.origins(&[]) {
            assert!(x.knows(name));
        }
        assert!(!x.knows("DEC"));
        assert_eq!(x.len(), 3);
        assert!(!x.is_empty());
        assert!(x.codec("bin").is_some());
        assert_eq!(x.names().count(), x.registry().len());
    }

    #[test]
    fn options_are_forwarded_to_both_sides() {
        let echo_opts: SharedCodec<String, String> = Arc::new(
            Spoke::new("echo")
                .with_encoder(|v: &String, opts: Option<&Opts>| {
                    let tag = opts
                        .and_then(|o| o.enc_value("tag"))
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or("-")
                        .to_owned();
                    Ok::<_, BoxError>(format!("{tag}:{v}"))
                })
                .with_decoder(|h: &String, opts: Option<&Opts>| {
                    let suffix = opts
                        .and_then(|o| o.dec_value("suffix"))
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or("")
                        .to_owned();
                    Ok::<_, BoxError>(format!("{h}{suffix}"))
                })
                .with_evaluator(|_: &String| true),
        );
        let plain: SharedCodec<String, String> = Arc::new(
            Spoke::new("plain")
                .with_encoder(|v: &String, _| Ok::<_, BoxError>(v.clone()))
                .with_decoder(|h: &String, _| Ok::<_, BoxError>(h.clone()))
                .with_evaluator(|_: &String| true),
        );
        let x = Interpreter::new([echo_opts, plain]).expect("应可构造");
        let opts = Opts::new().with_enc("tag", "t").with_dec("suffix", "!");

        let out = x.to("echo", "echo", &"v".to_owned(), Some(&opts)).expect("应成功");
        assert_eq!(out, "t:v!");
        let out = x.to("plain", "echo", &"v".to_owned(), None).expect("应成功");
        assert_eq!(out, "-:v");
    }

    #[test]
    fn interpreter_is_shareable_across_threads() {
        let x = Arc::new(interpreter());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let x = Arc::clone(&x);
                std::thread::spawn(move || x.to("bin", "dec", &i.to_string(), None))
            })
            .collect();
        let results: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("线程不应 panic").expect("互译应成功"))
            .collect();
        assert_eq!(results, ["0", "1", "10", "11"]);
    }
}
