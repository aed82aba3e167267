//! 子命令执行：把一次请求落到选定编解码族的引擎上，结果写入 `out`。

use std::fmt::{Debug, Display};
use std::io::Write;

use anyhow::Context;
use spoke_codec_base::base_codecs;
use spoke_codec_duration::duration_codecs;
use spoke_codec_lang::language_codecs;
use spoke_core::{Interpreter, Opts};

use crate::config::Family;

/// 与编解码族无关的请求。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// 按注册顺序列出全部名称。
    List,
    /// 翻译；未给出源名称时取第一个能读取内容的编解码器。
    Translate {
        to: String,
        from: Option<String>,
        content: String,
    },
    /// 只编码，打印枢纽数据。
    Encode { from: String, content: String },
    /// 列出能读取任一内容的编解码器。
    Detect { contents: Vec<String> },
}

/// 构造 `family` 的引擎并执行 `action`。
pub fn dispatch(
    family: Family,
    action: &Action,
    opts: Option<&Opts>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    tracing::debug!(?family, ?action, "running request");
    match family {
        Family::Base => {
            let engine = Interpreter::new(base_codecs()).context("failed to build base family")?;
            execute(&engine, action, opts, out)
        }
        Family::Duration => {
            let codecs = duration_codecs().context("failed to build duration family")?;
            let engine = Interpreter::new(codecs).context("failed to build duration family")?;
            execute(&engine, action, opts, out)
        }
        Family::Language => {
            let engine =
                Interpreter::new(language_codecs()).context("failed to build language family")?;
            execute(&engine, action, opts, out)
        }
    }
}

/// 在任意引擎上执行请求。
pub fn execute<P, H>(
    engine: &Interpreter<P, H>,
    action: &Action,
    opts: Option<&Opts>,
    out: &mut dyn Write,
) -> anyhow::Result<()>
where
    P: From<String> + Display,
    H: Debug,
{
    match action {
        Action::List => {
            for name in engine.names() {
                writeln!(out, "{name}")?;
            }
        }
        Action::Translate { to, from, content } => {
            let value = P::from(content.clone());
            let origin = match from {
                Some(origin) => origin.as_str(),
                None => engine
                    .origins(std::slice::from_ref(&value))
                    .first()
                    .copied()
                    .with_context(|| format!("no codec can read {content:?}"))?,
            };
            let translated = engine
                .to(to, origin, &value, opts)
                .with_context(|| {
                    format!("failed to translate {content:?} from '{origin}' to '{to}'")
                })?;
            writeln!(out, "{translated}")?;
        }
        Action::Encode { from, content } => {
            let hub = engine
                .encode(from, &P::from(content.clone()), opts)
                .with_context(|| format!("failed to encode {content:?} as '{from}'"))?;
            writeln!(out, "{hub:?}")?;
        }
        Action::Detect { contents } => {
            let values: Vec<P> = contents.iter().cloned().map(P::from).collect();
            for name in engine.origins(&values) {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(())
}
