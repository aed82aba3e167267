//! `spoke` 的 TOML 配置文件。
//!
//! ```toml
//! log = "debug"
//! family = "duration"
//!
//! [options.dec]
//! precision = 2
//! ```
//!
//! 所有字段均可省略；命令行参数优先于文件中的同名取值。

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;
use spoke_core::Opts;

/// 可选的演示编解码族。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// 进制换算：`base1`..`base36` 及其别名。
    Base,
    /// 时长书写格式：`hh:mm:ss`、`hhmmss`、`minutes`。
    Duration,
    /// 0 到 10 的数字单词。
    Language,
}

/// 配置文件内容。
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// 日志过滤指令，语法同 `EnvFilter`。
    pub log: Option<String>,
    /// 子命令未指定 `--family` 时使用的编解码族。
    pub family: Option<Family>,
    /// 每次调用的基础选项，命令行 `--enc`/`--dec` 在其上覆盖。
    pub options: Opts,
}

impl CliConfig {
    /// 解析 TOML 文本。
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid spoke configuration")
    }

    /// 读取并解析配置文件。
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in config file {}", path.display()))
    }
}
