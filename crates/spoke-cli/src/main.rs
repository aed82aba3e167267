//! `spoke`：在命令行上驱动互译引擎与三组演示编解码族。
//!
//! # 使用概览（How）
//! ```text
//! spoke list --family base
//! spoke translate --family language --to japanese --dec use=kanji "dos cinco uno"
//! spoke encode --family duration --from minutes "90 min"
//! spoke --config spoke.toml detect "01:30:00"
//! ```
//!
//! # 合约说明（What）
//! - 结果写入 stdout，日志写入 stderr；
//! - 日志过滤优先读取 `SPOKE_LOG`，其次是配置文件的 `log`，缺省为 `warn`；
//! - 任一步骤失败时打印完整错误链并以非零状态退出。

mod config;
mod options;
mod run;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

use crate::config::{CliConfig, Family};
use crate::run::Action;

/// 日志过滤指令所在的环境变量。
const LOG_ENV: &str = "SPOKE_LOG";
const DEFAULT_LOG: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "spoke")]
#[command(about = "Translate content between codecs through a shared hub", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List codec names in registration order
    List {
        #[command(flatten)]
        family: FamilyArgs,
    },

    /// Translate content into another codec's representation
    Translate {
        #[command(flatten)]
        family: FamilyArgs,

        /// Destination codec
        #[arg(long)]
        to: String,

        /// Origin codec (detected from the content when omitted)
        #[arg(long)]
        from: Option<String>,

        #[command(flatten)]
        options: OptionArgs,

        content: String,
    },

    /// Encode content and print the hub data
    Encode {
        #[command(flatten)]
        family: FamilyArgs,

        /// Origin codec
        #[arg(long)]
        from: String,

        #[command(flatten)]
        options: OptionArgs,

        content: String,
    },

    /// List codecs that can read any of the given contents
    Detect {
        #[command(flatten)]
        family: FamilyArgs,

        #[arg(required = true)]
        contents: Vec<String>,
    },
}

#[derive(Debug, Args)]
struct FamilyArgs {
    /// Codec family (falls back to the config file)
    #[arg(long, value_enum)]
    family: Option<Family>,
}

#[derive(Debug, Default, Args)]
struct OptionArgs {
    /// Encoder option, value parsed as JSON when possible
    #[arg(long = "enc", value_name = "KEY=VALUE", value_parser = options::parse_pair)]
    enc: Vec<(String, Value)>,

    /// Decoder option, value parsed as JSON when possible
    #[arg(long = "dec", value_name = "KEY=VALUE", value_parser = options::parse_pair)]
    dec: Vec<(String, Value)>,
}

impl Command {
    fn into_parts(self) -> (Option<Family>, OptionArgs, Action) {
        match self {
            Self::List { family } => (family.family, OptionArgs::default(), Action::List),
            Self::Translate {
                family,
                to,
                from,
                options,
                content,
            } => (family.family, options, Action::Translate { to, from, content }),
            Self::Encode {
                family,
                from,
                options,
                content,
            } => (family.family, options, Action::Encode { from, content }),
            Self::Detect { family, contents } => (
                family.family,
                OptionArgs::default(),
                Action::Detect { contents },
            ),
        }
    }
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("spoke: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    install_tracing(config.log.as_deref())?;

    let (family, overrides, action) = cli.command.into_parts();
    let Some(family) = family.or(config.family) else {
        bail!("no codec family selected; pass --family or set `family` in the config file");
    };
    let opts = options::merged(&config.options, &overrides.enc, &overrides.dec);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run::dispatch(family, &action, (!opts.is_empty()).then_some(&opts), &mut out)?;
    out.flush().context("failed to flush stdout")
}

fn install_tracing(configured: Option<&str>) -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(build_env_filter(configured))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr));
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")
}

fn build_env_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_LOG)))
}
