//! 命令行 `--enc`/`--dec` 选项的解析与合并。

use serde_json::Value;
use spoke_core::Opts;

/// 解析 `key=value`。值优先按 JSON 解读（`2`、`true`、`"x"`），否则按原样视为字符串。
pub fn parse_pair(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((key.to_owned(), value))
}

/// 以命令行给出的键值覆盖配置文件中的基础选项。
pub fn merged(base: &Opts, enc: &[(String, Value)], dec: &[(String, Value)]) -> Opts {
    let mut overrides = Opts::new();
    overrides.enc.extend(enc.iter().cloned());
    overrides.dec.extend(dec.iter().cloned());

    let mut opts = base.clone();
    opts.merge(overrides);
    opts
}
