//! 调用方自定义的编解码选项。
//!
//! # 教案式说明
//! - **意图（Why）**：部分编解码器需要调用方提示（例如输出精度、日文读法），但引擎本身不理解这些键；
//! - **逻辑（How）**：`enc`/`dec` 两张开放映射分别转交给编码函数与解码函数，值类型采用
//!   [`serde_json::Value`] 以承载任意结构，并可直接从 TOML/JSON 配置反序列化；
//! - **契约（What）**：引擎只做透传，不读取、不修改；任一键的语义完全由读取它的编解码器定义。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 透传给编码/解码函数的选项对。
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Opts {
    /// 仅供编码函数读取的选项。
    pub enc: BTreeMap<String, Value>,
    /// 仅供解码函数读取的选项。
    pub dec: BTreeMap<String, Value>,
}

impl Opts {
    /// 创建空选项。
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条编码选项。
    #[must_use]
    pub fn with_enc(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.enc.insert(key.into(), value.into());
        self
    }

    /// 追加一条解码选项。
    #[must_use]
    pub fn with_dec(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.dec.insert(key.into(), value.into());
        self
    }

    /// 读取编码选项。
    pub fn enc_value(&self, key: &str) -> Option<&Value> {
        self.enc.get(key)
    }

    /// 读取解码选项。
    pub fn dec_value(&self, key: &str) -> Option<&Value> {
        self.dec.get(key)
    }

    /// 两张映射是否都为空。
    pub fn is_empty(&self) -> bool {
        self.enc.is_empty() && self.dec.is_empty()
    }

    /// 以 `other` 覆盖同名键，其余键保持不变。
    pub fn merge(&mut self, other: Opts) {
        self.enc.extend(other.enc);
        self.dec.extend(other.dec);
    }
}
