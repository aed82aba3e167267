#![warn(missing_docs)]

//! `spoke-codec-base` 提供进制换算编解码族：以 64 位有符号整数为枢纽，在一进制与二至三十六进制之间互译。
//!
//! # 教案背景（Why）
//! - 演示如何在**不修改核心 crate** 的前提下，仅凭 `Codec` 契约为引擎补充一整族表示形式；
//! - 进制换算语义直观，便于聚焦别名注册、输入规范化与错误透传的交互方式。
//!
//! # 使用概览（How）
//! - [`base_codecs`] 返回全部编解码器，可直接交给 `spoke_core::Interpreter::new`；
//! - [`BaseTranslator`] 在引擎之上补充进制名称规范化（`"Base 10"`、`"16"` 等写法）。
//!
//! # 合约说明（What）
//! - 编码前内容统一去除首尾空白并转为小写，正负号均可接受；
//! - 解码输出使用小写数字，负数以 `-` 开头；
//! - 一进制只能表示非负整数，`0` 对应空串。
//!
//! ```
//! use spoke_codec_base::{Numeral, base_codecs};
//! use spoke_core::Interpreter;
//!
//! let bases = Interpreter::new(base_codecs()).expect("codec list is valid");
//! let hex = bases.to("hex", "decimal", &Numeral::from("255"), None).expect("translate");
//! assert_eq!(hex.as_str(), "ff");
//! ```

mod codecs;
mod error;
mod numeral;
mod translator;

pub use crate::codecs::{base_codecs, radix_codec, unary_codec};
pub use crate::error::BaseError;
pub use crate::numeral::{Numeral, to_radix};
pub use crate::translator::{BaseTranslator, base_name};
