#![warn(missing_docs)]

//! `spoke-codec-duration` 提供时长格式编解码族：以拆分后的 [`DurationHub`] 为枢纽，
//! 在 `hh:mm:ss`、`_hh _mm _ss` 与 `_ minutes` 三种书写之间互译。
//!
//! # 使用概览（How）
//! - [`duration_codecs`] 返回全部编解码器；
//! - [`DurationTranslator`] 自动探测输入格式，调用方只需指明目标格式。
//!
//! # 合约说明（What）
//! - 格式识别基于正则的非锚定匹配，`"about 60 mins"` 也会被 `minutes` 识别；
//! - `minutes` 解码接受 `precision` 解码选项（非负整数），缺省保留六位小数；
//!   其余格式忽略全部选项。
//!
//! ```
//! use spoke_codec_duration::DurationTranslator;
//!
//! let durations = DurationTranslator::new().expect("codec list is valid");
//! let shown = durations.display_in("hh:mm:ss", "90 min", None).expect("translate");
//! assert_eq!(shown, "1:30:0");
//! ```

mod codecs;
mod error;
mod hub;
mod translator;
mod value;

pub use crate::codecs::{colon_codec, duration_codecs, hhmmss_codec, minutes_codec};
pub use crate::error::DurationError;
pub use crate::hub::{DurationHub, DurationParams};
pub use crate::translator::DurationTranslator;
pub use crate::value::DurationValue;
