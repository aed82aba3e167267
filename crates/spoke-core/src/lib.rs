#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # spoke-core
//!
//! ## 定位与职责（Why）
//! - 提供“辐条-枢纽”式互译引擎：N 种表示形式各自只需实现一个编解码器（[`Codec`]），
//!   即可经由共享的枢纽数据两两互译，而无需维护 O(N²) 个直连转换器；
//! - 本 crate 仅承载契约、注册表不变式与路由算法，演示用的编解码族（进制、时长格式、多语言数字）
//!   位于各自的 `spoke-codec-*` crate，只通过 [`Codec`] 契约与核心交互。
//!
//! ## 架构嵌入（Where）
//! - [`codec`]：能力契约 [`Codec`]，任何具名的双向转换器都可实现；
//! - [`spoke`]：内置的闭包驱动实现 [`Spoke`]，通过替换函数槽位实现定制；
//! - [`registry`]：构造后只读的 [`CodecMap`]，负责校验与按名索引；
//! - [`interpreter`]：编排层 [`Interpreter`]，提供 `to`/`encode`/`decode`/`origins`/`knows`；
//! - [`options`]：透传给编解码函数的 [`Opts`]；
//! - [`error`]：统一错误域 [`TranslateError`]。
//!
//! ## 契约说明（What）
//! - 引擎构造后不可变，所有调用均为同步、无副作用（编解码函数自身的行为除外）的请求/响应；
//! - 注册表只读，因此在编解码函数满足 `Send + Sync` 且无共享可变状态时，同一实例可被多线程并发读取；
//! - 失败总是以 `Err` 返回，引擎仅输出 `tracing` 事件，从不安装订阅者。
//!
//! ```
//! use std::sync::Arc;
//! use spoke_core::{Interpreter, SharedCodec, Spoke};
//!
//! let upper: SharedCodec<String, String> = Arc::new(
//!     Spoke::new("upper")
//!         .with_encoder(|v: &String, _| Ok::<_, std::convert::Infallible>(v.to_lowercase()))
//!         .with_decoder(|h: &String, _| Ok::<_, std::convert::Infallible>(h.to_uppercase()))
//!         .with_evaluator(|v: &String| v.chars().all(|c| !c.is_lowercase())),
//! );
//! let lower: SharedCodec<String, String> = Arc::new(
//!     Spoke::new("lower")
//!         .with_encoder(|v: &String, _| Ok::<_, std::convert::Infallible>(v.clone()))
//!         .with_decoder(|h: &String, _| Ok::<_, std::convert::Infallible>(h.clone()))
//!         .with_evaluator(|v: &String| v.chars().all(|c| !c.is_uppercase())),
//! );
//!
//! let interpreter = Interpreter::new([upper, lower]).unwrap();
//! let shouted = interpreter.to("upper", "lower", &"hub".to_owned(), None).unwrap();
//! assert_eq!(shouted, "HUB");
//! ```

pub mod codec;
pub mod error;
pub mod interpreter;
pub mod options;
pub mod registry;
pub mod spoke;

pub use codec::{Codec, SharedCodec};
pub use error::{BoxError, ErrorKind, Result, TranslateError};
pub use interpreter::Interpreter;
pub use options::Opts;
pub use registry::CodecMap;
pub use spoke::{DecodeFn, EncodeFn, EvaluateFn, Spoke};
