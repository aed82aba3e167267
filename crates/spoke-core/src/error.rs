//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 为互译引擎对外暴露的错误语义提供集中定义：构造失败、名称查找失败、函数槽位缺失、
//!   以及编解码器自身拒绝输入；
//! - 编解码器的错误细节归其自身所有，引擎只负责原样透传，不做恢复或改写。
//!
//! ## 设计要求（What）
//! - 所有变体实现 `thiserror::Error`，错误消息保持稳定，便于调用方与日志对齐；
//! - [`TranslateError::Codec`] 采用 `transparent`，保证编解码器消息逐字可见；
//! - [`ErrorKind`] 将变体归入四类分类，供调用方做粗粒度分支。

use thiserror::Error;

/// 编解码函数返回的装箱错误，满足跨线程传递要求。
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 本 crate 统一的 `Result` 别名。
pub type Result<T, E = TranslateError> = core::result::Result<T, E>;

/// 互译引擎的错误域。
///
/// # 教案式说明
/// - **意图 (Why)**：把“引擎自身的失败”与“编解码器拒绝输入”放在同一枚举中，
///   使 `to` 这样的复合操作可以直接以 `?` 传播首个失败；
/// - **契约 (What)**：
///   - 查找类错误携带被请求的名称，便于调用方定位拼写问题；
///   - `Codec` 变体的 `Display` 与内部错误完全一致；
/// - **风险 (Trade-offs)**：编解码器错误被装箱为 trait 对象，若调用方需要具体类型，
///   可通过 [`TranslateError::codec_source`] 取回后 `downcast_ref`。
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslateError {
    /// 构造时有效编解码器不足两个，无法完成任何有意义的互译。
    #[error("need codecs > 1, received [ {count} ]")]
    InsufficientCodecs {
        /// 实际保留下来的有效编解码器数量。
        count: usize,
    },

    /// 请求的源（origin）名称未注册。
    #[error("no encoder [ <-'{origin}' ]")]
    NoEncoder {
        /// 未命中的源名称。
        origin: String,
    },

    /// 请求的目标（destination）名称未注册。
    #[error("no decoder [ '{destination}'<- ]")]
    NoDecoder {
        /// 未命中的目标名称。
        destination: String,
    },

    /// 调用了未设置编码函数的 [`Spoke`](crate::Spoke)。
    #[error("nil encoder function")]
    MissingEncoder,

    /// 调用了未设置解码函数的 [`Spoke`](crate::Spoke)。
    #[error("nil decoder function")]
    MissingDecoder,

    /// 编解码器自身拒绝了输入（格式错误、超出值域等），消息由编解码器决定。
    #[error(transparent)]
    Codec(#[from] BoxError),
}

/// [`TranslateError`] 的粗粒度分类。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 构造阶段失败。
    Construction,
    /// 源或目标名称未注册。
    Lookup,
    /// 编解码函数槽位未设置。
    MissingFunction,
    /// 编解码器语义层面的失败。
    Codec,
}

impl TranslateError {
    /// 将任意错误装箱为编解码器错误。
    pub fn codec<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Codec(err.into())
    }

    /// 返回错误所属的分类。
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientCodecs { .. } => ErrorKind::Construction,
            Self::NoEncoder { .. } | Self::NoDecoder { .. } => ErrorKind::Lookup,
            Self::MissingEncoder | Self::MissingDecoder => ErrorKind::MissingFunction,
            Self::Codec(_) => ErrorKind::Codec,
        }
    }

    /// 若为编解码器错误，返回其内部错误引用。
    pub fn codec_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Codec(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}
