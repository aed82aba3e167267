//! # Spoke：闭包驱动的默认编解码器
//!
//! ## 核心意图（Why）
//! - 大多数编解码族只需要“名称 + 三个函数”，`Spoke` 直接以函数值承载这三项能力；
//! - 需要定制时，调用方构造实例后替换单个槽位（例如只换解码函数以支持额外选项），
//!   而不是派生新类型。
//!
//! ## 行为契约（What）
//! - 槽位未设置时：`encode` 返回 [`TranslateError::MissingEncoder`]，`decode` 返回
//!   [`TranslateError::MissingDecoder`]，`evaluate` 返回 `false`，半成品实例因此是惰性安全的；
//! - 函数返回的错误装箱后经 [`TranslateError::Codec`] 原样透传；
//! - [`Codec::is_valid`] 要求名称非空且三个槽位齐全，否则注册表会丢弃该实例。

use std::fmt;
use std::sync::Arc;

use crate::codec::Codec;
use crate::error::{BoxError, Result, TranslateError};
use crate::options::Opts;

/// 编码函数槽位：内容 → 枢纽数据。
pub type EncodeFn<P, H> = Arc<dyn Fn(&P, Option<&Opts>) -> Result<H, BoxError> + Send + Sync>;
/// 解码函数槽位：枢纽数据 → 内容。
pub type DecodeFn<H, P> = Arc<dyn Fn(&H, Option<&Opts>) -> Result<P, BoxError> + Send + Sync>;
/// 评估函数槽位：内容是否可被编码。
pub type EvaluateFn<P> = Arc<dyn Fn(&P) -> bool + Send + Sync>;

/// 具名的闭包编解码器。
///
/// # 教案式注释
/// - **意图 (Why)**：以一等函数值代替虚方法覆写，使同一族内的编解码器可以共享大部分逻辑，
///   仅在个别槽位上分化；
/// - **契约 (What)**：槽位使用 `Arc` 保存，克隆实例只复制引用，适合在别名之间复用同一组函数；
/// - **风险 (Trade-offs)**：每次调用多一次动态分发，对演示与配置驱动场景可以忽略。
pub struct Spoke<P, H> {
    id: String,
    enc: Option<EncodeFn<P, H>>,
    dec: Option<DecodeFn<H, P>>,
    check: Option<EvaluateFn<P>>,
}

impl<P, H> Spoke<P, H>
where
    P: 'static,
    H: 'static,
{
    /// 以名称创建一个空槽位的实例。
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enc: None,
            dec: None,
            check: None,
        }
    }

    /// 返回名称。
    pub fn id(&self) -> &str {
        &self.id
    }

    /// 以新名称复制一份共享相同函数槽位的实例，常用于别名注册。
    #[must_use]
    pub fn renamed(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }

    /// 设置编码函数。
    #[must_use]
    pub fn with_encoder<F, E>(mut self, f: F) -> Self
    where
        F: Fn(&P, Option<&Opts>) -> Result<H, E> + Send + Sync + 'static,
        E: Into<BoxError> + 'static,
    {
        self.set_encoder(f);
        self
    }

    /// 设置解码函数。
    #[must_use]
    pub fn with_decoder<F, E>(mut self, f: F) -> Self
    where
        F: Fn(&H, Option<&Opts>) -> Result<P, E> + Send + Sync + 'static,
        E: Into<BoxError> + 'static,
    {
        self.set_decoder(f);
        self
    }

    /// 设置评估函数。
    #[must_use]
    pub fn with_evaluator<F>(mut self, f: F) -> Self
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        self.set_evaluator(f);
        self
    }

    /// 替换编码函数槽位。
    pub fn set_encoder<F, E>(&mut self, f: F)
    where
        F: Fn(&P, Option<&Opts>) -> Result<H, E> + Send + Sync + 'static,
        E: Into<BoxError> + 'static,
    {
        self.enc = Some(Arc::new(move |content: &P, opts: Option<&Opts>| {
            f(content, opts).map_err(Into::into)
        }));
    }

    /// 替换解码函数槽位。
    pub fn set_decoder<F, E>(&mut self, f: F)
    where
        F: Fn(&H, Option<&Opts>) -> Result<P, E> + Send + Sync + 'static,
        E: Into<BoxError> + 'static,
    {
        self.dec = Some(Arc::new(move |hub: &H, opts: Option<&Opts>| {
            f(hub, opts).map_err(Into::into)
        }));
    }

    /// 替换评估函数槽位。
    pub fn set_evaluator<F>(&mut self, f: F)
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        self.check = Some(Arc::new(f));
    }

    /// 清空编码函数槽位。
    pub fn clear_encoder(&mut self) {
        self.enc = None;
    }

    /// 清空解码函数槽位。
    pub fn clear_decoder(&mut self) {
        self.dec = None;
    }

    /// 清空评估函数槽位。
    pub fn clear_evaluator(&mut self) {
        self.check = None;
    }
}

impl<P, H> Clone for Spoke<P, H> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            enc: self.enc.clone(),
            dec: self.dec.clone(),
            check: self.check.clone(),
        }
    }
}

impl<P, H> fmt::Debug for Spoke<P, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spoke")
            .field("id", &self.id)
            .field("encoder", &self.enc.is_some())
            .field("decoder", &self.dec.is_some())
            .field("evaluator", &self.check.is_some())
            .finish()
    }
}

impl<P, H> Codec<P, H> for Spoke<P, H>
where
    P: 'static,
    H: 'static,
{
    fn name(&self) -> &str {
        &self.id
    }

    fn encode(&self, content: &P, opts: Option<&Opts>) -> Result<H> {
        match &self.enc {
            Some(encode) => encode(content, opts).map_err(TranslateError::Codec),
            None => Err(TranslateError::MissingEncoder),
        }
    }

    fn decode(&self, hub: &H, opts: Option<&Opts>) -> Result<P> {
        match &self.dec {
            Some(decode) => decode(hub, opts).map_err(TranslateError::Codec),
            None => Err(TranslateError::MissingDecoder),
        }
    }

    fn evaluate(&self, content: &P) -> bool {
        self.check.as_ref().is_some_and(|check| check(content))
    }

    fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.enc.is_some() && self.dec.is_some() && self.check.is_some()
    }
}
