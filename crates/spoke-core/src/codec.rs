//! # Codec：单一表示形式与枢纽之间的双向转换契约
//!
//! ## 核心意图（Why）
//! - 将“如何读写某种表示”收敛到一个对象安全的 trait，使引擎只依赖契约而不关心实现；
//! - 通过 [`SharedCodec`] 让同一实例在注册表与多个解释器之间以 `Arc` 共享。
//!
//! ## 行为契约（What）
//! - 名称即注册表键，构造后不再变化；
//! - 缺省的 [`Codec::is_valid`] 只要求名称非空，实现可收紧该条件；
//! - `Arc<C>` 自动实现本契约，调用全部转发给内部实例。

use std::sync::Arc;

use crate::{Result, options::Opts};

/// `Codec` 是内容表示与枢纽数据之间的具名双向转换契约。
///
/// # 设计初衷（Why）
/// - 每种表示形式只需实现一次本契约，即可与同一枢纽上的所有其它表示互译；
/// - 契约对实现方式保持多态：内置的 [`Spoke`](crate::Spoke) 以闭包驱动，
///   也可以是调用外部服务的实现。
///
/// # 行为逻辑（How）
/// 1. `name` 返回注册表键；
/// 2. `encode` 将内容转换为枢纽数据；
/// 3. `decode` 将枢纽数据转换回本表示；
/// 4. `evaluate` 是纯谓词，回答“`encode` 大概率能处理这段内容吗”，用于来源探测。
///
/// # 契约说明（What）
/// - **名称**：必须稳定且非空，大小写敏感；
/// - **`evaluate`**：启发式过滤，不保证与实际编码结果一致。返回 `true` 后 `encode` 仍可能失败
///   （例如数值溢出），但返回 `false` 的内容若能成功编码则视为违反契约；
/// - **并发**：实现需满足 `Send + Sync`，且不应持有共享可变状态，引擎不会为其加锁。
pub trait Codec<P, H>: Send + Sync {
    /// 编解码器名称，即注册表中的键。
    fn name(&self) -> &str;

    /// 将内容编码为枢纽数据。
    fn encode(&self, content: &P, opts: Option<&Opts>) -> Result<H>;

    /// 将枢纽数据解码为本表示的内容。
    fn decode(&self, hub: &H, opts: Option<&Opts>) -> Result<P>;

    /// 判断内容是否可被本编解码器编码。
    fn evaluate(&self, content: &P) -> bool;

    /// 注册时的有效性校验。
    ///
    /// 默认只要求名称非空：注册表无法检视任意实现的内部结构，因此具名即视为可信。
    /// [`Spoke`](crate::Spoke) 会额外要求三个函数槽位都已设置。
    fn is_valid(&self) -> bool {
        !self.name().is_empty()
    }
}

/// 注册表持有的共享只读编解码器句柄。
pub type SharedCodec<P, H> = Arc<dyn Codec<P, H>>;

impl<P, H, C> Codec<P, H> for Arc<C>
where
    C: Codec<P, H> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn encode(&self, content: &P, opts: Option<&Opts>) -> Result<H> {
        (**self).encode(content, opts)
    }

    fn decode(&self, hub: &H, opts: Option<&Opts>) -> Result<P> {
        (**self).decode(hub, opts)
    }

    fn evaluate(&self, content: &P) -> bool {
        (**self).evaluate(content)
    }

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}
