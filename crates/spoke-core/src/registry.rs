//! # CodecMap：按名索引的只读编解码器注册表
//!
//! ## 核心意图（Why）
//! - 在构造期一次性吸收候选编解码器并完成校验，此后只提供查询能力；
//! - 使用 `IndexMap` 保留首次插入顺序，使名称列举与来源探测的结果稳定可复现。
//!
//! ## 行为契约（What）
//! - 仅保留 [`Codec::is_valid`] 为真的候选；
//! - 同名候选后者覆盖前者（last-write-wins），但位置沿用首次出现时的槽位；
//! - 键大小写敏感、精确匹配；
//! - 被拒绝或被覆盖的注册以 `debug` 级别事件记录，便于排查“为何少了一个编解码器”。

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::codec::{Codec, SharedCodec};

/// 名称到编解码器的映射。
pub struct CodecMap<P, H> {
    codecs: IndexMap<String, SharedCodec<P, H>>,
}

impl<P, H> CodecMap<P, H> {
    /// 由候选列表构造注册表。
    pub fn from_codecs<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = SharedCodec<P, H>>,
    {
        let mut map = Self {
            codecs: IndexMap::new(),
        };
        map.add(candidates);
        map
    }

    /// 校验并吸收候选编解码器。
    pub(crate) fn add<I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = SharedCodec<P, H>>,
    {
        for codec in candidates {
            if !codec.is_valid() {
                tracing::debug!(
                    codec = codec.name(),
                    "rejected codec registration: incomplete contract"
                );
                continue;
            }

            match self.codecs.entry(codec.name().to_owned()) {
                Entry::Occupied(mut occupied) => {
                    tracing::debug!(
                        codec = occupied.key().as_str(),
                        "codec registration replaced an earlier entry with the same name"
                    );
                    occupied.insert(codec);
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(codec);
                }
            }
        }
    }

    /// 按名称精确查找。
    pub fn lookup(&self, name: &str) -> Option<&SharedCodec<P, H>> {
        self.codecs.get(name)
    }

    /// 名称是否已注册。
    pub fn contains(&self, name: &str) -> bool {
        self.codecs.contains_key(name)
    }

    /// 按注册顺序列举全部名称。
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.codecs.keys().map(String::as_str)
    }

    /// 按注册顺序遍历名称与编解码器。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SharedCodec<P, H>)> + '_ {
        self.codecs.iter().map(|(name, codec)| (name.as_str(), codec))
    }

    /// 已注册数量。
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// 注册表是否为空。
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl<P, H> Clone for CodecMap<P, H> {
    fn clone(&self) -> Self {
        Self {
            codecs: self.codecs.clone(),
        }
    }
}

impl<P, H> core::fmt::Debug for CodecMap<P, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
