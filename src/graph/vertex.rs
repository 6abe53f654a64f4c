//! 顶点定义
//!
//! 顶点是不透明的身份单元，只携带一个开放的属性包。
//! 相等性只看身份（`VertexId`），从不比较属性内容。

use crate::types::{Properties, PropertyValue};
use parking_lot::RwLock;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 下一个顶点 ID（进程内单调递增，不会复用）
static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(1);

/// 顶点 ID（进程内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u64);

impl VertexId {
    fn next() -> Self {
        Self(NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 顶点的共享句柄
///
/// 边和图只持有句柄，顶点本身归调用方所有。
pub type VertexRef = Arc<Vertex>;

/// 顶点
#[derive(Debug)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 属性（调用方可在顶点加入图之后继续修改）
    properties: RwLock<Properties>,
}

impl Vertex {
    /// 创建新顶点，属性映射按值拷入
    pub fn new(properties: Properties) -> VertexRef {
        Arc::new(Self {
            id: VertexId::next(),
            properties: RwLock::new(properties),
        })
    }

    /// 创建不带属性的顶点
    pub fn empty() -> VertexRef {
        Self::new(Properties::new())
    }

    /// 从键值对创建顶点
    pub fn with_properties<K, V, I>(properties: I) -> VertexRef
    where
        K: Into<String>,
        V: Into<PropertyValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::new(
            properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 是否与另一个顶点为同一身份
    pub fn is_same(&self, other: &Vertex) -> bool {
        self.id == other.id
    }

    /// 获取属性
    pub fn property(&self, key: &str) -> Option<PropertyValue> {
        self.properties.read().get(key).cloned()
    }

    /// 设置属性
    pub fn set_property(&self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.write().insert(key.into(), value.into());
    }

    /// 移除属性
    pub fn remove_property(&self, key: &str) -> Option<PropertyValue> {
        self.properties.write().remove(key)
    }

    /// 获取所有属性的快照
    pub fn properties(&self) -> Properties {
        self.properties.read().clone()
    }

    /// 属性个数
    pub fn property_count(&self) -> usize {
        self.properties.read().len()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
