//! 边定义
//!
//! 边是两个顶点句柄组成的有序对，外加一个构造时确定的有向标志。

use crate::error::{Error, Result};
use crate::graph::vertex::VertexRef;
use std::fmt;
use std::sync::Arc;

/// 边的共享句柄
///
/// 同一个句柄多次加入图会得到多条互相独立的记录。
pub type EdgeRef = Arc<Edge>;

/// 边
///
/// `Edge` 不实现 `PartialEq`，边的等价关系只由
/// [`analysis::edge::equal`](crate::analysis::edge::equal) 定义。
#[derive(Debug, Clone)]
pub struct Edge {
    /// 第一个端点
    v1: VertexRef,
    /// 第二个端点
    v2: VertexRef,
    /// 是否有向
    directed: bool,
}

impl Edge {
    /// 创建新边
    pub fn new(v1: &VertexRef, v2: &VertexRef, directed: bool) -> Self {
        Self {
            v1: Arc::clone(v1),
            v2: Arc::clone(v2),
            directed,
        }
    }

    /// 创建无向边
    pub fn undirected(v1: &VertexRef, v2: &VertexRef) -> Self {
        Self::new(v1, v2, false)
    }

    /// 创建有向边
    pub fn directed(v1: &VertexRef, v2: &VertexRef) -> Self {
        Self::new(v1, v2, true)
    }

    /// 带校验地创建边，任一端点缺失时返回 `InvalidArgument`
    pub fn try_new(v1: Option<&VertexRef>, v2: Option<&VertexRef>, directed: bool) -> Result<Self> {
        match (v1, v2) {
            (Some(v1), Some(v2)) => Ok(Self::new(v1, v2, directed)),
            (None, Some(_)) => Err(Error::invalid_argument("边缺少端点 v1")),
            (Some(_), None) => Err(Error::invalid_argument("边缺少端点 v2")),
            (None, None) => Err(Error::invalid_argument("边缺少端点 v1 和 v2")),
        }
    }

    /// 获取第一个端点
    pub fn v1(&self) -> &VertexRef {
        &self.v1
    }

    /// 获取第二个端点
    pub fn v2(&self) -> &VertexRef {
        &self.v2
    }

    /// 获取两个端点
    pub fn endpoints(&self) -> (&VertexRef, &VertexRef) {
        (&self.v1, &self.v2)
    }

    /// 是否有向
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 是否为环（两端点为同一顶点）
    pub fn is_loop(&self) -> bool {
        self.v1.is_same(&self.v2)
    }

    /// 是否为连接（两端点为不同顶点）
    pub fn is_link(&self) -> bool {
        !self.is_loop()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "({} {} {})", self.v1.id(), arrow, self.v2.id())
    }
}
