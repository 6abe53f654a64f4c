//! 图数据结构
//!
//! 顶点与边的可变容器。顶点和边都按多重集合存放：
//! 同一句柄重复加入会产生多条记录，图不做去重，
//! 也不校验边的端点是否在顶点列表中。

use super::edge::{Edge, EdgeRef};
use super::vertex::VertexRef;
use std::sync::Arc;
use tracing::trace;

/// 图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点列表（保持插入顺序，允许重复）
    vertices: Vec<VertexRef>,
    /// 边列表（保持插入顺序，允许重复）
    edges: Vec<EdgeRef>,
    /// 图级别的有向标志
    directed: bool,
}

impl Graph {
    /// 创建空的无向图
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建空图并指定有向标志
    pub fn with_directed(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            directed,
        }
    }

    /// 创建空的有向图
    pub fn directed() -> Self {
        Self::with_directed(true)
    }

    /// 是否为有向图
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, vertex: &VertexRef) -> &mut Self {
        self.vertices.push(Arc::clone(vertex));
        trace!(vertex = %vertex.id(), order = self.vertices.len(), "添加顶点");
        self
    }

    /// 按顺序批量添加顶点
    pub fn add_vertices<'a, I>(&mut self, vertices: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a VertexRef>,
    {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
        self
    }

    /// 获取顶点列表
    pub fn vertices(&self) -> &[VertexRef] {
        &self.vertices
    }

    /// 顶点数（阶）
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 既可以传入 `Edge`，也可以传入共享的 `EdgeRef`。
    pub fn add_edge(&mut self, edge: impl Into<EdgeRef>) -> &mut Self {
        let edge = edge.into();
        trace!(edge = %edge, size = self.edges.len() + 1, "添加边");
        self.edges.push(edge);
        self
    }

    /// 按顺序批量添加边
    pub fn add_edges<E, I>(&mut self, edges: I) -> &mut Self
    where
        E: Into<EdgeRef>,
        I: IntoIterator<Item = E>,
    {
        for edge in edges {
            self.add_edge(edge);
        }
        self
    }

    /// 获取边列表
    pub fn edges(&self) -> &[EdgeRef] {
        &self.edges
    }

    /// 遍历边
    pub fn iter_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().map(|e| e.as_ref())
    }

    /// 边数（规模）
    pub fn size(&self) -> usize {
        self.edges.len()
    }
}
