//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构。这里只有构造和填充操作，
//! 所有只读分析都在 [`crate::analysis`] 中。

mod edge;
mod graph;
mod vertex;

pub use edge::{Edge, EdgeRef};
pub use graph::Graph;
pub use vertex::{Vertex, VertexId, VertexRef};
