//! graphclass - 最小化的数学图模型
//!
//! 提供可变的顶点、边、图实体，以及一组只读的分析函数：
//! - 顶点按身份比较，属性只是不透明的键值包
//! - 图按多重集合保存顶点和边，允许重复
//! - 简单图、多重图、伪图分类
//! - 补图构造
//!
//! ```
//! use graphclass::analysis::graph;
//! use graphclass::{Edge, Graph, Vertex};
//!
//! let v1 = Vertex::empty();
//! let v2 = Vertex::empty();
//!
//! let mut g = Graph::new();
//! g.add_vertices([&v1, &v2]).add_edge(Edge::undirected(&v1, &v2));
//!
//! assert!(graph::is_simple(&g));
//! assert_eq!(graph::complement(&g).size(), 2);
//! ```

pub mod analysis;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use analysis::GraphSummary;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeRef, Graph, Vertex, VertexId, VertexRef};
pub use types::{Properties, PropertyValue};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
