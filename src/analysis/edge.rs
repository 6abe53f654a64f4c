//! 边分析
//!
//! 边的相等性规则：只要任意一条边是有向的，就按端点顺序精确比较；
//! 两条都是无向边时，端点顺序可以互换。端点按顶点身份比较。

use crate::graph::{Edge, Graph};

/// 判断两条边是否相等
pub fn equal(e1: &Edge, e2: &Edge) -> bool {
    let (a1, b1) = (e1.v1().id(), e1.v2().id());
    let (a2, b2) = (e2.v1().id(), e2.v2().id());

    let same_order = a1 == a2 && b1 == b2;
    if e1.is_directed() || e2.is_directed() {
        return same_order;
    }
    same_order || (a1 == b2 && b1 == a2)
}

/// 是否为环
pub fn is_loop(edge: &Edge) -> bool {
    edge.is_loop()
}

/// 是否为连接
pub fn is_link(edge: &Edge) -> bool {
    edge.is_link()
}

/// 边在图中的重数：图中与其相等的边的条数（若该边在图中，包含其自身）
pub fn multiplicity(edge: &Edge, graph: &Graph) -> usize {
    graph.iter_edges().filter(|other| equal(edge, other)).count()
}

/// 边在图中是否为重边
pub fn is_multiple(edge: &Edge, graph: &Graph) -> bool {
    multiplicity(edge, graph) > 1
}

/// 边在图中是否恰好出现一次
pub fn is_simple(edge: &Edge, graph: &Graph) -> bool {
    multiplicity(edge, graph) == 1
}
