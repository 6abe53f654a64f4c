//! 图分析
//!
//! 图的分类与派生。重数、包含判定都基于 [`edge::equal`]，
//! 以边自身的有向标志为准；图级别的有向标志只随补图传递。

use super::edge;
use crate::graph::{Edge, Graph};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 图的阶（顶点数）
pub fn order(graph: &Graph) -> usize {
    graph.order()
}

/// 图的规模（边数）
pub fn size(graph: &Graph) -> usize {
    graph.size()
}

/// 图的重数：所有边在图中重数的最大值，无边时为 0
///
/// 每条边都要扫描全部边，复杂度 O(|E|²)。
pub fn multiplicity(graph: &Graph) -> usize {
    graph
        .iter_edges()
        .map(|e| edge::multiplicity(e, graph))
        .max()
        .unwrap_or(0)
}

/// 是否存在环
pub fn has_loops(graph: &Graph) -> bool {
    graph.iter_edges().any(edge::is_loop)
}

/// 环的条数
pub fn loop_count(graph: &Graph) -> usize {
    graph.iter_edges().filter(|e| e.is_loop()).count()
}

// 分类规则只依赖 (是否有环, 图的重数)，谓词与快照共用

fn simple_by(has_loops: bool, multiplicity: usize) -> bool {
    !has_loops && multiplicity <= 1
}

fn multi_by(multiplicity: usize) -> bool {
    multiplicity != 1
}

fn pseudo_by(has_loops: bool, multiplicity: usize) -> bool {
    has_loops && multi_by(multiplicity)
}

/// 是否为简单图：无环且无重边
pub fn is_simple(graph: &Graph) -> bool {
    simple_by(has_loops(graph), multiplicity(graph))
}

/// 是否为多重图：重数不等于 1
///
/// 无边图的重数为 0，因此也被判定为多重图。
pub fn is_multi(graph: &Graph) -> bool {
    multi_by(multiplicity(graph))
}

/// 是否为伪图：有环且重数不等于 1
pub fn is_pseudo(graph: &Graph) -> bool {
    pseudo_by(has_loops(graph), multiplicity(graph))
}

/// 图中是否存在与给定边相等的边
pub fn contains_edge(graph: &Graph, candidate: &Edge) -> bool {
    graph.iter_edges().any(|e| edge::equal(e, candidate))
}

/// 给定边是否为反边（图中不存在与之相等的边）
pub fn is_anti_edge(graph: &Graph, candidate: &Edge) -> bool {
    !contains_edge(graph, candidate)
}

/// 构造补图
///
/// 补图与原图共享同一组顶点句柄。对 V × V 中的每个有序对 (u, v)
/// （含 u == v，且 (u, v) 与 (v, u) 分别枚举）构造一条无向候选边，
/// 若它是原图的反边则加入补图。重复顶点会产生重复候选边，不做去重。
/// 复杂度 O(|V|² · |E|)。
pub fn complement(graph: &Graph) -> Graph {
    let mut result = Graph::with_directed(graph.is_directed());
    result.add_vertices(graph.vertices());

    for u in graph.vertices() {
        for v in graph.vertices() {
            let candidate = Edge::undirected(u, v);
            if is_anti_edge(graph, &candidate) {
                result.add_edge(candidate);
            }
        }
    }

    debug!(
        order = graph.order(),
        candidates = graph.order() * graph.order(),
        kept = result.size(),
        "补图构造完成"
    );
    result
}

/// 图分类快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub directed: bool,
    pub order: usize,
    pub size: usize,
    pub multiplicity: usize,
    pub loops: usize,
    pub simple: bool,
    pub multi: bool,
    pub pseudo: bool,
}

/// 计算图的分类快照
pub fn summarize(graph: &Graph) -> GraphSummary {
    let multiplicity = multiplicity(graph);
    let loops = loop_count(graph);

    GraphSummary {
        directed: graph.is_directed(),
        order: graph.order(),
        size: graph.size(),
        multiplicity,
        loops,
        simple: simple_by(loops > 0, multiplicity),
        multi: multi_by(multiplicity),
        pseudo: pseudo_by(loops > 0, multiplicity),
    }
}
