//! 图分析模块
//!
//! 只读的纯函数集合，只接受 `&Edge` / `&Graph`，从不修改输入：
//! - [`edge`]：边的相等性、环/连接判定、重数
//! - [`graph`]：阶、规模、重数、简单图/多重图/伪图分类、补图

pub mod edge;
pub mod graph;

pub use graph::GraphSummary;
