//! 数学基础类型
//!
//! 基于 nalgebra 的2D点/向量别名。

/// 2D点
pub type Point2 = nalgebra::Point2<f64>;

/// 2D向量
pub type Vector2 = nalgebra::Vector2<f64>;

/// 浮点比较容差
pub const EPSILON: f64 = 1e-9;
