//! 几何图元定义
//!
//! 支持的图元：
//! - 圆 (Circle)
//! - 块引用 (Insert)
//! - 线段 (Line)
//! - 文本 (Text)

use crate::math::Point2;

/// 几何类型枚举
#[derive(Debug, Clone)]
pub enum Geometry {
    Circle(Circle),
    Insert(Insert),
    Line(Line),
    Text(Text),
    // 未来扩展
    // Arc(Arc),
    // Polyline(Polyline),
}

impl Geometry {
    /// 获取几何的类型名称（DXF类型名，用作判别标签）
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Circle(_) => "CIRCLE",
            Geometry::Insert(_) => "INSERT",
            Geometry::Line(_) => "LINE",
            Geometry::Text(_) => "TEXT",
        }
    }
}

/// 圆
#[derive(Debug, Clone)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// 计算周长
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// 计算面积
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

/// 块引用
#[derive(Debug, Clone)]
pub struct Insert {
    /// 块名称
    pub name: String,
    /// 插入点
    pub position: Point2,
}

impl Insert {
    pub fn new(name: impl Into<String>, position: Point2) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// 线段
#[derive(Debug, Clone)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// 文本
#[derive(Debug, Clone)]
pub struct Text {
    /// 插入点
    pub position: Point2,
    /// 文本内容
    pub content: String,
    /// 文本高度
    pub height: f64,
}

impl Text {
    pub fn new(position: Point2, content: impl Into<String>, height: f64) -> Self {
        Self {
            position,
            content: content.into(),
            height,
        }
    }
}
