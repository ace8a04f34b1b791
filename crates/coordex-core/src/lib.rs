//! Coordex 核心
//!
//! 提供2D几何图元、实体模型和锚点解析功能。
//!
//! # 架构设计
//!
//! 每个实体由两部分组成：
//! - `EntityId`: 唯一标识符
//! - `Geometry`: 几何数据（圆、块引用等），其类型名即判别标签
//!
//! 锚点解析器（`AnchorResolver`）按判别标签查表，把一个实体归约为
//! 单个代表性2D点；新的实体类型通过注册加入，无需改动调用方。
//!
//! # 示例
//!
//! ```rust
//! use coordex_core::prelude::*;
//!
//! let resolver = AnchorResolver::standard();
//! let circle = Entity::new(EntityId(1), Geometry::Circle(Circle::new(Point2::new(3.0, 4.0), 1.5)));
//!
//! let anchor = resolver.resolve(&circle).unwrap();
//! assert_eq!(anchor, Point2::new(3.0, 4.0));
//! ```

pub mod anchor;
pub mod entity;
pub mod geometry;
pub mod input_parser;
pub mod math;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::anchor::{AnchorResolver, ResolveError};
    pub use crate::entity::{Entity, EntityId};
    pub use crate::geometry::{Circle, Geometry, Insert, Line, Text};
    pub use crate::input_parser::{parse_point, ParseError};
    pub use crate::math::{Point2, Vector2};
}
