//! 锚点解析
//!
//! 把一个实体归约为单个代表性2D点：
//! - 圆 → 圆心
//! - 块引用 → 插入点
//!
//! 解析规则按类型判别标签注册在查找表中，新增实体类型只需
//! 调用 [`AnchorResolver::register`]，不需要改动任何调用方。

use crate::entity::{Entity, EntityId};
use crate::geometry::Geometry;
use crate::math::Point2;
use std::collections::HashMap;

/// 锚点提取函数
///
/// 返回 `None` 表示该实体虽然类型匹配，但无法得到有效锚点
/// （例如坐标为 NaN/无穷）。
pub type AnchorFn = fn(&Geometry) -> Option<Point2>;

/// 解析错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// 判别标签没有对应的解析规则
    UnsupportedKind { id: EntityId, kind: &'static str },
    /// 类型匹配但锚点缺失/未定义
    MissingAnchor { id: EntityId, kind: &'static str },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::UnsupportedKind { id, kind } => {
                write!(f, "Unsupported entity kind {} for entity {}", kind, id)
            }
            ResolveError::MissingAnchor { id, kind } => {
                write!(f, "Entity {} ({}) has no anchor point", id, kind)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// 锚点解析器
pub struct AnchorResolver {
    table: HashMap<&'static str, AnchorFn>,
}

impl AnchorResolver {
    /// 创建空解析器（不含任何规则）
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// 创建标准解析器：圆→圆心，块引用→插入点
    pub fn standard() -> Self {
        let mut resolver = Self::empty();
        resolver.register("CIRCLE", |g| match g {
            Geometry::Circle(c) => finite(c.center),
            _ => None,
        });
        resolver.register("INSERT", |g| match g {
            Geometry::Insert(i) => finite(i.position),
            _ => None,
        });
        resolver
    }

    /// 注册一种实体类型的锚点提取规则
    pub fn register(&mut self, kind: &'static str, extract: AnchorFn) {
        self.table.insert(kind, extract);
    }

    /// 判别标签是否有对应规则
    pub fn supports(&self, kind: &str) -> bool {
        self.table.contains_key(kind)
    }

    /// 解析实体的锚点
    ///
    /// 无规则 → [`ResolveError::UnsupportedKind`]；
    /// 有规则但锚点无效 → [`ResolveError::MissingAnchor`]。
    /// 绝不回退到默认点（如原点）。
    pub fn resolve(&self, entity: &Entity) -> Result<Point2, ResolveError> {
        let kind = entity.kind();
        let extract = self.table.get(kind).ok_or(ResolveError::UnsupportedKind {
            id: entity.id,
            kind,
        })?;
        extract(&entity.geometry).ok_or(ResolveError::MissingAnchor {
            id: entity.id,
            kind,
        })
    }
}

impl Default for AnchorResolver {
    fn default() -> Self {
        Self::standard()
    }
}

/// 坐标全部有限时返回该点
fn finite(point: Point2) -> Option<Point2> {
    if point.x.is_finite() && point.y.is_finite() {
        Some(point)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Insert, Line, Text};

    fn circle(id: u64, x: f64, y: f64) -> Entity {
        Entity::new(
            EntityId(id),
            Geometry::Circle(Circle::new(Point2::new(x, y), 1.0)),
        )
    }

    #[test]
    fn test_resolve_circle_center() {
        let resolver = AnchorResolver::standard();
        let anchor = resolver.resolve(&circle(1, 3.0, -4.5)).unwrap();
        assert_eq!(anchor, Point2::new(3.0, -4.5));
    }

    #[test]
    fn test_resolve_insert_position() {
        let resolver = AnchorResolver::standard();
        let entity = Entity::new(
            EntityId(2),
            Geometry::Insert(Insert::new("BOLT", Point2::new(10.0, 20.0))),
        );
        let anchor = resolver.resolve(&entity).unwrap();
        assert_eq!(anchor, Point2::new(10.0, 20.0));
    }

    #[test]
    fn test_unsupported_kind() {
        let resolver = AnchorResolver::standard();
        let entity = Entity::new(
            EntityId(3),
            Geometry::Line(Line::new(Point2::origin(), Point2::new(1.0, 1.0))),
        );
        let err = resolver.resolve(&entity).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnsupportedKind {
                id: EntityId(3),
                kind: "LINE"
            }
        );
    }

    #[test]
    fn test_missing_anchor() {
        let resolver = AnchorResolver::standard();
        let err = resolver.resolve(&circle(4, f64::NAN, 0.0)).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingAnchor {
                id: EntityId(4),
                kind: "CIRCLE"
            }
        );
    }

    #[test]
    fn test_register_new_kind() {
        // 注册新类型不需要改动 resolve 调用方
        let mut resolver = AnchorResolver::standard();
        resolver.register("TEXT", |g| match g {
            Geometry::Text(t) => Some(t.position),
            _ => None,
        });

        let entity = Entity::new(
            EntityId(5),
            Geometry::Text(Text::new(Point2::new(7.0, 8.0), "label", 2.5)),
        );
        assert!(resolver.supports("TEXT"));
        assert_eq!(resolver.resolve(&entity).unwrap(), Point2::new(7.0, 8.0));
    }
}
