//! 实体定义
//!
//! 实体 = 唯一标识符 + 几何数据。导出过程中实体只读，
//! 生命周期由调用方管理，一次导出结束后不再保留。

use crate::geometry::Geometry;

/// 实体唯一标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 图形实体
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub geometry: Geometry,
}

impl Entity {
    pub fn new(id: EntityId, geometry: Geometry) -> Self {
        Self { id, geometry }
    }

    /// 实体的类型判别标签
    pub fn kind(&self) -> &'static str {
        self.geometry.type_name()
    }
}
