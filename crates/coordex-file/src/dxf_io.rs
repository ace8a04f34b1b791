//! DXF选区读取
//!
//! 从DXF文件按实体类型过滤读取实体，
//! 等价于宿主CAD里按类型过滤的选择集。

use crate::error::ExportError;
use coordex_core::entity::{Entity, EntityId};
use coordex_core::geometry::{Circle, Geometry, Insert, Line, Text};
use coordex_core::math::Point2;
use std::path::Path;

/// 从DXF文件读取指定类型的实体
///
/// `kind` 是DXF类型名（如 `"CIRCLE"`、`"INSERT"`），
/// 其余类型全部跳过。实体按文件中出现的顺序编号。
pub fn load_selection(path: &Path, kind: &str) -> Result<Vec<Entity>, ExportError> {
    let drawing = dxf::Drawing::load_file(path).map_err(|e| ExportError::Dxf(e.to_string()))?;

    let mut entities = Vec::new();
    for dxf_entity in drawing.entities() {
        let Some(geometry) = convert_dxf_entity(dxf_entity) else {
            continue;
        };
        if geometry.type_name() != kind {
            continue;
        }
        let id = EntityId(entities.len() as u64 + 1);
        entities.push(Entity::new(id, geometry));
    }

    tracing::info!(
        "Loaded {} {} entities from {}",
        entities.len(),
        kind,
        path.display()
    );

    Ok(entities)
}

/// 将DXF实体转换为Coordex几何
fn convert_dxf_entity(entity: &dxf::entities::Entity) -> Option<Geometry> {
    let geometry = match &entity.specific {
        dxf::entities::EntityType::Circle(circle) => {
            let center = Point2::new(circle.center.x, circle.center.y);
            Geometry::Circle(Circle::new(center, circle.radius))
        }

        dxf::entities::EntityType::Insert(insert) => {
            let position = Point2::new(insert.location.x, insert.location.y);
            Geometry::Insert(Insert::new(insert.name.clone(), position))
        }

        dxf::entities::EntityType::Line(line) => {
            let start = Point2::new(line.p1.x, line.p1.y);
            let end = Point2::new(line.p2.x, line.p2.y);
            Geometry::Line(Line::new(start, end))
        }

        dxf::entities::EntityType::Text(text) => {
            let position = Point2::new(text.location.x, text.location.y);
            Geometry::Text(Text::new(position, text.value.clone(), text.text_height))
        }

        // 其他类型与导出无关
        _ => return None,
    };

    Some(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dxf_circle(x: f64, y: f64, radius: f64) -> dxf::entities::Entity {
        let mut circle = dxf::entities::Circle::default();
        circle.center = dxf::Point::new(x, y, 0.0);
        circle.radius = radius;
        dxf::entities::Entity::new(dxf::entities::EntityType::Circle(circle))
    }

    fn dxf_insert(name: &str, x: f64, y: f64) -> dxf::entities::Entity {
        let mut insert = dxf::entities::Insert::default();
        insert.name = name.to_string();
        insert.location = dxf::Point::new(x, y, 0.0);
        dxf::entities::Entity::new(dxf::entities::EntityType::Insert(insert))
    }

    #[test]
    fn test_convert_circle() {
        let converted = convert_dxf_entity(&dxf_circle(1.5, -2.0, 3.0)).unwrap();
        match converted {
            Geometry::Circle(c) => {
                assert_eq!(c.center, Point2::new(1.5, -2.0));
                assert_eq!(c.radius, 3.0);
            }
            other => panic!("Expected circle, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_convert_insert() {
        let converted = convert_dxf_entity(&dxf_insert("BOLT", 10.0, 20.0)).unwrap();
        match converted {
            Geometry::Insert(i) => {
                assert_eq!(i.name, "BOLT");
                assert_eq!(i.position, Point2::new(10.0, 20.0));
            }
            other => panic!("Expected insert, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_load_selection_filters_by_kind() {
        let file_path = std::env::temp_dir().join("coordex_selection.dxf");

        let mut drawing = dxf::Drawing::new();
        drawing.add_entity(dxf_circle(0.0, 0.0, 1.0));
        drawing.add_entity(dxf_insert("BOLT", 5.0, 5.0));
        drawing.add_entity(dxf_circle(2.0, 3.0, 0.5));
        drawing.save_file(&file_path).expect("Failed to save");

        let circles = load_selection(&file_path, "CIRCLE").expect("Failed to load");
        assert_eq!(circles.len(), 2);
        assert!(circles.iter().all(|e| e.kind() == "CIRCLE"));
        assert_eq!(circles[0].id, EntityId(1));
        assert_eq!(circles[1].id, EntityId(2));

        let inserts = load_selection(&file_path, "INSERT").expect("Failed to load");
        assert_eq!(inserts.len(), 1);

        let texts = load_selection(&file_path, "TEXT").expect("Failed to load");
        assert!(texts.is_empty());

        std::fs::remove_file(&file_path).ok();
    }
}
