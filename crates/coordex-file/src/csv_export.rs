//! 坐标CSV导出
//!
//! 导出流程：
//! 1. 解析每个实体的锚点（任一失败则整体中止，不落盘）
//! 2. 锚点减参考点得到相对坐标，每轴独立四舍五入到两位小数
//! 3. 按实际写出的值排序：x 降序，再 y 降序
//! 4. 写出表头 `X<sep>Y` 和数据行
//!
//! 数值采用远离零的四舍五入（half away from zero）。
//! 换行符固定为 LF，保证跨平台逐次运行输出一致。

use crate::error::ExportError;
use crate::number_format::NumberFormat;
use coordex_core::anchor::AnchorResolver;
use coordex_core::entity::Entity;
use coordex_core::math::Point2;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 四舍五入到两位小数（远离零），并把 -0.0 归一化为 0.0
fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// 导出实体锚点相对参考点的坐标到CSV文件
///
/// 所有行先在内存中组装完毕才创建目标文件，
/// 因此解析失败时不会留下部分写入的文件。
/// 成功时返回写入的文件路径。
pub fn export(
    reference: Point2,
    entities: &[Entity],
    path: &Path,
    format: NumberFormat,
    resolver: &AnchorResolver,
) -> Result<PathBuf, ExportError> {
    // 先解析全部锚点并计算相对坐标
    let mut rows = Vec::with_capacity(entities.len());
    for entity in entities {
        let anchor = resolver.resolve(entity)?;
        rows.push((
            round2(anchor.x - reference.x),
            round2(anchor.y - reference.y),
        ));
    }

    // 按写出的值排序；sort_by 是稳定排序，完全相等时保持输入顺序
    rows.sort_by(|a, b| b.0.total_cmp(&a.0).then(b.1.total_cmp(&a.1)));

    let sep = format.field_separator;
    let mut content = String::with_capacity(16 * (rows.len() + 1));
    content.push('X');
    content.push(sep);
    content.push('Y');
    content.push('\n');
    for (x, y) in &rows {
        content.push_str(&format.format(*x));
        content.push(sep);
        content.push_str(&format.format(*y));
        content.push('\n');
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    tracing::info!(
        "Exported {} coordinates to {}",
        rows.len(),
        path.display()
    );

    Ok(path.to_path_buf())
}
