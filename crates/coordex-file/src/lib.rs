//! Coordex 文件处理
//!
//! 支持：
//! - 坐标CSV导出（相对坐标、两位小数、可配置数字格式）
//! - 从 `.dxf` 文件按实体类型读取选区

pub mod csv_export;
pub mod dxf_io;
pub mod error;
pub mod number_format;

pub use csv_export::export;
pub use dxf_io::load_selection;
pub use error::ExportError;
pub use number_format::NumberFormat;
