//! 导出错误定义

use coordex_core::anchor::ResolveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // 锚点解析错误原样上抛，调用方需要知道是哪个实体失败
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("DXF error: {0}")]
    Dxf(String),
}
