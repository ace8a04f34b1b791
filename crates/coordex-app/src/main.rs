//! Coordex 命令行入口
//!
//! 从DXF图纸中按类型选取实体，把每个实体的锚点
//! 相对参考点的坐标导出为CSV，并用系统默认查看器打开。

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use coordex_core::anchor::AnchorResolver;
use coordex_core::input_parser::parse_point;
use coordex_file::{export, load_selection, NumberFormat};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// 坐标导出工具
#[derive(Parser)]
#[command(name = "coordex", version, about)]
struct Cli {
    /// DXF图纸路径
    drawing: PathBuf,

    /// 导出的实体类型
    #[arg(long, short, value_enum, default_value = "circle")]
    kind: Kind,

    /// 参考点，格式 "x,y"
    #[arg(long, short)]
    reference: String,

    /// 输出CSV路径（默认写入临时目录，文件名随机）
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// 数字格式
    #[arg(long, value_enum, default_value = "comma")]
    locale: Locale,

    /// 导出后不打开查看器
    #[arg(long)]
    no_open: bool,
}

/// 可导出的实体类型
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// 圆（锚点为圆心）
    Circle,
    /// 块引用（锚点为插入点）
    Block,
}

impl Kind {
    fn dxf_name(self) -> &'static str {
        match self {
            Kind::Circle => "CIRCLE",
            Kind::Block => "INSERT",
        }
    }
}

/// 数字格式选项
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Locale {
    /// 点作小数点，逗号分隔字段
    Point,
    /// 逗号作小数点，分号分隔字段
    Comma,
}

impl Locale {
    fn number_format(self) -> NumberFormat {
        match self {
            Locale::Point => NumberFormat::decimal_point(),
            Locale::Comma => NumberFormat::decimal_comma(),
        }
    }
}

/// 用系统默认程序打开文件
fn open_with_default_viewer(path: &Path) -> Result<()> {
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = std::process::Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    };

    #[cfg(target_os = "macos")]
    let mut command = {
        let mut command = std::process::Command::new("open");
        command.arg(path);
        command
    };

    #[cfg(all(unix, not(target_os = "macos")))]
    let mut command = {
        let mut command = std::process::Command::new("xdg-open");
        command.arg(path);
        command
    };

    command
        .spawn()
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    let cli = Cli::parse();

    let reference = parse_point(&cli.reference).context("Invalid reference point")?;
    let entities = load_selection(&cli.drawing, cli.kind.dxf_name())?;

    // 每次运行生成唯一的目标路径，避免并发运行互相覆盖
    let output = cli
        .output
        .unwrap_or_else(|| std::env::temp_dir().join(format!("{}.csv", uuid::Uuid::new_v4())));

    let resolver = AnchorResolver::standard();
    let written = export(
        reference,
        &entities,
        &output,
        cli.locale.number_format(),
        &resolver,
    )?;

    info!("Done: {}", written.display());

    if !cli.no_open {
        open_with_default_viewer(&written)?;
    }

    Ok(())
}
