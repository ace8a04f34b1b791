//! 坐标输入解析
//!
//! 支持的输入格式：
//! - 绝对坐标: `100,50`
//!
//! 用于把文本形式的参考点转换为 [`Point2`]。

use crate::math::Point2;

/// 解析错误
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// 无效格式
    InvalidFormat(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// 解析 `x,y` 形式的坐标
pub fn parse_point(input: &str) -> Result<Point2, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::InvalidFormat("Empty input".to_string()));
    }

    let Some((x_str, y_str)) = input.split_once(',') else {
        return Err(ParseError::InvalidFormat(format!(
            "Expected 'x,y', got: {}",
            input
        )));
    };

    let x = x_str
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidFormat(format!("Invalid x coordinate: {}", x_str)))?;
    let y = y_str
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidFormat(format!("Invalid y coordinate: {}", y_str)))?;

    Ok(Point2::new(x, y))
}
