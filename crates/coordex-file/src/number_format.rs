//! 数字格式约定
//!
//! 显式的小数点/字段分隔符组合，替代环境区域设置，
//! 保证输出确定、可测试。小数点为逗号时字段分隔符用分号，
//! 避免CSV歧义。

/// 数字格式：小数点符号 + 字段分隔符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// 小数点符号
    pub decimal_mark: char,
    /// CSV字段分隔符
    pub field_separator: char,
}

impl NumberFormat {
    /// 点作小数点，逗号分隔字段
    pub const fn decimal_point() -> Self {
        Self {
            decimal_mark: '.',
            field_separator: ',',
        }
    }

    /// 逗号作小数点，分号分隔字段
    pub const fn decimal_comma() -> Self {
        Self {
            decimal_mark: ',',
            field_separator: ';',
        }
    }

    /// 按两位小数渲染数值
    pub fn format(&self, value: f64) -> String {
        let rendered = format!("{:.2}", value);
        if self.decimal_mark == '.' {
            rendered
        } else {
            rendered.replace('.', &self.decimal_mark.to_string())
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::decimal_point()
    }
}
