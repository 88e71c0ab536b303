use serde::{Deserialize, Serialize};

/// Zero-based positions of the columns the report reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    #[serde(default = "default_year_column")]
    pub year: usize,
    #[serde(default = "default_product_column")]
    pub product: usize,
    #[serde(default = "default_company_column")]
    pub company: usize,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            year: default_year_column(),
            product: default_product_column(),
            company: default_company_column(),
        }
    }
}

impl ColumnConfig {
    /// Fewest fields a data row may carry.
    #[must_use]
    pub fn required_fields(&self) -> usize {
        self.year.max(self.product).max(self.company) + 1
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the even integer (12.5 -> 12, 13.5 -> 14).
    #[default]
    HalfEven,
    /// Ties go up (12.5 -> 13).
    HalfUp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTerminator {
    #[default]
    Lf,
    Crlf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub columns: ColumnConfig,
    #[serde(default = "default_year_width")]
    pub year_width: usize,
    #[serde(default = "default_true")]
    pub skip_header: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub rounding: RoundingMode,
    #[serde(default)]
    pub line_terminator: LineTerminator,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            columns: ColumnConfig::default(),
            year_width: default_year_width(),
            skip_header: true,
            delimiter: default_delimiter(),
            rounding: RoundingMode::default(),
            line_terminator: LineTerminator::default(),
        }
    }
}

const fn default_true() -> bool { true }
const fn default_year_column() -> usize { 0 }
const fn default_product_column() -> usize { 1 }
const fn default_company_column() -> usize { 7 }
const fn default_year_width() -> usize { 4 }
const fn default_delimiter() -> char { ',' }
