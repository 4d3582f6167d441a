//! Raw column content classification.

use tracklab_model::schema;

use crate::normalization::numeric::parse_grouped_f64;

/// What a raw export column holds, judged from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass {
    /// At least one populated cell is colon-separated clock text.
    Duration,
    /// Every populated cell parses as a (possibly grouped) decimal.
    Numeric,
    /// Anything else, including columns with no populated cells.
    Text,
}

impl ColumnClass {
    pub fn label(self) -> &'static str {
        match self {
            ColumnClass::Duration => "duration",
            ColumnClass::Numeric => "numeric",
            ColumnClass::Text => "text",
        }
    }
}

/// True for cells that carry no measurement: empty or the `--` sentinel.
pub fn is_missing(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || trimmed == schema::MISSING_SENTINEL
}

/// The coercion rule for durations: any populated cell with a colon makes
/// the whole column a duration column.
pub fn has_duration_cells(values: &[&str]) -> bool {
    values
        .iter()
        .any(|cell| !is_missing(cell) && cell.contains(':'))
}

pub fn classify_column(values: &[&str]) -> ColumnClass {
    if has_duration_cells(values) {
        return ColumnClass::Duration;
    }
    let mut populated = 0usize;
    for cell in values {
        if is_missing(cell) {
            continue;
        }
        populated += 1;
        if parse_grouped_f64(cell).is_none() {
            return ColumnClass::Text;
        }
    }
    if populated == 0 {
        ColumnClass::Text
    } else {
        ColumnClass::Numeric
    }
}
