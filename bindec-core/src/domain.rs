// bindec_core/src/domain.rs
use std::fmt;

/// One decoded scalar cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    UInt(u64),
    Int(i64),
    /// Fixed-precision text, e.g. the 4-decimal time column of scale records.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::UInt(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

pub type DecodedRow = Vec<Value>;

#[derive(Clone, Debug)]
pub struct ExportReport {
    pub input: std::path::PathBuf,
    pub output: std::path::PathBuf,
    pub rows: u64,
    /// Trailing body bytes too short to form one more record.
    pub dropped_bytes: u64,
}
