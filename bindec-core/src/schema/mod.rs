use crate::error::{BindecError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod pear;
pub mod scale;

/// How the bytes of one field are read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Little-endian u32
    UIntLe,
    /// Big-endian u32 reinterpreted as two's-complement i32
    IntBeTwosComplement,
    /// Little-endian IEEE-754 f32
    FloatLe,
}

impl FieldKind {
    pub const fn width(self) -> usize {
        4
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Field {
    pub name: &'static str,
    /// Offset inside the record, marker bytes included
    pub offset: usize,
    pub kind: FieldKind,
    /// Floor-divide integers by this after decoding
    pub divisor: Option<i64>,
    /// Render floats as fixed-point text with this many decimals
    pub decimals: Option<usize>,
}

impl Field {
    pub const fn width(&self) -> usize {
        self.kind.width()
    }
}

#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub record_size: usize,
    /// Leading bytes of each record that carry no field
    pub marker_len: usize,
    pub fields: &'static [Field],
    /// Emit a synthetic 0-based row index as the first CSV column
    pub index_column: bool,
    pub default_header_size: u64,
    pub default_footer_size: u64,
}

impl Schema {
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Pear,
    Scale,
}

impl Format {
    pub fn schema(self) -> &'static Schema {
        match self {
            Format::Pear => &pear::SCHEMA,
            Format::Scale => &scale::SCHEMA,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema().name)
    }
}

impl FromStr for Format {
    type Err = BindecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pear" => Ok(Format::Pear),
            "scale" => Ok(Format::Scale),
            other => Err(BindecError::Format(format!("unknown format: {other}"))),
        }
    }
}
