use crate::container::frame::RawChunk;
use crate::domain::{DecodedRow, Value};
use crate::error::{BindecError, Result};
use crate::schema::{Field, FieldKind, Schema};

pub const MARKER_COLUMN: &str = "Marker";

/// Decodes records of one schema into rows.
#[derive(Clone, Copy, Debug)]
pub struct RecordDecoder {
    schema: &'static Schema,
    expose_marker: bool,
}

impl RecordDecoder {
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            expose_marker: false,
        }
    }

    /// Prepend the record's marker bytes (hex) as an extra column.
    /// No-op for schemas without a marker.
    pub fn with_marker(mut self, expose: bool) -> Self {
        self.expose_marker = expose && self.schema.marker_len > 0;
        self
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn columns(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.schema.fields.len() + 1);
        if self.expose_marker {
            out.push(MARKER_COLUMN.to_string());
        }
        out.extend(self.schema.column_names().map(str::to_string));
        out
    }

    pub fn decode(&self, chunk: &RawChunk) -> Result<DecodedRow> {
        self.decode_bytes(chunk.as_bytes())
    }

    pub fn decode_bytes(&self, rec: &[u8]) -> Result<DecodedRow> {
        if rec.len() != self.schema.record_size {
            return Err(BindecError::Format(format!(
                "{} record size mismatch: got {} bytes, expected {}",
                self.schema.name,
                rec.len(),
                self.schema.record_size
            )));
        }
        let mut row = Vec::with_capacity(self.schema.fields.len() + 1);
        if self.expose_marker {
            row.push(Value::Text(hex::encode(&rec[..self.schema.marker_len])));
        }
        for f in self.schema.fields {
            row.push(decode_field(f, &rec[f.offset..f.offset + f.width()])?);
        }
        Ok(row)
    }
}

fn decode_field(f: &Field, bytes: &[u8]) -> Result<Value> {
    let b: [u8; 4] = bytes
        .try_into()
        .map_err(|_| BindecError::Format(format!("field {}: bad width {}", f.name, bytes.len())))?;
    let v = match f.kind {
        FieldKind::UIntLe => {
            let v = u32::from_le_bytes(b) as u64;
            match f.divisor {
                Some(d) if d > 0 => Value::UInt(v / d as u64),
                Some(d) => Value::Int(floor_div(v as i64, d)?),
                None => Value::UInt(v),
            }
        }
        FieldKind::IntBeTwosComplement => {
            let v = twos_complement(u32::from_be_bytes(b));
            match f.divisor {
                Some(d) => Value::Int(floor_div(v, d)?),
                None => Value::Int(v),
            }
        }
        FieldKind::FloatLe => {
            let v = f32::from_le_bytes(b);
            Value::Text(fixed_point(v, f.decimals.unwrap_or(6)))
        }
    };
    Ok(v)
}

/// Signed value of a 32-bit pattern: subtract 2^32 when the top bit is set.
pub fn twos_complement(u: u32) -> i64 {
    let u = u as i64;
    if u >= 1 << 31 { u - (1 << 32) } else { u }
}

/// Division rounding toward negative infinity.
pub fn floor_div(a: i64, d: i64) -> Result<i64> {
    if d == 0 {
        return Err(BindecError::Format("division by zero in field scale".into()));
    }
    let q = a / d;
    if a % d != 0 && ((a < 0) != (d < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

/// Fixed-point rendering of a decoded float; non-finite values are spelled
/// `nan`, `inf` and `-inf`.
pub fn fixed_point(v: f32, decimals: usize) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    format!("{:.*}", decimals, v as f64)
}
