use super::{Field, FieldKind, Schema};

pub const RECORD_SIZE: usize = 8;
pub const HEADER_SIZE: u64 = 0x140;
pub const FOOTER_SIZE: u64 = 0x1e0;

const fn le_u32(name: &'static str, offset: usize) -> Field {
    Field {
        name,
        offset,
        kind: FieldKind::UIntLe,
        divisor: None,
        decimals: None,
    }
}

pub static SCHEMA: Schema = Schema {
    name: "pear",
    record_size: RECORD_SIZE,
    marker_len: 0,
    fields: &[le_u32("Time (ms)", 0), le_u32("Intensity", 4)],
    index_column: true,
    default_header_size: HEADER_SIZE,
    default_footer_size: FOOTER_SIZE,
};
