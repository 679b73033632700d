use super::{Field, FieldKind, Schema};

pub const RECORD_SIZE: usize = 78;
pub const HEADER_SIZE: u64 = 0x200;
pub const FOOTER_SIZE: u64 = 0;
pub const MARKER_LEN: usize = 2;
/// Raw absorbance counts are stored at 20x scale.
pub const ABSORBANCE_DIVISOR: i64 = 20;

// Wavelength columns: 190..=360 nm in steps of 10.
const fn wavelength(name: &'static str, slot: usize) -> Field {
    Field {
        name,
        offset: MARKER_LEN + slot * 4,
        kind: FieldKind::IntBeTwosComplement,
        divisor: Some(ABSORBANCE_DIVISOR),
        decimals: None,
    }
}

pub static SCHEMA: Schema = Schema {
    name: "scale",
    record_size: RECORD_SIZE,
    marker_len: MARKER_LEN,
    fields: &[
        Field {
            name: "Time (min)",
            offset: MARKER_LEN,
            kind: FieldKind::FloatLe,
            divisor: None,
            decimals: Some(4),
        },
        wavelength("190", 1),
        wavelength("200", 2),
        wavelength("210", 3),
        wavelength("220", 4),
        wavelength("230", 5),
        wavelength("240", 6),
        wavelength("250", 7),
        wavelength("260", 8),
        wavelength("270", 9),
        wavelength("280", 10),
        wavelength("290", 11),
        wavelength("300", 12),
        wavelength("310", 13),
        wavelength("320", 14),
        wavelength("330", 15),
        wavelength("340", 16),
        wavelength("350", 17),
        wavelength("360", 18),
    ],
    index_column: false,
    default_header_size: HEADER_SIZE,
    default_footer_size: FOOTER_SIZE,
};
