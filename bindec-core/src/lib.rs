#![forbid(unsafe_code)]

pub mod error;

pub mod container {
    pub mod frame;
    pub mod layout;
}

pub mod decode;
pub mod domain;
pub mod pipeline;
pub mod schema;
pub mod table;

// Re-exports: stable API surface
pub use container::frame::{FrameReader, RawChunk};
pub use container::layout::{BodyRange, FileLayout};
pub use decode::RecordDecoder;
pub use domain::{DecodedRow, ExportReport, Value};
pub use pipeline::{
    DecodeOptions, collect_inputs, decode_file, decode_reader, default_output_path, export,
    export_many, inspect,
};
pub use schema::Format;
pub use table::Table;
pub use table::csv_sink::{CsvSink, TableSink};
