use crate::container::frame::FrameReader;
use crate::container::layout::{BodyRange, FileLayout};
use crate::decode::RecordDecoder;
use crate::domain::ExportReport;
use crate::error::Result;
use crate::schema::Format;
use crate::table::Table;
use crate::table::csv_sink::{CsvSink, TableSink};
use rayon::prelude::*;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Clone, Debug, Default)]
pub struct DecodeOptions {
    /// Overrides the format's default header size.
    pub header_size: Option<u64>,
    /// Overrides the format's default footer size.
    pub footer_size: Option<u64>,
    /// Emit each record's marker bytes as a leading `Marker` column (scale only).
    pub expose_marker: bool,
    /// Output path; defaults to `<input>.csv`. Ignored by `export_many`.
    pub out: Option<PathBuf>,
}

impl Format {
    pub fn layout(self, opts: &DecodeOptions) -> Result<FileLayout> {
        let s = self.schema();
        FileLayout::new(
            opts.header_size.unwrap_or(s.default_header_size),
            opts.footer_size.unwrap_or(s.default_footer_size),
            s.record_size as u64,
        )
    }

    pub fn decoder(self, opts: &DecodeOptions) -> RecordDecoder {
        RecordDecoder::new(self.schema()).with_marker(opts.expose_marker)
    }
}

pub fn default_output_path(input: &Path) -> PathBuf {
    let mut s = input.as_os_str().to_owned();
    s.push(".csv");
    PathBuf::from(s)
}

fn decode_frames<R: Read>(frames: FrameReader<R>, dec: &RecordDecoder) -> Result<Table> {
    let body = frames.body();
    let mut table = Table::new(dec.columns());
    for chunk in frames {
        table.push_row(dec.decode(&chunk?)?)?;
    }
    if body.remainder > 0 {
        tracing::warn!(
            bytes = body.remainder,
            record_size = dec.schema().record_size,
            "trailing partial record dropped"
        );
    }
    Ok(table)
}

/// Decode every whole record in the body of `path`.
pub fn decode_file(path: &Path, format: Format, opts: &DecodeOptions) -> Result<Table> {
    let frames = FrameReader::open(path, format.layout(opts)?)?;
    decode_frames(frames, &format.decoder(opts))
}

/// Same as [`decode_file`] for an already-open source of `len` bytes.
pub fn decode_reader<R: Read + Seek>(
    r: R,
    len: u64,
    format: Format,
    opts: &DecodeOptions,
) -> Result<Table> {
    let frames = FrameReader::from_reader(r, len, format.layout(opts)?)?;
    decode_frames(frames, &format.decoder(opts))
}

/// Framing summary without decoding anything.
pub fn inspect(path: &Path, format: Format, opts: &DecodeOptions) -> Result<BodyRange> {
    let len = std::fs::metadata(path)?.len();
    Ok(format.layout(opts)?.body(len))
}

/// Decode `input` and write the table as CSV.
pub fn export(input: &Path, format: Format, opts: &DecodeOptions) -> Result<ExportReport> {
    let layout = format.layout(opts)?;
    let frames = FrameReader::open(input, layout)?;
    let body = frames.body();
    let table = decode_frames(frames, &format.decoder(opts))?;

    let output = opts
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    CsvSink::new(&output).write_table(&table, format.schema().index_column)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        rows = table.len(),
        "exported"
    );
    Ok(ExportReport {
        input: input.to_path_buf(),
        output,
        rows: table.len() as u64,
        dropped_bytes: body.remainder,
    })
}

/// Export several files independently; results come back in input order.
pub fn export_many(
    inputs: &[PathBuf],
    format: Format,
    opts: &DecodeOptions,
) -> Vec<Result<ExportReport>> {
    let per_file = DecodeOptions {
        out: None,
        ..opts.clone()
    };
    inputs
        .par_iter()
        .map(|p| export(p, format, &per_file))
        .collect()
}

/// Expand directories into the regular files beneath them. Files that are
/// already CSV exports are skipped when found inside a directory.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for p in paths {
        if !p.is_dir() {
            out.push(p.clone());
            continue;
        }
        let mut found = Vec::new();
        for entry in WalkDir::new(p).follow_links(false) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_csv = entry
                .path()
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
            if !is_csv {
                found.push(entry.into_path());
            }
        }
        found.sort();
        out.extend(found);
    }
    Ok(out)
}
