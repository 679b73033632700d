use super::Table;
use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for a finished table.
pub trait TableSink {
    fn write_table(&self, table: &Table, index_column: bool) -> Result<()>;
}

/// Writes CSV to a file. The file only appears once the whole table is
/// written; a failed run leaves no partial output behind.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSink for CsvSink {
    fn write_table(&self, table: &Table, index_column: bool) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        {
            let mut w = std::io::BufWriter::new(tmp.as_file_mut());
            write_csv(&mut w, table, index_column)?;
            w.flush()?;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))?;
        }
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Header row then one record per row, `\n` terminated. With
/// `index_column`, a leading unnamed column carries the 0-based row index.
pub fn write_csv<W: Write>(w: W, table: &Table, index_column: bool) -> Result<()> {
    table.check()?;
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(w);

    let mut header: Vec<&str> = Vec::with_capacity(table.names().len() + 1);
    if index_column {
        header.push("");
    }
    header.extend(table.names().iter().map(String::as_str));
    wtr.write_record(&header)?;

    let mut rec = Vec::with_capacity(header.len());
    for (i, row) in table.rows().enumerate() {
        rec.clear();
        if index_column {
            rec.push(i.to_string());
        }
        rec.extend(row.iter().map(|v| v.to_string()));
        wtr.write_record(&rec)?;
    }
    wtr.flush()?;
    Ok(())
}
