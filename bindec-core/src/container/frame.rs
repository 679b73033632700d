use super::layout::{BodyRange, FileLayout};
use crate::error::Result;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom, Take};
use std::path::Path;

/// Exactly `record_size` bytes from one body position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawChunk(Vec<u8>);

impl RawChunk {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for RawChunk {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Yields fixed-size records from the body of a file. Reads never cross into
/// the footer, and a trailing partial record is dropped without error.
pub struct FrameReader<R: Read> {
    inner: Take<R>,
    record_size: usize,
    body: BodyRange,
    done: bool,
}

impl FrameReader<File> {
    pub fn open(path: &Path, layout: FileLayout) -> Result<Self> {
        let f = File::open(path)?;
        let file_size = f.metadata()?.len();
        if layout.is_short(file_size) {
            tracing::warn!(
                path = %path.display(),
                file_size,
                header = layout.header_size,
                footer = layout.footer_size,
                "file shorter than header + footer; no records"
            );
        }
        Self::from_reader(f, file_size, layout)
    }
}

impl<R: Read + Seek> FrameReader<R> {
    pub fn from_reader(mut r: R, file_size: u64, layout: FileLayout) -> Result<Self> {
        let body = layout.body(file_size);
        // past-EOF seeks are fine; the body is empty then
        r.seek(SeekFrom::Start(body.offset))?;
        tracing::debug!(
            offset = body.offset,
            len = body.len,
            records = body.records,
            remainder = body.remainder,
            "framed body"
        );
        Ok(Self {
            inner: r.take(body.len),
            record_size: layout.record_size as usize,
            body,
            done: false,
        })
    }
}

impl<R: Read> FrameReader<R> {
    pub fn body(&self) -> BodyRange {
        self.body
    }

    // read until buf is full or the body runs out
    fn fill(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let mut got = 0;
        while got < buf.len() {
            match self.inner.read(&mut buf[got..]) {
                Ok(0) => break,
                Ok(n) => got += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(got)
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = Result<RawChunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buf = vec![0u8; self.record_size];
        match self.fill(&mut buf) {
            Ok(n) if n == self.record_size => Some(Ok(RawChunk(buf))),
            Ok(n) => {
                self.done = true;
                if n > 0 {
                    tracing::debug!(bytes = n, "dropping trailing partial record");
                }
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e.into()))
            }
        }
    }
}
