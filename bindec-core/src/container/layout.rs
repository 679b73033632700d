use crate::error::{BindecError, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLayout {
    /// Bytes skipped at the start of the file
    pub header_size: u64,
    /// Bytes ignored at the end of the file
    pub footer_size: u64,
    /// Size of one fixed record in the body, always > 0
    pub record_size: u64,
}

/// Framing of one concrete file: where the body sits and how many whole
/// records it holds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyRange {
    pub file_size: u64,
    /// Absolute file offset of the first record
    pub offset: u64,
    /// Body byte length (file_size - header - footer, floored at 0)
    pub len: u64,
    pub records: u64,
    /// Trailing bytes shorter than one record; dropped
    pub remainder: u64,
}

impl FileLayout {
    pub fn new(header_size: u64, footer_size: u64, record_size: u64) -> Result<Self> {
        if record_size == 0 {
            return Err(BindecError::Layout("record_size must be > 0".into()));
        }
        Ok(Self {
            header_size,
            footer_size,
            record_size,
        })
    }

    pub fn body(&self, file_size: u64) -> BodyRange {
        let len = file_size
            .saturating_sub(self.header_size)
            .saturating_sub(self.footer_size);
        BodyRange {
            file_size,
            offset: self.header_size,
            len,
            records: len / self.record_size,
            remainder: len % self.record_size,
        }
    }

    /// True when the file cannot hold header and footer.
    pub fn is_short(&self, file_size: u64) -> bool {
        file_size < self.header_size.saturating_add(self.footer_size)
    }
}
