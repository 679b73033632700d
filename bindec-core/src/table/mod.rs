use crate::domain::{DecodedRow, Value};
use crate::error::{BindecError, Result};

pub mod csv_sink;

/// Column-major table of decoded rows; row order is record order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(names: Vec<String>) -> Self {
        let columns = names.iter().map(|_| Vec::new()).collect();
        Self { names, columns }
    }

    pub fn push_row(&mut self, row: DecodedRow) -> Result<()> {
        if row.len() != self.names.len() {
            return Err(BindecError::Format(format!(
                "row has {} values, table has {} columns",
                row.len(),
                self.names.len()
            )));
        }
        for (col, v) in self.columns.iter_mut().zip(row) {
            col.push(v);
        }
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row `i` across all columns.
    pub fn row(&self, i: usize) -> Option<Vec<&Value>> {
        if i >= self.len() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c[i]).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> + '_ {
        (0..self.len()).map(move |i| self.columns.iter().map(|c| &c[i]).collect())
    }

    /// All columns must have equal length before the table is written.
    pub fn check(&self) -> Result<()> {
        let n = self.len();
        if let Some((name, col)) = self
            .names
            .iter()
            .zip(&self.columns)
            .find(|(_, c)| c.len() != n)
        {
            return Err(BindecError::Format(format!(
                "column {name} has {} values, expected {n}",
                col.len()
            )));
        }
        Ok(())
    }
}
