//! In-memory tabular container
//!
//! The masking engine operates on a [`Table`]: an ordered sequence of named
//! columns whose cells are aligned by row index. Cells keep the type inferred
//! at load time (text, integer, float or empty) until a masking rule rewrites
//! them, at which point they become text regardless of the original type.

use crate::domain::{Result, VeilError};
use serde::{Deserialize, Serialize};

/// A single cell value
///
/// Every variant is string-convertible via [`Cell::to_text`]; masking rules
/// only ever see the string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Free text
    Text(String),
    /// Integer value (e.g. a phone number stored numerically)
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Empty cell
    Empty,
}

impl Cell {
    /// String form of the cell, as seen by masking rules
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Empty => String::new(),
        }
    }

    /// True if the cell holds no value
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// A named column of cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (header)
    pub name: String,
    /// Cell values, one per row
    pub cells: Vec<Cell>,
}

impl Column {
    /// Create a column from a name and cells
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// An ordered collection of named columns aligned by row index
///
/// The table owns its data; the masking engine mutates one column's cells in
/// place and never adds or removes rows or columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from pre-built columns
    ///
    /// # Errors
    ///
    /// Returns an error if column lengths disagree or a column name repeats.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            for column in &columns {
                if column.cells.len() != expected {
                    return Err(VeilError::Other(format!(
                        "Column '{}' has {} rows, expected {}",
                        column.name,
                        column.cells.len(),
                        expected
                    )));
                }
            }
        }
        for (idx, column) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|c| c.name == column.name) {
                return Err(VeilError::Other(format!(
                    "Duplicate column name '{}'",
                    column.name
                )));
            }
        }
        Ok(Self { columns })
    }

    /// Column names in table order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (0 for an empty table)
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// True if a column with the given name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Borrow a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Mutably borrow a column by name
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// All columns in table order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}
