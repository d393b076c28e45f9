use std::fmt;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Column – one named series of the table
// ---------------------------------------------------------------------------

/// A named column of numeric values. Missing values are `NaN`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete table
// ---------------------------------------------------------------------------

/// A table of named numeric columns with rows aligned by position.
///
/// Every column has the same length and column names are unique. Values can
/// only be mutated through fixed-length slices, so neither invariant can be
/// broken once a column is in the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    /// An empty table with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, values)` pairs, keeping their order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut dataset = Self::new();
        for (name, values) in columns {
            dataset.push_column(name, values)?;
        }
        Ok(dataset)
    }

    /// Append a column. The first column fixes the row count.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(Error::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && values.len() != self.n_rows {
            return Err(Error::RaggedColumn {
                column: name,
                expected: self.n_rows,
                found: values.len(),
            });
        }
        self.n_rows = values.len();
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Values of the named column.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Mutable values of the named column.
    pub fn column_mut(&mut self, name: &str) -> Option<&mut [f64]> {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .map(|c| c.values.as_mut_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`, as pandas reports it.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// The first `n` rows (or all of them if the table is shorter).
    pub fn head(&self, n: usize) -> Dataset {
        let n_rows = n.min(self.n_rows);
        Dataset {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: c.values[..n_rows].to_vec(),
                })
                .collect(),
            n_rows,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index_width = self.n_rows.saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| {
                c.values
                    .iter()
                    .map(|v| format!("{v:.4}").len())
                    .chain(std::iter::once(c.name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (c, w) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", c.name)?;
        }
        for row in 0..self.n_rows {
            writeln!(f)?;
            write!(f, "{row:<index_width$}")?;
            for (c, w) in self.columns.iter().zip(&widths) {
                write!(f, "  {:>w$}", format!("{:.4}", c.values[row]))?;
            }
        }
        Ok(())
    }
}
