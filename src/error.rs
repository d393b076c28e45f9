use thiserror::Error;

/// Errors raised by the dataset model and the standardizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A requested feature is not a column of the dataset.
    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    /// A requested feature holds an infinite value.
    #[error("feature '{0}' contains an infinite value")]
    NonFiniteFeature(String),

    /// A column does not have the same number of rows as the rest of the table.
    #[error("column '{column}' has {found} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Two columns share a name.
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
