use thiserror::Error;

/// Ошибки модели таблицы
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("unknown sort field: {0}")]
    UnknownColumn(String),

    #[error("column '{0}' has sortType 'custom' but no customSorting comparator")]
    MissingComparator(String),

    #[error("unknown sort order: {0} (expected 'asc' or 'desc')")]
    UnknownOrder(String),
}
