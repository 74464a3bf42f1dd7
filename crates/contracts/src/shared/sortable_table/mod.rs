//! Модель сортируемой таблицы: колонки, строки, состояние сортировки,
//! шаблоны разметки. Не зависит от DOM и собирается под любой target.

pub mod collation;
pub mod column;
pub mod error;
pub mod model;
pub mod order;
pub mod row;
pub mod sorting;
pub mod template;

pub use column::{CellTemplate, ColumnSpec, CustomSorting, SortType};
pub use error::TableError;
pub use model::{TableModel, TableOptions};
pub use order::{ActiveSort, SortOrder, SortState};
pub use row::Row;
