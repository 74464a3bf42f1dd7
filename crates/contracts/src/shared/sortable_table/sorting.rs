//! Сортировка строк по колонке.
//!
//! Компаратор выбирается один раз на вызов по `SortType` колонки,
//! затем применяется к копии данных с учётом направления.

use super::collation::locale_compare;
use super::column::{ColumnSpec, CustomSorting, SortType};
use super::error::TableError;
use super::order::SortOrder;
use super::row::{cell_value, value_as_number, value_as_text, Row};
use std::cmp::Ordering;

/// Стратегия сравнения, разрешённая для конкретной колонки
#[derive(Debug, Clone)]
pub enum Comparator {
    /// Числовое сравнение (аналог вычитания).
    ///
    /// Значения, которые не приводятся к числу (NaN), идут после всех чисел
    /// при `Asc`, так что порядок остаётся полным; между собой они равны.
    Numeric(String),
    /// Строки по правилам коллации
    Collated(String),
    Custom(CustomSorting),
}

impl Comparator {
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        match self {
            Comparator::Numeric(field) => {
                let left = value_as_number(cell_value(a, field));
                let right = value_as_number(cell_value(b, field));
                compare_numbers(left, right)
            }
            Comparator::Collated(field) => locale_compare(
                &value_as_text(cell_value(a, field)),
                &value_as_text(cell_value(b, field)),
            ),
            Comparator::Custom(sorting) => sorting.compare(a, b),
        }
    }
}

fn compare_numbers(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (false, false) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Выбирает компаратор по типу сортировки колонки
pub fn resolve_comparator(column: &ColumnSpec) -> Result<Comparator, TableError> {
    match column.sort_type {
        SortType::String => Ok(Comparator::Collated(column.id.clone())),
        SortType::Custom => column
            .custom_sorting
            .clone()
            .map(Comparator::Custom)
            .ok_or_else(|| TableError::MissingComparator(column.id.clone())),
        SortType::Number | SortType::Unknown => Ok(Comparator::Numeric(column.id.clone())),
    }
}

/// Находит колонку по id
pub fn find_column<'a>(header: &'a [ColumnSpec], field: &str) -> Result<&'a ColumnSpec, TableError> {
    header
        .iter()
        .find(|c| c.id == field)
        .ok_or_else(|| TableError::UnknownColumn(field.to_string()))
}

/// Возвращает отсортированную копию `rows`; исходный срез не меняется
pub fn sort_rows(
    header: &[ColumnSpec],
    rows: &[Row],
    field: &str,
    order: SortOrder,
) -> Result<Vec<Row>, TableError> {
    let column = find_column(header, field)?;
    let comparator = resolve_comparator(column)?;

    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| order.apply(comparator.compare(a, b)));
    Ok(sorted)
}
