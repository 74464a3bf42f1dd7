//! Шаблоны разметки таблицы.
//!
//! Чистые функции: состояние -> строка HTML. Значения вставляются как есть,
//! экранирование не выполняется.

use super::column::ColumnSpec;
use super::order::{SortOrder, SortState};
use super::row::{cell_value, row_link, value_as_text, Row};

/// Атрибут, которым помечаются именованные области разметки
pub const REGION_ATTR: &str = "data-element";

pub fn arrow() -> String {
    r#"<span data-element="arrow" class="sortable-table__sort-arrow"><span class="sort-arrow"></span></span>"#
        .to_string()
}

pub fn header_cell(column: &ColumnSpec, order: Option<SortOrder>) -> String {
    let order_attr = order
        .map(|o| format!(r#" data-order="{}""#, o.as_str()))
        .unwrap_or_default();

    format!(
        r#"<div class="sortable-table__cell" data-element="{id}"{order_attr} data-id="{id}" data-sortable="{sortable}"><span>{title}</span>{arrow}</div>"#,
        id = column.id,
        order_attr = order_attr,
        sortable = column.sortable,
        title = column.title,
        arrow = arrow(),
    )
}

pub fn header(columns: &[ColumnSpec], state: &SortState) -> String {
    let cells: String = columns
        .iter()
        .map(|c| header_cell(c, state.order_of(&c.id)))
        .collect();
    format!(
        r#"<div data-element="header" class="sortable-table__header sortable-table__row">{}</div>"#,
        cells
    )
}

/// Ячейки одной строки: шаблон колонки или ячейка по умолчанию
pub fn body_row(columns: &[ColumnSpec], row: &Row) -> String {
    columns
        .iter()
        .map(|c| {
            let value = cell_value(row, &c.id);
            match &c.template {
                Some(template) => template.render(value),
                None => format!(
                    r#"<div class="sortable-table__cell">{}</div>"#,
                    value_as_text(value)
                ),
            }
        })
        .collect()
}

pub fn body_rows(columns: &[ColumnSpec], rows: &[Row]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                r#"<a href="{}" class="sortable-table__row">{}</a>"#,
                row_link(row),
                body_row(columns, row)
            )
        })
        .collect()
}

pub fn body(columns: &[ColumnSpec], rows: &[Row]) -> String {
    format!(
        r#"<div data-element="body" class="sortable-table__body">{}</div>"#,
        body_rows(columns, rows)
    )
}

pub fn table(columns: &[ColumnSpec], rows: &[Row], state: &SortState) -> String {
    format!(
        r#"<div class="sortable-table">{}{}</div>"#,
        header(columns, state),
        body(columns, rows)
    )
}

/// Имена областей (`data-element="..."`) в порядке появления в разметке
pub fn region_names(markup: &str) -> Vec<String> {
    let needle = format!(r#"{}=""#, REGION_ATTR);
    let mut names = Vec::new();
    let mut rest = markup;
    while let Some(pos) = rest.find(&needle) {
        let start = pos + needle.len();
        let Some(len) = rest[start..].find('"') else {
            break;
        };
        names.push(rest[start..start + len].to_string());
        rest = &rest[start + len..];
    }
    names
}
