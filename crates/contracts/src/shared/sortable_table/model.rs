//! Состояние таблицы без DOM: колонки, данные и активная сортировка.
//!
//! Рендерер берёт отсюда разметку, обработчик клика по заголовку
//! спрашивает модель, в какое направление сортировать.

use super::column::ColumnSpec;
use super::error::TableError;
use super::order::{ActiveSort, SortOrder, SortState};
use super::row::Row;
use super::sorting::{find_column, sort_rows};
use super::template;
use serde::{Deserialize, Serialize};

/// Опции конструктора таблицы
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableOptions {
    #[serde(default)]
    pub data: Vec<Row>,
}

impl TableOptions {
    pub fn with_data(data: Vec<Row>) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone)]
pub struct TableModel {
    header: Vec<ColumnSpec>,
    data: Vec<Row>,
    sort_state: SortState,
}

impl TableModel {
    /// Создаёт модель; первая сортируемая колонка сразу становится активной (`Asc`)
    pub fn new(header: Vec<ColumnSpec>, options: TableOptions) -> Result<Self, TableError> {
        let mut model = Self {
            header,
            data: options.data,
            sort_state: SortState::default(),
        };

        let initial = model.header.iter().find(|c| c.sortable).map(|c| c.id.clone());
        if let Some(column_id) = initial {
            model.sort(&column_id, SortOrder::Asc)?;
        }

        Ok(model)
    }

    pub fn header(&self) -> &[ColumnSpec] {
        &self.header
    }

    /// Изменение колонок не перерисовывает таблицу
    pub fn header_mut(&mut self) -> &mut Vec<ColumnSpec> {
        &mut self.header
    }

    pub fn data(&self) -> &[Row] {
        &self.data
    }

    /// Заменяет данные без перерисовки; чтобы увидеть их, нужен `sort`
    pub fn set_data(&mut self, data: Vec<Row>) {
        self.data = data;
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort_state
    }

    pub fn active_sort(&self) -> Option<&ActiveSort> {
        self.sort_state.active()
    }

    pub fn column(&self, column_id: &str) -> Result<&ColumnSpec, TableError> {
        find_column(&self.header, column_id)
    }

    /// Отсортированная копия данных; сама модель не меняется
    pub fn sort_data(&self, field: &str, order: SortOrder) -> Result<Vec<Row>, TableError> {
        sort_rows(&self.header, &self.data, field, order)
    }

    /// Сортирует данные и делает колонку активной
    pub fn sort(&mut self, field: &str, order: SortOrder) -> Result<(), TableError> {
        let sorted = self.sort_data(field, order)?;
        log::debug!("sortable table: sort by '{}' {} ({} rows)", field, order, sorted.len());
        self.data = sorted;
        self.sort_state.set(field, order);
        Ok(())
    }

    /// Клик по заголовку колонки.
    ///
    /// Для несортируемой колонки возвращает `Ok(None)` и ничего не меняет.
    /// Иначе сортирует в следующем направлении и возвращает его.
    pub fn activate(&mut self, column_id: &str) -> Result<Option<SortOrder>, TableError> {
        if !self.column(column_id)?.sortable {
            return Ok(None);
        }
        let order = self.sort_state.next_order(column_id);
        self.sort(column_id, order)?;
        Ok(Some(order))
    }

    /// Полная разметка таблицы
    pub fn template(&self) -> String {
        template::table(&self.header, &self.data, &self.sort_state)
    }

    /// Разметка строк для замены содержимого области `body`
    pub fn body_rows_template(&self) -> String {
        template::body_rows(&self.header, &self.data)
    }
}
