use super::row::Row;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Стратегия сравнения значений колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    #[default]
    Number,
    String,
    Custom,
    /// Неизвестный тег; сравнивается как Number
    #[serde(other)]
    Unknown,
}

/// Пользовательский рендер ячейки: значение -> разметка
#[derive(Clone)]
pub struct CellTemplate(Rc<dyn Fn(&Value) -> String>);

impl CellTemplate {
    pub fn new(f: impl Fn(&Value) -> String + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn render(&self, value: &Value) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for CellTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellTemplate(..)")
    }
}

/// Компаратор строк для `SortType::Custom`
#[derive(Clone)]
pub struct CustomSorting(Rc<dyn Fn(&Row, &Row) -> Ordering>);

impl CustomSorting {
    pub fn new(f: impl Fn(&Row, &Row) -> Ordering + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        (self.0)(a, b)
    }
}

impl fmt::Debug for CustomSorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomSorting(..)")
    }
}

/// Описание одной колонки таблицы.
///
/// Текущее направление сортировки здесь не хранится: это runtime-состояние,
/// оно живёт в [`super::SortState`] у модели.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub sort_type: SortType,
    #[serde(skip)]
    pub template: Option<CellTemplate>,
    #[serde(skip)]
    pub custom_sorting: Option<CustomSorting>,
}

impl ColumnSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sortable: false,
            sort_type: SortType::default(),
            template: None,
            custom_sorting: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = sort_type;
        self
    }

    pub fn with_template(mut self, f: impl Fn(&Value) -> String + 'static) -> Self {
        self.template = Some(CellTemplate::new(f));
        self
    }

    /// Задаёт компаратор и переключает колонку на `SortType::Custom`
    pub fn with_custom_sorting(mut self, f: impl Fn(&Row, &Row) -> Ordering + 'static) -> Self {
        self.sort_type = SortType::Custom;
        self.custom_sorting = Some(CustomSorting::new(f));
        self
    }
}
