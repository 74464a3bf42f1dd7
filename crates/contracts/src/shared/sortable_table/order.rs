use super::error::TableError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Масштабирует результат сравнения по направлению (asc: +1, desc: -1)
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(TableError::UnknownOrder(other.to_string())),
        }
    }
}

/// Активная колонка сортировки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSort {
    pub column_id: String,
    pub order: SortOrder,
}

/// Состояние сортировки таблицы: не более одной активной колонки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    active: Option<ActiveSort>,
}

impl SortState {
    pub fn active(&self) -> Option<&ActiveSort> {
        self.active.as_ref()
    }

    /// Направление колонки; `None` для любой неактивной
    pub fn order_of(&self, column_id: &str) -> Option<SortOrder> {
        self.active
            .as_ref()
            .filter(|a| a.column_id == column_id)
            .map(|a| a.order)
    }

    /// Следующее направление при клике по заголовку:
    /// активная колонка переключается, любая другая начинает с `Desc`
    pub fn next_order(&self, column_id: &str) -> SortOrder {
        match self.order_of(column_id) {
            Some(order) => order.toggled(),
            None => SortOrder::Desc,
        }
    }

    pub fn set(&mut self, column_id: impl Into<String>, order: SortOrder) {
        self.active = Some(ActiveSort {
            column_id: column_id.into(),
            order,
        });
    }
}
