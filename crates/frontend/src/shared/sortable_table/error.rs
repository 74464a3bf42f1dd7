use contracts::shared::sortable_table::TableError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Ошибки виджета таблицы
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("invalid table config: {0}")]
    Config(String),

    #[error("sortable table has been destroyed")]
    Destroyed,

    #[error("sortable table is busy (called from its own template or comparator)")]
    Busy,
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        WidgetError::Dom(message)
    }
}

impl From<serde_wasm_bindgen::Error> for WidgetError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WidgetError::Config(err.to_string())
    }
}
