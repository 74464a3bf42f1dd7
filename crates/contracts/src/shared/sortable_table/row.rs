//! Строка таблицы: произвольное отображение id колонки -> значение

use serde_json::{Map, Value};

pub type Row = Map<String, Value>;

/// Префикс ссылки, на которую ведёт строка таблицы
pub const ROW_LINK_BASE: &str = "/products/";

static NULL: Value = Value::Null;

/// Значение ячейки; отсутствующий ключ читается как `Null`
pub fn cell_value<'a>(row: &'a Row, column_id: &str) -> &'a Value {
    row.get(column_id).unwrap_or(&NULL)
}

/// Числовое приведение значения для сравнения вычитанием.
///
/// Строки парсятся (пустая строка даёт 0), всё, что не приводится к числу, даёт NaN.
pub fn value_as_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null => 0.0,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Текстовое представление значения для вывода в ячейку
pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Ссылка строки, строится из поля `id`
pub fn row_link(row: &Row) -> String {
    format!("{}{}", ROW_LINK_BASE, value_as_text(cell_value(row, "id")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_value_as_number() {
        assert_eq!(value_as_number(&json!(42)), 42.0);
        assert_eq!(value_as_number(&json!(-1.5)), -1.5);
        assert_eq!(value_as_number(&json!(" 7 ")), 7.0);
        assert_eq!(value_as_number(&json!("")), 0.0);
        assert_eq!(value_as_number(&json!(true)), 1.0);
        assert_eq!(value_as_number(&Value::Null), 0.0);
        assert!(value_as_number(&json!("abc")).is_nan());
        assert!(value_as_number(&json!([1])).is_nan());
    }

    #[test]
    fn test_value_as_text() {
        assert_eq!(value_as_text(&json!("Bob")), "Bob");
        assert_eq!(value_as_text(&json!(30)), "30");
        assert_eq!(value_as_text(&Value::Null), "");
    }

    #[test]
    fn test_missing_cell_reads_as_null() {
        let r = row(json!({ "id": 1 }));
        assert_eq!(cell_value(&r, "title"), &Value::Null);
    }

    #[test]
    fn test_row_link() {
        assert_eq!(row_link(&row(json!({ "id": 12, "name": "x" }))), "/products/12");
        assert_eq!(row_link(&row(json!({ "id": "abc" }))), "/products/abc");
    }
}
