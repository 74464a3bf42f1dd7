//! JS-обёртка: `new SortableTable(header, { data })` для страниц без leptos

use super::{SortableTable, WidgetError};
use contracts::shared::sortable_table::{
    CellTemplate, ColumnSpec, CustomSorting, Row, SortOrder, TableOptions,
};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use std::cmp::Ordering;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, WidgetError> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

fn function_field(item: &JsValue, name: &str) -> Result<Option<js_sys::Function>, WidgetError> {
    let value = js_sys::Reflect::get(item, &JsValue::from_str(name))?;
    Ok(value.dyn_into::<js_sys::Function>().ok())
}

fn js_template(f: js_sys::Function) -> CellTemplate {
    CellTemplate::new(move |value| {
        let arg = to_js(value).unwrap_or(JsValue::UNDEFINED);
        match f.call1(&JsValue::NULL, &arg) {
            Ok(markup) => markup.as_string().unwrap_or_default(),
            Err(e) => {
                log::error!("sortable table: cell template threw {:?}", e);
                String::new()
            }
        }
    })
}

/// Результат JS-компаратора трактуется по знаку, как в `Array.prototype.sort`
fn js_custom_sorting(f: js_sys::Function) -> CustomSorting {
    CustomSorting::new(move |a: &Row, b: &Row| {
        let (Ok(a), Ok(b)) = (to_js(a), to_js(b)) else {
            return Ordering::Equal;
        };
        f.call2(&JsValue::NULL, &a, &b)
            .ok()
            .and_then(|result| result.as_f64())
            .and_then(|n| n.partial_cmp(&0.0))
            .unwrap_or(Ordering::Equal)
    })
}

/// Разбирает массив колонок: простые поля через serde, функции через `Reflect`
pub fn parse_header(header: &JsValue) -> Result<Vec<ColumnSpec>, WidgetError> {
    if header.is_undefined() || header.is_null() {
        return Ok(Vec::new());
    }
    let items = header
        .dyn_ref::<js_sys::Array>()
        .ok_or_else(|| WidgetError::Config("header must be an array".to_string()))?;

    let mut columns = Vec::with_capacity(items.length() as usize);
    for item in items.iter() {
        let mut column: ColumnSpec = serde_wasm_bindgen::from_value(item.clone())?;
        column.template = function_field(&item, "template")?.map(js_template);
        column.custom_sorting = function_field(&item, "customSorting")?.map(js_custom_sorting);
        columns.push(column);
    }
    Ok(columns)
}

pub fn parse_options(options: JsValue) -> Result<TableOptions, WidgetError> {
    if options.is_undefined() || options.is_null() {
        return Ok(TableOptions::default());
    }
    Ok(serde_wasm_bindgen::from_value(options)?)
}

fn js_error(err: WidgetError) -> JsError {
    JsError::new(&err.to_string())
}

#[wasm_bindgen(js_name = SortableTable)]
pub struct JsSortableTable {
    table: SortableTable,
}

#[wasm_bindgen(js_class = SortableTable)]
impl JsSortableTable {
    #[wasm_bindgen(constructor)]
    pub fn new(header: JsValue, options: JsValue) -> Result<JsSortableTable, JsError> {
        let columns = parse_header(&header).map_err(js_error)?;
        let options = parse_options(options).map_err(js_error)?;
        let table = SortableTable::new(columns, options).map_err(js_error)?;
        Ok(Self { table })
    }

    #[wasm_bindgen(getter)]
    pub fn element(&self) -> web_sys::Element {
        self.table.element()
    }

    /// Карта областей как обычный JS-объект
    #[wasm_bindgen(getter, js_name = subElements)]
    pub fn sub_elements(&self) -> Result<js_sys::Object, JsError> {
        let object = js_sys::Object::new();
        for (name, element) in self.table.sub_elements().map_err(js_error)? {
            js_sys::Reflect::set(&object, &JsValue::from_str(&name), &element)
                .map_err(|e| js_error(e.into()))?;
        }
        Ok(object)
    }

    #[wasm_bindgen(getter)]
    pub fn data(&self) -> Result<JsValue, JsError> {
        self.table
            .with_model(|m| to_js(m.data()))
            .and_then(|data| data)
            .map_err(js_error)
    }

    pub fn sort(&self, field: &str, order: &str) -> Result<(), JsError> {
        let order: SortOrder = order.parse().map_err(|e| js_error(WidgetError::Table(e)))?;
        self.table.sort(field, order).map_err(js_error)
    }

    pub fn remove(&self) {
        self.table.remove();
    }

    pub fn destroy(&mut self) -> Result<(), JsError> {
        self.table.destroy().map_err(js_error)
    }
}
