//! Поиск именованных областей (`data-element`) в отрисованном дереве

use super::error::WidgetError;
use contracts::shared::sortable_table::template::REGION_ATTR;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Имя области -> узел внутри корневого элемента
pub type SubElements = HashMap<String, Element>;

pub fn region_selector() -> String {
    format!("[{}]", REGION_ATTR)
}

/// Собирает пары (имя, узел) в карту в порядке документа: при повторе имени побеждает последний
pub fn index_regions<T>(regions: impl IntoIterator<Item = (String, T)>) -> HashMap<String, T> {
    regions.into_iter().collect()
}

/// Собирает все потомки с `data-element`.
/// Состояние не меняет, каждый вызов возвращает новую карту.
pub fn get_sub_elements(element: &Element) -> Result<SubElements, WidgetError> {
    let nodes = element.query_selector_all(&region_selector())?;

    let regions = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| el.get_attribute(REGION_ATTR).map(|name| (name, el)));
    Ok(index_regions(regions))
}
