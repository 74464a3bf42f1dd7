//! Сортируемая таблица поверх `web_sys`.
//!
//! Разметку и состояние даёт [`TableModel`] из `contracts`; здесь только
//! DOM: отрисовка, карта областей, обработчик `pointerdown` на заголовке.
//!
//! # Пример
//!
//! ```rust,ignore
//! let header = vec![
//!     ColumnSpec::new("title", "Название").sortable(true).sort_type(SortType::String),
//!     ColumnSpec::new("price", "Цена").sortable(true),
//! ];
//! let mut table = SortableTable::new(header, TableOptions::with_data(rows))?;
//! container.append_child(&table.element())?;
//! table.sort("price", SortOrder::Desc)?;
//! table.destroy()?;
//! ```

pub mod bindings;
pub mod error;
pub mod host;
pub mod sub_elements;

pub use error::WidgetError;
pub use host::{SortableTableHost, SortableTableRef};
pub use sub_elements::{get_sub_elements, SubElements};

use contracts::shared::sortable_table::{ColumnSpec, SortOrder, TableModel, TableOptions};
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, PointerEvent};

/// Ячейка заголовка с id колонки
pub const HEADER_CELL_SELECTOR: &str = ".sortable-table__cell[data-id]";
const ORDER_ATTR: &str = "data-order";
const COLUMN_ID_ATTR: &str = "data-id";
const POINTER_EVENT: &str = "pointerdown";

type PointerListener = Closure<dyn FnMut(PointerEvent)>;

struct TableInner {
    model: TableModel,
    sub_elements: SubElements,
}

impl TableInner {
    fn region(&self, name: &str) -> Result<&Element, WidgetError> {
        self.sub_elements
            .get(name)
            .ok_or_else(|| WidgetError::Dom(format!("region '{}' not found", name)))
    }

    fn sort(&mut self, field: &str, order: SortOrder) -> Result<(), WidgetError> {
        self.model.sort(field, order)?;
        self.sync_view()
    }

    /// Переносит состояние модели в DOM: маркер направления и строки тела.
    /// Разметка заголовка не пересоздаётся.
    fn sync_view(&self) -> Result<(), WidgetError> {
        let state = self.model.sort_state();
        let cells = self.region("header")?.query_selector_all(HEADER_CELL_SELECTOR)?;
        for i in 0..cells.length() {
            let Some(cell) = cells.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let order = cell
                .get_attribute(COLUMN_ID_ATTR)
                .and_then(|id| state.order_of(&id));
            match order {
                Some(order) => cell.set_attribute(ORDER_ATTR, order.as_str())?,
                None => cell.remove_attribute(ORDER_ATTR)?,
            }
        }

        self.region("body")?
            .set_inner_html(&self.model.body_rows_template());
        Ok(())
    }

    fn handle_pointer_down(&mut self, event: &PointerEvent) -> Result<(), WidgetError> {
        if event.button() != 0 {
            return Ok(());
        }
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return Ok(());
        };
        let Some(cell) = target.closest(HEADER_CELL_SELECTOR)? else {
            return Ok(());
        };
        let Some(column_id) = cell.get_attribute(COLUMN_ID_ATTR) else {
            return Ok(());
        };

        // Решение принимает модель, атрибуты DOM только отображают состояние
        if let Some(order) = self.model.activate(&column_id)? {
            log::debug!("sortable table: header click '{}' -> {}", column_id, order);
            self.sync_view()?;
        }
        Ok(())
    }
}

/// Отрисовывает разметку модели в отсоединённый узел
fn render(model: &TableModel) -> Result<(Element, SubElements), WidgetError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WidgetError::Dom("document is not available".to_string()))?;

    let wrapper = document.create_element("div")?;
    wrapper.set_inner_html(&model.template());
    let element = wrapper
        .first_element_child()
        .ok_or_else(|| WidgetError::Dom("table template produced no element".to_string()))?;
    // отсоединяем от обёртки, чтобы у корня не было родителя
    element.remove();

    let sub_elements = get_sub_elements(&element)?;
    log::debug!(
        "sortable table: rendered {} rows, {} regions",
        model.data().len(),
        sub_elements.len()
    );
    Ok((element, sub_elements))
}

fn busy(op: &str) -> WidgetError {
    log::warn!("sortable table: {}() re-entered while the table is busy", op);
    WidgetError::Busy
}

/// Сортируемая таблица, владеющая своим DOM-узлом.
///
/// Пользовательские шаблоны и компараторы вызываются, пока модель занята;
/// обращение к таблице из них возвращает `WidgetError::Busy`.
pub struct SortableTable {
    inner: Rc<RefCell<TableInner>>,
    element: Element,
    destroyed: Rc<Cell<bool>>,
    listener: Option<(Element, PointerListener)>,
}

impl SortableTable {
    pub fn new(header: Vec<ColumnSpec>, options: TableOptions) -> Result<Self, WidgetError> {
        let model = TableModel::new(header, options)?;
        let (element, sub_elements) = render(&model)?;

        let mut table = Self {
            inner: Rc::new(RefCell::new(TableInner {
                model,
                sub_elements,
            })),
            element,
            destroyed: Rc::new(Cell::new(false)),
            listener: None,
        };
        table.init_event_listeners()?;
        Ok(table)
    }

    fn init_event_listeners(&mut self) -> Result<(), WidgetError> {
        let weak: Weak<RefCell<TableInner>> = Rc::downgrade(&self.inner);
        let destroyed = self.destroyed.clone();
        let listener = Closure::wrap(Box::new(move |event: PointerEvent| {
            if destroyed.get() {
                return;
            }
            let Some(inner) = weak.upgrade() else { return };
            let Ok(mut inner) = inner.try_borrow_mut() else {
                log::warn!("sortable table: header event while busy, ignored");
                return;
            };
            if let Err(e) = inner.handle_pointer_down(&event) {
                log::error!("sortable table: {}", e);
            }
        }) as Box<dyn FnMut(PointerEvent)>);

        let header = self.inner_ref("init_event_listeners")?.region("header")?.clone();
        header.add_event_listener_with_callback(POINTER_EVENT, listener.as_ref().unchecked_ref())?;
        self.listener = Some((header, listener));
        Ok(())
    }

    fn detach_listener(&mut self) {
        let Some((header, listener)) = self.listener.take() else {
            return;
        };
        if let Err(e) = header
            .remove_event_listener_with_callback(POINTER_EVENT, listener.as_ref().unchecked_ref())
        {
            log::warn!("sortable table: failed to detach header listener: {:?}", e);
        }
    }

    fn inner_ref(&self, op: &str) -> Result<Ref<'_, TableInner>, WidgetError> {
        self.inner.try_borrow().map_err(|_| busy(op))
    }

    fn inner_mut(&self, op: &str) -> Result<RefMut<'_, TableInner>, WidgetError> {
        self.inner.try_borrow_mut().map_err(|_| busy(op))
    }

    fn ensure_alive(&self, op: &str) -> Result<(), WidgetError> {
        if self.destroyed.get() {
            log::warn!("sortable table: {}() after destroy", op);
            return Err(WidgetError::Destroyed);
        }
        Ok(())
    }

    /// Корневой узел; монтирует его хост-приложение
    pub fn element(&self) -> Element {
        self.element.clone()
    }

    pub fn sub_element(&self, name: &str) -> Result<Option<Element>, WidgetError> {
        Ok(self.inner_ref("sub_element")?.sub_elements.get(name).cloned())
    }

    pub fn sub_elements(&self) -> Result<SubElements, WidgetError> {
        Ok(self.inner_ref("sub_elements")?.sub_elements.clone())
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    pub fn with_model<R>(&self, f: impl FnOnce(&TableModel) -> R) -> Result<R, WidgetError> {
        Ok(f(&self.inner_ref("with_model")?.model))
    }

    /// Прямое изменение колонок или данных; DOM не перерисовывается до `sort`
    pub fn with_model_mut<R>(
        &self,
        f: impl FnOnce(&mut TableModel) -> R,
    ) -> Result<R, WidgetError> {
        Ok(f(&mut self.inner_mut("with_model_mut")?.model))
    }

    /// Сортирует данные и перерисовывает только тело таблицы
    pub fn sort(&self, field: &str, order: SortOrder) -> Result<(), WidgetError> {
        self.ensure_alive("sort")?;
        self.inner_mut("sort")?.sort(field, order)
    }

    /// Отсоединяет корневой узел от родителя; ссылки внутри сохраняются.
    /// После `destroy` ничего не делает.
    pub fn remove(&self) {
        if self.destroyed.get() {
            log::warn!("sortable table: remove() after destroy, ignored");
            return;
        }
        self.element.remove();
    }

    /// `remove()`, снятие обработчика и очистка карты областей.
    /// Повторный вызов ничего не делает.
    pub fn destroy(&mut self) -> Result<(), WidgetError> {
        if self.destroyed.get() {
            log::warn!("sortable table: destroy() called twice");
            return Ok(());
        }
        self.inner_mut("destroy")?.sub_elements.clear();
        self.element.remove();
        self.detach_listener();
        self.destroyed.set(true);
        Ok(())
    }
}

impl Drop for SortableTable {
    fn drop(&mut self) {
        self.detach_listener();
    }
}
