//! Монтирование [`SortableTable`] внутрь leptos-представления

use super::SortableTable;
use contracts::shared::sortable_table::{ColumnSpec, TableOptions};
use leptos::prelude::*;

/// Ссылка на смонтированную таблицу для управления ею снаружи компонента
pub type SortableTableRef = StoredValue<Option<SortableTable>, LocalStorage>;

pub fn create_table_ref() -> SortableTableRef {
    StoredValue::new_local(None)
}

/// Контейнер, в который монтируется таблица.
///
/// Таблица создаётся один раз при появлении контейнера в DOM
/// и уничтожается вместе с компонентом.
#[component]
pub fn SortableTableHost(
    /// Колонки таблицы
    header: Vec<ColumnSpec>,
    /// Начальные данные
    #[prop(optional)]
    options: TableOptions,
    /// Внешняя ссылка на таблицу (например, для кнопок сортировки)
    #[prop(optional)]
    table_ref: Option<SortableTableRef>,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let table = table_ref.unwrap_or_else(create_table_ref);
    let config = StoredValue::new_local((header, options));
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let Some(div) = container.get() else { return };
        if table.with_value(|t| t.is_some()) {
            return;
        }

        let (header, options) = config.get_value();
        match SortableTable::new(header, options) {
            Ok(created) => {
                if let Err(e) = div.append_child(&created.element()) {
                    log::error!("sortable table: mount failed: {:?}", e);
                }
                table.set_value(Some(created));
            }
            Err(e) => {
                log::error!("sortable table: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    on_cleanup(move || {
        table.update_value(|t| {
            if let Some(Err(e)) = t.as_mut().map(SortableTable::destroy) {
                log::error!("sortable table: {}", e);
            }
        });
    });

    view! {
        <div class="sortable-table-host" node_ref=container>
            {move || error.get().map(|e| view! { <div class="sortable-table__error">{e}</div> })}
        </div>
    }
}
