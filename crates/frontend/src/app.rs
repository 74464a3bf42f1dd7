use crate::shared::sortable_table::host::create_table_ref;
use crate::shared::sortable_table::SortableTableHost;
use contracts::shared::sortable_table::row::value_as_text;
use contracts::shared::sortable_table::{ColumnSpec, Row, SortOrder, SortType, TableOptions};
use leptos::prelude::*;
use serde_json::json;
use thaw::*;

fn sales_rank(row: &Row) -> i64 {
    row.get("sales").and_then(|v| v.as_i64()).unwrap_or(0)
}

pub fn demo_header() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("images", "Image").with_template(|value| {
            let src = value
                .as_array()
                .and_then(|images| images.first())
                .and_then(|image| image.get("url"))
                .map(value_as_text)
                .unwrap_or_default();
            format!(
                r#"<div class="sortable-table__cell"><img class="sortable-table-image" alt="Image" src="{}"></div>"#,
                src
            )
        }),
        ColumnSpec::new("title", "Name")
            .sortable(true)
            .sort_type(SortType::String),
        ColumnSpec::new("quantity", "Quantity")
            .sortable(true)
            .sort_type(SortType::Number),
        ColumnSpec::new("price", "Price")
            .sortable(true)
            .sort_type(SortType::Number)
            .with_template(|value| {
                format!(r#"<div class="sortable-table__cell">{} ₽</div>"#, value_as_text(value))
            }),
        ColumnSpec::new("sales", "Sales")
            .sortable(true)
            .with_custom_sorting(|a, b| sales_rank(a).cmp(&sales_rank(b))),
        ColumnSpec::new("status", "Status").sortable(false),
    ]
}

pub fn demo_rows() -> Vec<Row> {
    let rows = json!([
        { "id": "soft-toy-bear", "title": "Мягкая игрушка Медведь", "quantity": 14, "price": 990, "sales": 12, "status": 1,
          "images": [{ "url": "https://example.com/bear.jpg" }] },
        { "id": "board-game", "title": "Настольная игра", "quantity": 3, "price": 2490, "sales": 40, "status": 1,
          "images": [] },
        { "id": "kettle", "title": "Kettle", "quantity": 27, "price": 1590, "sales": 7, "status": 0,
          "images": [{ "url": "https://example.com/kettle.jpg" }] },
        { "id": "ёлочная-гирлянда", "title": "Ёлочная гирлянда", "quantity": 56, "price": 450, "sales": 95, "status": 1,
          "images": [] },
        { "id": "action-camera", "title": "action camera", "quantity": 0, "price": 12990, "sales": 3, "status": 0,
          "images": [] }
    ]);
    rows.as_array()
        .map(|items| items.iter().filter_map(|v| v.as_object().cloned()).collect())
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let table = create_table_ref();
    let (status, set_status) = signal(String::new());

    let sort_by = move |field: &'static str, order: SortOrder| {
        table.with_value(|t| {
            let Some(t) = t else { return };
            match t.sort(field, order) {
                Ok(()) => set_status.set(format!("{} {}", field, order)),
                Err(e) => set_status.set(e.to_string()),
            }
        });
    };

    view! {
        <div class="sortable-table-demo">
            <ButtonGroup>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| sort_by("price", SortOrder::Desc)
                >
                    "Price ▼"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| sort_by("quantity", SortOrder::Asc)
                >
                    "Quantity ▲"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        table.update_value(|t| {
                            let Some(t) = t.as_mut() else { return };
                            match t.destroy() {
                                Ok(()) => set_status.set("destroyed".to_string()),
                                Err(e) => set_status.set(e.to_string()),
                            }
                        });
                    }
                >
                    "Destroy"
                </Button>
            </ButtonGroup>
            <div class="sortable-table-demo__status">{move || status.get()}</div>
            <SortableTableHost
                header=demo_header()
                options=TableOptions::with_data(demo_rows())
                table_ref=table
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::sortable_table::TableModel;

    fn titles(model: &TableModel) -> Vec<String> {
        model
            .data()
            .iter()
            .map(|r| value_as_text(&r["title"]))
            .collect()
    }

    #[test]
    fn test_demo_table_initial_sort_by_title() {
        let model = TableModel::new(demo_header(), TableOptions::with_data(demo_rows())).unwrap();
        assert_eq!(
            titles(&model),
            vec![
                "Ёлочная гирлянда",
                "Мягкая игрушка Медведь",
                "Настольная игра",
                "action camera",
                "Kettle",
            ]
        );
    }

    #[test]
    fn test_demo_sales_custom_sorting() {
        let mut model =
            TableModel::new(demo_header(), TableOptions::with_data(demo_rows())).unwrap();
        assert_eq!(model.activate("sales").unwrap(), Some(SortOrder::Desc));
        assert_eq!(model.data()[0]["id"], json!("ёлочная-гирлянда"));
        assert_eq!(model.activate("status").unwrap(), None);
    }

    #[test]
    fn test_demo_templates() {
        let model = TableModel::new(demo_header(), TableOptions::with_data(demo_rows())).unwrap();
        let body = model.body_rows_template();
        assert!(body.contains(r#"src="https://example.com/kettle.jpg""#));
        assert!(body.contains("12990 ₽"));
        assert!(body.contains(r#"href="/products/kettle""#));
    }
}
