use contracts::shared::sortable_table::template::region_names;
use contracts::shared::sortable_table::{
    ColumnSpec, Row, SortOrder, SortType, TableError, TableModel, TableOptions,
};
use serde_json::{json, Value};

fn rows(values: Value) -> Vec<Row> {
    values
        .as_array()
        .expect("array of rows")
        .iter()
        .map(|v| v.as_object().cloned().expect("row object"))
        .collect()
}

fn ids(rows: &[Row]) -> Vec<i64> {
    rows.iter().map(|r| r["id"].as_i64().unwrap()).collect()
}

fn fixture() -> TableModel {
    let header = vec![
        ColumnSpec::new("name", "Name")
            .sortable(true)
            .sort_type(SortType::String),
        ColumnSpec::new("age", "Age")
            .sortable(true)
            .sort_type(SortType::Number),
    ];
    let data = rows(json!([
        { "id": 1, "name": "Bob", "age": 30 },
        { "id": 2, "name": "Ann", "age": 25 }
    ]));
    TableModel::new(header, TableOptions::with_data(data)).unwrap()
}

fn products() -> Vec<Row> {
    rows(json!([
        { "id": 1, "title": "Кружка", "price": 350, "quantity": 12, "sku": "B-2" },
        { "id": 2, "title": "apple", "price": 99, "quantity": 3, "sku": "A-10" },
        { "id": 3, "title": "Ёлка", "price": 1200, "quantity": 1, "sku": "A-9" },
        { "id": 4, "title": "Banana", "price": 15, "quantity": 40, "sku": "C-1" },
        { "id": 5, "title": "арбуз", "price": 410, "quantity": 7, "sku": "B-11" }
    ]))
}

fn sku_number(row: &Row) -> i64 {
    row["sku"]
        .as_str()
        .and_then(|s| s.split('-').nth(1))
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

fn product_header() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("title", "Title")
            .sortable(true)
            .sort_type(SortType::String),
        ColumnSpec::new("price", "Price")
            .sortable(true)
            .sort_type(SortType::Number),
        ColumnSpec::new("quantity", "Quantity").sortable(false),
        ColumnSpec::new("sku", "SKU")
            .sortable(true)
            .with_custom_sorting(|a, b| sku_number(a).cmp(&sku_number(b))),
    ]
}

fn active(model: &TableModel) -> Option<(String, SortOrder)> {
    model
        .active_sort()
        .map(|a| (a.column_id.clone(), a.order))
}

#[test]
fn test_fixture_initial_state() {
    let model = fixture();
    assert_eq!(active(&model), Some(("name".to_string(), SortOrder::Asc)));
    assert_eq!(model.data()[0]["name"], json!("Ann"));

    let html = model.template();
    assert!(html.contains(r#"data-element="name" data-order="asc""#));
    assert_eq!(html.matches("data-order=").count(), 1);
}

#[test]
fn test_fixture_sort_by_age_desc() {
    let mut model = fixture();
    model.sort("age", SortOrder::Desc).unwrap();

    let names: Vec<&str> = model
        .data()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bob", "Ann"]);
    assert_eq!(model.sort_state().order_of("age"), Some(SortOrder::Desc));
    assert_eq!(model.sort_state().order_of("name"), None);

    let body = model.body_rows_template();
    let bob = body.find("Bob").unwrap();
    let ann = body.find("Ann").unwrap();
    assert!(bob < ann);
}

#[test]
fn test_sort_is_a_permutation() {
    let model = TableModel::new(product_header(), TableOptions::with_data(products())).unwrap();

    for field in ["title", "price", "quantity", "sku"] {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let sorted = model.sort_data(field, order).unwrap();
            let mut got = ids(&sorted);
            got.sort();
            assert_eq!(got, vec![1, 2, 3, 4, 5], "{} {}", field, order);
        }
    }
}

#[test]
fn test_numeric_direction_correctness() {
    let model = TableModel::new(product_header(), TableOptions::with_data(products())).unwrap();

    let asc = model.sort_data("price", SortOrder::Asc).unwrap();
    let prices: Vec<i64> = asc.iter().map(|r| r["price"].as_i64().unwrap()).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));

    let desc = model.sort_data("price", SortOrder::Desc).unwrap();
    let mut reversed = ids(&asc);
    reversed.reverse();
    assert_eq!(ids(&desc), reversed);
}

#[test]
fn test_string_column_collation() {
    let model = TableModel::new(product_header(), TableOptions::with_data(products())).unwrap();
    // кириллица раньше латиницы, регистр не важен, ё рядом с е
    assert_eq!(ids(model.data()), vec![5, 3, 1, 2, 4]);
}

#[test]
fn test_custom_comparator_delegation() {
    let model = TableModel::new(product_header(), TableOptions::with_data(products())).unwrap();

    let mut expected = model.data().to_vec();
    expected.sort_by(|a, b| sku_number(a).cmp(&sku_number(b)));
    assert_eq!(ids(&model.sort_data("sku", SortOrder::Asc).unwrap()), ids(&expected));

    expected.sort_by(|a, b| sku_number(a).cmp(&sku_number(b)).reverse());
    assert_eq!(ids(&model.sort_data("sku", SortOrder::Desc).unwrap()), ids(&expected));
}

#[test]
fn test_toggle_sequence_across_columns() {
    let header = vec![
        ColumnSpec::new("a", "A").sortable(true),
        ColumnSpec::new("b", "B").sortable(true),
        ColumnSpec::new("c", "C").sortable(true),
    ];
    let data = rows(json!([
        { "id": 1, "a": 1, "b": 3, "c": 2 },
        { "id": 2, "a": 2, "b": 1, "c": 3 },
        { "id": 3, "a": 3, "b": 2, "c": 1 }
    ]));
    let mut model = TableModel::new(header, TableOptions::with_data(data)).unwrap();

    // начальная сортировка не считается кликом: первый клик по "a" даёт asc->desc
    assert_eq!(model.activate("a").unwrap(), Some(SortOrder::Desc));
    assert_eq!(model.activate("a").unwrap(), Some(SortOrder::Asc));
    assert_eq!(model.activate("b").unwrap(), Some(SortOrder::Desc));
    // "a" больше не активна: её прежнее направление не помнится
    assert_eq!(model.activate("a").unwrap(), Some(SortOrder::Desc));
    assert_eq!(model.activate("c").unwrap(), Some(SortOrder::Desc));
    assert_eq!(model.activate("c").unwrap(), Some(SortOrder::Asc));

    assert_eq!(active(&model), Some(("c".to_string(), SortOrder::Asc)));
    assert_eq!(ids(model.data()), vec![3, 1, 2]);
    assert_eq!(model.template().matches("data-order=").count(), 1);
}

#[test]
fn test_first_click_without_initial_sort_is_desc() {
    let header = vec![
        ColumnSpec::new("x", "X"),
        ColumnSpec::new("y", "Y"),
    ];
    let mut model = TableModel::new(header, TableOptions::default()).unwrap();
    model.header_mut()[1].sortable = true;

    assert!(model.active_sort().is_none());
    assert_eq!(model.activate("y").unwrap(), Some(SortOrder::Desc));
}

#[test]
fn test_non_sortable_column_never_changes_state() {
    let mut model = TableModel::new(product_header(), TableOptions::with_data(products())).unwrap();
    let before_ids = ids(model.data());
    let before_state = model.sort_state().clone();

    for _ in 0..5 {
        assert_eq!(model.activate("quantity").unwrap(), None);
    }

    assert_eq!(ids(model.data()), before_ids);
    assert_eq!(model.sort_state(), &before_state);
}

#[test]
fn test_unknown_sort_field_fails_loudly() {
    let mut model = fixture();
    let before = ids(model.data());

    let err = model.sort("salary", SortOrder::Asc).unwrap_err();
    assert_eq!(err, TableError::UnknownColumn("salary".to_string()));
    assert_eq!(ids(model.data()), before);
    assert_eq!(model.sort_state().order_of("name"), Some(SortOrder::Asc));
}

#[test]
fn test_custom_comparator_missing_fails_on_sort() {
    let header = vec![
        ColumnSpec::new("id", "Id").sortable(true),
        ColumnSpec::new("rank", "Rank")
            .sortable(true)
            .sort_type(SortType::Custom),
    ];
    let mut model = TableModel::new(header, TableOptions::with_data(products())).unwrap();

    assert_eq!(
        model.activate("rank").unwrap_err(),
        TableError::MissingComparator("rank".to_string())
    );
    assert_eq!(model.sort_state().order_of("id"), Some(SortOrder::Asc));
}

#[test]
fn test_regions_are_declared_in_markup() {
    let model = fixture();
    let regions = region_names(&model.template());
    for expected in ["header", "body", "arrow", "name", "age"] {
        assert!(regions.iter().any(|r| r == expected), "missing {}", expected);
    }
}

#[test]
fn test_cell_templates_receive_raw_values() {
    let header = vec![
        ColumnSpec::new("price", "Price")
            .sortable(true)
            .with_template(|v| format!(r#"<div class="sortable-table__cell">{} ₽</div>"#, v)),
        ColumnSpec::new("flag", "Flag").with_template(|v| match v {
            Value::Null => "<div>-</div>".to_string(),
            other => format!("<div>{}</div>", other),
        }),
    ];
    let model = TableModel::new(header, TableOptions::with_data(products())).unwrap();
    let body = model.body_rows_template();

    assert!(body.contains("15 ₽"));
    assert_eq!(body.matches("<div>-</div>").count(), 5);
}
