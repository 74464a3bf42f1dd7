pub mod sortable_table;
