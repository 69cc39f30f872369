pub mod date_range_picker;
pub mod filter_fields;
pub mod filter_panel;
pub mod pagination_controls;
pub mod sortable_header_cell;
