pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_controller;
pub mod list_page;
pub mod list_row;
pub mod list_utils;
pub mod number_format;
pub mod state;
