pub mod catalog;
pub mod detail_view;
