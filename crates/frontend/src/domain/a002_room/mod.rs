pub mod api;
pub mod filter;
pub mod sync;
pub mod ui;
