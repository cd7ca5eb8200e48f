pub mod api;
pub mod facets;
pub mod filter;
pub mod store;
pub mod sync;
pub mod ui;
