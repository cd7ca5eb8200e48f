pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod errors;
pub mod icons;
pub mod list_utils;
pub mod mutation;
pub mod notifications;
pub mod page_frame;
pub mod page_standard;
pub mod remote;
