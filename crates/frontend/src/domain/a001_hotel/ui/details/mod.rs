//! Hotel create/edit modal
//!
//! - view_model.rs: form signals, validation and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::HotelDetails;
pub use view_model::{HotelDetailsViewModel, HotelFormInput};
