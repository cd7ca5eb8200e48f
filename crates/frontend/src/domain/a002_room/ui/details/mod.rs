mod view;
mod view_model;

pub use view::RoomDetails;
pub use view_model::{RoomDetailsViewModel, RoomFormInput};
