pub mod a001_hotel;
pub mod a002_room;
pub mod a003_facility;
pub mod common;
