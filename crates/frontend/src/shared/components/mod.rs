pub mod date_input;
pub mod field_error;
