pub mod pages;
pub mod support;
