pub mod date_spec;
pub mod event;
