pub mod record_form;

pub use record_form::*;
