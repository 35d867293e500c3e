pub mod record_table;

pub use record_table::*;
