pub mod registry_panel;

pub use registry_panel::*;
