pub mod backup;
pub mod list;

pub use backup::{run_export, run_import};
pub use list::run_list;
