//! CLI command handlers, one per file.

mod completions;
mod export;
mod link;
mod normalize;
mod save;
mod table;

pub use completions::{run_completions, run_man};
pub use export::run_export;
pub use link::{run_link, LinkArgs};
pub use normalize::run_normalize;
pub use save::{run_save, SaveArgs};
pub use table::run_table;
