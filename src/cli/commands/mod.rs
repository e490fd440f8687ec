//! CLI command implementations.

mod config;
mod doctor;
mod list;
mod resolve;
mod run;

pub use config::run_config;
pub use doctor::run_doctor;
pub use list::run_list;
pub use resolve::run_resolve;
pub use run::run_pipeline;
