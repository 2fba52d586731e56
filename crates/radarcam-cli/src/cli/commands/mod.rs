//! CLI command handlers, one per file.

mod config;
mod fetch;
mod snapshot;
mod urls;
mod watch;

pub use config::run_config;
pub use fetch::run_fetch;
pub use snapshot::run_snapshot;
pub use urls::run_urls;
pub use watch::run_watch;
