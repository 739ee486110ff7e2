pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod snapshot;

pub use error::ScrapeError;
pub use snapshot::{run, snapshot, TARGET_URL};
