pub mod build;
pub mod incidence;
pub mod stats;
pub mod types;

pub use build::{build_index, build_index_with_config};
pub use incidence::IncidenceIndex;
pub use types::*;
