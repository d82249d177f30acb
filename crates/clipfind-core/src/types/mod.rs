pub mod episode;
pub mod record;

pub use episode::EpisodeSpec;
pub use record::{FoundFile, ParsedName};
