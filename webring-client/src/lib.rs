pub mod directory;
pub mod error;
pub mod nav;
pub mod page;

pub use directory::DirectoryFetcher;
pub use error::ClientError;
pub use nav::{initialize, run};
pub use page::{apply_links, HomeMarker, LinkSlot};
