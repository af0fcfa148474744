pub mod error;
pub mod ring;
pub mod site;

pub use error::RingError;
pub use ring::{wrapped_index, Neighbors, Ring};
pub use site::SiteRecord;
