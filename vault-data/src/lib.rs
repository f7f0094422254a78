pub mod envelope;
pub mod tags;
pub mod types;

pub use envelope::{ContentEnvelope, ContentType, Snippet, Summary};
pub use tags::{Tag, APPLICATION_ID, JSON_CONTENT_TYPE};
pub use types::{Address, Network};
