pub mod error;
pub mod version;
pub mod stream;
pub mod channel;
pub mod manifest;
pub mod alignment;
pub mod config;
pub mod editor;
pub mod output;

// Types needed to load a channel and check artifacts against it
pub use error::{StreamError, StreamResult};
pub use stream::StreamSpec;
pub use version::VersionComparator;
pub use channel::{Channel, DocumentFormat};
pub use manifest::Artifact;
pub use alignment::{AlignmentSummary, Finding, FindingLevel};
