pub mod spec;
pub mod matcher;

pub use spec::{StreamDocument, StreamSpec, WILDCARD};
