pub mod checker;

pub use checker::{AlignmentSummary, Finding, FindingLevel};
