pub mod comparator;
pub mod ordering;

pub use comparator::VersionComparator;
pub use ordering::compare_versions;
