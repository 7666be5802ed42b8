pub mod extractor;

pub use crate::domain::model::ScanResult;
pub use crate::domain::ports::DirectoryLister;
pub use crate::utils::error::Result;
