use crate::utils::error::Result;

/// Listing seam over the filesystem. Entry names only, in whatever
/// order the underlying listing produces them.
pub trait DirectoryLister {
    fn list_entries(&self, folder: &str) -> Result<Vec<String>>;
}
