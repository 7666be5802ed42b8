use crate::core::DirectoryLister;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem-backed lister: one flat read_dir, no recursion. All
/// entry kinds are reported, subdirectories included.
#[derive(Debug, Clone, Default)]
pub struct LocalDirectory;

impl LocalDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalDirectory {
    fn list_entries(&self, folder: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(Path::new(folder))? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
