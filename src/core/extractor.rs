use crate::core::{DirectoryLister, Result, ScanResult};
use crate::utils::error::ScanError;

/// Scans a dataset folder for SNAP-style ego-network files.
///
/// Every entry whose name contains "edges" contributes one ego id: the
/// segment of the name before the first '.', parsed as a base-10
/// integer. A non-numeric leading segment is an error, not a skip;
/// datasets are expected to contain only well-formed `<id>.edges`
/// files.
pub struct IdentifierExtractor<L: DirectoryLister> {
    lister: L,
}

impl<L: DirectoryLister> IdentifierExtractor<L> {
    pub fn new(lister: L) -> Self {
        Self { lister }
    }

    pub fn scan(&self, folder: &str) -> Result<ScanResult> {
        let entries = self.lister.list_entries(folder)?;
        tracing::debug!("Listed {} entries in {}", entries.len(), folder);

        let mut ids = Vec::new();
        for name in entries {
            if !name.contains("edges") {
                tracing::trace!("Skipping non-edges entry: {}", name);
                continue;
            }
            let id = parse_ego_id(&name)?;
            tracing::debug!("Entry {} -> ego id {}", name, id);
            ids.push(id);
        }

        // Listing order is filesystem-dependent; normalize it.
        ids.sort_unstable();

        tracing::debug!("Found {} ego ids", ids.len());
        Ok(ScanResult { ids })
    }
}

fn parse_ego_id(name: &str) -> Result<i64> {
    let segment = name.split('.').next().unwrap_or(name);
    segment
        .parse::<i64>()
        .map_err(|source| ScanError::ParseError {
            file: name.to_string(),
            segment: segment.to_string(),
            source,
        })
}
