//! Artifact identifiers
//!
//! Every node gets a script variable name (`artifact1`, `artifact2`, ...)
//! the first time it is parsed. Later nodes reference earlier ones by their
//! document id, which is resolved through this table.

use std::collections::HashMap;

/// Default prefix of generated identifiers
pub const DEFAULT_PREFIX: &str = "artifact";

/// `node id → artifact identifier` table for one translation
#[derive(Debug, Clone)]
pub struct ArtifactTable {
    prefix: String,
    counter: usize,
    ids: HashMap<String, String>,
}

impl ArtifactTable {
    /// Create an empty table producing `<prefix><n>` identifiers
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
            ids: HashMap::new(),
        }
    }

    /// Assign the identifier for a node
    ///
    /// Every call hands out a fresh identifier. A repeated id rebinds to the
    /// newest node, so later references resolve to it. A node without an id
    /// still gets an identifier, but nothing can reference it.
    pub fn assign(&mut self, id: Option<&str>) -> String {
        self.counter += 1;
        let artifact = format!("{}{}", self.prefix, self.counter);
        match id {
            Some(id) => {
                if let Some(previous) = self.ids.insert(id.to_string(), artifact.clone()) {
                    tracing::warn!(
                        "Node id '{}' appears more than once; {} now replaces {}",
                        id,
                        artifact,
                        previous
                    );
                }
            }
            None => tracing::warn!("Node without an id bound to {}", artifact),
        }
        artifact
    }

    /// Look up the identifier of an already parsed node
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.ids.get(id).map(String::as_str)
    }

    /// Number of identifiers handed out so far
    pub fn allocated(&self) -> usize {
        self.counter
    }
}

impl Default for ArtifactTable {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_sequential() {
        let mut table = ArtifactTable::default();
        assert_eq!(table.assign(Some("Read")), "artifact1");
        assert_eq!(table.assign(Some("Resample")), "artifact2");
        assert_eq!(table.assign(Some("Write")), "artifact3");
        assert_eq!(table.allocated(), 3);
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let mut table = ArtifactTable::default();
        table.assign(Some("Read"));
        assert_eq!(table.resolve("Read"), Some("artifact1"));
        assert_eq!(table.resolve("Later"), None);
    }

    #[test]
    fn test_duplicate_id_gets_fresh_identifier() {
        let mut table = ArtifactTable::default();
        assert_eq!(table.assign(Some("a")), "artifact1");
        assert_eq!(table.assign(Some("a")), "artifact2");
        assert_eq!(table.assign(Some("b")), "artifact3");
        assert_eq!(table.resolve("a"), Some("artifact2"));
    }

    #[test]
    fn test_missing_id_still_allocates() {
        let mut table = ArtifactTable::new("p");
        assert_eq!(table.assign(None), "p1");
        assert_eq!(table.assign(Some("x")), "p2");
        assert_eq!(table.resolve("x"), Some("p2"));
    }
}
