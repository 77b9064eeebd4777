//! Lookup of component documents by VLNV.

use ipx_common::Vlnv;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Resolves a VLNV to the path of the IP-XACT document describing it.
pub trait LibraryInterface {
    /// Returns the document path of `vlnv`, if the library knows it.
    fn path_of(&self, vlnv: &Vlnv) -> Option<PathBuf>;
}

/// A library backed by an in-memory VLNV to path map.
#[derive(Clone, Default, Debug)]
pub struct LibraryPaths {
    paths: BTreeMap<Vlnv, PathBuf>,
}

impl LibraryPaths {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the document path of `vlnv`, replacing any previous one.
    pub fn insert(&mut self, vlnv: Vlnv, path: impl Into<PathBuf>) {
        self.paths.insert(vlnv, path.into());
    }

    /// Returns the number of registered documents.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if no documents are registered.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl From<BTreeMap<Vlnv, PathBuf>> for LibraryPaths {
    fn from(paths: BTreeMap<Vlnv, PathBuf>) -> Self {
        Self { paths }
    }
}

impl LibraryInterface for LibraryPaths {
    fn path_of(&self, vlnv: &Vlnv) -> Option<PathBuf> {
        self.paths.get(vlnv).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        let uart = Vlnv::new("tut.fi", "ip", "uart", "1.0");
        let mut library = LibraryPaths::new();
        assert!(library.is_empty());
        library.insert(uart.clone(), "ip/uart.xml");
        assert_eq!(library.len(), 1);
        assert_eq!(library.path_of(&uart), Some(PathBuf::from("ip/uart.xml")));
        assert_eq!(library.path_of(&Vlnv::new("tut.fi", "ip", "uart", "2.0")), None);
    }
}
