//! VLNV identifiers (`vendor:library:name:version`) for IP-XACT documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four-part identity of an IP-XACT document.
///
/// Displayed and parsed in the colon-separated form
/// `vendor:library:name:version`. Serialized as that same string so model
/// files can spell a VLNV inline.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vlnv {
    /// The vendor, usually a reversed domain name (e.g. `tut.fi`).
    pub vendor: String,
    /// The library the document belongs to.
    pub library: String,
    /// The document name.
    pub name: String,
    /// The document version.
    pub version: String,
}

impl Vlnv {
    /// Creates a VLNV from its four parts.
    pub fn new(
        vendor: impl Into<String>,
        library: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            library: library.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Returns `true` if every part is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.vendor.is_empty()
            && !self.library.is_empty()
            && !self.name.is_empty()
            && !self.version.is_empty()
    }
}

impl fmt::Display for Vlnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.vendor, self.library, self.name, self.version
        )
    }
}

/// Error returned when a string is not a `vendor:library:name:version` tuple.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid VLNV '{input}': expected vendor:library:name:version")]
pub struct ParseVlnvError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for Vlnv {
    type Err = ParseVlnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').map(str::trim).collect();
        match parts.as_slice() {
            [vendor, library, name, version] => Ok(Vlnv::new(*vendor, *library, *name, *version)),
            _ => Err(ParseVlnvError {
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Vlnv {
    type Error = ParseVlnvError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Vlnv> for String {
    fn from(vlnv: Vlnv) -> Self {
        vlnv.to_string()
    }
}
