//! Shared foundational types used across the ipxgen workspace.
//!
//! Currently this is the [`Vlnv`] identity (vendor, library, name, version)
//! that every IP-XACT document carries, together with its parse error.

#![warn(missing_docs)]

pub mod vlnv;

pub use vlnv::{ParseVlnvError, Vlnv};
