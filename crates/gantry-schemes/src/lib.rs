//! Gantry Schemes - Version schemes for changelog generation
//!
//! This crate provides the version recognition capability used to classify
//! release tags: a scheme parses and orders version strings and flags
//! prereleases. Two schemes ship built in, PEP 440 style and SemVer.

mod pep440;
mod registry;
mod semver;
mod traits;
pub mod types;

pub use pep440::Pep440Scheme;
pub use registry::SchemeRegistry;
pub use semver::SemverScheme;
pub use traits::VersionScheme;
pub use types::VersionComponents;
