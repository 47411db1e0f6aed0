//! Comparison engine for APK build verification.
//!
//! `apkdiff-core` decides whether two APK packages (zip containers) are
//! functionally identical: every entry must match byte-for-byte, except the
//! cryptographic signature entry, which is expected to differ between builds
//! signed with different keys.
//!
//! # Examples
//!
//! ```no_run
//! use apkdiff_core::CompareConfig;
//! use apkdiff_core::compare_apks;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CompareConfig::default();
//! let verdict = compare_apks("reference.apk", "rebuilt.apk", &config)?;
//! if verdict.is_match() {
//!     println!("APKs match!");
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod compare;
pub mod config;
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main API types
pub use archive::ApkArchive;
pub use archive::EntryInfo;
pub use compare::ManifestDiff;
pub use compare::Verdict;
pub use compare::compare_apks;
pub use compare::diff_manifests;
pub use config::CompareConfig;
pub use config::CompareMode;
pub use config::LengthCheck;
pub use config::SIGNATURE_ENTRY;
pub use error::DiffError;
pub use error::Result;
