//! Momentum UI rebrand icon table.
//!
//! Maps every icon in the rebrand icon font to its private-use-area ligature and
//! to the basename of its standalone vector asset:
//!
//! - **icon**: The closed [`IconName`] enum and per-icon lookups
//! - **lookup**: String-keyed lookups, including the `_invalid` sentinel
//! - **catalog**: JSON and CSS catalog export for galleries and asset pipelines
//! - **error**: Error handling
//! - **logging**: Structured logging setup

pub mod catalog;
pub mod error;
pub mod icon;
pub mod logging;
pub mod lookup;

mod verification_tests;

pub use catalog::{Catalog, CatalogConfig, CatalogEntry};
pub use error::IconError;
pub use icon::{IconName, IconRecord};
pub use lookup::{all_identifiers, filename_of, ligature_of, SENTINEL_IDENTIFIER};
