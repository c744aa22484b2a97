//! Server-side rendering for restaurant listing and detail pages.
//!
//! The CMS injects one page-data object per page. [`data::WpData`] ingests it,
//! normalizing the loosely typed fields once, and the assemblers in [`page`]
//! turn it into a complete HTML document built from the components in
//! [`render`].

pub mod config;
pub mod countries;
pub mod data;
mod de;
pub mod page;
pub mod render;
