// src/extract/mod.rs
// =============================================================================
// Everything that reads a fetched page:
// - email: finds email-like strings in the raw text
// - links: finds anchor targets and resolves host-relative ones
// =============================================================================

mod email;
mod links;

pub use email::extract_emails;
pub use links::{base_url, extract_anchor_hrefs, resolve_link};
