//! HTML parsers for the RTVE.es schedule pages
//!
//! This module contains parsers for extracting data from the schedule
//! fragments and the programme detail pages:
//! - `channels`: Parse the channel list from a schedule fragment
//! - `programs`: Build programme stubs and enrich them from detail pages

pub mod channels;
pub mod programs;

// Re-export main parsing functions
pub use channels::parse_channels;
pub use programs::{absolute_url, enrich_program, parse_program_stubs};

use scraper::Selector;

use crate::error::{Result, RneError};

/// CSS marker for the per-channel schedule lists.
pub(crate) const CHANNEL_LIST_SELECTOR: &str = r#"ul[rel="tve"]"#;

/// Compile a CSS selector, mapping failures to a parse error.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| RneError::Parse(format!("Invalid selector {css:?}: {e:?}")))
}
