//! RNE Schedule Scraper Core Library
//!
//! This crate scrapes the RTVE.es radio schedule fragments (Radio Nacional
//! de España) and serializes the result as an XMLTV document.
//!
//! # Features
//! - Channel list extraction from the day-specific schedule fragments
//! - Programme detail scraping: times, description, director, podcast link
//! - XMLTV serialization of the assembled schedule
//! - Rate-limited HTTP client to avoid server overload

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;
pub mod xmltv;

// Re-export main types for convenience
pub use client::{ClientConfig, RateLimiter, RneClient, RTVE_BASE_URL};
pub use error::{Result, RneError};
pub use parser::{absolute_url, enrich_program, parse_channels, parse_program_stubs};
pub use scraper::{RneScraper, ScheduleDay};
pub use types::{Channel, Program, ProgramStub, Schedule, ScheduleInfo};
pub use xmltv::write_xmltv;
