//! High-level scraping API for the RTVE.es radio schedule
//!
//! Combines the HTTP client with the parsers: fetch a day's schedule
//! fragment, extract channels, and build the enriched programme list by
//! following every programme's detail page.

use chrono::{Duration, NaiveDate};

use crate::client::RneClient;
use crate::error::Result;
use crate::parser::{enrich_program, parse_program_stubs};
use crate::types::{Channel, Program};

/// The three day-specific schedule fragments published by RTVE.es.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleDay {
    Today,
    Tomorrow,
    DayAfter,
}

impl ScheduleDay {
    /// All days, in processing order.
    pub const ALL: [ScheduleDay; 3] = [Self::Today, Self::Tomorrow, Self::DayAfter];

    /// Site-relative path of this day's schedule fragment.
    pub fn path(self) -> &'static str {
        match self {
            Self::Today => "/radio/components/parrilla/mod_parrilla_rne_hoy.inc",
            Self::Tomorrow => "/radio/components/parrilla/mod_parrilla_rne_manana.inc",
            Self::DayAfter => "/radio/components/parrilla/mod_parrilla_rne_pasado.inc",
        }
    }

    /// Offset in days relative to the "today" page.
    pub fn offset(self) -> i64 {
        match self {
            Self::Today => 0,
            Self::Tomorrow => 1,
            Self::DayAfter => 2,
        }
    }

    /// Schedule date of this day's fragment, given today's date.
    pub fn date_from(self, today: NaiveDate) -> NaiveDate {
        today + Duration::days(self.offset())
    }
}

/// Main scraper API for the RTVE.es radio schedule.
///
/// # Example
/// ```no_run
/// use rne_core::{parse_channels, RneScraper, ScheduleDay};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = RneScraper::new()?;
///     let html = scraper.fetch_schedule_page(ScheduleDay::Today).await?;
///     let channels = parse_channels(&html)?;
///     println!("{} channels listed", channels.len());
///     Ok(())
/// }
/// ```
pub struct RneScraper {
    client: RneClient,
}

impl RneScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = RneClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with a custom client.
    ///
    /// This is useful for testing or when you need custom client
    /// configuration.
    pub fn with_client(client: RneClient) -> Self {
        Self { client }
    }

    /// Absolute URL of a day's schedule fragment.
    pub fn schedule_url(&self, day: ScheduleDay) -> String {
        format!("{}{}", self.client.base_url(), day.path())
    }

    /// Fetch a day's schedule fragment as raw HTML.
    pub async fn fetch_schedule_page(&self, day: ScheduleDay) -> Result<String> {
        self.client.fetch(day.path()).await
    }

    /// Build the full programme list for one day's schedule fragment.
    ///
    /// Walks every channel's anchors in `schedule_html`, then fetches and
    /// normalizes each programme's detail page in turn. Fetches are strictly
    /// sequential; any fetch or parse failure aborts the whole batch.
    ///
    /// `channels` must be the list extracted from the today fragment; the
    /// channel sets are assumed identical across all three days.
    pub async fn programs_for_day(
        &self,
        schedule_html: &str,
        channels: &[Channel],
        date: NaiveDate,
    ) -> Result<Vec<Program>> {
        let origin = self.client.base_url();
        let stubs = parse_program_stubs(schedule_html, channels, origin)?;

        let mut programs = Vec::with_capacity(stubs.len());
        for stub in stubs {
            let html = self.client.fetch(&stub.url).await?;
            programs.push(enrich_program(&html, stub, date, origin)?);
        }

        Ok(programs)
    }
}
