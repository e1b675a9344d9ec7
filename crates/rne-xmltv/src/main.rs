//! XMLTV generator for the RTVE.es radio schedule.
//!
//! Fetches the today/tomorrow/day-after schedule fragments, follows every
//! programme's detail page, and writes the merged three-day listing as
//! `parrilla_rtve.xml` in the current directory. Takes no flags; any fetch
//! or parse failure aborts the run before the output file is opened.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use rne_core::{
    parse_channels, write_xmltv, ClientConfig, RneClient, RneScraper, Schedule, ScheduleDay,
    ScheduleInfo, RTVE_BASE_URL,
};

const OUTPUT_FILE: &str = "parrilla_rtve.xml";

const GENERATOR_INFO_NAME: &str = "rne-xmltv";
const GENERATOR_INFO_URL: &str = "";
const SOURCE_INFO_NAME: &str = "Radio Nacional de España. RTVE.es";
const SOURCE_INFO_URL: &str = "http://www.rtve.es/radio/programas/radio/";

/// Configuration for one full scrape-and-serialize run.
struct RunConfig {
    /// Site origin the schedule fragments are fetched from
    base_url: String,
    /// Where the XMLTV document is written
    output_path: PathBuf,
    /// Schedule dates for the today/tomorrow/day-after pages, in that order
    dates: [NaiveDate; 3],
}

impl Default for RunConfig {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            base_url: RTVE_BASE_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE),
            dates: ScheduleDay::ALL.map(|day| day.date_from(today)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(RunConfig::default()).await
}

async fn run(config: RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = RneClient::with_config(ClientConfig {
        base_url: config.base_url.clone(),
        ..ClientConfig::default()
    })?;
    let scraper = RneScraper::with_client(client);

    let mut pages = Vec::new();
    for day in ScheduleDay::ALL {
        let html = scraper.fetch_schedule_page(day).await?;
        println!("{} downloaded", scraper.schedule_url(day));
        pages.push(html);
    }

    // The channel set is assumed identical across all three days, so the
    // today page's channels are reused for the other two.
    let channels = parse_channels(&pages[0])?;
    println!("{} channels listed", channels.len());
    if channels.is_empty() {
        eprintln!("warning: no channel lists found on the schedule page");
    }

    let mut programs = Vec::new();
    for (date, html) in config.dates.into_iter().zip(&pages) {
        let day_programs = scraper.programs_for_day(html, &channels, date).await?;
        for channel in &channels {
            let count = day_programs
                .iter()
                .filter(|p| p.channel_id == channel.channel_id)
                .count();
            println!("{} {}. {} programs found", date, channel.display_name, count);
        }
        programs.extend(day_programs);
    }
    println!("{} programs found", programs.len());

    let schedule = Schedule {
        channels,
        programs,
        info: ScheduleInfo {
            generator_info_name: GENERATOR_INFO_NAME.to_string(),
            generator_info_url: GENERATOR_INFO_URL.to_string(),
            source_info_name: SOURCE_INFO_NAME.to_string(),
            source_info_url: SOURCE_INFO_URL.to_string(),
            source_data_url: scraper.schedule_url(ScheduleDay::Today),
        },
    };

    println!("Building XMLTV file");
    let xml = write_xmltv(&schedule)?;
    std::fs::write(&config.output_path, xml)?;
    println!(
        "{} programs info written to {}",
        schedule.programs.len(),
        config.output_path.display()
    );

    Ok(())
}
