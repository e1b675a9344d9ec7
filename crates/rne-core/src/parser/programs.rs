//! Programme parsers for the RTVE.es schedule
//!
//! Two passes build a programme entry. `parse_program_stubs` walks the
//! schedule fragment and turns every anchor inside a channel list into a
//! stub (title, detail URL, channel id). `enrich_program` then fills the
//! stub in from the programme detail page: the time range, description,
//! director credit, podcast link and language.

use chrono::{Duration, NaiveDate};
use scraper::Html;

use crate::error::{Result, RneError};
use crate::types::{Channel, Program, ProgramStub};

use super::{selector, CHANNEL_LIST_SELECTOR};

/// Language tag attached to every programme.
const PROGRAM_LANGUAGE: &str = "es";

/// UTC offset appended to every timestamp. The listings print Madrid local
/// times; the offset is emitted as a constant and does not track DST.
const LOCAL_TIME_OFFSET: &str = "+0100";

/// Detail blocks starting with this marker are "more info" footers, not
/// credit listings.
const MORE_INFO_MARKER: &str = "Más información:";

/// Build programme stubs from schedule page HTML.
///
/// Channel lists are re-queried from the document in the same order
/// `parse_channels` produces and correlated with `channels` by index, so
/// the caller must pass the channel list that matches this document (the
/// tomorrow/day-after pages reuse the today page's channels).
///
/// # Arguments
/// * `html` - Raw HTML content of a schedule fragment
/// * `channels` - Channel list extracted from the today fragment
/// * `origin` - Site origin used to absolutize relative detail links
pub fn parse_program_stubs(
    html: &str,
    channels: &[Channel],
    origin: &str,
) -> Result<Vec<ProgramStub>> {
    let document = Html::parse_document(html);
    let list_selector = selector(CHANNEL_LIST_SELECTOR)?;
    let anchor_selector = selector("a")?;

    let mut stubs = Vec::new();
    for (list, channel) in document.select(&list_selector).zip(channels) {
        for anchor in list.select(&anchor_selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let title = anchor.text().collect::<String>().trim().to_string();

            stubs.push(ProgramStub {
                title,
                url: absolute_url(href, origin),
                channel_id: channel.channel_id.clone(),
            });
        }
    }

    Ok(stubs)
}

/// Resolve a link against the site origin.
///
/// Links already carrying the origin pass through unchanged; rooted links
/// (`/...`) get the origin prefixed; anything else is left as-is.
pub fn absolute_url(href: &str, origin: &str) -> String {
    if href.starts_with(origin) {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        href.to_string()
    }
}

/// Enrich a programme stub from its detail page HTML.
///
/// # Arguments
/// * `html` - Raw HTML content of the programme detail page
/// * `stub` - Stub built by `parse_program_stubs`
/// * `date` - Schedule date the programme starts on
/// * `origin` - Site origin used to absolutize the podcast link
///
/// # Errors
/// * `RneError::ElementNotFound` if the mandatory hour element is missing
/// * `RneError::Parse` if the hour text is not a `HH:MM-HH:MM` range
pub fn enrich_program(
    html: &str,
    stub: ProgramStub,
    date: NaiveDate,
    origin: &str,
) -> Result<Program> {
    let document = Html::parse_document(html);

    let hour_selector = selector(".hour")?;
    let hour = document
        .select(&hour_selector)
        .next()
        .ok_or_else(|| RneError::ElementNotFound(format!(".hour on {}", stub.url)))?;
    let hour_text = hour.text().collect::<String>();
    let (start_hms, stop_hms) = parse_time_range(&hour_text)?;

    let start_date = date.format("%Y%m%d").to_string();
    // Both sides are fixed-width zero-padded digit strings, so a lexical
    // comparison is a chronological one; a smaller stop means the programme
    // runs past midnight.
    let stop_date = if stop_hms < start_hms {
        (date + Duration::days(1)).format("%Y%m%d").to_string()
    } else {
        start_date.clone()
    };

    let start_time = format!("{start_date}{start_hms} {LOCAL_TIME_OFFSET}");
    let stop_time = format!("{stop_date}{stop_hms} {LOCAL_TIME_OFFSET}");

    let anchor_selector = selector("a")?;
    let podcast = document
        .select(&anchor_selector)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .map(|href| absolute_url(href, origin));

    let lede_selector = selector(".chapeaux")?;
    let desc = document
        .select(&lede_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty());

    let detail_selector = selector(".detalle")?;
    let credits_director = document
        .select(&detail_selector)
        .next()
        .and_then(|block| parse_director(&block));

    Ok(Program {
        title: stub.title,
        url: stub.url,
        channel_id: stub.channel_id,
        start_time,
        stop_time,
        desc,
        credits_director,
        language: PROGRAM_LANGUAGE.to_string(),
        podcast,
    })
}

/// Split an hour range like `"08:00-08:55"` into a pair of normalized
/// `HHMMSS` strings.
fn parse_time_range(text: &str) -> Result<(String, String)> {
    let (start_raw, stop_raw) = text
        .split_once('-')
        .ok_or_else(|| RneError::Parse(format!("missing '-' in time range {text:?}")))?;

    Ok((normalize_hour(start_raw)?, normalize_hour(stop_raw)?))
}

/// Turn `"08:00"` into the fixed-width `"080000"` used for lexical
/// comparison. Anything that would break the 6-digit width is rejected.
fn normalize_hour(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let re = regex_lite::Regex::new(r"^(\d{2}):(\d{2})$").unwrap();
    let caps = re
        .captures(trimmed)
        .ok_or_else(|| RneError::Parse(format!("invalid hour text {trimmed:?}")))?;

    // Right-pad with zero seconds to a full HHMMSS string.
    Ok(format!("{}{}00", &caps[1], &caps[2]))
}

/// Extract the director credit from a `.detalle` block.
///
/// Blocks opening with the "more info" marker are footers and never yield
/// a credit; otherwise the block must carry both a term and a definition,
/// and the definition's text is the credit.
fn parse_director(block: &scraper::ElementRef) -> Option<String> {
    let text = block.text().collect::<String>();
    if text.trim_start().starts_with(MORE_INFO_MARKER) {
        return None;
    }

    let term_selector = scraper::Selector::parse("dt").ok()?;
    let definition_selector = scraper::Selector::parse("dd").ok()?;

    block.select(&term_selector).next()?;
    let definition = block.select(&definition_selector).next()?;

    let credit = definition.text().collect::<String>().trim().to_string();
    if credit.is_empty() {
        None
    } else {
        Some(credit)
    }
}
