//! Data types for the RNE schedule scraper.
//!
//! This module contains the core data structures shared by the parsers and
//! the XMLTV serializer. All types implement Serialize and Deserialize for
//! JSON compatibility.

use serde::{Deserialize, Serialize};

/// A radio channel as listed on the schedule page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Human-readable channel name (e.g. "Radio Nacional")
    pub display_name: String,
    /// ASCII identifier used as the XMLTV channel id
    pub channel_id: String,
}

/// A partially-filled programme record built from a schedule-page anchor,
/// pending enrichment from its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramStub {
    /// Trimmed anchor text
    pub title: String,
    /// Absolute URL of the programme detail page
    pub url: String,
    /// Id of the channel this programme belongs to
    pub channel_id: String,
}

/// A fully scraped programme entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Full title as printed on the schedule page
    pub title: String,
    /// Absolute URL of the programme detail page
    pub url: String,
    /// Id of the channel this programme belongs to
    pub channel_id: String,
    /// Start timestamp in the literal XMLTV format `YYYYMMDDHHMMSS +ZZZZ`
    pub start_time: String,
    /// Stop timestamp in the same format; the date part is one day later
    /// than `start_time` for programmes running past midnight
    pub stop_time: String,
    /// Short description from the detail page, when present
    pub desc: Option<String>,
    /// Director credit from the detail page, when present
    pub credits_director: Option<String>,
    /// Programme language, always "es"
    pub language: String,
    /// Podcast URL from the detail page, when present
    pub podcast: Option<String>,
}

impl Program {
    /// Split the title on the literal `". "` separator.
    ///
    /// Returns the first segment as the title and, when a second segment
    /// exists, that segment alone as the subtitle. Any further segments are
    /// ignored.
    pub fn title_parts(&self) -> (&str, Option<&str>) {
        let mut parts = self.title.split(". ");
        let title = parts.next().unwrap_or(&self.title).trim();
        let subtitle = parts.next().map(str::trim);
        (title, subtitle)
    }
}

/// Run metadata emitted as attributes on the XMLTV root element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInfo {
    pub generator_info_name: String,
    pub generator_info_url: String,
    pub source_info_name: String,
    pub source_info_url: String,
    pub source_data_url: String,
}

/// The top-level aggregate for one generation pass: channels, the merged
/// three-day programme list, and run metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub channels: Vec<Channel>,
    pub programs: Vec<Program>,
    pub info: ScheduleInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_with_title(title: &str) -> Program {
        Program {
            title: title.to_string(),
            url: "http://www.rtve.es/alacarta/1".to_string(),
            channel_id: "rne".to_string(),
            start_time: "20240301080000 +0100".to_string(),
            stop_time: "20240301085500 +0100".to_string(),
            desc: None,
            credits_director: None,
            language: "es".to_string(),
            podcast: None,
        }
    }

    #[test]
    fn test_title_parts_with_subtitle() {
        let program = program_with_title("Las mañanas. Segunda parte");
        assert_eq!(
            program.title_parts(),
            ("Las mañanas", Some("Segunda parte"))
        );
    }

    #[test]
    fn test_title_parts_without_subtitle() {
        let program = program_with_title("Boletín horario");
        assert_eq!(program.title_parts(), ("Boletín horario", None));
    }

    #[test]
    fn test_title_parts_three_segments_keeps_second_only() {
        let program = program_with_title("Las mañanas. Segunda parte. Resumen");
        assert_eq!(
            program.title_parts(),
            ("Las mañanas", Some("Segunda parte"))
        );
    }

    #[test]
    fn test_program_serialization_roundtrip() {
        let program = program_with_title("Boletín horario");
        let json = serde_json::to_string(&program).unwrap();
        let deserialized: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, program);
    }

    #[test]
    fn test_channel_serialization() {
        let channel = Channel {
            display_name: "Radio Clásica".to_string(),
            channel_id: "rne-c".to_string(),
        };
        let json = serde_json::to_string(&channel).unwrap();
        let deserialized: Channel = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, channel);
    }
}
