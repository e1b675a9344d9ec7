//! Channel list parser for the RTVE.es schedule fragments
//!
//! The schedule page carries one `<ul rel="tve">` per channel. The header
//! `<li>` holds the display name and the second class token on the `<ul>`
//! is the channel identifier.

use scraper::{ElementRef, Html, Node};

use crate::error::Result;
use crate::types::Channel;

use super::{selector, CHANNEL_LIST_SELECTOR};

/// Parse the channel list from schedule page HTML.
///
/// Channels come out in document order, which is also the order the
/// programme list builder correlates schedule lists with. An input without
/// any marker lists yields an empty vector rather than an error.
///
/// # Arguments
/// * `html` - Raw HTML content of a schedule fragment
pub fn parse_channels(html: &str) -> Result<Vec<Channel>> {
    let document = Html::parse_document(html);
    let list_selector = selector(CHANNEL_LIST_SELECTOR)?;

    let mut channels = Vec::new();
    for list in document.select(&list_selector) {
        if let Some(channel) = parse_channel_entry(&list) {
            channels.push(channel);
        }
    }

    Ok(channels)
}

/// Parse a single `<ul rel="tve">` into a channel.
fn parse_channel_entry(list: &ElementRef) -> Option<Channel> {
    // The header <li> is the second DOM child; index 0 is the whitespace
    // text node preceding it.
    let display_name = second_child_text(list)?;
    let channel_id = list.value().classes().nth(1)?.to_string();

    Some(Channel {
        display_name,
        channel_id,
    })
}

/// Text of an element's second child node, trimmed.
fn second_child_text(element: &ElementRef) -> Option<String> {
    let node = element.children().nth(1)?;
    let text = match ElementRef::wrap(node) {
        Some(child) => child.text().collect::<String>(),
        None => match node.value() {
            Node::Text(text) => text.to_string(),
            _ => return None,
        },
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE_HTML: &str = r#"
        <html><body>
            <ul rel="tve" class="parrilla rne">
                <li>Radio Nacional</li>
                <li><a href="/alacarta/1">Las mañanas</a></li>
            </ul>
            <ul rel="tve" class="parrilla rne-c">
                <li>Radio Clásica</li>
                <li><a href="/alacarta/2">Sinfonía de la mañana</a></li>
            </ul>
        </body></html>
    "#;

    #[test]
    fn test_parse_channels_in_document_order() {
        let channels = parse_channels(SCHEDULE_HTML).unwrap();

        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].display_name, "Radio Nacional");
        assert_eq!(channels[0].channel_id, "rne");
        assert_eq!(channels[1].display_name, "Radio Clásica");
        assert_eq!(channels[1].channel_id, "rne-c");
    }

    #[test]
    fn test_parse_channels_empty_document() {
        let channels = parse_channels("<html><body></body></html>").unwrap();
        assert!(channels.is_empty());
    }

    #[test]
    fn test_parse_channels_ignores_unmarked_lists() {
        let html = r#"
            <ul class="parrilla rne">
                <li>Radio Nacional</li>
            </ul>
        "#;
        let channels = parse_channels(html).unwrap();
        assert!(channels.is_empty());
    }

    #[test]
    fn test_parse_channels_skips_list_without_second_class() {
        let html = r#"
            <ul rel="tve" class="parrilla">
                <li>Radio Nacional</li>
            </ul>
        "#;
        let channels = parse_channels(html).unwrap();
        assert!(channels.is_empty());
    }
}
