//! XMLTV serializer
//!
//! Turns a [`Schedule`] into an XMLTV document: a `tv` root carrying the
//! run metadata, one `channel` element per channel and one `programme`
//! element per programme, pretty-printed with an XML declaration.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::types::{Program, Schedule};

/// Serialize a schedule into an XMLTV document.
///
/// Channels are emitted in channel list order, programmes in programme list
/// order. No programme-level validation is performed; whatever was built is
/// emitted as-is.
pub fn write_xmltv(schedule: &Schedule) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut tv = BytesStart::new("tv");
    tv.push_attribute((
        "generator-info-name",
        schedule.info.generator_info_name.as_str(),
    ));
    tv.push_attribute((
        "generator-info-url",
        schedule.info.generator_info_url.as_str(),
    ));
    tv.push_attribute(("source-info-url", schedule.info.source_info_url.as_str()));
    tv.push_attribute(("source-info-name", schedule.info.source_info_name.as_str()));
    tv.push_attribute(("source-data-url", schedule.info.source_data_url.as_str()));
    writer.write_event(Event::Start(tv))?;

    for channel in &schedule.channels {
        let mut start = BytesStart::new("channel");
        start.push_attribute(("id", channel.channel_id.as_str()));
        writer.write_event(Event::Start(start))?;
        write_text_element(&mut writer, "display-name", &channel.display_name)?;
        writer.write_event(Event::End(BytesEnd::new("channel")))?;
    }

    for program in &schedule.programs {
        write_programme(&mut writer, program)?;
    }

    writer.write_event(Event::End(BytesEnd::new("tv")))?;

    let bytes = writer.into_inner();
    Ok(String::from_utf8(bytes)?)
}

/// Write a single `programme` element.
fn write_programme<W: Write>(writer: &mut Writer<W>, program: &Program) -> Result<()> {
    let mut start = BytesStart::new("programme");
    start.push_attribute(("channel", program.channel_id.as_str()));
    start.push_attribute(("start", program.start_time.as_str()));
    start.push_attribute(("stop", program.stop_time.as_str()));
    writer.write_event(Event::Start(start))?;

    let (title, subtitle) = program.title_parts();
    write_lang_element(writer, "title", &program.language, title)?;
    if let Some(subtitle) = subtitle {
        write_lang_element(writer, "subtitle", &program.language, subtitle)?;
    }

    if let Some(desc) = &program.desc {
        write_lang_element(writer, "desc", &program.language, desc)?;
    }

    if let Some(director) = &program.credits_director {
        writer.write_event(Event::Start(BytesStart::new("credits")))?;
        write_text_element(writer, "director", director)?;
        writer.write_event(Event::End(BytesEnd::new("credits")))?;
    }

    write_text_element(writer, "lang", &program.language)?;

    // Radio listings: no video track, stereo audio.
    writer.write_event(Event::Start(BytesStart::new("video")))?;
    write_text_element(writer, "present", "no")?;
    writer.write_event(Event::End(BytesEnd::new("video")))?;

    writer.write_event(Event::Start(BytesStart::new("audio")))?;
    write_text_element(writer, "present", "yes")?;
    write_text_element(writer, "stereo", "stereo")?;
    writer.write_event(Event::End(BytesEnd::new("audio")))?;

    writer.write_event(Event::End(BytesEnd::new("programme")))?;
    Ok(())
}

/// Write `<name>text</name>`.
fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write `<name lang="...">text</name>`.
fn write_lang_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    lang: &str,
    text: &str,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    start.push_attribute(("lang", lang));
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
