//! DOCX text extraction. The whole body lives in `word/document.xml` as
//! WordprocessingML; the visible text is the concatenation of the `<w:t>`
//! runs.

use crate::OfficeError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

pub(crate) fn extract(archive: &mut ZipArchive<Cursor<&[u8]>>) -> Result<String, OfficeError> {
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;
    body_text(&xml)
}

/// Collects text runs, one line per paragraph (`<w:p>`). Tabs and explicit
/// breaks are flattened to whitespace.
fn body_text(xml: &str) -> Result<String, OfficeError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::Text(t) if in_text_run => out.push_str(&t.unescape()?),
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => out.push(' '),
                b"w:br" => out.push('\n'),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out.trim_end().to_string())
}
