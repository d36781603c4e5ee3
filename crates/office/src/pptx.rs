//! PPTX text extraction. Each slide is a DrawingML part under
//! `ppt/slides/slideN.xml`; visible text sits in `<a:t>` runs.

use crate::OfficeError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

pub(crate) fn extract(archive: &mut ZipArchive<Cursor<&[u8]>>) -> Result<String, OfficeError> {
    let mut slide_names: Vec<String> = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .map(str::to_owned)
        .collect();
    // Entry order inside the archive is arbitrary; present slides by number.
    slide_names.sort_by_key(|name| slide_number(name));

    let mut slides = Vec::with_capacity(slide_names.len());
    for name in &slide_names {
        let mut xml = String::new();
        archive.by_name(name)?.read_to_string(&mut xml)?;
        slides.push(slide_text(&xml)?);
    }

    Ok(slides.join("\n\n"))
}

fn slide_number(name: &str) -> u32 {
    let digits: String = name.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

fn slide_text(xml: &str) -> Result<String, OfficeError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"a:t" => in_text_run = true,
            Event::Text(t) if in_text_run => out.push_str(&t.unescape()?),
            Event::End(e) => match e.name().as_ref() {
                b"a:t" => in_text_run = false,
                b"a:p" => out.push('\n'),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out.trim_end().to_string())
}
