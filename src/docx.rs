//! DOCX text extraction.
//!
//! A DOCX file is a ZIP package whose main part holds the body paragraphs.
//! The main part is the target of the `officeDocument` relationship in
//! `_rels/.rels`, normally `word/document.xml`. Only paragraphs that sit directly in the body are
//! extracted; paragraphs nested in tables, text boxes or content controls are
//! skipped. Paragraph texts are joined with a single `\n` and nothing is
//! appended after the last one.

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::model::Extraction;

/// Usual name of the part holding the document body.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Package-level relationships part.
pub const PACKAGE_RELS: &str = "_rels/.rels";

const OFFICE_DOCUMENT_REL: &str = "/officeDocument";

/// Open a DOCX file and extract the text of its body paragraphs.
///
/// # Example
///
/// ```no_run
/// let text = doccat::docx::extract_text("base_case.docx")?;
/// print!("{}", text);
/// # Ok::<(), doccat::Error>(())
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(extract(path)?.text)
}

/// Open a DOCX file and extract its text along with the paragraph count.
pub fn extract<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    let extraction = extract_reader(file).map_err(|e| match e {
        Error::Io(source) => Error::file_access(path, source),
        other => other,
    })?;
    log::info!(
        "Extracted {} paragraphs ({} bytes) from {}",
        extraction.units,
        extraction.text.len(),
        path.display()
    );
    Ok(extraction)
}

/// Extract the body paragraphs of an in-memory DOCX.
pub fn extract_bytes(data: &[u8]) -> Result<Extraction> {
    extract_reader(Cursor::new(data))
}

fn extract_reader<R: Read + Seek>(reader: R) -> Result<Extraction> {
    let mut archive = ZipArchive::new(reader)?;
    let main_part = main_part_name(&mut archive)?;
    let xml = read_part(&mut archive, &main_part)?;
    let paragraphs = body_paragraphs(&xml)?;
    log::debug!("{}: {} body paragraphs", main_part, paragraphs.len());
    Ok(Extraction::docx(paragraphs.join("\n"), paragraphs.len()))
}

/// Name of the main document part. Packages without `_rels/.rels` or without
/// an `officeDocument` relationship fall back to `word/document.xml`.
fn main_part_name<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String> {
    let rels = match read_part(archive, PACKAGE_RELS) {
        Ok(rels) => rels,
        Err(Error::MissingPart(_)) => return Ok(DOCUMENT_PART.to_string()),
        Err(e) => return Err(e),
    };
    Ok(office_document_target(&rels)?.unwrap_or_else(|| {
        log::debug!("{} has no officeDocument relationship", PACKAGE_RELS);
        DOCUMENT_PART.to_string()
    }))
}

/// Target of the internal `officeDocument` relationship in a package
/// relationships part, as a ZIP entry name.
pub fn office_document_target(xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let mut rel_type = None;
                let mut target = None;
                let mut external = false;
                for attr in e.attributes().flatten() {
                    let value = attr
                        .unescape_value()
                        .map_err(|err| Error::DocxParse(err.to_string()))?;
                    match attr.key.local_name().as_ref() {
                        b"Type" => rel_type = Some(value.into_owned()),
                        b"Target" => target = Some(value.into_owned()),
                        b"TargetMode" => external = value == "External",
                        _ => {}
                    }
                }
                let is_main = rel_type
                    .as_deref()
                    .map(|t| t.ends_with(OFFICE_DOCUMENT_REL))
                    .unwrap_or(false);
                if is_main && !external {
                    if let Some(target) = target {
                        let name = target.trim_start_matches('/').trim_start_matches("./");
                        return Ok(Some(name.to_string()));
                    }
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut part = archive.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => Error::MissingPart(name.to_string()),
        other => Error::from(other),
    })?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| Error::DocxParse(format!("{}: {}", name, e)))?;
    Ok(xml)
}

/// Text of every body-level `w:p` in `word/document.xml`, in document order.
///
/// Runs are taken when they are direct children of the paragraph or of a
/// hyperlink directly inside it. Inside a run, `w:t` contributes its text,
/// `w:tab`/`w:ptab` a tab, `w:br`/`w:cr` a line feed (page and column breaks
/// contribute nothing) and `w:noBreakHyphen` a hyphen.
pub fn body_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    // Stack depth of the open body paragraph and its text so far.
    let mut current: Option<(usize, String)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if current.is_none() && name == b"p" && is_last(&stack, b"body") {
                    current = Some((stack.len(), String::new()));
                } else if let Some((depth, text)) = current.as_mut() {
                    if in_run(&stack[*depth + 1..]) {
                        push_run_content(text, &e);
                    }
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = e.local_name().as_ref().to_vec();
                if current.is_none() && name == b"p" && is_last(&stack, b"body") {
                    paragraphs.push(String::new());
                } else if let Some((depth, text)) = current.as_mut() {
                    if in_run(&stack[*depth + 1..]) {
                        push_run_content(text, &e);
                    }
                }
            }
            Event::Text(e) => {
                if let Some((depth, text)) = current.as_mut() {
                    if in_text(&stack[*depth + 1..]) {
                        let unescaped = e
                            .unescape()
                            .map_err(|err| Error::DocxParse(err.to_string()))?;
                        text.push_str(&unescaped);
                    }
                }
            }
            Event::End(_) => {
                stack.pop();
                if matches!(current, Some((depth, _)) if depth == stack.len()) {
                    if let Some((_, text)) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if current.is_some() {
        return Err(Error::DocxParse("unterminated paragraph".into()));
    }

    Ok(paragraphs)
}

fn is_last(stack: &[Vec<u8>], name: &[u8]) -> bool {
    stack.last().map(|n| n.as_slice() == name).unwrap_or(false)
}

/// Path below the paragraph points at a run: `r` or `hyperlink/r`.
fn in_run(path: &[Vec<u8>]) -> bool {
    match path {
        [r] => r.as_slice() == b"r",
        [link, r] => link.as_slice() == b"hyperlink" && r.as_slice() == b"r",
        _ => false,
    }
}

/// Path below the paragraph points at a run's `w:t`.
fn in_text(path: &[Vec<u8>]) -> bool {
    match path.split_last() {
        Some((last, parent)) => last.as_slice() == b"t" && in_run(parent),
        None => false,
    }
}

fn push_run_content(text: &mut String, element: &BytesStart<'_>) {
    match element.local_name().as_ref() {
        b"tab" | b"ptab" => text.push('\t'),
        b"cr" => text.push('\n'),
        b"br" => {
            if !is_page_or_column_break(element) {
                text.push('\n');
            }
        }
        b"noBreakHyphen" => text.push('-'),
        _ => {}
    }
}

fn is_page_or_column_break(element: &BytesStart<'_>) -> bool {
    element.attributes().flatten().any(|attr| {
        attr.key.local_name().as_ref() == b"type"
            && matches!(attr.value.as_ref(), b"page" | b"column")
    })
}
