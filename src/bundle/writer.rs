//! Section rendering and the output file writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Section;

/// Write sections in order. The first header opens the output; every later
/// header is preceded by a line feed, so text without a trailing newline
/// still ends its line before the next header.
///
/// Returns the number of bytes written.
pub fn write_sections_to<W: Write>(writer: &mut W, sections: &[Section]) -> io::Result<u64> {
    let mut written = 0u64;
    for (i, section) in sections.iter().enumerate() {
        let header = header_line(i, section);
        writer.write_all(header.as_bytes())?;
        writer.write_all(section.text.as_bytes())?;
        written += (header.len() + section.text.len()) as u64;
    }
    Ok(written)
}

/// Render sections to a string, exactly as [`write_sections`] lays them out.
pub fn render_sections(sections: &[Section]) -> String {
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        out.push_str(&header_line(i, section));
        out.push_str(&section.text);
    }
    out
}

fn header_line(index: usize, section: &Section) -> String {
    if index == 0 {
        format!("{}\n", section.header())
    } else {
        format!("\n{}\n", section.header())
    }
}

/// Create or truncate `path` and write the sections as UTF-8.
///
/// The file is closed on return, including when a write fails part-way;
/// such a failure leaves a truncated file behind.
pub fn write_sections<P: AsRef<Path>>(path: P, sections: &[Section]) -> Result<u64> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::file_access(path, e))?;
    let mut writer = BufWriter::new(file);
    let written = write_sections_to(&mut writer, sections).map_err(|e| Error::file_access(path, e))?;
    writer.flush().map_err(|e| Error::file_access(path, e))?;
    log::debug!("Wrote {} bytes to {}", written, path.display());
    Ok(written)
}
