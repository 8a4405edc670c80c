//! Page text assembly from content stream operations.

use crate::error::Result;

use super::backend::{get_number_from_value, PdfBackend, PageId, PdfValue};

/// TJ adjustment (thousandths of text space) beyond which a gap counts as a space.
const TJ_SPACE_THRESHOLD: f32 = 250.0;

/// Extract the text of one page.
///
/// Text-showing operators are decoded with the active font; moves to a new
/// line (`T*`, `'`, `"`, or a vertical `Td`/`TD`/`Tm`) become a single `\n`.
/// The result carries no trailing line terminator.
pub fn page_text<B: PdfBackend + ?Sized>(backend: &B, page: PageId) -> Result<String> {
    let data = backend.page_content(page)?;
    if data.is_empty() {
        return Ok(String::new());
    }
    let ops = backend.decode_content(&data)?;

    let mut out = LineBuffer::default();
    let mut font: Vec<u8> = Vec::new();
    let mut line_y: Option<f32> = None;

    for op in &ops {
        match op.operator.as_str() {
            "Tf" => {
                if let Some(PdfValue::Name(name)) = op.operands.first() {
                    font = name.clone();
                }
            }
            "Td" | "TD" => {
                let ty = op.operands.get(1).and_then(get_number_from_value);
                if matches!(ty, Some(ty) if ty != 0.0) {
                    out.line_break();
                }
            }
            "Tm" => {
                let y = op.operands.get(5).and_then(get_number_from_value);
                if line_y.is_some() && y != line_y {
                    out.line_break();
                }
                line_y = y;
            }
            "T*" => out.line_break(),
            "Tj" => {
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    out.push(&backend.decode_text(page, &font, bytes));
                }
            }
            "'" => {
                out.line_break();
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    out.push(&backend.decode_text(page, &font, bytes));
                }
            }
            "\"" => {
                out.line_break();
                if let Some(PdfValue::Str(bytes)) = op.operands.get(2) {
                    out.push(&backend.decode_text(page, &font, bytes));
                }
            }
            "TJ" => {
                if let Some(PdfValue::Array(items)) = op.operands.first() {
                    for item in items {
                        match item {
                            PdfValue::Str(bytes) => {
                                out.push(&backend.decode_text(page, &font, bytes))
                            }
                            other => {
                                if matches!(get_number_from_value(other), Some(n) if -n > TJ_SPACE_THRESHOLD)
                                {
                                    out.space();
                                }
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Ok(out.finish())
}

#[derive(Default)]
struct LineBuffer {
    text: String,
}

impl LineBuffer {
    fn push(&mut self, s: &str) {
        self.text.push_str(s);
    }

    fn space(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with(char::is_whitespace) {
            self.text.push(' ');
        }
    }

    fn line_break(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }

    fn finish(mut self) -> String {
        if self.text.ends_with('\n') {
            self.text.pop();
        }
        self.text
    }
}
