//! Types for extracted text and the sections it is written under.

mod extraction;
mod section;

pub use extraction::{DocumentKind, Extraction};
pub use section::Section;
