//! Report rendering
//!
//! Renders [`Statistics`] as Markdown, AsciiDoc or JSON text and writes it to
//! a file when asked to.

mod asciidoc;
mod error;
mod format;
mod json;
mod markdown;
mod write;


use crate::stats::Statistics;

pub use asciidoc::AsciiDocRenderer;
pub use error::*;
pub use format::*;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use write::*;

pub trait ReportRenderer {
    fn render(&self, stats: &Statistics) -> Result<String, ReportError>;
}

pub fn renderer_for(format: ReportFormat) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownRenderer),
        ReportFormat::AsciiDoc => Box::new(AsciiDocRenderer),
        ReportFormat::Json => Box::new(JsonRenderer),
    }
}

pub fn render(stats: &Statistics, format: ReportFormat) -> Result<String, ReportError> {
    renderer_for(format).render(stats)
}
