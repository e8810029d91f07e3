//! Terminal rendering of highlighted lines using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{Color, HighlightEngine, Style, StyledSpan, Theme};

fn term_color(color: Color) -> Option<style::Color> {
    match color {
        Color::Default => None,
        Color::Rgb(r, g, b) => Some(style::Color::Rgb { r, g, b }),
    }
}

fn write_styled<W: Write>(out: &mut W, text: &str, style: Style) -> Result<()> {
    if style.is_default() {
        queue!(out, Print(text))?;
        return Ok(());
    }

    if let Some(fg) = term_color(style.fg) {
        queue!(out, SetForegroundColor(fg))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
    Ok(())
}

/// Write one line with its spans applied, followed by a newline
pub fn render_line<W: Write>(
    out: &mut W,
    text: &str,
    spans: &[StyledSpan],
    theme: &Theme,
) -> Result<()> {
    // Spans are in character offsets
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let byte_at = |ch: usize| offsets[ch.min(offsets.len() - 1)];

    let mut pos = 0;
    for span in spans {
        let start = byte_at(span.start);
        let end = byte_at(span.end());
        if start > pos {
            write_styled(out, &text[pos..start], Style::default())?;
        }
        write_styled(out, &text[start..end], theme.style(span.style))?;
        pos = end;
    }
    if pos < text.len() {
        write_styled(out, &text[pos..], Style::default())?;
    }
    queue!(out, Print('\n'))?;
    Ok(())
}

/// Write the whole document in color
pub fn render_document<W: Write>(out: &mut W, engine: &HighlightEngine, theme: &Theme) -> Result<()> {
    for line in 0..engine.line_count() {
        let text = engine.line_text(line).unwrap_or_default();
        render_line(out, text, engine.spans(line), theme)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the spans of every line as `line: start+length tag`
pub fn dump_spans<W: Write>(out: &mut W, engine: &HighlightEngine) -> Result<()> {
    for line in 0..engine.line_count() {
        for span in engine.spans(line) {
            writeln!(out, "{}: {}+{} {}", line + 1, span.start, span.length, span.style.id())?;
        }
    }
    out.flush()?;
    Ok(())
}
