use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::transcript::{LineKind, Transcript};
use crate::ui::theme::Theme;

/// Scrolling view over the transcript, pinned to the newest entry. Entries
/// with embedded newlines expand to continuation lines under one timestamp.
pub struct TranscriptView<'a> {
    transcript: &'a Transcript,
    theme: &'a Theme,
}

impl<'a> TranscriptView<'a> {
    pub fn new(transcript: &'a Transcript, theme: &'a Theme) -> Self {
        Self { transcript, theme }
    }

    fn kind_color(&self, kind: LineKind) -> ratatui::style::Color {
        let colors = &self.theme.colors;
        match kind {
            LineKind::Command => colors.command(),
            LineKind::Output => colors.output(),
            LineKind::Info => colors.info(),
            LineKind::Error => colors.error(),
            LineKind::Success => colors.success(),
        }
    }
}

impl Widget for TranscriptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Terminal ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for entry in self.transcript.lines() {
            let fg = self.kind_color(entry.kind);
            for (i, part) in entry.text.split('\n').enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("[{}] ", entry.timestamp),
                            Style::default().fg(colors.prompt()),
                        ),
                        Span::styled(part.to_string(), Style::default().fg(fg)),
                    ]));
                } else {
                    // Continuation line, indented under the timestamp
                    lines.push(Line::from(vec![
                        Span::raw(" ".repeat(11)),
                        Span::styled(part.to_string(), Style::default().fg(fg)),
                    ]));
                }
            }
        }

        // Auto-scroll: keep the newest lines visible
        let height = inner.height as usize;
        let skip = lines.len().saturating_sub(height);
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

        Paragraph::new(visible).render(inner, buf);
    }
}
