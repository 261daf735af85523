use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::quiz::question::QuestionRecord;
use crate::transcript::LineKind;
use crate::ui::theme::Theme;

/// Question text, optional hint, difficulty badge, and the feedback line.
/// With no question, shows the explicit empty state instead of going blank.
pub struct QuestionPanel<'a> {
    question: Option<&'a QuestionRecord>,
    feedback: Option<&'a (LineKind, String)>,
    theme: &'a Theme,
}

impl<'a> QuestionPanel<'a> {
    pub fn new(
        question: Option<&'a QuestionRecord>,
        feedback: Option<&'a (LineKind, String)>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            question,
            feedback,
            theme,
        }
    }
}

impl Widget for QuestionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Question ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        match self.question {
            Some(q) => {
                let difficulty = q.difficulty_label();
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {} ", difficulty.to_uppercase()),
                        Style::default()
                            .fg(colors.bg())
                            .bg(colors.badge(difficulty))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(&*q.question, Style::default().fg(colors.fg())),
                ]));
                if let Some(ref hint) = q.hint {
                    lines.push(Line::from(Span::styled(
                        format!("hint: {hint}"),
                        Style::default().fg(colors.text_dim()),
                    )));
                }
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "No questions available for this difficulty level.",
                    Style::default().fg(colors.text_dim()),
                )));
            }
        }

        if let Some((kind, text)) = self.feedback {
            let fg = match kind {
                LineKind::Success => colors.success(),
                LineKind::Error => colors.error(),
                _ => colors.info(),
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                &**text,
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
