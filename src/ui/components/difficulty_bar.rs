use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::quiz::question::DIFFICULTIES;
use crate::ui::theme::Theme;

/// One toggle per known difficulty tag plus "all". Exactly one is active.
pub struct DifficultyBar<'a> {
    active: &'a str,
    theme: &'a Theme,
}

impl<'a> DifficultyBar<'a> {
    pub fn new(active: &'a str, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl Widget for DifficultyBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans: Vec<Span> = vec![Span::styled(
            " Difficulty: ",
            Style::default().fg(colors.text_dim()),
        )];

        for (i, tag) in DIFFICULTIES.iter().enumerate() {
            let is_active = *tag == self.active;
            let label = format!("[F{}] {}", i + 1, tag.to_uppercase());
            let style = if is_active {
                Style::default()
                    .fg(colors.bg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("  "));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
