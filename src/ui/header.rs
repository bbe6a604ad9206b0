use crate::ui::counter::OverflowPolicy;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_WARN};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
    overflow: OverflowPolicy,
    saturated: bool,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, overflow: OverflowPolicy, saturated: bool) -> Self {
        Self {
            title,
            overflow,
            saturated,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_style = if self.saturated {
            Style::default().fg(STATUS_WARN)
        } else {
            Style::default().fg(STATUS_OK)
        };
        let overflow = match self.overflow {
            OverflowPolicy::Saturate => "overflow: saturate",
            OverflowPolicy::Wrap => "overflow: wrap",
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", status_style),
            Span::styled("  ", text_style),
            Span::styled(self.title.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(overflow, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
