use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{button_rect, card_rect, heading_rect, layout_regions};
use crate::ui::theme::{ACCENT, BUTTON_BG, BUTTON_FG, CARD_BORDER};
use crate::ui::view::CounterView;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let counter = app.counter();
    let header_widget = Header::new(app.title(), counter.overflow(), counter.is_saturated());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);
    let view = app.view();
    draw_counter(frame, body, &view);
    frame.render_widget(Footer::new(view.hints).widget(footer), footer);
}

fn draw_counter(frame: &mut Frame<'_>, body: Rect, view: &CounterView) {
    let card = card_rect(body);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_BORDER)),
        card,
    );

    let heading = Line::from(Span::styled(
        view.heading.clone(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        heading_rect(card),
    );

    let button_style = Style::default()
        .fg(BUTTON_FG)
        .bg(BUTTON_BG)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(view.button.text()).style(button_style),
        button_rect(card, view.button.width()),
    );
}
