use ratatui::layout::Rect;

/// Outer size of the bordered counter card.
pub const CARD_WIDTH: u16 = 32;
pub const CARD_HEIGHT: u16 = 7;

/// Rows inside the card border.
const HEADING_ROW: u16 = 1;
const BUTTON_ROW: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Center a `width` x `height` rectangle in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn card_rect(body: Rect) -> Rect {
    centered_rect_by_size(body, CARD_WIDTH, CARD_HEIGHT)
}

pub fn heading_rect(card: Rect) -> Rect {
    let inner = inner(card);
    row(inner, HEADING_ROW, inner.width)
}

/// Where the button sits inside `card`. Rendering and mouse hit-testing
/// both go through here so a click lands on what was drawn.
pub fn button_rect(card: Rect, label_width: u16) -> Rect {
    let inner = inner(card);
    row(inner, BUTTON_ROW, label_width)
}

/// Button rectangle for a whole terminal of `cols` x `rows`.
pub fn button_rect_for_terminal(cols: u16, rows: u16, label_width: u16) -> Rect {
    let area = Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    };
    button_rect(card_rect(body_rect(area)), label_width)
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && u32::from(column) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(row) < u32::from(rect.y) + u32::from(rect.height)
}

fn inner(card: Rect) -> Rect {
    Rect {
        x: card.x.saturating_add(1),
        y: card.y.saturating_add(1),
        width: card.width.saturating_sub(2),
        height: card.height.saturating_sub(2),
    }
}

/// Horizontally centered single row at `offset` inside `inner`.
/// Zero-sized when the row does not fit.
fn row(inner: Rect, offset: u16, width: u16) -> Rect {
    let width = width.min(inner.width);
    let height = if offset < inner.height { 1 } else { 0 };
    Rect {
        x: inner.x + (inner.width - width) / 2,
        y: inner.y + offset.min(inner.height),
        width,
        height,
    }
}
