//! Stateless drawing helpers for the game screen.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph},
};

use super::theme::{self, Rgb};
use crate::animation::{Icon, VisualElement};

const CROSS_LARGE: [&str; 5] = [
    "╲     ╱",
    " ╲   ╱ ",
    "   ╳   ",
    " ╱   ╲ ",
    "╱     ╲",
];
const CROSS_MEDIUM: [&str; 3] = ["╲ ╱", " ╳ ", "╱ ╲"];
const CROSS_SMALL: [&str; 1] = ["x"];

const CIRCLE_LARGE: [&str; 5] = [
    " ╭───╮ ",
    "╭╯   ╰╮",
    "│     │",
    "╰╮   ╭╯",
    " ╰───╯ ",
];
const CIRCLE_MEDIUM: [&str; 3] = ["╭─╮", "│ │", "╰─╯"];
const CIRCLE_SMALL: [&str; 1] = ["o"];

/// Largest glyph art of `icon` that fits in `width` x `height`.
///
/// Returns `None` when not even the single-character form fits.
pub fn icon_art(icon: Icon, width: u16, height: u16) -> Option<&'static [&'static str]> {
    let sizes: [&'static [&'static str]; 3] = match icon {
        Icon::Cross => [&CROSS_LARGE, &CROSS_MEDIUM, &CROSS_SMALL],
        Icon::Circle => [&CIRCLE_LARGE, &CIRCLE_MEDIUM, &CIRCLE_SMALL],
    };
    sizes.into_iter().find(|art| {
        let art_width = art[0].chars().count() as u16;
        art_width <= width && art.len() as u16 <= height
    })
}

/// Color of an icon at full alpha.
pub fn icon_color(icon: Icon) -> Rgb {
    match icon {
        Icon::Cross => theme::CROSS,
        Icon::Circle => theme::CIRCLE,
    }
}

/// Draws one cell: its border and, if any, its icon at the element's
/// current scale and alpha.
pub fn draw_cell(frame: &mut Frame, area: Rect, element: &VisualElement, highlighted: bool) {
    let border = if highlighted { theme::CURSOR } else { theme::GRID };
    let block = Block::bordered().border_style(Style::new().fg(theme::rgb(border)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(icon) = element.icon() else {
        return;
    };
    if !element.is_shown() || *element.scale() <= 0.0 {
        return;
    }

    let scale = element.scale().clamp(0.0, 1.0);
    let width = (inner.width as f32 * scale).round() as u16;
    let height = (inner.height as f32 * scale).round() as u16;
    let Some(art) = icon_art(*icon, width.max(1), height.max(1)) else {
        return;
    };

    let art_width = art[0].chars().count() as u16;
    let target = center_rect(inner, art_width, art.len() as u16);
    let color = theme::blend(icon_color(*icon), theme::BACKGROUND, *element.alpha());
    let lines: Vec<Line> = art.iter().map(|l| Line::from(*l)).collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::new().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, target);
}

/// Darkens every buffer cell in `area` by `amount` (0 to 1).
pub fn dim_area(buf: &mut Buffer, area: Rect, amount: f32) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            let fg = theme::to_rgb(cell.fg, theme::GRID);
            let bg = theme::to_rgb(cell.bg, theme::BACKGROUND);
            cell.set_fg(theme::blend(theme::DIM, fg, amount));
            cell.set_bg(theme::blend(theme::DIM, bg, amount));
        }
    }
}

/// Draws the result label centered in `field` and returns its rect.
pub fn draw_result(frame: &mut Frame, field: Rect, element: &VisualElement, text: &str) -> Rect {
    let width = (text.chars().count() as u16 + 6).min(field.width);
    let area = center_rect(field, width, 3.min(field.height));
    let fg = theme::blend(theme::RESULT, theme::BACKGROUND, *element.alpha());
    let label = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::new()
                .fg(fg)
                .bg(theme::rgb(theme::BACKGROUND))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::bordered().border_style(Style::new().fg(fg)));
    frame.render_widget(Clear, area);
    frame.render_widget(label, area);
    area
}

/// Centers a `width` x `height` rect inside `area`, clamped to it.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
