use ratatui::layout::{Position, Rect};

use crate::ui::counter::Control;

pub const PANEL_WIDTH: u16 = 32;
pub const PANEL_HEIGHT: u16 = 9;
const BUTTON_WIDTH: u16 = 7;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;
const FOOTER_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = FOOTER_HEIGHT.min(area.height);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    (body, footer)
}

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

/// Screen regions of the counter widget.
///
/// The renderer draws into these rectangles and mouse hit testing reads
/// them back, so a click lands on exactly what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLayout {
    pub body: Rect,
    pub footer: Rect,
    pub panel: Rect,
    pub heading: Rect,
    pub count: Rect,
    pub increment: Rect,
    pub decrement: Rect,
}

impl CounterLayout {
    pub fn compute(area: Rect) -> Self {
        let (body, footer) = layout_regions(area);
        let panel = centered_rect_by_size(body, PANEL_WIDTH, PANEL_HEIGHT);
        let inner = Rect {
            x: panel.x.saturating_add(1),
            y: panel.y.saturating_add(1),
            width: panel.width.saturating_sub(2),
            height: panel.height.saturating_sub(2),
        };

        let row = |offset: u16| {
            Rect {
                x: inner.x,
                y: inner.y.saturating_add(offset),
                width: inner.width,
                height: 1,
            }
            .intersection(inner)
        };

        let buttons_width = BUTTON_WIDTH * 2 + BUTTON_GAP;
        let buttons_x = inner.x + inner.width.saturating_sub(buttons_width) / 2;
        let buttons_y = inner.y.saturating_add(4);
        let button = |x: u16| {
            Rect {
                x,
                y: buttons_y,
                width: BUTTON_WIDTH,
                height: BUTTON_HEIGHT,
            }
            .intersection(inner)
        };

        Self {
            body,
            footer,
            panel,
            heading: row(0),
            count: row(2),
            increment: button(buttons_x),
            decrement: button(buttons_x + BUTTON_WIDTH + BUTTON_GAP),
        }
    }

    pub fn control_rect(&self, control: &Control) -> Rect {
        if *control == Control::INCREMENT {
            self.increment
        } else {
            self.decrement
        }
    }

    /// Control under the given cell, if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        [Control::INCREMENT, Control::DECREMENT]
            .into_iter()
            .find(|control| self.control_rect(control).contains(position))
    }
}
