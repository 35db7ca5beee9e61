use crate::ui::app::App;
use crate::ui::counter::{Control, CounterView, COUNT_PREFIX};
use crate::ui::footer::Footer;
use crate::ui::layout::CounterLayout;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, COUNT_NEGATIVE, COUNT_POSITIVE, HEADER_TEXT, PANEL_BORDER,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let layout = CounterLayout::compute(frame.area());
    let view = app.view();

    frame.render_widget(Clear, layout.body);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER)),
        layout.panel,
    );
    frame.render_widget(heading_widget(&view), layout.heading);
    frame.render_widget(count_widget(&view), layout.count);

    let focused = app.focus().control();
    for control in view.controls.iter() {
        let area = layout.control_rect(control);
        draw_control(frame, control, area, *control == focused);
    }

    frame.render_widget(Footer::new().widget(layout.footer), layout.footer);
}

fn heading_widget(view: &CounterView) -> Paragraph<'static> {
    let style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    Paragraph::new(Line::from(Span::styled(view.heading.clone(), style)))
        .alignment(Alignment::Center)
}

fn count_widget(view: &CounterView) -> Paragraph<'static> {
    Paragraph::new(count_line(view)).alignment(Alignment::Center)
}

/// Styles `view.count_line`, coloring the number after the shared prefix.
fn count_line(view: &CounterView) -> Line<'static> {
    let value_color = if view.count < 0 {
        COUNT_NEGATIVE
    } else {
        COUNT_POSITIVE
    };
    match view.count_line.strip_prefix(COUNT_PREFIX) {
        Some(value) => Line::from(vec![
            Span::styled(COUNT_PREFIX, Style::default().fg(HEADER_TEXT)),
            Span::styled(value.to_string(), Style::default().fg(value_color)),
        ]),
        None => Line::from(Span::styled(
            view.count_line.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
    }
}

fn draw_control(frame: &mut Frame<'_>, control: &Control, area: Rect, focused: bool) {
    if area.is_empty() {
        return;
    }
    let (border, fill) = if focused {
        (
            Style::default().fg(ACCENT),
            Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(PANEL_BORDER), Style::default())
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let label = Paragraph::new(Line::from(control.label))
        .style(fill)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(label, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn screen_text(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height).map(|y| row_text(buffer, y)).collect()
    }

    #[test]
    fn draws_heading_count_and_controls() {
        let app = App::new("Hello World!");
        let rows = screen_text(&app);
        assert!(rows[7].contains("Hello World!"));
        assert!(rows[9].contains("count: 0"));
        assert!(rows[12].contains('+'));
        assert!(rows[12].contains('-'));
    }

    #[test]
    fn draws_negative_count() {
        let mut app = App::new("Hello World!");
        app.press(Control::DECREMENT);
        app.press(Control::DECREMENT);
        let rows = screen_text(&app);
        assert!(rows[9].contains("count: -2"));
    }

    #[test]
    fn count_line_text_comes_from_view() {
        let mut view = App::new("t").view();
        view.count = 12;
        view.count_line = format!("{COUNT_PREFIX}12");
        let line = count_line(&view);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, view.count_line);
        assert_eq!(line.spans[1].style.fg, Some(COUNT_POSITIVE));
    }

    #[test]
    fn count_line_without_prefix_is_drawn_verbatim() {
        let mut view = App::new("t").view();
        view.count_line = "total 3".to_string();
        let text: String = count_line(&view)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(text, "total 3");
    }

    #[test]
    fn footer_shows_hints() {
        let app = App::new("Hello World!");
        let rows = screen_text(&app);
        assert!(rows[22].contains("q: Quit"));
    }
}
