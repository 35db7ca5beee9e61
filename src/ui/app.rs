use crate::ui::counter::{render, Control, CounterIntent, CounterReducer, CounterView};
use crate::ui::input::{map_key, InputAction};
use crate::ui::layout::CounterLayout;
use crate::ui::mvi::Store;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Focus {
    #[default]
    Increment,
    Decrement,
}

impl Focus {
    pub fn control(self) -> Control {
        match self {
            Focus::Increment => Control::INCREMENT,
            Focus::Decrement => Control::DECREMENT,
        }
    }

    fn next(self) -> Self {
        match self {
            Focus::Increment => Focus::Decrement,
            Focus::Decrement => Focus::Increment,
        }
    }

    fn of(control: Control) -> Self {
        if control == Control::DECREMENT {
            Focus::Decrement
        } else {
            Focus::Increment
        }
    }
}

pub struct App {
    should_quit: bool,
    heading: String,
    focus: Focus,
    area: Rect,
    /// Counter state (MVI pattern).
    counter: Store<CounterReducer>,
    /// Set by the counter subscription and by focus/resize changes.
    redraw: Rc<Cell<bool>>,
}

impl App {
    pub fn new(heading: impl Into<String>) -> Self {
        let redraw = Rc::new(Cell::new(true));
        let mut counter: Store<CounterReducer> = Store::new();
        let flag = Rc::clone(&redraw);
        counter.subscribe(move |_| flag.set(true));

        Self {
            should_quit: false,
            heading: heading.into(),
            focus: Focus::default(),
            area: Rect::default(),
            counter,
            redraw,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn count(&self) -> i64 {
        self.counter.state().count
    }

    pub fn view(&self) -> CounterView {
        render(self.counter.state(), &self.heading)
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn layout(&self) -> CounterLayout {
        CounterLayout::compute(self.area)
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw.get()
    }

    pub fn mark_drawn(&self) {
        self.redraw.set(false);
    }

    pub fn dispatch(&mut self, intent: CounterIntent) {
        self.counter.dispatch(intent);
        tracing::debug!(?intent, count = self.count(), "Counter updated");
    }

    /// Press a control, injecting this app's dispatcher into it.
    pub fn press(&mut self, control: Control) {
        control.press(&mut |intent| self.dispatch(intent));
    }

    pub fn press_focused(&mut self) {
        self.press(self.focus.control());
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.redraw.set(true);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            InputAction::Dispatch(intent) => self.dispatch(intent),
            InputAction::FocusNext => self.focus_next(),
            InputAction::PressFocused => self.press_focused(),
            InputAction::Quit => self.request_quit(),
            InputAction::None => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(control) = self.layout().control_at(mouse.column, mouse.row) else {
            return;
        };
        self.focus = Focus::of(control);
        self.press(control);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let area = Rect::new(0, 0, cols, rows);
        if area != self.area {
            self.area = area;
            self.redraw.set(true);
        }
    }
}
