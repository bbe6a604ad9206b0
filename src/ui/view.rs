//! View model for the counter.
//!
//! [`CounterView::from_state`] is the render function: it depends on
//! nothing but the state it is given, so calling it twice with the same
//! state gives the same view. Widgets are built from it in `render.rs`.

use crate::ui::counter::CounterState;

pub const BUTTON_LABEL: &str = "Increment";
pub const HINTS: &str = " Enter/Space/+: Increment │ Click: Increment │ q/Esc: Quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    /// `"Counter: <count>"`.
    pub heading: String,
    pub button: ButtonView,
    /// Bindings that reach the button, for the footer.
    pub hints: &'static str,
}

/// The control bound to the increment action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
}

impl CounterView {
    pub fn from_state(state: &CounterState) -> Self {
        Self {
            heading: format!("Counter: {}", state.count()),
            button: ButtonView {
                label: BUTTON_LABEL,
            },
            hints: HINTS,
        }
    }
}

impl ButtonView {
    pub fn text(&self) -> String {
        format!("[ {} ]", self.label)
    }

    pub fn width(&self) -> u16 {
        u16::try_from(self.text().chars().count()).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::counter::{CounterIntent, CounterReducer};
    use crate::ui::mvi::Reducer;

    #[test]
    fn heading_shows_count() {
        let view = CounterView::from_state(&CounterState::default());
        assert_eq!(view.heading, "Counter: 0");

        let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
        assert_eq!(CounterView::from_state(&state).heading, "Counter: 1");
    }

    #[test]
    fn same_state_same_view() {
        let state = CounterState::default();
        assert_eq!(CounterView::from_state(&state), CounterView::from_state(&state));
    }

    #[test]
    fn button_text_is_bracketed() {
        let view = CounterView::from_state(&CounterState::default());
        assert_eq!(view.button.text(), "[ Increment ]");
        assert_eq!(view.button.width(), 13);
    }

    #[test]
    fn hints_name_the_button() {
        let view = CounterView::from_state(&CounterState::default());
        assert!(view.hints.contains(view.button.label));
        assert!(view.hints.contains("Quit"));
    }
}
