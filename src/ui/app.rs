use crate::config::Config;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::events::AppEvent;
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::button_rect_for_terminal;
use crate::ui::mvi::{Store, SubscriptionId};
use crate::ui::view::CounterView;
use ratatui::layout::Rect;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Root view.
///
/// Owns the counter store for its whole lifetime: the store is mounted in
/// [`App::new`] and torn down when the `App` is dropped. The view keeps a
/// subscription on the store that marks the screen stale after every
/// mutation; the runtime redraws when [`App::take_redraw`] says so.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    title: String,
    counter: Store<CounterReducer>,
    view_subscription: SubscriptionId,
    stale: Arc<AtomicBool>,
    saturation_reported: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::mount(config, CounterState::with_policy(config.counter.overflow))
    }

    /// Mount with the counter already at `count`.
    #[cfg(test)]
    fn mount_at(config: &Config, count: u64) -> Self {
        Self::mount(config, CounterState::at(count, config.counter.overflow))
    }

    fn mount(config: &Config, initial: CounterState) -> Self {
        let mut counter = Store::new(initial);

        // Stale from the start so the mount itself renders.
        let stale = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&stale);
        let view_subscription = counter.subscribe(move |_: &CounterState| {
            flag.store(true, Ordering::Release);
        });
        tracing::debug!(overflow = ?config.counter.overflow, "counter store mounted");

        Self {
            should_quit: false,
            size: None,
            title: config.ui.title.clone(),
            counter,
            view_subscription,
            stale,
            saturation_reported: false,
        }
    }

    /// The increment action bound to the button. The only way `count`
    /// changes.
    pub fn increment(&mut self) {
        let was_saturated = self.counter.state().is_saturated();
        self.counter.dispatch(CounterIntent::Increment);
        tracing::debug!(count = self.counter.state().count(), "counter incremented");

        if was_saturated && !self.saturation_reported {
            tracing::warn!(count = u64::MAX, "counter saturated, further increments are ignored");
            self.saturation_reported = true;
        }
    }

    pub fn count(&self) -> u64 {
        self.counter.state().count()
    }

    pub fn counter(&self) -> &CounterState {
        self.counter.state()
    }

    /// Render function applied to the current state.
    pub fn view(&self) -> CounterView {
        CounterView::from_state(self.counter.state())
    }

    /// Register an extra observer on the counter store.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CounterState) + Send + 'static,
    {
        self.counter.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if id == self.view_subscription {
            return false;
        }
        self.counter.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.counter.subscriber_count()
    }

    /// Returns whether a frame is due and clears the flag. Any number of
    /// mutations since the last frame collapse into one redraw.
    pub fn take_redraw(&self) -> bool {
        self.stale.swap(false, Ordering::AcqRel)
    }

    pub fn request_redraw(&self) {
        self.stale.store(true, Ordering::Release);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Mouse(mouse) => handle_mouse(self, mouse),
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::Tick => {}
            AppEvent::Shutdown => self.request_quit(),
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.request_redraw();
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Screen area of the button for the last known terminal size.
    pub fn button_area(&self) -> Option<Rect> {
        let (cols, rows) = self.size?;
        Some(button_rect_for_terminal(cols, rows, self.view().button.width()))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.counter.unsubscribe(self.view_subscription);
        tracing::debug!(count = self.count(), "counter store unmounted");
    }
}
