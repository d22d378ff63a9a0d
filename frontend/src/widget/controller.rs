use super::gesture::{Gesture, GestureEnd, Point};
use super::position::{Viewport, WidgetPosition, WidgetSize, DEFAULT_POSITION};
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelKind {
    Phone,
    WhatsApp,
}

/// Everything the floating widget decides, without DOM or timers.
///
/// Each method returns whether the widget has to re-render (or, for
/// `contact`, whether the action fires). Writes go straight to the store
/// passed in.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState {
    gesture: Gesture,
    expanded: bool,
    minimized: bool,
    last_used: Option<ChannelKind>,
    persist_pending: bool,
    measured: Option<WidgetSize>,
}

impl WidgetState {
    pub fn new(position: WidgetPosition) -> Self {
        Self {
            gesture: Gesture::new(position),
            expanded: false,
            minimized: false,
            last_used: None,
            persist_pending: false,
            measured: None,
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::new(WidgetPosition::load(store))
    }

    pub fn position(&self) -> WidgetPosition {
        self.gesture.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn minimized(&self) -> bool {
        self.minimized
    }

    pub fn last_used(&self) -> Option<ChannelKind> {
        self.last_used
    }

    pub fn persist_pending(&self) -> bool {
        self.persist_pending
    }

    /// True when a gesture started and window listeners are needed.
    pub fn pointer_down(&mut self, at: Point) -> bool {
        self.gesture.pointer_down(at)
    }

    pub fn pointer_move(&mut self, at: Point, viewport: Viewport, widget: WidgetSize) -> bool {
        self.gesture.pointer_move(at, viewport, widget).is_some()
    }

    /// True when the gesture was a drag; a delayed write is then pending.
    pub fn pointer_up(&mut self) -> bool {
        match self.gesture.pointer_up() {
            Some(GestureEnd::Drag(_)) => {
                self.persist_pending = true;
                true
            }
            _ => false,
        }
    }

    /// Performs the pending write, if any. Returns whether the store was written.
    pub fn flush(&mut self, store: &dyn KeyValueStore) -> bool {
        if !std::mem::take(&mut self.persist_pending) {
            return false;
        }
        self.gesture.position().save(store);
        true
    }

    // Every button sits inside the draggable root, so each click handler
    // goes through here first.
    fn swallow_click(&mut self) -> bool {
        self.gesture.is_dragging() || self.gesture.take_click_suppression()
    }

    /// True when the contact action should fire.
    pub fn contact(&mut self, kind: ChannelKind) -> bool {
        if self.swallow_click() {
            return false;
        }
        self.last_used = Some(kind);
        true
    }

    pub fn clear_highlight(&mut self) -> bool {
        self.last_used.take().is_some()
    }

    pub fn toggle_help(&mut self) -> bool {
        if self.swallow_click() {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }

    /// Back to the default corner, written immediately.
    pub fn reset(&mut self, store: &dyn KeyValueStore) -> bool {
        if self.swallow_click() {
            return false;
        }
        self.persist_pending = false;
        self.gesture.reset(DEFAULT_POSITION);
        DEFAULT_POSITION.save(store);
        self.expanded = false;
        true
    }

    pub fn minimize(&mut self) -> bool {
        if self.swallow_click() {
            return false;
        }
        self.minimized = true;
        self.expanded = false;
        true
    }

    pub fn restore(&mut self) -> bool {
        if self.swallow_click() {
            return false;
        }
        self.minimized = false;
        true
    }

    /// Re-clamp after the viewport changed. Not written to the store.
    pub fn fit_viewport(&mut self, viewport: Viewport, widget: WidgetSize) -> bool {
        self.measured = Some(widget);
        let before = self.gesture.position();
        self.gesture.refit(viewport, widget) != before
    }

    /// Re-clamp after the widget itself changed size (minimize, restore,
    /// help panel). A position moved this way is written back; the first
    /// measurement after mount only clamps.
    pub fn fit_layout(
        &mut self,
        viewport: Viewport,
        widget: WidgetSize,
        store: &dyn KeyValueStore,
    ) -> bool {
        let previous = self.measured.replace(widget);
        if previous == Some(widget) {
            return false;
        }
        let before = self.gesture.position();
        let after = self.gesture.refit(viewport, widget);
        if after == before {
            return false;
        }
        if previous.is_some() && !self.gesture.is_dragging() {
            self.persist_pending = false;
            after.save(store);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::widget::position::POSITION_KEY;

    const VIEW: Viewport = Viewport { width: 360.0, height: 640.0 };
    const NORMAL: WidgetSize = WidgetSize { width: 64.0, height: 140.0 };
    const BUBBLE: WidgetSize = WidgetSize { width: 56.0, height: 56.0 };

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    fn stored(store: &MemoryStore) -> Option<String> {
        store.get(POSITION_KEY).unwrap()
    }

    fn dragged(state: &mut WidgetState) {
        state.pointer_down(p(300.0, 500.0));
        state.pointer_move(p(200.0, 400.0), VIEW, NORMAL);
        assert!(state.pointer_up());
    }

    #[test]
    fn reset_writes_default_immediately() {
        let store = MemoryStore::new();
        let mut state = WidgetState::new(WidgetPosition { x: 150.0, y: 300.0 });
        assert!(state.reset(&store));
        assert_eq!(state.position(), DEFAULT_POSITION);
        assert_eq!(WidgetPosition::load(&store), DEFAULT_POSITION);
        assert!(stored(&store).is_some());
    }

    #[test]
    fn click_gesture_never_touches_the_store() {
        let store = MemoryStore::new();
        let mut state = WidgetState::load(&store);
        state.pointer_down(p(50.0, 50.0));
        state.pointer_move(p(52.0, 53.0), VIEW, NORMAL);
        assert!(!state.pointer_up());
        assert!(!state.persist_pending());
        assert!(!state.flush(&store));
        assert_eq!(stored(&store), None);
        assert!(state.contact(ChannelKind::Phone));
    }

    #[test]
    fn drag_end_writes_exactly_once() {
        let store = MemoryStore::new();
        let mut state = WidgetState::load(&store);
        dragged(&mut state);
        assert!(state.persist_pending());
        assert_eq!(stored(&store), None);

        assert!(state.flush(&store));
        assert!(!state.flush(&store));
        assert_eq!(WidgetPosition::load(&store), WidgetPosition { x: 120.0, y: 120.0 });
    }

    #[test]
    fn click_after_drag_is_swallowed_by_every_button() {
        let store = MemoryStore::new();
        let attempts: [fn(&mut WidgetState, &MemoryStore) -> bool; 5] = [
            |s, _| s.contact(ChannelKind::WhatsApp),
            |s, _| s.toggle_help(),
            |s, store| s.reset(store),
            |s, _| s.minimize(),
            |s, _| s.restore(),
        ];
        for (i, attempt) in attempts.iter().enumerate() {
            let mut state = WidgetState::new(DEFAULT_POSITION);
            dragged(&mut state);
            let moved_to = state.position();
            assert!(!attempt(&mut state, &store), "button {} fired after a drag", i);
            assert_eq!(state.position(), moved_to);
            assert!(state.persist_pending(), "button {} dropped the drag", i);
            assert!(!state.minimized());
            assert_eq!(state.last_used(), None);
            // Only the one click is swallowed.
            assert!(state.toggle_help());
        }
        assert_eq!(stored(&store), None);
    }

    #[test]
    fn contact_is_ignored_mid_drag() {
        let mut state = WidgetState::new(DEFAULT_POSITION);
        state.pointer_down(p(10.0, 10.0));
        assert!(!state.contact(ChannelKind::Phone));
    }

    #[test]
    fn restoring_at_top_edge_pulls_widget_back_on_screen() {
        let store = MemoryStore::new();
        let top = VIEW.height - BUBBLE.height;
        let mut state = WidgetState::new(WidgetPosition { x: 20.0, y: top });
        state.minimize();
        assert!(!state.fit_layout(VIEW, BUBBLE, &store));

        assert!(state.restore());
        assert!(state.fit_layout(VIEW, NORMAL, &store));
        let pos = state.position();
        assert_eq!(pos.y, VIEW.height - NORMAL.height);
        assert_eq!(WidgetPosition::load(&store), pos);
    }

    #[test]
    fn unchanged_size_does_not_refit() {
        let store = MemoryStore::new();
        let mut state = WidgetState::new(DEFAULT_POSITION);
        state.fit_layout(VIEW, NORMAL, &store);
        assert!(!state.fit_layout(VIEW, NORMAL, &store));
        assert_eq!(stored(&store), None);
    }

    #[test]
    fn first_measurement_clamps_without_writing() {
        let store = MemoryStore::new();
        let mut state = WidgetState::new(WidgetPosition { x: 2000.0, y: 2000.0 });
        assert!(state.fit_layout(VIEW, NORMAL, &store));
        assert_eq!(state.position(), WidgetPosition { x: 296.0, y: 500.0 });
        assert_eq!(stored(&store), None);
    }

    #[test]
    fn viewport_shrink_clamps_without_writing() {
        let store = MemoryStore::new();
        let mut state = WidgetState::new(WidgetPosition { x: 250.0, y: 450.0 });
        let small = Viewport { width: 200.0, height: 300.0 };
        assert!(state.fit_viewport(small, NORMAL));
        assert_eq!(state.position(), WidgetPosition { x: 136.0, y: 160.0 });
        assert_eq!(stored(&store), None);
    }

    #[test]
    fn unavailable_store_keeps_defaults() {
        let store = MemoryStore::unavailable();
        let mut state = WidgetState::load(&store);
        assert_eq!(state.position(), DEFAULT_POSITION);
        dragged(&mut state);
        assert!(state.flush(&store));
        assert!(state.reset(&store));
        assert_eq!(state.position(), DEFAULT_POSITION);
    }
}
