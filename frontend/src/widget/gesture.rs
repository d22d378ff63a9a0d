use super::position::{Viewport, WidgetPosition, WidgetSize};

/// Pointer travel (px, either axis) below which a gesture is still a click.
pub const CLICK_THRESHOLD: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        pointer_start: Point,
        position_start: WidgetPosition,
        moved: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEnd {
    Click,
    Drag(WidgetPosition),
}

/// Drag recognizer for a widget anchored at the bottom-right corner.
///
/// Moving the pointer right or down shrinks the offset, so screen deltas are
/// subtracted from the start position.
#[derive(Clone, Debug, PartialEq)]
pub struct Gesture {
    state: DragState,
    position: WidgetPosition,
    suppress_click: bool,
}

impl Gesture {
    pub fn new(position: WidgetPosition) -> Self {
        Self {
            state: DragState::Idle,
            position,
            suppress_click: false,
        }
    }

    pub fn position(&self) -> WidgetPosition {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Returns false when a gesture is already active; the new pointer is ignored.
    pub fn pointer_down(&mut self, at: Point) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.suppress_click = false;
        self.state = DragState::Dragging {
            pointer_start: at,
            position_start: self.position,
            moved: false,
        };
        true
    }

    /// Returns the new position, or `None` when no gesture is active.
    pub fn pointer_move(
        &mut self,
        at: Point,
        viewport: Viewport,
        widget: WidgetSize,
    ) -> Option<WidgetPosition> {
        let DragState::Dragging {
            pointer_start,
            position_start,
            moved,
        } = self.state
        else {
            return None;
        };
        let dx = at.x - pointer_start.x;
        let dy = at.y - pointer_start.y;
        let moved = moved || dx.abs() > CLICK_THRESHOLD || dy.abs() > CLICK_THRESHOLD;
        if moved {
            self.position = WidgetPosition {
                x: position_start.x - dx,
                y: position_start.y - dy,
            }
            .clamp(viewport, widget);
        }
        self.state = DragState::Dragging {
            pointer_start,
            position_start,
            moved,
        };
        Some(self.position)
    }

    pub fn pointer_up(&mut self) -> Option<GestureEnd> {
        let DragState::Dragging { moved, .. } = self.state else {
            return None;
        };
        self.state = DragState::Idle;
        if moved {
            self.suppress_click = true;
            Some(GestureEnd::Drag(self.position))
        } else {
            Some(GestureEnd::Click)
        }
    }

    /// The browser fires a click after a drag ends; swallow exactly that one.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::replace(&mut self.suppress_click, false)
    }

    /// Re-fit after the viewport or the widget changed size.
    pub fn refit(&mut self, viewport: Viewport, widget: WidgetSize) -> WidgetPosition {
        self.position = self.position.clamp(viewport, widget);
        self.position
    }

    pub fn reset(&mut self, position: WidgetPosition) {
        self.state = DragState::Idle;
        self.suppress_click = false;
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::position::DEFAULT_POSITION;

    const VIEW: Viewport = Viewport { width: 360.0, height: 640.0 };
    const WIDGET: WidgetSize = WidgetSize { width: 60.0, height: 130.0 };

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    fn in_bounds(pos: WidgetPosition) -> bool {
        pos.x >= 0.0
            && pos.x <= VIEW.width - WIDGET.width
            && pos.y >= 0.0
            && pos.y <= VIEW.height - WIDGET.height
    }

    #[test]
    fn drag_moves_towards_pointer() {
        let mut g = Gesture::new(DEFAULT_POSITION);
        assert!(g.pointer_down(p(300.0, 500.0)));
        let pos = g.pointer_move(p(200.0, 400.0), VIEW, WIDGET).unwrap();
        assert_eq!(pos, WidgetPosition { x: 120.0, y: 120.0 });
        assert_eq!(g.pointer_up(), Some(GestureEnd::Drag(pos)));
        assert!(!g.is_dragging());
    }

    #[test]
    fn every_drag_stays_inside_viewport() {
        let mut g = Gesture::new(DEFAULT_POSITION);
        let path = [
            (-5000.0, -5000.0),
            (5000.0, 5000.0),
            (180.0, -20.0),
            (-1.0, 700.0),
            (12.5, 33.3),
        ];
        for (i, (x, y)) in path.iter().enumerate() {
            g.pointer_down(p(100.0, 100.0));
            let pos = g.pointer_move(p(*x, *y), VIEW, WIDGET).unwrap();
            assert!(in_bounds(pos), "step {} -> {:?}", i, pos);
            g.pointer_up();
            assert!(in_bounds(g.position()));
        }
    }

    #[test]
    fn tiny_movement_is_a_click() {
        let mut g = Gesture::new(DEFAULT_POSITION);
        g.pointer_down(p(50.0, 50.0));
        g.pointer_move(p(53.0, 48.0), VIEW, WIDGET);
        assert_eq!(g.pointer_up(), Some(GestureEnd::Click));
        assert_eq!(g.position(), DEFAULT_POSITION);
        assert!(!g.take_click_suppression());
    }

    #[test]
    fn click_after_drag_is_suppressed_once() {
        let mut g = Gesture::new(DEFAULT_POSITION);
        g.pointer_down(p(50.0, 50.0));
        g.pointer_move(p(10.0, 10.0), VIEW, WIDGET);
        g.pointer_up();
        assert!(g.take_click_suppression());
        assert!(!g.take_click_suppression());
    }

    #[test]
    fn second_pointer_down_is_ignored_while_dragging() {
        let mut g = Gesture::new(DEFAULT_POSITION);
        assert!(g.pointer_down(p(100.0, 100.0)));
        assert!(!g.pointer_down(p(0.0, 0.0)));
        let pos = g.pointer_move(p(90.0, 100.0), VIEW, WIDGET).unwrap();
        assert_eq!(pos.x, 30.0);
    }

    #[test]
    fn move_and_up_without_gesture_do_nothing() {
        let mut g = Gesture::new(DEFAULT_POSITION);
        assert_eq!(g.pointer_move(p(0.0, 0.0), VIEW, WIDGET), None);
        assert_eq!(g.pointer_up(), None);
    }

    #[test]
    fn reset_restores_default_after_drag() {
        let mut g = Gesture::new(DEFAULT_POSITION);
        g.pointer_down(p(300.0, 600.0));
        g.pointer_move(p(10.0, 10.0), VIEW, WIDGET);
        g.pointer_up();
        assert_ne!(g.position(), DEFAULT_POSITION);
        g.reset(DEFAULT_POSITION);
        assert_eq!(g.position(), DEFAULT_POSITION);
        assert!(!g.take_click_suppression());
    }

    #[test]
    fn refit_pulls_widget_back_after_resize() {
        let mut g = Gesture::new(WidgetPosition { x: 290.0, y: 500.0 });
        let small = Viewport { width: 200.0, height: 300.0 };
        assert_eq!(g.refit(small, WIDGET), WidgetPosition { x: 140.0, y: 170.0 });
    }
}
