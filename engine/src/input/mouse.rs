//! Mouse Look State
//!
//! Turns absolute cursor positions and scroll events into per-frame deltas.
//! Deltas accumulate between frames and are consumed once per frame.

/// Mouse motion and scroll accumulated over one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookDelta {
    /// Horizontal motion in pixels, positive = right
    pub dx: f32,
    /// Vertical motion in pixels, positive = up
    pub dy: f32,
    /// Scroll in lines, positive = away from the user
    pub scroll: f32,
}

impl LookDelta {
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0 && self.scroll == 0.0
    }
}

/// Cursor tracker producing [`LookDelta`]s.
///
/// The first cursor position after creation (or [`MouseLook::recenter`]) only
/// sets the reference point, so the camera does not jump when the cursor
/// enters the window.
#[derive(Debug, Clone, Default)]
pub struct MouseLook {
    last_position: Option<(f32, f32)>,
    pending: LookDelta,
}

impl MouseLook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an absolute cursor position in window pixels (y grows downward).
    pub fn handle_cursor(&mut self, x: f64, y: f64) {
        let (x, y) = (x as f32, y as f32);
        if let Some((last_x, last_y)) = self.last_position {
            self.pending.dx += x - last_x;
            // Window y grows downward, look delta is positive upward
            self.pending.dy += last_y - y;
        }
        self.last_position = Some((x, y));
    }

    /// Feed a scroll event in lines.
    #[inline]
    pub fn handle_scroll(&mut self, lines: f32) {
        self.pending.scroll += lines;
    }

    /// Forget the reference point, e.g. when the cursor leaves the window.
    pub fn recenter(&mut self) {
        self.last_position = None;
    }

    /// Return the accumulated delta and reset it to zero.
    pub fn consume(&mut self) -> LookDelta {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_cursor_event_sets_reference() {
        let mut mouse = MouseLook::new();
        mouse.handle_cursor(400.0, 300.0);
        assert!(mouse.consume().is_zero());
    }

    #[test]
    fn test_deltas_accumulate_until_consumed() {
        let mut mouse = MouseLook::new();
        mouse.handle_cursor(400.0, 300.0);
        mouse.handle_cursor(410.0, 295.0);
        mouse.handle_cursor(413.0, 290.0);
        mouse.handle_scroll(1.0);

        let delta = mouse.consume();
        assert_eq!(delta.dx, 13.0);
        // Moving the cursor up the screen is positive
        assert_eq!(delta.dy, 10.0);
        assert_eq!(delta.scroll, 1.0);
        assert!(mouse.consume().is_zero());
    }

    #[test]
    fn test_recenter_drops_jump() {
        let mut mouse = MouseLook::new();
        mouse.handle_cursor(0.0, 0.0);
        mouse.recenter();
        mouse.handle_cursor(700.0, 500.0);
        assert!(mouse.consume().is_zero());
    }
}
