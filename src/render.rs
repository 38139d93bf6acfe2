//! Render state tracking for selective display updates.
//!
//! The simulator redraws cheaply, but full-screen clears still flash, so the
//! display is cleared only when the visible page actually changes: on the
//! first frame, on a [`UserStatus`] change (lock ↔ PIN ↔ menu), or when the
//! debug overlay toggles. Within a page:
//!
//! - the lock screen redraws only when its second or blink phase changes,
//! - the PIN screen redraws every frame (focus pulse animates),
//! - the menu repaints its info bar and strips every frame (drags move
//!   card positions continuously).

use crate::session::UserStatus;

/// Tracks what changed between frames to decide clears and redraws.
pub struct RenderState {
    prev_status: Option<UserStatus>,
    prev_overlay: bool,
    first_frame: bool,
    /// Set when this frame cleared the display; pages must fully redraw.
    cleared: bool,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            prev_status: None,
            prev_overlay: false,
            first_frame: true,
            cleared: false,
        }
    }

    /// Decide whether the display needs a full clear this frame, and record
    /// the observed status/overlay state for the next frame.
    pub fn check_clear(
        &mut self,
        status: UserStatus,
        overlay: bool,
    ) -> bool {
        let clear = self.first_frame || self.prev_status != Some(status) || self.prev_overlay != overlay;
        self.prev_status = Some(status);
        self.prev_overlay = overlay;
        self.cleared = clear;
        clear
    }

    /// Whether this frame started with a display clear.
    #[inline]
    pub const fn cleared(&self) -> bool { self.cleared }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
