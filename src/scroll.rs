//! Drag-to-scroll controller for the horizontal card strips.
//!
//! Converts horizontal pointer drags into scroll-offset changes. While a drag
//! is active, the offset follows `origin_offset + (origin_x - pointer_x)`,
//! clamped at zero on the left. There is no upper clamp here; the strip
//! renderer limits the draw offset to its natural max scroll.
//!
//! Pointer-leave is treated identically to pointer-up so a drag can never get
//! stuck when the pointer exits the strip bounds; both are idempotent.

/// Drag origin captured on pointer-down.
#[derive(Clone, Copy, Debug)]
struct DragOrigin {
    /// Scroll offset at the moment the drag started.
    offset: i32,
    /// Pointer X at the moment the drag started.
    pointer_x: i32,
}

/// Scroll state for one horizontally scrollable strip.
#[derive(Default)]
pub struct Scrollable {
    offset: i32,
    drag: Option<DragOrigin>,
}

impl Scrollable {
    pub const fn new() -> Self {
        Self {
            offset: 0,
            drag: None,
        }
    }

    /// Current scroll offset in pixels (always >= 0).
    #[inline]
    pub const fn offset(&self) -> i32 { self.offset }

    #[inline]
    pub const fn is_dragging(&self) -> bool { self.drag.is_some() }

    /// Begin a drag at `pointer_x`, capturing the current offset.
    pub fn on_pointer_down(
        &mut self,
        pointer_x: i32,
    ) {
        self.drag = Some(DragOrigin {
            offset: self.offset,
            pointer_x,
        });
    }

    /// Follow a pointer move. Returns `true` if the offset changed.
    pub fn on_pointer_move(
        &mut self,
        pointer_x: i32,
    ) -> bool {
        let Some(origin) = self.drag else {
            return false;
        };
        let next = (origin.offset + (origin.pointer_x - pointer_x)).max(0);
        let moved = next != self.offset;
        self.offset = next;
        moved
    }

    /// End the drag. Idempotent if no drag is active.
    pub fn on_pointer_up(&mut self) { self.drag = None; }

    /// Pointer left the strip bounds: behaves exactly like pointer-up.
    pub fn on_pointer_leave(&mut self) { self.on_pointer_up(); }
}

// =============================================================================
// Unit Tests
// =============================================================================
