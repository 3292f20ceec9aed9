//! Pointer-driven continuous adjustment.

use super::bounds::Bounds;
use super::pointer::PointerId;
use super::transform::TransformType;

/// Converts a pixel distance into a numeric delta.
pub type DeltaToChange = fn(f64) -> f64;

/// Default drag scaling: one pixel is one unit.
pub fn process_drag(delta: f64) -> f64 {
    delta
}

/// Pointer pressed on a widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDown {
    pub pointer: PointerId,
    /// Absolute horizontal position.
    pub position: f64,
}

/// Pointer moved while pressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMove {
    pub pointer: PointerId,
    /// Absolute horizontal position. Bounded by the screen edge.
    pub position: f64,
    /// Relative horizontal movement since the previous event.
    pub movement: f64,
}

/// Scaling applied to a pixel delta before it reaches the value.
#[derive(Clone, Copy, Debug)]
pub struct DragScaling {
    pub delta_to_change: DeltaToChange,
    pub drag_factor: f64,
    pub transform: TransformType,
}

impl DragScaling {
    /// Numeric change for a pixel delta.
    pub fn change(&self, pixels: f64) -> f64 {
        (self.delta_to_change)(pixels) * self.drag_factor * self.transform.drag_scale()
    }
}

/// State of one drag gesture, from pointer-down to pointer-up.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pointer: PointerId,
    moved: bool,
    uses_pointer_lock: bool,
    previous_position: f64,
    lock_accumulator: f64,
    remainder: f64,
}

impl DragSession {
    pub fn start(pointer: PointerId, position: f64) -> Self {
        Self {
            pointer,
            moved: false,
            uses_pointer_lock: false,
            previous_position: position,
            lock_accumulator: 0.0,
            remainder: 0.0,
        }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Whether any movement changed the position during this gesture.
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Whether movement has been read from the infinite-drag lock.
    pub fn uses_pointer_lock(&self) -> bool {
        self.uses_pointer_lock
    }

    /// Value lost to quantization so far, carried into the next move.
    pub fn remainder(&self) -> f64 {
        self.remainder
    }

    /// Pixel delta for a movement event.
    ///
    /// While locked, relative movement is summed into a virtual position; the
    /// accumulator is seeded from the last absolute position when the lock is
    /// first observed so the switch does not jump.
    pub fn position_delta(&mut self, event: &PointerMove, locked: bool) -> f64 {
        let position = if locked {
            if !self.uses_pointer_lock {
                self.uses_pointer_lock = true;
                self.lock_accumulator = self.previous_position;
            }
            self.lock_accumulator += event.movement;
            self.lock_accumulator
        } else {
            event.position
        };
        let delta = position - self.previous_position;
        self.previous_position = position;
        if delta != 0.0 {
            self.moved = true;
        }
        delta
    }

    /// Applies a pixel delta to `value` and returns the committed value.
    ///
    /// The pre-quantization continuation is kept in the remainder, so several
    /// small moves land on the same value as one move of the same total.
    pub fn advance(
        &mut self,
        value: f64,
        pixels: f64,
        scaling: &DragScaling,
        bounds: &Bounds,
    ) -> f64 {
        let candidate = value + self.remainder + scaling.change(pixels);
        let committed = bounds.apply(candidate, scaling.transform.default_step());
        self.remainder = candidate - committed;
        committed
    }
}
