//! Index-based reordering primitives and the drag-gesture state machine.
//!
//! The two primitives are deliberately distinct: top-level curriculum items
//! and lesson blocks reorder with splice semantics, while lessons inside a
//! group exchange positions. Callers pick the one their surface exposes.

/// Remove the element at `from` and reinsert it at `to`, shifting the
/// elements in between by one position.
///
/// No-op (returns false) unless `from != to` and both indices are in range.
/// Never changes the list length and never duplicates or drops an element.
pub fn splice_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Exchange the elements at `a` and `b`, leaving all others untouched.
///
/// No-op (returns false) when either index is out of range. `a == b` is
/// allowed and trivially succeeds.
pub fn swap_positions<T>(items: &mut [T], a: usize, b: usize) -> bool {
    if a >= items.len() || b >= items.len() {
        return false;
    }
    items.swap(a, b);
    true
}

/// Parse a drag-operation payload back into a source index.
///
/// Platform drag APIs transport the source index as a string; anything that
/// does not parse cleanly makes the drop a no-op.
pub fn parse_source_index(payload: &str) -> Option<usize> {
    payload.trim().parse().ok()
}

/// State of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    /// Pointer is down on a drag handle; the drag has not started yet.
    Armed { from: usize },
    /// The drag operation is live, carrying the source index.
    Dragging { from: usize },
}

/// Explicit state machine for drag-source / drag-target reordering,
/// decoupled from any input-event API.
///
/// `idle -> armed` only from a designated handle region, `armed -> dragging`
/// on drag start, and back to `idle` on drop or cancel. A drop yields a
/// `(from, to)` move request only when the indices differ.
#[derive(Debug, Clone)]
pub struct DragController {
    phase: DragPhase,
    read_only: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            read_only: false,
        }
    }

    /// A read-only controller never arms, so no drag is possible.
    pub fn read_only() -> Self {
        Self {
            phase: DragPhase::Idle,
            read_only: true,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Pointer-down at `index`. Arms only when it happened on the drag
    /// handle and the controller is not read-only.
    pub fn arm(&mut self, index: usize, on_handle: bool) -> bool {
        if self.read_only || !on_handle {
            return false;
        }
        self.phase = DragPhase::Armed { from: index };
        true
    }

    /// Drag-start fired. Transitions `armed -> dragging`, keeping the source
    /// index as the operation payload.
    pub fn begin(&mut self) -> bool {
        match self.phase {
            DragPhase::Armed { from } => {
                self.phase = DragPhase::Dragging { from };
                true
            }
            _ => false,
        }
    }

    /// The source index rendered for attachment to a platform drag
    /// operation's data payload.
    pub fn source_payload(&self) -> Option<String> {
        match self.phase {
            DragPhase::Dragging { from } => Some(from.to_string()),
            _ => None,
        }
    }

    /// Drop over the block at `target`. Returns the move request when the
    /// gesture was live and the indices differ; always resets to idle.
    pub fn drop_on(&mut self, target: usize) -> Option<(usize, usize)> {
        let phase = std::mem::replace(&mut self.phase, DragPhase::Idle);
        match phase {
            DragPhase::Dragging { from } if from != target => Some((from, target)),
            _ => None,
        }
    }

    /// Drop where the source index arrives as a raw drag payload string.
    /// An unparsable payload makes the drop a no-op.
    pub fn drop_on_payload(&mut self, payload: &str, target: usize) -> Option<(usize, usize)> {
        self.phase = DragPhase::Idle;
        let from = parse_source_index(payload)?;
        if from == target {
            return None;
        }
        Some((from, target))
    }

    /// Drag-end without a drop. Leaves the underlying list unchanged.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn splice_move_shifts_intermediate_elements() {
        let mut items = vec!["a", "b", "c", "d"];
        assert!(splice_move(&mut items, 0, 2));
        assert_eq!(items, vec!["b", "c", "a", "d"]);

        let mut items = vec!["a", "b", "c", "d"];
        assert!(splice_move(&mut items, 3, 1));
        assert_eq!(items, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn splice_move_rejects_same_or_out_of_range_indices() {
        let mut items = vec![1, 2, 3];
        assert!(!splice_move(&mut items, 1, 1));
        assert!(!splice_move(&mut items, 3, 0));
        assert!(!splice_move(&mut items, 0, 3));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn splice_move_preserves_multiset_and_length() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let len = rng.random_range(2..20);
            let original: Vec<u32> = (0..len).map(|_| rng.random_range(0..5)).collect();
            let from = rng.random_range(0..original.len());
            let to = rng.random_range(0..original.len());

            let mut moved = original.clone();
            splice_move(&mut moved, from, to);

            assert_eq!(moved.len(), original.len());
            let mut a = moved.clone();
            let mut b = original.clone();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn swap_exchanges_exactly_two_positions() {
        let mut items = vec!["a", "b", "c"];
        assert!(swap_positions(&mut items, 0, 1));
        assert_eq!(items, vec!["b", "a", "c"]);
        assert!(!swap_positions(&mut items, 0, 9));
        assert_eq!(items, vec!["b", "a", "c"]);
    }

    #[test]
    fn full_gesture_yields_a_move_request() {
        let mut drag = DragController::new();
        assert!(drag.arm(2, true));
        assert!(drag.begin());
        assert_eq!(drag.source_payload().as_deref(), Some("2"));
        assert_eq!(drag.drop_on(0), Some((2, 0)));
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn arming_off_the_handle_is_rejected() {
        let mut drag = DragController::new();
        assert!(!drag.arm(1, false));
        assert!(!drag.begin());
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn read_only_mode_disables_arming_entirely() {
        let mut drag = DragController::read_only();
        assert!(!drag.arm(0, true));
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn drop_on_same_index_is_a_noop() {
        let mut drag = DragController::new();
        drag.arm(1, true);
        drag.begin();
        assert_eq!(drag.drop_on(1), None);
    }

    #[test]
    fn cancel_resets_without_a_move() {
        let mut drag = DragController::new();
        drag.arm(1, true);
        drag.begin();
        drag.cancel();
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert_eq!(drag.drop_on(0), None);
    }

    #[test]
    fn unparsable_drop_payload_is_a_noop() {
        let mut drag = DragController::new();
        drag.arm(1, true);
        drag.begin();
        assert_eq!(drag.drop_on_payload("not-a-number", 0), None);

        drag.arm(1, true);
        drag.begin();
        assert_eq!(drag.drop_on_payload("1", 0), Some((1, 0)));
    }
}
