//! Range-mode selection reconciliation.
//!
//! Makes the selected set exactly the inclusive interval between the drag's
//! anchor and the current pointer index, however many times the drag has
//! overshot and reversed — without rescanning the whole list. The watermarks
//! (`min`/`max` reached since the last return to the anchor) bound the only
//! indices that can possibly need deselecting.

use crate::receiver::DragSelectReceiver;

/// Reconciles the receiver's selection with the interval `from..=to`.
///
/// `from` is the drag anchor, `to` the index currently under the pointer,
/// `min`/`max` the watermarks reached so far (`None` until the drag first
/// leaves the anchor). The anchor itself is never deselected here.
///
/// Callers are expected to skip the call entirely when `to` equals the
/// previously reconciled index, and to update the watermarks afterwards:
/// extend them with `to`, or collapse both to `from` when `to == from`.
pub fn select_range(
    receiver: &dyn DragSelectReceiver,
    from: usize,
    to: usize,
    min: Option<usize>,
    max: Option<usize>,
) {
    if to == from {
        // Pointer is back on the anchor item: release everything else that
        // this drag reached.
        if let (Some(min), Some(max)) = (min, max) {
            deselect_except(receiver, min..=max, from);
        }
        return;
    }

    if to < from {
        // Dragging backward from the anchor.
        for i in to..=from {
            receiver.set_selected(i, true);
        }
        if let Some(min) = min {
            if min < to {
                // Selected on a prior overshoot past the current position.
                deselect_except(receiver, min..to, from);
            }
        }
        if let Some(max) = max {
            // Anything reached while the drag went the other way.
            for i in from + 1..=max {
                receiver.set_selected(i, false);
            }
        }
    } else {
        // Dragging forward from the anchor.
        for i in from..=to {
            receiver.set_selected(i, true);
        }
        if let Some(max) = max {
            if max > to {
                deselect_except(receiver, to + 1..=max, from);
            }
        }
        if let Some(min) = min {
            for i in min..from {
                receiver.set_selected(i, false);
            }
        }
    }
}

fn deselect_except(
    receiver: &dyn DragSelectReceiver,
    indices: impl IntoIterator<Item = usize>,
    keep: usize,
) {
    for i in indices {
        if i == keep {
            continue;
        }
        receiver.set_selected(i, false);
    }
}
