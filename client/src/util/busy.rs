//! Single-flight guard for buttons that start a mutation.

#[cfg(test)]
#[path = "busy_test.rs"]
mod busy_test;

use leptos::prelude::*;

/// Mark `busy` and return `true`, or return `false` if a request is already
/// in flight. The caller clears the flag once its request settles.
pub fn try_begin(busy: RwSignal<bool>) -> bool {
    if busy.get_untracked() {
        return false;
    }
    busy.set(true);
    true
}
