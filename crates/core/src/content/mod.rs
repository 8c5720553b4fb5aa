//! Static content stores, one module per topic.
//!
//! All stores are plain `&'static` data; views read them by index.

pub mod basic_concepts;
pub mod control_structures;
pub mod database;
pub mod debugging;
pub mod functions_procedures;
pub mod libraries_modules;
pub mod oop_concepts;
pub mod windows_forms;

/// Look up a position in a store. Out-of-range positions yield `None`.
#[must_use]
pub fn entry_at<T>(store: &[T], index: usize) -> Option<&T> {
    store.get(index)
}
