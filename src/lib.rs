//! An indexed min-heap: a priority queue over (value, priority) pairs that
//! additionally supports O(1) average membership tests and O(log n)
//! arbitrary-value priority updates, by keeping a value-to-position map in
//! lock-step with the heap's array representation.
//!
//! The heap is built from two simpler containers which are also usable on
//! their own: [`arrays::DynamicArray`], a growable array with doubling
//! capacity, and [`tables::HashTable`], a chaining hash table.
//!
//! The structure is single-owner and single-threaded; callers needing
//! concurrent access must serialize externally.

pub mod arrays;
pub mod errors;
pub mod heap;
pub mod tables;

pub use arrays::DynamicArray;
pub use errors::HeapdexError;
pub use heap::IndexedMinHeap;
pub use tables::HashTable;
