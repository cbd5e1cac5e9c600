use std::hash::Hash;

use crate::arrays::DynamicArray;
use crate::errors::HeapdexError;
use crate::tables::HashTable;

struct Entry<V, P> {
    value: V,
    priority: P,
}

/// A min-heap of distinct values with priorities, indexed by value.
///
/// The entries form a complete binary tree stored in an array: the entry
/// at position `i` has its parent at `(i - 1) / 2` and its children at
/// `2i + 1` and `2i + 2`, and every parent's priority is less than or
/// equal to its children's. Alongside the array, a hash table maps each
/// value to its current position, so membership tests are O(1) average and
/// a priority change is O(log n) instead of a linear search.
///
/// Every position mutation is paired with an index update, so after any
/// public operation returns the index holds exactly the values in the heap
/// and agrees with the array about where each one lives.
///
/// Duplicate priorities are allowed; duplicate values are not. When a
/// bubble-down has to choose between two children of equal priority it
/// descends into the **right** child, and entries of equal priority are
/// never swapped past each other in either direction.
pub struct IndexedMinHeap<V: Eq + Hash + Clone, P: PartialOrd> {
    entries: DynamicArray<Entry<V, P>>,
    index: HashTable<V, usize>,
}

impl<V: Eq + Hash + Clone, P: PartialOrd> IndexedMinHeap<V, P> {
    pub fn new() -> IndexedMinHeap<V, P> {
        IndexedMinHeap {
            entries: DynamicArray::new(),
            index: HashTable::new(),
        }
    }

    /// The number of values in the heap. O(1).
    pub fn size(&self) -> usize {
        self.entries.size()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff `value` is in the heap. O(1) average.
    pub fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    /// The value with the lowest priority, without removing it. O(1).
    pub fn peek(&self) -> Result<&V, HeapdexError> {
        if self.entries.is_empty() {
            return Err(HeapdexError::EmptyCollection("peek"));
        }
        Ok(&self.entries.get(0)?.value)
    }

    /// The lowest priority currently in the heap. O(1).
    pub fn peek_priority(&self) -> Result<&P, HeapdexError> {
        if self.entries.is_empty() {
            return Err(HeapdexError::EmptyCollection("peek"));
        }
        Ok(&self.entries.get(0)?.priority)
    }

    /// Add `value` with the given priority. Expected O(log n), worst case
    /// O(n) when the backing array grows. Fails with `DuplicateValue`,
    /// leaving the heap unchanged, if the value is already present.
    pub fn add(&mut self, value: V, priority: P) -> Result<(), HeapdexError> {
        if self.contains(&value) {
            return Err(HeapdexError::DuplicateValue);
        }
        let k = self.entries.size();
        self.index.put(value.clone(), k);
        self.entries.append(Entry { value, priority });
        self.bubble_up(k)
    }

    /// Remove and return the value with the lowest priority. Expected
    /// O(log n), worst case O(n).
    pub fn poll(&mut self) -> Result<V, HeapdexError> {
        if self.entries.is_empty() {
            return Err(HeapdexError::EmptyCollection("poll"));
        }
        let top = self.entries.get(0)?.value.clone();
        let last = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.index.put(last.value.clone(), 0);
            self.entries.put(0, last)?;
        }
        self.index.remove(&top);
        self.bubble_down(0)?;
        Ok(top)
    }

    /// Change the priority of `value` to `priority`. Expected O(log n),
    /// worst case O(n). Fails with `NotFound`, leaving the heap unchanged,
    /// if the value is absent.
    ///
    /// The entry is overwritten in place and both bubble directions are
    /// attempted; the direction the priority did not move in is a no-op
    /// through the bubble guards.
    pub fn change_priority(&mut self, value: &V, priority: P) -> Result<(), HeapdexError> {
        let k = match self.index.get(value) {
            Some(k) => *k,
            None => return Err(HeapdexError::NotFound),
        };
        self.entries.put(
            k,
            Entry {
                value: value.clone(),
                priority,
            },
        )?;
        self.bubble_up(k)?;
        self.bubble_down(k)
    }

    /// Drop every entry, keeping the backing storage.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    // Exchange the entries at `h` and `k`, repointing the index at the new
    // position of both values in the same step.
    fn swap(&mut self, h: usize, k: usize) -> Result<(), HeapdexError> {
        self.entries.swap(h, k)?;
        let vh = self.entries.get(h)?.value.clone();
        let vk = self.entries.get(k)?.value.clone();
        self.index.put(vh, h);
        self.index.put(vk, k);
        Ok(())
    }

    // Move the entry at `k` toward the root until its parent's priority is
    // no longer strictly greater. Equal priorities never swap.
    fn bubble_up(&mut self, k: usize) -> Result<(), HeapdexError> {
        let mut k = k;
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.entries.get(k)?.priority < self.entries.get(parent)?.priority {
                self.swap(k, parent)?;
                k = parent;
            } else {
                break;
            }
        }
        Ok(())
    }

    // Move the entry at `k` toward the leaves. One child is chosen per
    // level: the one with the smaller priority, the right child when they
    // are equal. The swap happens only when that child's priority is
    // strictly smaller than the moving entry's.
    fn bubble_down(&mut self, k: usize) -> Result<(), HeapdexError> {
        let mut k = k;
        while 2 * k + 1 < self.entries.size() {
            let child = self.smaller_child(k)?;
            if self.entries.get(child)?.priority < self.entries.get(k)?.priority {
                self.swap(k, child)?;
                k = child;
            } else {
                break;
            }
        }
        Ok(())
    }

    // The index of the lower-priority child of `k`, the right child on a
    // tie, the only child when the right one is absent.
    // Precondition: `k` has at least one child.
    fn smaller_child(&self, k: usize) -> Result<usize, HeapdexError> {
        let left = 2 * k + 1;
        let right = 2 * k + 2;
        if right >= self.entries.size() {
            return Ok(left);
        }
        if self.entries.get(left)?.priority < self.entries.get(right)?.priority {
            Ok(left)
        } else {
            Ok(right)
        }
    }
}
