use crate::errors::HeapdexError;

const DEFAULT_CAPACITY: usize = 8;

/// A growable array with explicit index-addressed access.
///
/// The logical length and the backing capacity are tracked separately:
/// `capacity >= length` always holds, growth doubles the capacity as many
/// times as needed, and nothing ever shrinks the capacity. Slots opened by
/// `resize` are vacant until written with `put`; reading a vacant slot is
/// an error.
pub struct DynamicArray<T> {
    slots: Vec<Option<T>>,
    length: usize,
}

impl<T> DynamicArray<T> {
    /// An empty array with the default capacity of 8.
    pub fn new() -> DynamicArray<T> {
        DynamicArray::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty array with the given capacity.
    pub fn with_capacity(capacity: usize) -> DynamicArray<T> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        DynamicArray { slots, length: 0 }
    }

    pub fn size(&self) -> usize {
        self.length
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The element at index `i`, for `i` in `[0, length)`.
    pub fn get(&self, i: usize) -> Result<&T, HeapdexError> {
        if i >= self.length {
            return Err(HeapdexError::OutOfBounds(i, self.length));
        }
        self.slots[i]
            .as_ref()
            .ok_or(HeapdexError::OutOfBounds(i, self.length))
    }

    /// Overwrite the element at index `i`. Does not change the length.
    pub fn put(&mut self, i: usize, value: T) -> Result<(), HeapdexError> {
        if i >= self.length {
            return Err(HeapdexError::OutOfBounds(i, self.length));
        }
        self.slots[i] = Some(value);
        Ok(())
    }

    /// Exchange the elements at indices `h` and `k`.
    pub fn swap(&mut self, h: usize, k: usize) -> Result<(), HeapdexError> {
        if h >= self.length {
            return Err(HeapdexError::OutOfBounds(h, self.length));
        }
        if k >= self.length {
            return Err(HeapdexError::OutOfBounds(k, self.length));
        }
        self.slots.swap(h, k);
        Ok(())
    }

    /// Store `value` at the end, growing the length by one. Amortized O(1).
    pub fn append(&mut self, value: T) {
        self.grow_if_needed(self.length + 1);
        self.slots[self.length] = Some(value);
        self.length += 1;
    }

    /// Remove and return the last element. Never shrinks the capacity.
    /// Popping a vacant last slot is an error and leaves the length
    /// untouched.
    pub fn pop(&mut self) -> Result<T, HeapdexError> {
        if self.length == 0 {
            return Err(HeapdexError::EmptyCollection("pop"));
        }
        let value = self.slots[self.length - 1]
            .take()
            .ok_or(HeapdexError::OutOfBounds(self.length - 1, self.length))?;
        self.length -= 1;
        Ok(value)
    }

    /// Set the length, growing the capacity first if `new_length` exceeds
    /// it. Slots between the old and new length are vacant until written;
    /// shrinking drops the abandoned elements, so growing back does not
    /// make them readable again.
    pub fn resize(&mut self, new_length: usize) {
        if new_length > self.slots.len() {
            self.grow_if_needed(new_length);
        }
        if new_length < self.length {
            for slot in self.slots[new_length..self.length].iter_mut() {
                slot.take();
            }
        }
        self.length = new_length;
    }

    pub fn clear(&mut self) {
        for slot in self.slots[..self.length].iter_mut() {
            slot.take();
        }
        self.length = 0;
    }

    fn grow_if_needed(&mut self, new_length: usize) {
        if new_length <= self.slots.len() {
            return;
        }
        let mut capacity = self.slots.len().max(1);
        while capacity < new_length {
            capacity *= 2;
        }
        log::trace!(
            "growing array capacity {} -> {}",
            self.slots.len(),
            capacity
        );
        self.slots.resize_with(capacity, || None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_then_pop_reverses() {
        let mut xs = DynamicArray::new();
        for i in 0..1000 {
            xs.append(i);
        }
        assert_eq!(xs.size(), 1000);
        for i in (0..1000).rev() {
            assert_eq!(xs.pop(), Ok(i));
        }
        assert!(xs.is_empty());
    }

    #[test]
    fn get_and_put_out_of_bounds() {
        let mut xs = DynamicArray::new();
        xs.append(1);
        assert_eq!(xs.get(0), Ok(&1));
        assert_eq!(xs.get(1), Err(HeapdexError::OutOfBounds(1, 1)));
        assert_eq!(xs.get(100), Err(HeapdexError::OutOfBounds(100, 1)));
        assert_eq!(xs.put(1, 5), Err(HeapdexError::OutOfBounds(1, 1)));
    }

    #[test]
    fn put_overwrites_in_place() {
        let mut xs = DynamicArray::new();
        xs.append(1);
        xs.append(2);
        assert_eq!(xs.put(0, 7), Ok(()));
        assert_eq!(xs.get(0), Ok(&7));
        assert_eq!(xs.size(), 2);
    }

    #[test]
    fn pop_on_empty() {
        let mut xs: DynamicArray<u32> = DynamicArray::new();
        assert_eq!(xs.pop(), Err(HeapdexError::EmptyCollection("pop")));
    }

    #[test]
    fn growth_doubles() {
        let mut xs = DynamicArray::new();
        assert_eq!(xs.capacity(), 8);
        for i in 0..9 {
            xs.append(i);
        }
        assert_eq!(xs.capacity(), 16);
        for i in 0..9 {
            assert_eq!(xs.get(i), Ok(&i));
        }
    }

    #[test]
    fn pop_never_shrinks_capacity() {
        let mut xs = DynamicArray::new();
        for i in 0..20 {
            xs.append(i);
        }
        let capacity = xs.capacity();
        while !xs.is_empty() {
            xs.pop().unwrap();
        }
        assert_eq!(xs.capacity(), capacity);
    }

    #[test]
    fn resize_grows_in_one_pass() {
        let mut xs: DynamicArray<u32> = DynamicArray::new();
        xs.resize(1000);
        assert_eq!(xs.size(), 1000);
        assert_eq!(xs.capacity(), 1024);
    }

    #[test]
    fn resize_shrink_drops_abandoned_elements() {
        let mut xs = DynamicArray::new();
        xs.append("a");
        xs.append("b");
        xs.append("c");
        xs.resize(1);
        xs.resize(3);
        assert_eq!(xs.get(0), Ok(&"a"));
        assert_eq!(xs.get(1), Err(HeapdexError::OutOfBounds(1, 3)));
        assert_eq!(xs.get(2), Err(HeapdexError::OutOfBounds(2, 3)));
        xs.put(1, "d").unwrap();
        assert_eq!(xs.get(1), Ok(&"d"));
    }

    #[test]
    fn pop_on_vacant_slot_leaves_length_alone() {
        let mut xs: DynamicArray<u32> = DynamicArray::new();
        xs.resize(2);
        assert_eq!(xs.pop(), Err(HeapdexError::OutOfBounds(1, 2)));
        assert_eq!(xs.size(), 2);
        xs.put(1, 9).unwrap();
        assert_eq!(xs.pop(), Ok(9));
        assert_eq!(xs.size(), 1);
    }

    #[test]
    fn vacant_slots_are_unreadable_until_written() {
        let mut xs: DynamicArray<u32> = DynamicArray::new();
        xs.resize(4);
        assert_eq!(xs.get(2), Err(HeapdexError::OutOfBounds(2, 4)));
        xs.put(2, 7).unwrap();
        assert_eq!(xs.get(2), Ok(&7));
    }

    #[test]
    fn swap_exchanges_elements() {
        let mut xs = DynamicArray::new();
        xs.append("a");
        xs.append("b");
        xs.append("c");
        assert_eq!(xs.swap(0, 2), Ok(()));
        assert_eq!(xs.get(0), Ok(&"c"));
        assert_eq!(xs.get(2), Ok(&"a"));
        assert_eq!(xs.swap(0, 3), Err(HeapdexError::OutOfBounds(3, 3)));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut xs = DynamicArray::new();
        for i in 0..10 {
            xs.append(i);
        }
        let capacity = xs.capacity();
        xs.clear();
        assert!(xs.is_empty());
        assert_eq!(xs.capacity(), capacity);
        assert_eq!(xs.get(0), Err(HeapdexError::OutOfBounds(0, 0)));
    }
}
