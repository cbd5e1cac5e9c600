use std::fmt::Debug;
use std::hash::{DefaultHasher, Hash, Hasher};

const DEFAULT_BUCKETS: usize = 17;
const MAX_LOAD: f64 = 0.8;

struct Node<K, V> {
    key: K,
    value: V,
    next: Option<Box<Node<K, V>>>,
}

/// A chaining hash table.
///
/// Collisions are resolved by keeping a singly linked chain per bucket,
/// with new pairs inserted at the head. When an insertion pushes the load
/// factor (`size / bucket_count`) above 0.8, the bucket array doubles and
/// every pair is re-inserted against the new bucket count.
///
/// Presence is reported structurally through `Option`, so any value type
/// can be stored; there is no reserved sentinel.
pub struct HashTable<K: Eq + Hash, V> {
    buckets: Vec<Option<Box<Node<K, V>>>>,
    size: usize,
}

impl<K: Eq + Hash, V> HashTable<K, V> {
    /// An empty table with the default 17 buckets.
    pub fn new() -> HashTable<K, V> {
        HashTable::with_buckets(DEFAULT_BUCKETS)
    }

    /// An empty table with the given bucket count (at least 1).
    pub fn with_buckets(bucket_count: usize) -> HashTable<K, V> {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || None);
        HashTable { buckets, size: 0 }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The value mapped to `key`, if any. O(1) average, O(size) worst case.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut node = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(n) = node {
            if n.key == *key {
                return Some(&n.value);
            }
            node = n.next.as_deref();
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Map `key` to `value`. For a key already present the old value is
    /// replaced and returned; otherwise a new pair is chained at the head
    /// of its bucket and `None` is returned. The load factor is checked
    /// only after a fresh insertion.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let ix = self.bucket_index(&key);
        let mut node = self.buckets[ix].as_deref_mut();
        while let Some(n) = node {
            if n.key == key {
                return Some(std::mem::replace(&mut n.value, value));
            }
            node = n.next.as_deref_mut();
        }
        let next = self.buckets[ix].take();
        self.buckets[ix] = Some(Box::new(Node { key, value, next }));
        self.size += 1;
        self.grow_if_needed();
        None
    }

    /// Unlink the pair for `key` from its chain and return its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let ix = self.bucket_index(key);
        let head_matches = match self.buckets[ix].as_deref() {
            Some(node) => node.key == *key,
            None => return None,
        };
        if head_matches {
            let node = self.buckets[ix].take()?;
            self.buckets[ix] = node.next;
            self.size -= 1;
            return Some(node.value);
        }
        let mut cur = self.buckets[ix].as_deref_mut()?;
        loop {
            let next_matches = match cur.next.as_deref() {
                Some(node) => node.key == *key,
                None => return None,
            };
            if next_matches {
                let node = cur.next.take()?;
                cur.next = node.next;
                self.size -= 1;
                return Some(node.value);
            }
            cur = cur.next.as_deref_mut()?;
        }
    }

    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.take();
        }
        self.size = 0;
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish() as usize % self.buckets.len()
    }

    // The pre-rehash load is at most just over 0.8, so after doubling it is
    // at most just over 0.4 and the re-insertions below cannot recurse into
    // a further rehash.
    fn grow_if_needed(&mut self) {
        let load = self.size as f64 / self.buckets.len() as f64;
        if load <= MAX_LOAD {
            return;
        }
        let new_count = self.buckets.len() * 2;
        log::debug!(
            "rehashing {} entries from {} into {} buckets",
            self.size,
            self.buckets.len(),
            new_count
        );
        let mut fresh = Vec::with_capacity(new_count);
        fresh.resize_with(new_count, || None);
        let old = std::mem::replace(&mut self.buckets, fresh);
        self.size = 0;
        for bucket in old {
            let mut chain = bucket;
            while let Some(boxed) = chain {
                let node = *boxed;
                chain = node.next;
                self.put(node.key, node.value);
            }
        }
    }
}

impl<K: Eq + Hash + Debug, V: Debug> Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "HashTable size: {} buckets: {}",
            self.size,
            self.buckets.len()
        )?;
        for (i, bucket) in self.buckets.iter().enumerate() {
            write!(f, "{}: --", i)?;
            let mut node = bucket.as_deref();
            while let Some(n) = node {
                write!(f, ">({:?}, {:?})--", n.key, n.value)?;
                node = n.next.as_deref();
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
