//! Clue -> suspect lookup table.
//!
//! A fixed-bucket hash table with separate chaining. Keys are the exact clue
//! text; inserting an existing key overwrites its suspect instead of adding a
//! second entry. The table is filled once at start-up and only read afterwards.

use log::debug;

/// Default bucket count (a small prime).
pub const SUSPECT_BUCKETS: usize = 101;

/// djb2 string hash: seed 5381, `h * 33 + byte` over the UTF-8 bytes.
pub fn clue_hash(clue: &str) -> u64 {
    clue.bytes().fold(5381u64, |h, b| {
        h.wrapping_shl(5).wrapping_add(h).wrapping_add(b as u64)
    })
}

#[derive(Debug, Clone)]
struct Entry {
    clue: String,
    suspect: String,
}

#[derive(Debug, Clone)]
pub struct SuspectIndex {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self::with_buckets(SUSPECT_BUCKETS)
    }

    /// Create an index with a custom bucket count. Zero is clamped to one.
    pub fn with_buckets(count: usize) -> Self {
        let count = count.max(1);
        Self {
            buckets: vec![Vec::new(); count],
            len: 0,
        }
    }

    /// Build an index by applying `put` to each pair in order.
    pub fn from_pairs<I, C, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, S)>,
        C: AsRef<str>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for (clue, suspect) in pairs {
            index.put(clue.as_ref(), suspect.as_ref());
        }
        index
    }

    fn bucket_of(&self, clue: &str) -> usize {
        (clue_hash(clue) % self.buckets.len() as u64) as usize
    }

    /// Associate `clue` with `suspect`, overwriting any previous suspect for that clue.
    pub fn put(&mut self, clue: &str, suspect: &str) {
        let b = self.bucket_of(clue);
        let chain = &mut self.buckets[b];
        if let Some(existing) = chain.iter_mut().find(|e| e.clue == clue) {
            debug!(
                "Suspect index overwrite: {:?} {:?} -> {:?}",
                clue, existing.suspect, suspect
            );
            existing.suspect = suspect.to_string();
            return;
        }
        // New entries go to the head of the chain.
        chain.insert(
            0,
            Entry {
                clue: clue.to_string(),
                suspect: suspect.to_string(),
            },
        );
        self.len += 1;
    }

    /// Suspect associated with `clue`, if any.
    pub fn get(&self, clue: &str) -> Option<&str> {
        self.buckets[self.bucket_of(clue)]
            .iter()
            .find(|e| e.clue == clue)
            .map(|e| e.suspect.as_str())
    }

    /// Number of distinct clue keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Distinct suspect names, sorted.
    pub fn suspects(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .buckets
            .iter()
            .flatten()
            .map(|e| e.suspect.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
