use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Insert-time key generator. Every call returns an id never returned
/// before by the same generator.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUIDv4 ids, the default for a running server.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `<prefix>-<n>` with `n` counting up from 1. Deterministic, handy in tests.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: AtomicU64::new(1) }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::new("p");
        assert_eq!(ids.next_id(), "p-1");
        assert_eq!(ids.next_id(), "p-2");
    }

    #[test]
    fn uuid_ids_parse_back() {
        let id = UuidIds.next_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn sequential_ids_unique_across_threads() {
        let ids = Arc::new(SequentialIds::new("t"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();
        let mut seen = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 2000);
    }
}
