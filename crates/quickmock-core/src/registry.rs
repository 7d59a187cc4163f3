//! The shared, ordered endpoint collection.
//!
//! The registry is read by the request dispatcher on every request and
//! mutated by the interactive console. Every operation takes the lock once
//! and releases it before returning, so a concurrent reader sees either the
//! state before a mutation or the state after it.

use crate::endpoint::Endpoint;
use parking_lot::RwLock;
use tracing::debug;

/// Ordered endpoint set. Insertion order is match priority and display order.
#[derive(Debug, Default)]
pub struct EndpointRegistry {
    endpoints: RwLock<Vec<Endpoint>>,
}

impl EndpointRegistry {
    /// Create a registry seeded with `endpoints`, kept in the given order.
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self {
            endpoints: RwLock::new(endpoints),
        }
    }

    /// Copy of the current endpoint list.
    pub fn snapshot_for_match(&self) -> Vec<Endpoint> {
        self.endpoints.read().clone()
    }

    /// First endpoint matching `method` and `path`, scanned under one guard.
    pub fn find(&self, method: &str, path: &str) -> Option<Endpoint> {
        let endpoints = self.endpoints.read();
        endpoints.iter().find(|e| e.matches(method, path)).cloned()
    }

    /// Add an endpoint after all existing ones.
    pub fn append(&self, endpoint: Endpoint) {
        let mut endpoints = self.endpoints.write();
        debug!(
            "Registered {} {} -> {}",
            endpoint.method, endpoint.path, endpoint.response.code
        );
        endpoints.push(endpoint);
    }

    /// Remove the endpoint at `index`. Returns false if the index is stale.
    pub fn remove_at(&self, index: usize) -> bool {
        let mut endpoints = self.endpoints.write();
        if index >= endpoints.len() {
            return false;
        }
        let removed = endpoints.remove(index);
        debug!("Removed {} {} at index {}", removed.method, removed.path, index);
        true
    }

    /// Endpoint at `index`, if it still exists.
    pub fn get(&self, index: usize) -> Option<Endpoint> {
        self.endpoints.read().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.endpoints.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Method;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    fn endpoint(path: &str, code: u16) -> Endpoint {
        Endpoint::new(Method::Get, path, code, format!("body {path}"))
    }

    fn is_complete(e: &Endpoint) -> bool {
        e.response.content == format!("body {}", e.path)
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let registry = EndpointRegistry::default();
        registry.append(endpoint("/a", 200));
        registry.append(endpoint("/b", 201));
        registry.append(endpoint("/a", 202));

        let paths: Vec<String> = registry
            .snapshot_for_match()
            .into_iter()
            .map(|e| e.path)
            .collect();
        assert_eq!(paths, vec!["/a", "/b", "/a"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_find_returns_first_match() {
        let registry = EndpointRegistry::new(vec![
            endpoint("/dup", 201),
            endpoint("/other", 200),
            endpoint("/dup", 500),
        ]);
        assert_eq!(registry.find("GET", "/dup").unwrap().response.code, 201);
        assert!(registry.find("POST", "/dup").is_none());
        assert!(registry.find("GET", "/dup/").is_none());
    }

    #[test]
    fn test_remove_at_ignores_stale_index() {
        let registry = EndpointRegistry::new(vec![endpoint("/a", 200), endpoint("/b", 200)]);
        assert!(!registry.remove_at(2));
        assert_eq!(registry.len(), 2);

        assert!(registry.remove_at(0));
        assert_eq!(registry.get(0).unwrap().path, "/b");
        assert!(registry.get(1).is_none());

        assert!(registry.remove_at(0));
        assert!(!registry.remove_at(0));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_mutations_are_not_torn_by_concurrent_scans() {
        const N: usize = 500;
        let registry = Arc::new(EndpointRegistry::default());
        let done = Arc::new(AtomicBool::new(false));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let done = Arc::clone(&done);
                thread::spawn(move || {
                    let mut scans = 0u64;
                    while !done.load(Ordering::Acquire) {
                        let snapshot = registry.snapshot_for_match();
                        // every visible endpoint is complete
                        assert!(snapshot.iter().all(is_complete));
                        let _ = registry.find("GET", "/250");
                        scans += 1;
                    }
                    scans
                })
            })
            .collect();

        for i in 0..N {
            registry.append(endpoint(&format!("/{i}"), 200));
        }
        for _ in 0..N {
            assert!(registry.remove_at(0));
        }
        done.store(true, Ordering::Release);

        for reader in readers {
            reader.join().unwrap();
        }
        assert!(registry.is_empty());
    }
}
