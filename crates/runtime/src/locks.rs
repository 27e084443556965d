//! Per-character serialization of state transitions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use game_core::CharacterId;

use crate::error::{Result, RuntimeError};

/// One mutex per character.
///
/// Every load-modify-save cycle on a character runs under its lock, so two
/// rounds for the same character never interleave. Different characters never
/// contend beyond the brief registry lookup.
#[derive(Default)]
pub struct CharacterLocks {
    registry: Mutex<HashMap<CharacterId, Arc<Mutex<()>>>>,
}

impl CharacterLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock of `character`.
    pub fn with_lock<T>(&self, character: CharacterId, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = {
            let mut registry = self
                .registry
                .lock()
                .map_err(|_| RuntimeError::LockPoisoned)?;
            Arc::clone(registry.entry(character).or_default())
        };

        let _guard = lock.lock().map_err(|_| RuntimeError::LockPoisoned)?;
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;

    #[test]
    fn same_character_runs_one_at_a_time() {
        let locks = Arc::new(CharacterLocks::new());
        let inside = Arc::new(AtomicU32::new(0));
        let max_seen = Arc::new(AtomicU32::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let locks = Arc::clone(&locks);
                let inside = Arc::clone(&inside);
                let max_seen = Arc::clone(&max_seen);
                thread::spawn(move || {
                    locks
                        .with_lock(CharacterId(1), || {
                            let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                            max_seen.fetch_max(now, Ordering::SeqCst);
                            thread::yield_now();
                            inside.fetch_sub(1, Ordering::SeqCst);
                            Ok(())
                        })
                        .expect("lock");
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("join");
        }
        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }
}
