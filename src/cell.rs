use std::sync::{Mutex, OnceLock, PoisonError};

/// Single-slot, set-at-most-once container.
///
/// Starts empty; the first successful initialization populates the slot
/// permanently. There is no way to clear or overwrite it afterwards, every
/// later read returns the same value and ignores its initializer.
pub struct StableCell<T> {
    slot: OnceLock<T>,
    init_lock: Mutex<()>,
}

impl<T> StableCell<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Non-initializing read.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Returns the stored value, running `init` first if the slot is empty.
    ///
    /// Under concurrent first access exactly one producer runs and its result
    /// is what every caller sees.
    pub fn or_init(&self, init: impl FnOnce() -> T) -> &T {
        match self.or_try_init(|| Ok::<_, std::convert::Infallible>(init())) {
            Ok(it) => it,
            Err(e) => match e {},
        }
    }

    /// Fallible form of [`Self::or_init`].
    ///
    /// An `Err` from `init` propagates unwrapped and leaves the slot empty,
    /// so a later call may still populate it. A racer that loses the init
    /// lock never runs its producer.
    pub fn or_try_init<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        if let Some(it) = self.slot.get() {
            return Ok(it);
        }

        // a panicked or failed initializer leaves the slot empty,
        // not the cell broken
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(it) = self.slot.get() {
            return Ok(it);
        }

        let it = init()?;

        Ok(self.slot.get_or_init(|| it))
    }
}

impl<T> Default for StableCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StableCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(StableCell))
            .field("slot", &self.slot.get())
            .finish_non_exhaustive()
    }
}

/// [`StableCell`] with a fixed initializer, for statics.
pub struct Lazy<T: 'static> {
    cell: StableCell<T>,
    init: fn() -> T,
}

impl<T> Lazy<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: StableCell::new(),
            init,
        }
    }
}

impl<T> std::ops::Deref for Lazy<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.cell.or_init(self.init)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_init_once() {
        let cell = StableCell::new();
        let calls = AtomicUsize::new(0);

        let first = *cell.or_init(|| {
            calls.fetch_add(1, Ordering::Relaxed);
            1
        });

        let second = *cell.or_init(|| {
            calls.fetch_add(1, Ordering::Relaxed);
            2
        });

        assert_eq!(first, 1);
        assert_eq!(second, 1);
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_get_does_not_init() {
        let cell = StableCell::<i32>::new();

        assert_eq!(cell.get(), None);
        cell.or_init(|| 7);
        assert_eq!(cell.get(), Some(&7));
    }

    #[test]
    fn test_failed_init_leaves_empty() {
        let cell = StableCell::<i32>::new();

        let res = cell.or_try_init(|| Err(anyhow!("producer broke")));
        assert!(res.is_err());
        assert_eq!(cell.get(), None);

        let res = cell.or_try_init(|| Ok::<_, anyhow::Error>(42));
        assert_eq!(res.unwrap(), &42);
        assert_eq!(cell.get(), Some(&42));
    }

    #[test]
    fn test_single_winner_under_contention() {
        const THREADS: usize = 16;

        let cell = StableCell::new();
        let calls = AtomicUsize::new(0);

        std::thread::scope(|s| {
            let handles = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        *cell.or_init(|| {
                            calls.fetch_add(1, Ordering::Relaxed);
                            std::thread::current().id()
                        })
                    })
                })
                .collect::<Vec<_>>();

            let seen = handles
                .into_iter()
                .map(|it| it.join().unwrap())
                .collect::<Vec<_>>();

            assert!(seen.iter().all(|id| *id == seen[0]));
            assert_eq!(cell.get(), Some(&seen[0]));
        });

        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_lazy_derefs_to_init() {
        static COUNTER: Lazy<Vec<i32>> = Lazy::new(|| vec![1, 2, 3]);

        assert_eq!(COUNTER.len(), 3);
        assert_eq!(*COUNTER, vec![1, 2, 3]);
    }
}
