//! Monotonic ULID generation.
//!
//! The codec itself is stateless. Generation needs the last issued value to
//! stay strictly increasing within a millisecond, so that state lives here
//! behind a mutex and the result is handed to the codec like any other value.

use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::codec::TIMESTAMP_MAX;
use crate::ulid::Ulid;

struct State<R> {
    last: Option<Ulid>,
    rng: R,
}

/// Issues strictly increasing ULIDs.
///
/// A new millisecond gets fresh randomness. Within the same millisecond, or
/// when the clock steps backwards, the previous value is incremented by one so
/// ordering is preserved; randomness overflow carries into the timestamp.
pub struct Generator<R = StdRng> {
    state: Mutex<State<R>>,
}

impl Generator<StdRng> {
    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Generator<R> {
    /// Creates a generator drawing randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: Mutex::new(State { last: None, rng }),
        }
    }

    /// Generates a ULID for the current wall-clock time.
    pub fn generate(&self) -> Ulid {
        self.generate_at(now_ms())
    }

    /// Generates a ULID as if the clock read `timestamp_ms`.
    pub fn generate_at(&self, timestamp_ms: u64) -> Ulid {
        let timestamp_ms = timestamp_ms & TIMESTAMP_MAX;
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let last = state.last;
        let next = match last {
            Some(last) if timestamp_ms <= last.timestamp_ms() => {
                if timestamp_ms < last.timestamp_ms() {
                    tracing::debug!(
                        timestamp_ms,
                        last_timestamp_ms = last.timestamp_ms(),
                        "clock behind last issued ULID, incrementing"
                    );
                }
                next_after(last)
            }
            _ => Ulid::from_parts(timestamp_ms, state.rng.random::<u128>()),
        };

        state.last = Some(next);
        next
    }
}

fn next_after(last: Ulid) -> Ulid {
    match last.increment() {
        Some(next) => {
            if next.timestamp_ms() != last.timestamp_ms() {
                tracing::debug!(
                    timestamp_ms = next.timestamp_ms(),
                    "randomness exhausted, carrying into next millisecond"
                );
            }
            next
        }
        None => {
            tracing::warn!("ULID space exhausted, repeating maximum value");
            Ulid::MAX
        }
    }
}

fn now_ms() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        Err(err) => {
            tracing::warn!(error = %err, "system clock before UNIX epoch");
            0
        }
    }
}

/// The process-wide generator behind [`Ulid::new`].
pub fn global() -> &'static Generator {
    static GLOBAL: OnceLock<Generator> = OnceLock::new();
    GLOBAL.get_or_init(Generator::new)
}
