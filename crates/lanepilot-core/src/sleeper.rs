//! Named jitter cooldowns.
//!
//! "Sleeping" is advisory state inspected on later ticks, never an actual
//! wait: the engine runs synchronously inside host callbacks and nothing in
//! it blocks.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::ports::Clock;

/// Jitter policy: how long a cooldown is armed for.
///
/// The delay is drawn uniformly from `[base/2 + ping, base + ping]`
/// (inclusive millisecond bounds). Randomizing the interval avoids
/// perfectly periodic command timing; adding the ping keeps the window
/// realistic when the network is slow.
///
/// Example with base=1000ms, ping=50ms: delay in [550ms, 1050ms].
#[derive(Debug, Clone)]
pub struct JitterPolicy {
    /// Base delay in milliseconds.
    pub base_delay_ms: u64,
}

impl Default for JitterPolicy {
    fn default() -> Self {
        Self { base_delay_ms: 1000 }
    }
}

impl JitterPolicy {
    /// Sample one delay for the current network latency.
    pub fn sample(&self, rng: &mut impl Rng, ping_ms: u64) -> Duration {
        let min = self.base_delay_ms / 2 + ping_ms;
        let max = self.base_delay_ms + ping_ms;
        Duration::from_millis(rng.gen_range(min..=max))
    }
}

/// Named cooldown slots with expiry timestamps.
///
/// A slot is "sleeping" until its expiry passes; re-arming an armed slot
/// simply moves the expiry. `full_reset` clears every slot (match
/// boundary).
#[derive(Debug)]
pub struct Sleeper<C: Clock> {
    clock: C,
    slots: HashMap<String, DateTime<Utc>>,
}

impl<C: Clock> Sleeper<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            slots: HashMap::new(),
        }
    }

    /// Arm `name` for `duration` from now. Out-of-range durations saturate.
    pub fn sleep(&mut self, name: impl Into<String>, duration: Duration) {
        let duration = chrono::Duration::from_std(duration).unwrap_or(chrono::Duration::MAX);
        let expiry = self
            .clock
            .now()
            .checked_add_signed(duration)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.slots.insert(name.into(), expiry);
    }

    /// Has `name` not yet expired? Unknown slots are not sleeping.
    pub fn sleeping(&self, name: &str) -> bool {
        match self.slots.get(name) {
            Some(expiry) => self.clock.now() < *expiry,
            None => false,
        }
    }

    /// Clear every slot.
    pub fn full_reset(&mut self) {
        self.slots.clear();
    }
}
