//! Mock reading generator for demo mode and tests.
//!
//! Produces plausible grow-box telemetry without hardware: values drift
//! around their baselines with a little noise, and each probe occasionally
//! sits out a cycle the way a flaky DHT does.

use growmon_common::Reading;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Generator of simulated device readings.
pub struct DemoFeed {
    rng: SmallRng,
    water_t: f64,
    dht0_h: f64,
    dht0_t: f64,
    dht1_h: f64,
    dht1_t: f64,
}

impl DemoFeed {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            water_t: 21.0,
            dht0_h: 55.0,
            dht0_t: 24.0,
            dht1_h: 60.0,
            dht1_t: 23.0,
        }
    }

    /// Produce the next simulated reading.
    pub fn next_reading(&mut self) -> Reading {
        self.water_t = drift(&mut self.rng, self.water_t, 0.3, 15.0, 30.0);
        self.dht0_h = drift(&mut self.rng, self.dht0_h, 1.0, 30.0, 90.0);
        self.dht0_t = drift(&mut self.rng, self.dht0_t, 0.4, 15.0, 35.0);
        self.dht1_h = drift(&mut self.rng, self.dht1_h, 1.0, 30.0, 90.0);
        self.dht1_t = drift(&mut self.rng, self.dht1_t, 0.4, 15.0, 35.0);

        Reading {
            water_t: Some(self.water_t),
            dht0_h: self.maybe(self.dht0_h),
            dht0_t: self.maybe(self.dht0_t),
            dht1_h: self.maybe(self.dht1_h),
            dht1_t: self.maybe(self.dht1_t),
        }
    }

    /// Drop a value once in a while, like a probe missing a cycle.
    fn maybe(&mut self, value: f64) -> Option<f64> {
        if self.rng.random_range(0..20) == 0 {
            None
        } else {
            Some(value)
        }
    }
}

impl Default for DemoFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Random walk step, clamped to a plausible range.
fn drift(rng: &mut SmallRng, value: f64, step: f64, min: f64, max: f64) -> f64 {
    (value + rng.random_range(-step..step)).clamp(min, max)
}
