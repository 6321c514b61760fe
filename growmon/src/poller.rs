//! Polling state machine for the grow-box controller.
//!
//! The poller owns the running/busy flags, the endpoint address, and the
//! reading buffer. It performs no I/O itself: the application's update loop
//! drives it with timer ticks and request completions, which keeps every
//! state transition synchronous and testable.

use growmon_common::{Reading, ReadingBuffer};
use tracing::debug;

/// Error type for poller operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PollerError {
    #[error("poller already running")]
    AlreadyRunning,
    #[error("poller is not running")]
    NotRunning,
}

/// What the application should do with the current timer tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleAction {
    /// Issue a request to this address and report back via `complete_cycle`.
    Issue { address: String },
    /// A request is still outstanding; log and drop this cycle.
    Busy,
    /// The poller is stopped; nothing to do.
    Stopped,
}

/// State machine behind the periodic device poll.
pub struct Poller {
    address: String,
    running: bool,
    busy: bool,
    buffer: ReadingBuffer,
    last_response: Option<Reading>,
}

impl Poller {
    /// Create a stopped poller with a buffer prefilled to capacity.
    pub fn new(address: impl Into<String>, buffer_capacity: usize) -> Self {
        Self {
            address: address.into(),
            running: false,
            busy: false,
            buffer: ReadingBuffer::prefilled(buffer_capacity),
            last_response: None,
        }
    }

    /// Mark the poller running. The first cycle fires one interval later.
    pub fn start(&mut self) -> Result<(), PollerError> {
        if self.running {
            return Err(PollerError::AlreadyRunning);
        }
        self.running = true;
        Ok(())
    }

    /// Mark the poller stopped. Does not cancel an in-flight request; its
    /// completion will be discarded.
    pub fn stop(&mut self) -> Result<(), PollerError> {
        if !self.running {
            return Err(PollerError::NotRunning);
        }
        self.running = false;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Replace the target address used by subsequent cycles.
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Begin a polling cycle on a timer tick.
    ///
    /// Reads the address fresh each cycle, so an address change applies to
    /// the next request, never an in-flight one.
    pub fn begin_cycle(&mut self) -> CycleAction {
        if !self.running {
            return CycleAction::Stopped;
        }
        if self.busy {
            return CycleAction::Busy;
        }
        self.busy = true;
        CycleAction::Issue {
            address: self.address.clone(),
        }
    }

    /// Finish a polling cycle with the request's outcome.
    ///
    /// Always clears the busy flag. Returns the buffer when the renderer
    /// should redraw; a failed cycle or a completion arriving after `stop`
    /// leaves the buffer untouched and returns `None`.
    pub fn complete_cycle(
        &mut self,
        result: Result<Reading, String>,
    ) -> Option<&ReadingBuffer> {
        self.busy = false;

        if !self.running {
            debug!("discarding response received after stop");
            return None;
        }

        match result {
            Ok(reading) => {
                self.last_response = Some(reading.clone());
                self.buffer.push(Some(reading));
                Some(&self.buffer)
            }
            Err(_) => None,
        }
    }

    pub fn buffer(&self) -> &ReadingBuffer {
        &self.buffer
    }

    /// The most recent successfully decoded response, if any.
    pub fn last_response(&self) -> Option<&Reading> {
        self.last_response.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(water_t: f64) -> Reading {
        Reading {
            water_t: Some(water_t),
            ..Reading::default()
        }
    }

    fn started(capacity: usize) -> Poller {
        let mut poller = Poller::new("http://10.0.1.3", capacity);
        poller.start().unwrap();
        poller
    }

    #[test]
    fn test_start_twice_errors() {
        let mut poller = Poller::new("http://10.0.1.3", 4);

        assert!(poller.start().is_ok());
        assert_eq!(poller.start(), Err(PollerError::AlreadyRunning));
        assert!(poller.is_running());
    }

    #[test]
    fn test_stop_when_stopped_errors() {
        let mut poller = Poller::new("http://10.0.1.3", 4);

        assert_eq!(poller.stop(), Err(PollerError::NotRunning));

        poller.start().unwrap();
        assert!(poller.stop().is_ok());
        assert_eq!(poller.stop(), Err(PollerError::NotRunning));
    }

    #[test]
    fn test_cycle_issues_request_to_current_address() {
        let mut poller = started(4);

        assert_eq!(
            poller.begin_cycle(),
            CycleAction::Issue {
                address: "http://10.0.1.3".to_string()
            }
        );
    }

    #[test]
    fn test_cycle_skipped_while_busy() {
        let mut poller = started(4);

        assert!(matches!(poller.begin_cycle(), CycleAction::Issue { .. }));
        // A second tick before the response arrives.
        assert_eq!(poller.begin_cycle(), CycleAction::Busy);

        // The completion clears busy, so the next tick issues again.
        poller.complete_cycle(Ok(reading(21.5)));
        assert!(matches!(poller.begin_cycle(), CycleAction::Issue { .. }));
    }

    #[test]
    fn test_cycle_skipped_when_stopped() {
        let mut poller = Poller::new("http://10.0.1.3", 4);
        assert_eq!(poller.begin_cycle(), CycleAction::Stopped);
    }

    #[test]
    fn test_failed_cycle_leaves_buffer_untouched() {
        let mut poller = started(4);
        let before = poller.buffer().snapshot();

        poller.begin_cycle();
        let redraw = poller.complete_cycle(Err("connection error: 500".to_string()));

        assert!(redraw.is_none());
        assert_eq!(poller.buffer().snapshot(), before);
        assert!(poller.last_response().is_none());
    }

    #[test]
    fn test_successful_cycle_appends_and_returns_buffer() {
        let mut poller = started(4);

        poller.begin_cycle();
        let redraw = poller.complete_cycle(Ok(reading(21.5)));

        let buffer = redraw.expect("successful cycle should trigger a redraw");
        assert_eq!(buffer.len(), buffer.capacity());
        let newest = buffer.snapshot().pop().flatten();
        assert_eq!(newest.and_then(|r| r.water_t), Some(21.5));
        assert_eq!(poller.last_response().and_then(|r| r.water_t), Some(21.5));
    }

    #[test]
    fn test_buffer_stays_at_capacity_with_fifo_eviction() {
        let mut poller = started(3);

        for i in 0..5 {
            poller.begin_cycle();
            poller.complete_cycle(Ok(reading(i as f64)));
        }

        let values: Vec<Option<f64>> = poller
            .buffer()
            .iter()
            .map(|slot| slot.as_ref().and_then(|r| r.water_t))
            .collect();
        assert_eq!(values, vec![Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_set_address_applies_to_next_cycle() {
        let mut poller = started(4);

        let CycleAction::Issue { address } = poller.begin_cycle() else {
            panic!("expected a request");
        };
        assert_eq!(address, "http://10.0.1.3");

        // Changed mid-flight: the outstanding request keeps its address,
        // the next cycle uses the new one.
        poller.set_address("http://10.0.1.9");
        poller.complete_cycle(Ok(reading(1.0)));

        let CycleAction::Issue { address } = poller.begin_cycle() else {
            panic!("expected a request");
        };
        assert_eq!(address, "http://10.0.1.9");
    }

    #[test]
    fn test_completion_after_stop_is_discarded() {
        let mut poller = started(4);
        let before = poller.buffer().snapshot();

        poller.begin_cycle();
        poller.stop().unwrap();
        let redraw = poller.complete_cycle(Ok(reading(21.5)));

        assert!(redraw.is_none());
        assert_eq!(poller.buffer().snapshot(), before);

        // Busy was still cleared, so a restart polls normally.
        poller.start().unwrap();
        assert!(matches!(poller.begin_cycle(), CycleAction::Issue { .. }));
    }
}
