use std::collections::VecDeque;

use crate::reading::Reading;

/// Fixed-capacity FIFO of readings, the plot's input.
///
/// Slots hold `Option<Reading>`: a `None` slot is a cycle with no data, and
/// the renderer breaks its lines across it. Newest slots are appended at the
/// back; once the length exceeds capacity, the front is trimmed until the
/// length is back at capacity.
#[derive(Debug, Clone)]
pub struct ReadingBuffer {
    capacity: usize,
    slots: VecDeque<Option<Reading>>,
}

impl ReadingBuffer {
    /// Create an empty buffer with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: VecDeque::with_capacity(capacity),
        }
    }

    /// Create a buffer already filled to capacity with empty slots.
    ///
    /// This is how the monitor starts: the plot spans its full width from the
    /// first sample, with data entering from the right.
    pub fn prefilled(capacity: usize) -> Self {
        let mut buffer = Self::new(capacity);
        for _ in 0..capacity {
            buffer.slots.push_back(None);
        }
        buffer
    }

    /// Append a slot, evicting the oldest entries once over capacity.
    pub fn push(&mut self, slot: Option<Reading>) {
        self.slots.push_back(slot);
        while self.slots.len() > self.capacity {
            self.slots.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over the slots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Option<Reading>> {
        self.slots.iter()
    }

    /// Clone the slots into a Vec, oldest first, for hand-off to the renderer.
    pub fn snapshot(&self) -> Vec<Option<Reading>> {
        self.slots.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water(t: f64) -> Option<Reading> {
        Some(Reading {
            water_t: Some(t),
            ..Reading::default()
        })
    }

    #[test]
    fn test_push_grows_until_capacity() {
        let mut buffer = ReadingBuffer::new(3);

        buffer.push(water(1.0));
        assert_eq!(buffer.len(), 1);
        buffer.push(None);
        assert_eq!(buffer.len(), 2);
        buffer.push(water(3.0));
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let mut buffer = ReadingBuffer::new(3);

        for i in 0..10 {
            buffer.push(water(i as f64));
            assert!(buffer.len() <= buffer.capacity());
        }
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut buffer = ReadingBuffer::new(3);

        for i in 0..5 {
            buffer.push(water(i as f64));
        }

        let values: Vec<Option<f64>> = buffer
            .iter()
            .map(|slot| slot.as_ref().and_then(|r| r.water_t))
            .collect();
        assert_eq!(values, vec![Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_prefilled_is_all_empty_slots() {
        let buffer = ReadingBuffer::prefilled(4);

        assert_eq!(buffer.len(), 4);
        assert!(buffer.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn test_push_into_prefilled_evicts_oldest() {
        let mut buffer = ReadingBuffer::prefilled(3);
        buffer.push(water(21.5));

        assert_eq!(buffer.len(), 3);
        let values: Vec<Option<f64>> = buffer
            .iter()
            .map(|slot| slot.as_ref().and_then(|r| r.water_t))
            .collect();
        assert_eq!(values, vec![None, None, Some(21.5)]);
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let mut buffer = ReadingBuffer::new(3);
        buffer.push(water(1.0));
        buffer.push(None);
        buffer.push(water(3.0));

        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].as_ref().and_then(|r| r.water_t), Some(1.0));
        assert!(snapshot[1].is_none());
        assert_eq!(snapshot[2].as_ref().and_then(|r| r.water_t), Some(3.0));
    }
}
