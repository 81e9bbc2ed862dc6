use crate::error::ConfigError;

/// Slice `[start, min(start + batch_size, len))` of `items`.
pub fn plan_batch<T>(items: &[T], start: usize, batch_size: usize) -> &[T] {
    let start = start.min(items.len());
    let end = start.saturating_add(batch_size).min(items.len());
    &items[start..end]
}

/// Progress through an ordered list, one batch at a time.
///
/// `start_index` never exceeds `total` and only moves forward; each
/// [`advance`](BatchCursor::advance) moves it by the length of the current
/// batch whether that batch was approved or skipped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BatchCursor {
    start_index: usize,
    batch_size: usize,
    total: usize,
}

impl BatchCursor {
    pub fn new(batch_size: usize, total: usize) -> Result<Self, ConfigError> {
        if batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        Ok(Self {
            start_index: 0,
            batch_size,
            total,
        })
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.start_index
    }

    pub fn is_finished(&self) -> bool {
        self.start_index >= self.total
    }

    pub fn current_len(&self) -> usize {
        self.batch_size.min(self.remaining())
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        plan_batch(items, self.start_index, self.batch_size)
    }

    /// One-based number of the batch under the cursor.
    pub fn batch_number(&self) -> usize {
        self.start_index / self.batch_size + 1
    }

    pub fn batch_count(&self) -> usize {
        self.total.div_ceil(self.batch_size)
    }

    pub fn advance(&mut self) -> usize {
        let step = self.current_len();
        self.start_index += step;
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_batch_clamps_to_len() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(plan_batch(&items, 0, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(plan_batch(&items, 5, 5), &[6, 7]);
        assert!(plan_batch(&items, 7, 5).is_empty());
        assert!(plan_batch(&items, 42, 5).is_empty());
    }

    #[test]
    fn batches_reconstruct_sequence() {
        for len in 0..23usize {
            for size in 1..8usize {
                let items: Vec<usize> = (0..len).collect();
                let mut cursor = BatchCursor::new(size, len).unwrap();
                let mut rebuilt = Vec::new();
                let mut last_len = 0;
                while !cursor.is_finished() {
                    let batch = cursor.current(&items);
                    last_len = batch.len();
                    rebuilt.extend_from_slice(batch);
                    cursor.advance();
                }
                assert_eq!(rebuilt, items, "len={len} size={size}");
                if len > 0 {
                    let expected = if len % size == 0 { size } else { len % size };
                    assert_eq!(last_len, expected, "len={len} size={size}");
                }
            }
        }
    }

    #[test]
    fn advance_is_monotonic_and_terminates() {
        let mut cursor = BatchCursor::new(5, 12).unwrap();
        assert_eq!(cursor.batch_count(), 3);
        let mut iterations = 0;
        let mut previous = cursor.start_index();
        while !cursor.is_finished() {
            let expected = cursor.batch_size().min(cursor.remaining());
            assert_eq!(cursor.batch_number(), iterations + 1);
            assert_eq!(cursor.advance(), expected);
            assert_eq!(cursor.start_index(), previous + expected);
            assert!(cursor.start_index() <= cursor.total());
            previous = cursor.start_index();
            iterations += 1;
        }
        assert_eq!(iterations, 3);
        assert_eq!(cursor.start_index(), 12);
        assert_eq!(cursor.advance(), 0);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        assert_eq!(
            BatchCursor::new(0, 10).unwrap_err(),
            ConfigError::InvalidBatchSize
        );
    }

    #[test]
    fn empty_list_is_finished_immediately() {
        let cursor = BatchCursor::new(5, 0).unwrap();
        assert!(cursor.is_finished());
        assert_eq!(cursor.batch_count(), 0);
    }
}
