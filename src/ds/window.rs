/// A fixed-capacity buffer of the most recent samples
///
/// Backs trailing-average metrics: once full, each push evicts the oldest
/// sample.
#[derive(Clone, Debug, Default)]
pub struct TrailingWindow {
    samples: Vec<f32>,
    ix: usize,
    capacity: usize,
}

impl TrailingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            ix: 0,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Insert a sample, overwriting the oldest once at capacity
    pub fn push(&mut self, sample: f32) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() < self.capacity {
            self.samples.push(sample);
        } else {
            self.samples[self.ix] = sample;
        }
        self.ix = (self.ix + 1) % self.capacity;
    }

    /// Mean of the retained samples, or zero when empty
    pub fn mean(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }
}
