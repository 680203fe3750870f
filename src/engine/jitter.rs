use rand::Rng;
use rand_distr::{Distribution, Uniform};

pub const PRICE_JITTER: i64 = 10;
pub const ETA_JITTER: i64 = 2;

/// Source of the random offsets applied to each offer during a comparison.
pub trait JitterSource {
    /// Offset in `[-PRICE_JITTER, PRICE_JITTER]`.
    fn price_delta(&mut self) -> i64;
    /// Offset in `[-ETA_JITTER, ETA_JITTER]`.
    fn eta_delta(&mut self) -> i64;
}

pub struct RandomJitter<R> {
    rng: R,
    price: Uniform<i64>,
    eta: Uniform<i64>,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            price: Uniform::new_inclusive(-PRICE_JITTER, PRICE_JITTER),
            eta: Uniform::new_inclusive(-ETA_JITTER, ETA_JITTER),
        }
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn price_delta(&mut self) -> i64 {
        self.price.sample(&mut self.rng)
    }

    fn eta_delta(&mut self) -> i64 {
        self.eta.sample(&mut self.rng)
    }
}

/// Replays fixed offsets, cycling when exhausted. Zero when a list is empty.
#[derive(Clone, Debug, Default)]
pub struct FixedJitter {
    prices: Vec<i64>,
    etas: Vec<i64>,
    price_cursor: usize,
    eta_cursor: usize,
}

impl FixedJitter {
    pub fn new(prices: Vec<i64>, etas: Vec<i64>) -> Self {
        Self {
            prices,
            etas,
            price_cursor: 0,
            eta_cursor: 0,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

fn next_cycled(values: &[i64], cursor: &mut usize) -> i64 {
    if values.is_empty() {
        return 0;
    }

    let value = values[*cursor % values.len()];
    *cursor += 1;

    value
}

impl JitterSource for FixedJitter {
    fn price_delta(&mut self) -> i64 {
        next_cycled(&self.prices, &mut self.price_cursor)
    }

    fn eta_delta(&mut self) -> i64 {
        next_cycled(&self.etas, &mut self.eta_cursor)
    }
}
