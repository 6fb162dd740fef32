/// Sizing and growth policy of a [`HashTable`](crate::HashTable).
///
/// Before every insert the table checks `len >= max_load_factor * buckets`;
/// when that holds it tries to grow to `growth_factor * buckets`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub(crate) initial_buckets: usize,
    pub(crate) max_load_factor: usize,
    pub(crate) growth_factor: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_buckets: 16,
            max_load_factor: 3,
            growth_factor: 9,
        }
    }
}

impl Config {
    /// Default policy starting at `initial_buckets` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `initial_buckets` is zero.
    pub fn new(initial_buckets: usize) -> Self {
        assert!(initial_buckets > 0, "bucket count must be non-zero");
        Self {
            initial_buckets,
            ..Self::default()
        }
    }

    /// Average chain length at which the table grows.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn max_load_factor(mut self, n: usize) -> Self {
        assert!(n > 0, "load factor threshold must be non-zero");
        self.max_load_factor = n;
        self
    }

    /// Multiplier applied to the bucket count on growth.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2`.
    #[must_use]
    pub fn growth_factor(mut self, n: usize) -> Self {
        assert!(n >= 2, "growth factor must be at least 2");
        self.growth_factor = n;
        self
    }

    pub fn initial_buckets(&self) -> usize {
        self.initial_buckets
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use test_log::test;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.initial_buckets(), 16);
        assert_eq!(c.max_load_factor, 3);
        assert_eq!(c.growth_factor, 9);
    }

    #[test]
    fn builder_overrides_policy() {
        let c = Config::new(4).max_load_factor(1).growth_factor(2);
        assert_eq!(c.initial_buckets(), 4);
        assert_eq!(c.max_load_factor, 1);
        assert_eq!(c.growth_factor, 2);
    }

    #[test]
    #[should_panic(expected = "bucket count must be non-zero")]
    fn zero_buckets_panics() {
        let _ = Config::new(0);
    }

    #[test]
    #[should_panic(expected = "growth factor")]
    fn growth_factor_one_panics() {
        let _ = Config::default().growth_factor(1);
    }
}
