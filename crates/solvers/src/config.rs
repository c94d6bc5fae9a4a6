use crate::Variant;

/// Iteration limits for the LFD solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_iters: usize,
    max_iters_proximal: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(500, 50)
    }
}

impl Config {
    /// Creates a config with the given iteration limits.
    ///
    /// `max_iters` bounds the direct method. `max_iters_proximal` bounds the
    /// outer proximal steps of the proximal method.
    #[must_use]
    pub fn new(max_iters: usize, max_iters_proximal: usize) -> Self {
        Self {
            max_iters,
            max_iters_proximal,
        }
    }

    /// Returns the iteration limit of the direct method.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the outer iteration limit of the proximal method.
    #[must_use]
    pub fn max_iters_proximal(&self) -> usize {
        self.max_iters_proximal
    }

    /// Returns the iteration limit that applies to `variant`.
    #[must_use]
    pub fn max_iters_for(&self, variant: Variant) -> usize {
        match variant {
            Variant::Direct => self.max_iters,
            Variant::Proximal => self.max_iters_proximal,
        }
    }

    /// Returns a copy with a different direct iteration limit.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different proximal iteration limit.
    #[must_use]
    pub fn with_max_iters_proximal(self, max_iters_proximal: usize) -> Self {
        Self {
            max_iters_proximal,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 500);
        assert_eq!(config.max_iters_proximal(), 50);
    }

    #[test]
    fn limit_follows_variant() {
        let config = Config::default().with_max_iters(10).with_max_iters_proximal(3);
        assert_eq!(config.max_iters_for(Variant::Direct), 10);
        assert_eq!(config.max_iters_for(Variant::Proximal), 3);
    }
}
