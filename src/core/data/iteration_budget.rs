/// Per-frame iteration ceiling, ramped from zero up to `max`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationBudget {
    current: u32,
    max: u32,
}

impl IterationBudget {
    #[must_use]
    pub fn new(max: u32) -> Self {
        Self { current: 0, max }
    }

    /// A budget starting at `current`, clamped to `max`.
    #[must_use]
    pub fn with_current(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn advanced(self) -> Self {
        if self.current < self.max {
            Self {
                current: self.current + 1,
                ..self
            }
        } else {
            self
        }
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self::new(self.max)
    }
}
