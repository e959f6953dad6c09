use std::str::FromStr;

use crate::core::data::iteration_budget::IterationBudget;

/// What a zoom does to the iteration ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomBudgetMode {
    /// Keep ramping from wherever the budget is.
    #[default]
    Preserve,
    /// Restart the ramp from zero so the new view refines progressively.
    Reset,
}

impl ZoomBudgetMode {
    pub const ALL: &'static [Self] = &[Self::Preserve, Self::Reset];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Reset => "reset",
        }
    }
}

impl FromStr for ZoomBudgetMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("expected preserve or reset, got '{s}'"))
    }
}

/// Ramps the iteration budget by one per rendered frame, independent of
/// wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationController {
    budget: IterationBudget,
    zoom_mode: ZoomBudgetMode,
}

impl AnimationController {
    #[must_use]
    pub fn new(max_iterations: u32, zoom_mode: ZoomBudgetMode) -> Self {
        Self {
            budget: IterationBudget::new(max_iterations),
            zoom_mode,
        }
    }

    #[must_use]
    pub fn budget(&self) -> IterationBudget {
        self.budget
    }

    pub fn advance(&mut self) -> IterationBudget {
        self.budget = self.budget.advanced();
        self.budget
    }

    pub fn on_zoom(&mut self) {
        if self.zoom_mode == ZoomBudgetMode::Reset {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.budget = self.budget.reset();
    }
}
