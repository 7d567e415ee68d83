use crate::engine::assess;
use crate::models::{Assessment, FormInput, Workload};

/// Transient form input together with its derived assessment.
///
/// Every setter replaces one field and recomputes the assessment before
/// returning, so `assessment()` always reflects the current input.
#[derive(Debug, Clone)]
pub struct FormState {
    input: FormInput,
    assessment: Assessment,
}

impl FormState {
    /// Create a state holding the default (empty) form.
    pub fn new() -> Self {
        Self::from_input(FormInput::default())
    }

    /// Create a state from a prefilled form.
    pub fn from_input(input: FormInput) -> Self {
        let assessment = assess(&input);
        Self { input, assessment }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn set_weight(&mut self, raw: impl Into<String>) -> &Assessment {
        self.input.weight = raw.into();
        self.recompute()
    }

    pub fn set_height(&mut self, raw: impl Into<String>) -> &Assessment {
        self.input.height = raw.into();
        self.recompute()
    }

    pub fn set_workload(&mut self, workload: Workload) -> &Assessment {
        self.input.workload = workload;
        self.recompute()
    }

    pub fn set_duration(&mut self, raw: impl Into<String>) -> &Assessment {
        self.input.duration = raw.into();
        self.recompute()
    }

    /// Replace the whole form at once.
    pub fn replace(&mut self, input: FormInput) -> &Assessment {
        self.input = input;
        self.recompute()
    }

    /// Restore the default form.
    pub fn reset(&mut self) -> &Assessment {
        self.replace(FormInput::default())
    }

    fn recompute(&mut self) -> &Assessment {
        self.assessment = assess(&self.input);
        &self.assessment
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
