//! Pause gate for deposits and claims
use odra::prelude::*;
use crate::errors::DistributorError;
use crate::events::PauseStateChanged;

/// Active / Paused operational state
#[odra::module]
pub struct Pausable {
    /// Whether the gate is closed
    paused: Var<bool>,
}

#[odra::module]
impl Pausable {
    /// Start in the active state
    pub fn init(&mut self) {
        self.paused.set(false);
    }

    /// Whether the gate is closed
    pub fn is_paused(&self) -> bool {
        self.paused.get_or_default()
    }

    /// Revert with `ContractPaused` while paused
    pub fn ensure_not_paused(&self) {
        if self.is_paused() {
            self.env().revert(DistributorError::ContractPaused);
        }
    }

    /// Change the state; callers do the owner check
    pub fn set_paused(&mut self, paused: bool) {
        self.paused.set(paused);
        self.env().emit_event(PauseStateChanged { paused });
    }
}
