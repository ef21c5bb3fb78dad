use crate::error::Result;

/// A single transition produced by one environment step
///
/// Consumed immediately by the agent's update; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// The encoded state the action was taken from
    pub state: usize,
    /// The index of the action taken
    pub action: usize,
    /// The reward received for the action
    pub reward: f32,
    /// The encoded state after the action
    pub next_state: usize,
    /// Whether reaching `next_state` ended the episode
    pub terminal: bool,
}

/// A deterministic, fully observable environment with a finite state space
/// and a finite action space, both addressed by index
pub trait Environment {
    /// Number of encoded states, for value-table sizing
    fn n_states(&self) -> usize;

    /// Number of discrete actions
    fn n_actions(&self) -> usize;

    /// Reset the environment to its initial state
    ///
    /// Idempotent: returns the same encoded state regardless of prior
    /// episode history.
    fn reset(&mut self) -> usize;

    /// Apply an action by index, producing the resulting transition
    ///
    /// Errors if the action index is outside `0..n_actions`.
    fn step(&mut self, action: usize) -> Result<Transition>;

    /// Whether the current episode is still running
    fn is_active(&self) -> bool;
}
