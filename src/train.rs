use log::{debug, info};

use crate::{
    algo::QTableAgent,
    decay::Decay,
    ds::TrailingWindow,
    env::Environment,
    error::Result,
};

/// Configuration for a [`Trainer`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainerConfig {
    /// Episode budget for the run
    pub episodes: usize,
    /// Per-episode step cap; exhausting it ends the episode as a failure
    pub max_steps: usize,
    /// Emit a progress log line every this many episodes
    pub log_every: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            episodes: 2000,
            max_steps: 100,
            log_every: 200,
        }
    }
}

/// Outcome of a single training episode
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpisodeRecord {
    /// Total reward accumulated over the episode
    pub reward: f32,
    /// Steps taken before the goal or the step cap
    pub steps: usize,
    /// Whether the goal was reached within the step cap
    pub success: bool,
}

/// Ordered per-episode metrics for a completed training run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainingRun {
    episodes: Vec<EpisodeRecord>,
}

impl TrainingRun {
    pub fn episodes(&self) -> &[EpisodeRecord] {
        &self.episodes
    }

    /// Per-episode total rewards, in episode order
    pub fn rewards(&self) -> Vec<f32> {
        self.episodes.iter().map(|e| e.reward).collect()
    }

    /// Per-episode success flags, in episode order
    pub fn successes(&self) -> Vec<bool> {
        self.episodes.iter().map(|e| e.success).collect()
    }

    /// Fraction of episodes that reached the goal
    pub fn success_rate(&self) -> f32 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        let hits = self.episodes.iter().filter(|e| e.success).count();
        hits as f32 / self.episodes.len() as f32
    }

    /// Mean total reward over the last `window` episodes
    pub fn trailing_mean(&self, window: usize) -> f32 {
        let tail = &self.episodes[self.episodes.len().saturating_sub(window)..];
        if tail.is_empty() {
            return 0.0;
        }
        tail.iter().map(|e| e.reward).sum::<f32>() / tail.len() as f32
    }
}

/// Drives repeated training episodes of an agent against an environment
///
/// Pure orchestration: every value update goes through the agent's `learn`,
/// and the exploration rate decays exactly once per completed episode.
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    /// Run the full episode budget, returning per-episode metrics
    ///
    /// An episode ends on the environment's terminal signal (success) or at
    /// `max_steps` (failure). Errors only on an invalid action index, which
    /// a correctly sized agent never produces.
    pub fn run<E, D>(&self, env: &mut E, agent: &mut QTableAgent<D>) -> Result<TrainingRun>
    where
        E: Environment,
        D: Decay,
    {
        let TrainerConfig {
            episodes,
            max_steps,
            log_every,
        } = self.config;

        let mut records = Vec::with_capacity(episodes);
        let mut recent = TrailingWindow::new(log_every.max(1));

        for episode in 0..episodes {
            let mut state = env.reset();
            let mut total_reward = 0.0;
            let mut steps = 0;
            let mut success = false;

            while steps < max_steps {
                let action = agent.choose_action(state);
                let transition = env.step(action)?;
                agent.learn(&transition);

                state = transition.next_state;
                total_reward += transition.reward;
                steps += 1;

                if transition.terminal {
                    success = true;
                    break;
                }
            }

            agent.decay_epsilon();
            recent.push(total_reward);
            records.push(EpisodeRecord {
                reward: total_reward,
                steps,
                success,
            });

            debug!("episode {episode}: reward {total_reward:.2}, steps {steps}, success {success}");
            if log_every > 0 && (episode + 1) % log_every == 0 {
                info!(
                    "episode {}/{}: trailing mean reward {:.2}, epsilon {:.3}",
                    episode + 1,
                    episodes,
                    recent.mean(),
                    agent.epsilon(),
                );
            }
        }

        Ok(TrainingRun { episodes: records })
    }
}
