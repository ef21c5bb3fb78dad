use rand::{rngs::StdRng, Rng};

use crate::decay::Decay;

use super::Choice;

/// Epsilon greedy exploration policy with an episode-decaying epsilon
/// threshold
///
/// The random source is passed in by the caller so that exploration is
/// reproducible under a fixed seed.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy<D: Decay> {
    schedule: D,
    episode: u32,
}

impl<D: Decay> EpsilonGreedy<D> {
    /// Initialize epsilon greedy policy with a decay schedule
    pub fn new(schedule: D) -> Self {
        Self {
            schedule,
            episode: 0,
        }
    }

    /// The current epsilon threshold
    pub fn epsilon(&self) -> f32 {
        self.schedule.evaluate(self.episode)
    }

    /// Invoke epsilon greedy policy for the current episode
    pub fn choose(&self, rng: &mut StdRng) -> Choice {
        if rng.gen::<f32>() < self.epsilon() {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }

    /// Advance the schedule by one completed episode
    pub fn advance(&mut self) {
        self.episode += 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use crate::decay::{Constant, Geometric};

    use super::*;

    #[test]
    fn extreme_epsilons_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(0);

        let greedy = EpsilonGreedy::new(Constant::new(0.0));
        let random = EpsilonGreedy::new(Constant::new(1.0));
        for _ in 0..100 {
            assert!(matches!(greedy.choose(&mut rng), Choice::Exploit));
            assert!(matches!(random.choose(&mut rng), Choice::Explore));
        }
    }

    #[test]
    fn epsilon_follows_the_schedule() {
        let mut policy = EpsilonGreedy::new(Geometric::new(0.9, 1.0, 0.05).unwrap());
        let mut prev = policy.epsilon();
        assert_eq!(prev, 1.0);

        for n in 1..200u32 {
            policy.advance();
            let epsilon = policy.epsilon();
            assert!(epsilon <= prev, "Epsilon is non-increasing");
            assert!(epsilon >= 0.05, "Epsilon never falls below the floor");
            assert_eq!(epsilon, (0.9f32.powi(n as i32)).max(0.05));
            prev = epsilon;
        }
    }
}
