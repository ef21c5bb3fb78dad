use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    decay,
    ensure_interval,
    env::Transition,
    error::Result,
    exploration::{Choice, EpsilonGreedy},
};

/// A dense table of state-action value estimates
///
/// Row-major `n_states x n_actions`, zero-initialized, with a shape fixed
/// for the lifetime of the table.
#[derive(Clone, Debug, PartialEq)]
pub struct QTable {
    values: Vec<f32>,
    n_states: usize,
    n_actions: usize,
}

impl QTable {
    /// Initialize a zeroed `n_states x n_actions` table
    pub fn new(n_states: usize, n_actions: usize) -> Self {
        Self {
            values: vec![0.0; n_states * n_actions],
            n_states,
            n_actions,
        }
    }

    pub fn n_states(&self) -> usize {
        self.n_states
    }

    pub fn n_actions(&self) -> usize {
        self.n_actions
    }

    pub fn get(&self, state: usize, action: usize) -> f32 {
        self.values[state * self.n_actions + action]
    }

    pub fn set(&mut self, state: usize, action: usize, value: f32) {
        self.values[state * self.n_actions + action] = value;
    }

    /// The highest value estimate for a state
    pub fn max(&self, state: usize) -> f32 {
        let row = self.row(state);
        row.iter().copied().fold(row[0], f32::max)
    }

    /// The lowest-indexed action with the highest value estimate for a state
    pub fn greedy(&self, state: usize) -> usize {
        let row = self.row(state);
        let mut best = 0;
        for (action, &value) in row.iter().enumerate().skip(1) {
            if value > row[best] {
                best = action;
            }
        }
        best
    }

    /// One state's value estimates, in action-index order
    pub fn row(&self, state: usize) -> &[f32] {
        let ix = state * self.n_actions;
        &self.values[ix..ix + self.n_actions]
    }

    /// Iterate all rows in state order, e.g. for export by collaborators
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.values.chunks(self.n_actions)
    }
}

/// Configuration for the [`QTableAgent`]
pub struct QTableAgentConfig<D: decay::Decay = decay::Geometric> {
    /// The exploration policy
    pub exploration: EpsilonGreedy<D>,
    /// The learning rate
    pub alpha: f32,
    /// The discount factor
    pub gamma: f32,
    /// Seed for the agent's random source; drawn from entropy when `None`
    pub seed: Option<u64>,
}

impl Default for QTableAgentConfig {
    fn default() -> Self {
        Self {
            exploration: EpsilonGreedy::new(decay::Geometric::new(0.995, 1.0, 0.01).unwrap()),
            alpha: 0.1,
            gamma: 0.99,
            seed: None,
        }
    }
}

/// A tabular epsilon-greedy Q-learning agent
///
/// Owns the value table and the exploration schedule; the table is mutated
/// only through [`learn`](QTableAgent::learn), and the exploration rate only
/// through [`decay_epsilon`](QTableAgent::decay_epsilon).
pub struct QTableAgent<D: decay::Decay = decay::Geometric> {
    q_table: QTable,
    exploration: EpsilonGreedy<D>,
    alpha: f32,
    gamma: f32,
    rng: StdRng,
}

impl<D: decay::Decay> QTableAgent<D> {
    /// Initialize a new agent with a zeroed `n_states x n_actions` table
    ///
    /// Errors if `alpha` is not in `(0,1]` or `gamma` is not in `[0,1)`.
    pub fn new(n_states: usize, n_actions: usize, config: QTableAgentConfig<D>) -> Result<Self> {
        Self::from_table(QTable::new(n_states, n_actions), config)
    }

    /// Initialize an agent from an existing table, e.g. to resume training
    /// or replay a learned policy
    pub fn from_table(q_table: QTable, config: QTableAgentConfig<D>) -> Result<Self> {
        ensure_interval!(config.alpha, > 0.0, 1.0);
        ensure_interval!(config.gamma, 0.0, < 1.0);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            q_table,
            exploration: config.exploration,
            alpha: config.alpha,
            gamma: config.gamma,
            rng,
        })
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// The current exploration rate
    pub fn epsilon(&self) -> f32 {
        self.exploration.epsilon()
    }

    /// Select an action index for `state` under the epsilon greedy policy
    ///
    /// Exploration draws uniformly from all actions; exploitation takes the
    /// lowest-indexed action among value ties.
    pub fn choose_action(&mut self, state: usize) -> usize {
        match self.exploration.choose(&mut self.rng) {
            Choice::Explore => self.rng.gen_range(0..self.q_table.n_actions),
            Choice::Exploit => self.q_table.greedy(state),
        }
    }

    /// Apply one temporal-difference update from an observed transition
    ///
    /// The target is the reward alone for a terminal transition, otherwise
    /// `reward + gamma * max_a Q[next_state, a]`.
    pub fn learn(&mut self, transition: &Transition) {
        let &Transition {
            state,
            action,
            reward,
            next_state,
            terminal,
        } = transition;

        let target = if terminal {
            reward
        } else {
            reward + self.gamma * self.q_table.max(next_state)
        };
        let q_value = self.q_table.get(state, action);
        self.q_table
            .set(state, action, q_value + self.alpha * (target - q_value));
    }

    /// Advance the exploration schedule by one completed episode
    pub fn decay_epsilon(&mut self) {
        self.exploration.advance();
    }
}

#[cfg(test)]
mod tests {
    use crate::decay::Constant;

    use super::*;

    fn greedy_config() -> QTableAgentConfig<Constant> {
        QTableAgentConfig {
            exploration: EpsilonGreedy::new(Constant::new(0.0)),
            alpha: 0.5,
            gamma: 0.9,
            seed: Some(0),
        }
    }

    #[test]
    fn table_starts_zeroed_with_fixed_shape() {
        let table = QTable::new(6, 4);
        assert_eq!(table.n_states(), 6);
        assert_eq!(table.n_actions(), 4);
        assert!(table.rows().all(|row| row == [0.0; 4]));
    }

    #[test]
    fn greedy_breaks_ties_toward_the_lowest_index() {
        let mut table = QTable::new(2, 4);
        assert_eq!(table.greedy(0), 0, "All-zero row picks action 0");

        table.set(1, 1, 0.7);
        table.set(1, 3, 0.7);
        assert_eq!(table.greedy(1), 1, "Equal maxima pick the lower index");
        assert_eq!(table.max(1), 0.7);
    }

    #[test]
    fn rejects_out_of_range_hyperparameters() {
        let with_alpha = |alpha| QTableAgentConfig {
            alpha,
            ..QTableAgentConfig::default()
        };
        let with_gamma = |gamma| QTableAgentConfig {
            gamma,
            ..QTableAgentConfig::default()
        };

        assert!(QTableAgent::new(4, 4, with_alpha(1.5)).is_err());
        assert!(
            QTableAgent::new(4, 4, with_alpha(0.0)).is_err(),
            "An agent with no learning rate never learns"
        );
        assert!(QTableAgent::new(4, 4, with_gamma(-0.1)).is_err());
        assert!(
            QTableAgent::new(4, 4, with_gamma(1.0)).is_err(),
            "Undiscounted returns are rejected"
        );
        assert!(QTableAgent::new(4, 4, with_alpha(1.0)).is_ok());
        assert!(QTableAgent::new(4, 4, with_gamma(0.0)).is_ok());
    }

    #[test]
    fn learn_applies_the_td_update() {
        let mut agent = QTableAgent::new(4, 4, greedy_config()).unwrap();
        agent.learn(&Transition {
            state: 0,
            action: 1,
            reward: 1.0,
            next_state: 3,
            terminal: true,
        });
        assert_eq!(
            agent.q_table().get(0, 1),
            0.5,
            "Terminal target is the reward alone"
        );

        let mut agent = QTableAgent::new(4, 4, greedy_config()).unwrap();
        let mut table = QTable::new(4, 4);
        table.set(3, 2, 1.0);
        let mut agent2 = QTableAgent::from_table(table, greedy_config()).unwrap();
        let transition = Transition {
            state: 0,
            action: 1,
            reward: -0.04,
            next_state: 3,
            terminal: false,
        };
        agent.learn(&transition);
        agent2.learn(&transition);
        assert_eq!(agent.q_table().get(0, 1), 0.5 * -0.04);
        assert_eq!(
            agent2.q_table().get(0, 1),
            0.5 * (-0.04 + 0.9 * 1.0),
            "Non-terminal target discounts the best next value"
        );
    }

    #[test]
    fn zero_td_error_leaves_the_entry_unchanged() {
        let mut table = QTable::new(4, 4);
        table.set(3, 0, 1.0);
        // Q[0,1] already equals reward + gamma * max(Q[3])
        table.set(0, 1, -0.04 + 0.9 * 1.0);
        let mut agent = QTableAgent::from_table(table, greedy_config()).unwrap();

        let before = agent.q_table().get(0, 1);
        agent.learn(&Transition {
            state: 0,
            action: 1,
            reward: -0.04,
            next_state: 3,
            terminal: false,
        });
        assert_eq!(agent.q_table().get(0, 1), before);
    }

    #[test]
    fn pure_exploitation_reproduces_the_greedy_policy() {
        let mut table = QTable::new(3, 4);
        table.set(0, 2, 1.0);
        table.set(1, 0, 0.5);
        let mut agent = QTableAgent::from_table(table, greedy_config()).unwrap();

        for _ in 0..10 {
            assert_eq!(agent.choose_action(0), 2);
            assert_eq!(agent.choose_action(1), 0);
            assert_eq!(agent.choose_action(2), 0);
        }
    }

    #[test]
    fn seeded_agents_choose_identically() {
        let config = || QTableAgentConfig {
            seed: Some(42),
            ..QTableAgentConfig::default()
        };
        let mut a = QTableAgent::new(9, 4, config()).unwrap();
        let mut b = QTableAgent::new(9, 4, config()).unwrap();

        for state in (0..9).cycle().take(100) {
            assert_eq!(a.choose_action(state), b.choose_action(state));
        }
    }

    #[test]
    fn decay_epsilon_advances_the_schedule() {
        let mut agent = QTableAgent::new(4, 4, QTableAgentConfig::default()).unwrap();
        assert_eq!(agent.epsilon(), 1.0);
        agent.decay_epsilon();
        assert_eq!(agent.epsilon(), 0.995);
        agent.decay_epsilon();
        assert_eq!(agent.epsilon(), 0.995f32.powi(2));
    }
}
