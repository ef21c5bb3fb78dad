use crate::{
    env::{Environment, Transition},
    error::{Error, Result},
    grid::{Cell, Grid, Pos},
};

/// One of the four directional moves
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Action {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Action {
    /// All actions in index order
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Row and column displacement of the move
    pub fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Right => (0, 1),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
        }
    }

    /// Fixed display glyph for the move
    pub fn label(self) -> &'static str {
        match self {
            Action::Up => "↑",
            Action::Right => "→",
            Action::Down => "↓",
            Action::Left => "←",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Action {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Action::Up),
            1 => Ok(Action::Right),
            2 => Ok(Action::Down),
            3 => Ok(Action::Left),
            _ => Err(Error::InvalidAction {
                index,
                n_actions: Action::ALL.len(),
            }),
        }
    }
}

/// Reward parameters for a [`GridWorld`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rewards {
    /// Reward for a legal non-terminal move
    pub step: f32,
    /// Reward for reaching the goal
    pub goal: f32,
    /// Penalty for moving off-grid or into a blocked cell
    pub obstacle: f32,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            step: -0.04,
            goal: 1.0,
            obstacle: -1.0,
        }
    }
}

/// A deterministic maze environment over a fixed [`Grid`]
///
/// The cursor starts at a configured start cell and the episode terminates
/// exactly when it reaches the goal cell. Illegal moves (off-grid or into a
/// blocked cell) leave the cursor in place and cost the obstacle penalty;
/// they never terminate the episode.
pub struct GridWorld {
    grid: Grid,
    start: Pos,
    goal: Pos,
    rewards: Rewards,
    pos: Pos,
    active: bool,
}

impl GridWorld {
    /// Initialize a grid world with the default reward parameters
    ///
    /// Errors if the start or goal coordinate is outside the grid or on a
    /// blocked cell.
    pub fn new(grid: Grid, start: Pos, goal: Pos) -> Result<Self> {
        Self::with_rewards(grid, start, goal, Rewards::default())
    }

    /// Initialize a grid world with custom reward parameters
    pub fn with_rewards(grid: Grid, start: Pos, goal: Pos, rewards: Rewards) -> Result<Self> {
        for (name, pos) in [("start", start), ("goal", goal)] {
            if !grid.in_bounds(pos.0 as isize, pos.1 as isize) {
                return Err(Error::OutOfBounds {
                    name,
                    pos,
                    rows: grid.rows(),
                    cols: grid.cols(),
                });
            }
            if grid.cell(pos) == Cell::Blocked {
                return Err(Error::BlockedCell { name, pos });
            }
        }

        Ok(Self {
            grid,
            start,
            goal,
            rewards,
            pos: start,
            active: true,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }
}

impl Environment for GridWorld {
    fn n_states(&self) -> usize {
        self.grid.n_states()
    }

    fn n_actions(&self) -> usize {
        Action::ALL.len()
    }

    fn reset(&mut self) -> usize {
        self.pos = self.start;
        self.active = true;
        self.grid.state_of(self.pos)
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn step(&mut self, action: usize) -> Result<Transition> {
        let state = self.grid.state_of(self.pos);
        let (dr, dc) = Action::try_from(action)?.delta();
        let (row, col) = (self.pos.0 as isize + dr, self.pos.1 as isize + dc);

        if !self.grid.in_bounds(row, col)
            || self.grid.cell((row as usize, col as usize)) == Cell::Blocked
        {
            // Off-grid or blocked: penalize and stay in place
            return Ok(Transition {
                state,
                action,
                reward: self.rewards.obstacle,
                next_state: state,
                terminal: false,
            });
        }

        self.pos = (row as usize, col as usize);
        let (reward, terminal) = if self.pos == self.goal {
            self.active = false;
            (self.rewards.goal, true)
        } else {
            (self.rewards.step, false)
        };

        Ok(Transition {
            state,
            action,
            reward,
            next_state: self.grid.state_of(self.pos),
            terminal,
        })
    }
}
