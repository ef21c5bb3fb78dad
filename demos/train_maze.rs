use std::{error::Error, fs, path::Path};

use gridworld_rl::{
    algo::{QTableAgent, QTableAgentConfig},
    env::Environment,
    grid::{Cell, Grid},
    grid_world::{Action, GridWorld},
    train::{Trainer, TrainerConfig},
};

/// The classic 5x5 maze: 0 free, 1 blocked
const MAZE: [[u8; 5]; 5] = [
    [0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 1, 0, 0, 0],
    [0, 0, 0, 1, 0],
];

fn main() -> Result<(), Box<dyn Error>> {
    let cells = MAZE
        .iter()
        .map(|row| {
            row.iter()
                .map(|&x| if x == 1 { Cell::Blocked } else { Cell::Free })
                .collect()
        })
        .collect();
    let mut env = GridWorld::new(Grid::new(cells)?, (0, 0), (4, 4))?;

    let mut agent = QTableAgent::new(
        env.n_states(),
        env.n_actions(),
        QTableAgentConfig::default(),
    )?;
    let trainer = Trainer::new(TrainerConfig::default());
    let run = trainer.run(&mut env, &mut agent)?;

    let out = Path::new("demos/out");
    fs::create_dir_all(out)?;

    let mut wtr = csv::Writer::from_path(out.join("q_table.csv"))?;
    wtr.write_record(Action::ALL.map(|a| a.label()))?;
    for row in agent.q_table().rows() {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;

    let mut wtr = csv::Writer::from_path(out.join("rewards.csv"))?;
    wtr.write_record(["episode", "reward", "steps", "success"])?;
    for (i, e) in run.episodes().iter().enumerate() {
        wtr.write_record([
            i.to_string(),
            e.reward.to_string(),
            e.steps.to_string(),
            e.success.to_string(),
        ])?;
    }
    wtr.flush()?;

    println!("episodes: {}", run.episodes().len());
    println!("success rate: {:.4}", run.success_rate());
    println!("trailing mean reward (100): {:.4}", run.trailing_mean(100));
    println!("final epsilon: {:.4}", agent.epsilon());

    Ok(())
}
