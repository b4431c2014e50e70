use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use uc_engine::{EngineConfig, GameSession, SlotStore, TurnOutput};

pub fn run(
    path: Option<&Path>,
    seed: u64,
    save_dir: Option<PathBuf>,
    peaceful: bool,
) -> Result<(), String> {
    let world = super::load_world(path)?;
    let config = if peaceful {
        EngineConfig::peaceful()
    } else {
        EngineConfig::default()
    }
    .with_seed(seed);

    let mut session = GameSession::new(world, config);
    if let Some(dir) = save_dir {
        session = session.with_slots(SlotStore::new(dir));
    }

    for line in session.opening() {
        println!("{line}");
    }
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_finished() {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => print_output(&output),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    Ok(())
}

fn print_output(output: &TurnOutput) {
    for line in &output.lines {
        if line.contains("You have died") {
            println!("{}", line.red().bold());
        } else {
            println!("{line}");
        }
    }
    if output.score_delta > 0 {
        let gain = format!("[Your score has gone up by {} points.]", output.score_delta);
        println!("{}", gain.green());
    }
    println!();
}
