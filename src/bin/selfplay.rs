use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tacbot::selfplay::{generate_games, GameRecord, Policy, SelfPlayParams};

#[derive(Parser, Debug)]
#[command(name = "tacbot-selfplay", about = "Run scripted games and summarize the outcomes")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Policy for X: 'optimal' or 'random'
    #[arg(long, default_value = "optimal")]
    x: String,
    /// Policy for O: 'optimal' or 'random'
    #[arg(long, default_value = "random")]
    o: String,
    /// Write records as JSON lines to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_policy(policy_str: &str) -> anyhow::Result<Policy> {
    match policy_str.to_lowercase().as_str() {
        "optimal" => Ok(Policy::Optimal),
        "random" => Ok(Policy::Random),
        _ => anyhow::bail!("Invalid policy: use 'optimal' or 'random'"),
    }
}

fn write_jsonl(path: &PathBuf, games: &[GameRecord]) -> io::Result<()> {
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    for g in games {
        let line = serde_json::to_string(g)?;
        writeln!(w, "{}", line)?;
    }
    w.flush()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        seed: a.seed,
        x_policy: parse_policy(&a.x)?,
        o_policy: parse_policy(&a.o)?,
    };
    eprintln!("Running {} games (X={}, O={}, seed={})", a.games, a.x, a.o, a.seed);
    let games = generate_games(&params);

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for g in &games {
        match g.result {
            1 => x_wins += 1,
            -1 => o_wins += 1,
            _ => draws += 1,
        }
    }
    println!("X wins: {x_wins}, O wins: {o_wins}, draws: {draws}");

    if let Some(out) = a.out {
        write_jsonl(&out, &games)?;
        eprintln!("Wrote {} records to {}", games.len(), out.display());
    }
    Ok(())
}
