use tacbot::board::{Board, Mark};
use tacbot::perft::perft;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Game-tree leaf counter for tacbot")]
struct Args {
    /// Ply depth to count to
    #[arg(value_name = "DEPTH", default_value_t = 9)]
    depth: u32,
    /// Board notation (9 cells of X/O/.) or "empty"
    #[arg(value_name = "BOARD", default_value = "empty")]
    board: String,
    /// Side to move: 'x' or 'o'
    #[arg(long, default_value = "x")]
    side: String,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use std::time::Instant;

    let args = Args::parse();
    let base = if args.board == "empty" {
        Board::new()
    } else {
        args.board.parse::<Board>().map_err(|e| anyhow::anyhow!("Invalid board: {e}"))?
    };
    let side = match args.side.to_lowercase().as_str() {
        "x" => Mark::X,
        "o" => Mark::O,
        other => anyhow::bail!("Invalid side '{other}': use 'x' or 'o'"),
    };

    let t0 = Instant::now();
    let nodes = perft(&base, side, args.depth);
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON));
    } else {
        println!("nodes: {nodes}");
    }
    Ok(())
}
