//! Replay entry point.

use dragkit_replay::{ReplayResult, Scenario, replay};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: dragkit-replay <scenario.json>");
        return ExitCode::FAILURE;
    };

    match run(Path::new(&path)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Replay of {} failed: {}", path, e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> ReplayResult<()> {
    let scenario = Scenario::load(path)?;
    log::info!(
        "Replaying {} ({} frames, {} steps)",
        path.display(),
        scenario.frames.len(),
        scenario.script.len()
    );

    let records = replay(&scenario)?;
    let mut out = std::io::stdout().lock();
    for record in &records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    Ok(())
}
