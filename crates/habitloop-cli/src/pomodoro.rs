//! Interactive pomodoro session: prompts, countdown display, cancellation.
//!
//! The engine is tick-driven; this module supplies the real time, one
//! second of sleep per tick. A watcher thread reads one line from stdin
//! and arms the cancel token, so pressing Enter stops the countdown
//! within a tick.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use habitloop_core::timer::{
    format_clock, CancelToken, Phase, PomodoroEngine, PomodoroPlan, Step, Tick,
};

use crate::menu::prompt;

/// Run one interactive session. Returns whether the menu still needs its
/// own acknowledgment pause afterwards.
pub fn run_interactive() -> io::Result<bool> {
    let work = prompt("Work minutes (default 25): ")?;
    let brk = prompt("Break minutes (default 5): ")?;
    let cycles = prompt("Cycles (default 1): ")?;

    let plan = match PomodoroPlan::parse(&work, &brk, &cycles) {
        Ok(plan) => plan,
        Err(e) => {
            println!("{e}");
            return Ok(true);
        }
    };

    println!(
        "\nPomodoro: {} cycle(s), {}m work / {}m break",
        plan.cycles, plan.work_min, plan.break_min
    );
    println!("Press Enter to cancel.");

    let token = CancelToken::new();
    let watcher = spawn_cancel_watcher(token.clone());
    let mut engine = PomodoroEngine::new(&plan, token);

    if let Some(step) = engine.current_step() {
        banner(step);
    }
    loop {
        print!("\rTime left: {}", format_clock(engine.remaining_secs()));
        io::stdout().flush()?;
        thread::sleep(Duration::from_secs(1));

        match engine.tick() {
            Tick::Counting { .. } => {}
            Tick::StepFinished { next, .. } => {
                println!("\rTime left: 00:00");
                banner(next);
            }
            Tick::SessionFinished => {
                println!("\rTime left: 00:00");
                println!("\nPomodoro session complete! Press Enter to continue.");
                // The acknowledgment doubles as the watcher's pending read.
                let _ = watcher.join();
                return Ok(false);
            }
            Tick::Cancelled => {
                println!("\nPomodoro interrupted.");
                let _ = watcher.join();
                return Ok(true);
            }
        }
    }
}

fn banner(step: Step) {
    match step.phase {
        Phase::Work => println!(
            "\nCycle {}: work for {} minute(s). Focus!",
            step.cycle,
            step.duration_secs / 60
        ),
        Phase::Break => println!(
            "\nCycle {}: break for {} minute(s). Relax!",
            step.cycle,
            step.duration_secs / 60
        ),
    }
}

/// One line of input cancels the session.
fn spawn_cancel_watcher(token: CancelToken) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut line = String::new();
        let _ = io::stdin().read_line(&mut line);
        token.cancel();
    })
}
