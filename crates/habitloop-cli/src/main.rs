use clap::Parser;

mod logging;
mod menu;
mod pomodoro;
mod render;

#[derive(Parser)]
#[command(
    name = "habitloop",
    version,
    about = "Habit tracker with a built-in Pomodoro focus timer"
)]
struct Cli;

fn main() {
    let _cli = Cli::parse();
    // Kept alive for the whole run; dropping the handle stops log flushing.
    let _logger = logging::init();

    let store = habitloop_core::Store::new();
    if let Err(e) = menu::run(store) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
