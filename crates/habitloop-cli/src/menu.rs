//! Interactive numbered menu over the habit registry.
//!
//! Validation failures and no-op outcomes are printed and the menu
//! continues; store failures propagate out and end the process.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use habitloop_core::report::{self, DEFAULT_HISTORY_WINDOW};
use habitloop_core::{
    CoreError, Habit, HabitRegistry, MarkOutcome, Store, UnmarkOutcome, ValidationError,
};

use crate::{pomodoro, render};

const MENU: &str = "\n===================================\n  Habitloop: habits + pomodoro\n===================================\n1. Add habit\n2. Remove habit\n3. Mark habit done (today)\n4. Mark habit done (date)\n5. Unmark done (date)\n6. View summary\n7. View history (last 30 days)\n8. Weekly progress\n9. Export habit history (CSV)\n10. Start Pomodoro\n0. Exit\n";

pub fn run(store: Store) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = HabitRegistry::open(store)?;

    loop {
        print!("{MENU}");
        print!("\nChoose an option: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // end of input
        }

        let mut pause_needed = true;
        match line.trim() {
            "1" => {
                let name = prompt("Enter habit name: ")?;
                finish(registry.add(&name).map(|()| {
                    format!("Added habit: {name}")
                }))?;
            }
            "2" => {
                let name = prompt("Enter habit name to remove: ")?;
                finish(registry.remove(&name).map(|()| {
                    format!("Removed habit: {name}")
                }))?;
            }
            "3" => {
                let name = prompt("Enter habit name to mark done: ")?;
                finish(mark(&mut registry, &name, today()))?;
            }
            "4" => {
                let name = prompt("Enter habit name: ")?;
                let raw = prompt("Enter date (YYYY-MM-DD): ")?;
                finish(parse_date(&raw).and_then(|date| mark(&mut registry, &name, date)))?;
            }
            "5" => {
                let name = prompt("Enter habit name: ")?;
                let raw = prompt("Enter date to unmark (YYYY-MM-DD): ")?;
                finish(parse_date(&raw).and_then(|date| unmark(&mut registry, &name, date)))?;
            }
            "6" => {
                render::summary(&report::summarize(registry.document(), today()));
            }
            "7" => {
                let name = prompt("Enter habit name: ")?;
                with_habit(&registry, &name, |habit| {
                    render::history(&name, habit, today(), DEFAULT_HISTORY_WINDOW);
                })?;
            }
            "8" => {
                let name = prompt("Enter habit name: ")?;
                with_habit(&registry, &name, |habit| {
                    render::weekly(&name, habit, today());
                })?;
            }
            "9" => {
                export(&registry)?;
            }
            "10" => {
                pause_needed = pomodoro::run_interactive()?;
            }
            "0" => {
                println!("Bye! Keep building good habits.");
                break;
            }
            _ => {
                println!("Invalid choice. Try again.");
            }
        }

        if pause_needed {
            pause()?;
        }
        clear_screen();
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Print a prompt and read one trimmed line. End of input reads as empty,
/// which the validation layer rejects like any other bad value.
pub(crate) fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Print the operation's message, or its validation error. Store errors
/// are fatal and bubble out of the menu.
fn finish(result: Result<String, CoreError>) -> Result<(), CoreError> {
    match result {
        Ok(msg) => {
            println!("{msg}");
            Ok(())
        }
        Err(CoreError::Validation(e)) => {
            println!("{e}");
            Ok(())
        }
        Err(fatal) => Err(fatal),
    }
}

/// Run a read-only view for one habit, reporting an unknown name without
/// leaving the menu.
fn with_habit(
    registry: &HabitRegistry,
    name: &str,
    view: impl FnOnce(&Habit),
) -> Result<(), CoreError> {
    match registry.habit(name) {
        Ok(habit) => {
            view(habit);
            Ok(())
        }
        Err(CoreError::Validation(e)) => {
            println!("{e}");
            Ok(())
        }
        Err(fatal) => Err(fatal),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()).into())
}

fn mark(registry: &mut HabitRegistry, name: &str, date: NaiveDate) -> Result<String, CoreError> {
    Ok(match registry.mark(name, date)? {
        MarkOutcome::Marked => format!("Marked {name} done for {date}"),
        MarkOutcome::AlreadyMarked => format!("Already marked done for {date}"),
    })
}

fn unmark(registry: &mut HabitRegistry, name: &str, date: NaiveDate) -> Result<String, CoreError> {
    Ok(match registry.unmark(name, date)? {
        UnmarkOutcome::Unmarked => format!("Unmarked {name} for {date}"),
        UnmarkOutcome::NotMarked => format!("No entry for {date}"),
    })
}

fn export(registry: &HabitRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let name = prompt("Enter habit name: ")?;
    match registry.habit(&name) {
        Ok(habit) => {
            let default = report::default_export_path(&name);
            let raw = prompt(&format!("Output file (default {}): ", default.display()))?;
            let path = if raw.is_empty() {
                default
            } else {
                PathBuf::from(raw)
            };
            report::export_csv(habit, &path)?;
            println!("Exported history to {}", path.display());
            Ok(())
        }
        Err(CoreError::Validation(e)) => {
            println!("{e}");
            Ok(())
        }
        Err(fatal) => Err(fatal.into()),
    }
}

fn pause() -> io::Result<()> {
    print!("\nPress Enter to continue...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}

fn clear_screen() {
    // ANSI full clear plus cursor home.
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}
