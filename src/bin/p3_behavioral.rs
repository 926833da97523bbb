// Pattern 3: Behavioral Patterns - Command, Strategy
// Usage: p3_behavioral [settings.toml]
// The settings file can rebind the remote control's command names.

use colored::Colorize;
use design_patterns::{command, strategy, telemetry, Console, Settings};
use std::env;
use std::path::PathBuf;
use std::process;

fn section(title: &str) {
    println!("{}", format!("=== {} ===", title).bold());
}

fn main() {
    let path = env::args_os().nth(1).map(PathBuf::from);
    let settings = match Settings::load(path.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            process::exit(1);
        }
    };
    telemetry::init(&settings.log_filter);
    colored::control::set_override(settings.color);

    let console = Console::stdout();

    println!("Pattern 3: Behavioral Patterns");
    println!("===============================\n");

    section("Command Pattern");
    command::remote_control_example(&console, &settings.remote.bindings);
    println!();

    section("Strategy Pattern");
    strategy::strategy_example(&console);
}
