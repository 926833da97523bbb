// Pattern 2: Structural Patterns - Facade, Proxy
// Usage: p2_structural [settings.toml]

use colored::Colorize;
use design_patterns::{facade, proxy, telemetry, Console, Settings};
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

    println!("Pattern 2: Structural Patterns");
    println!("===============================\n");

    section("Facade Pattern");
    facade::facade_example(&console);
    println!();

    section("Proxy Pattern");
    proxy::proxy_example(&console);
}
