// Pattern 1: Creational Patterns - Builder, Factory Method, Singleton
// Usage: p1_creational [settings.toml]

use colored::Colorize;
use design_patterns::{builder, factory, singleton, telemetry, Console, Settings};
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

    println!("Pattern 1: Creational Patterns");
    println!("===============================\n");

    section("Builder Pattern");
    builder::builder_example(&console);
    println!();

    section("Factory Method Pattern");
    factory::factory_example(&console);
    println!();

    section("Singleton Pattern");
    singleton::singleton_example(&console);
}
