use std::process;

// this cannot be crate::Scenario because of how Cargo works,
// since cargo/rust treats lib.rs and main.rs as separate crates
use crate::load_scenarios;
use crate::molecule_temperature;
use crate::run_reference_checks;
use crate::velocity_at;
use crate::Scenario;

pub struct Config {}

impl Config {
    pub fn run(args: &[String]) -> Result<Config, Box<dyn std::error::Error>> {
        if args.len() > 2 {
            return Err(
                "too many arguments, expecting at most 2, such as `volatilehop filepath`".into(),
            );
        }

        // no arguments: run the fixed reference checklist and nothing else
        if args.len() < 2 {
            for result in run_reference_checks() {
                println!("{}", result);
            }
            return Ok(Config {});
        }

        // Check for special flags
        match args[1].as_str() {
            "--version" | "-v" => {
                print_version();
                process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }

        let cwd = std::env::current_dir()?;
        // cargo run arg[1], such as cargo run tests/scenarios.toml
        // volatilehop arg[1], such as volatilehop tests/scenarios.toml
        let file_path = args[1].clone();
        let full_path_to_config = cwd.join(file_path);

        match load_scenarios(&full_path_to_config.display().to_string()) {
            Ok(scenarios) => {
                print_scenarios(&scenarios);
            }
            Err(e) => {
                eprintln!("Error loading scenario file: {}", e);
                return Err(e);
            }
        }

        Ok(Config {})
    }
}

pub fn print_version() {
    println!("volatilehop {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_error(error: &str) {
    const RED: &str = "\x1b[31m";
    const RESET: &str = "\x1b[0m";
    println!("{}Problem parsing arguments: {error}{}", RED, RESET);
}

pub fn print_help() {
    // ANSI color codes
    const BOLD: &str = "\x1b[1m";
    const CYAN: &str = "\x1b[36m";
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const RESET: &str = "\x1b[0m";

    println!(
        "🪐 Volatilehop launch velocity calculator - https://github.com/iancleary/volatilehop{}",
        RESET
    );
    println!();
    println!("{}{}VERSION:{}", BOLD, YELLOW, RESET);
    println!("    {}{}{}", GREEN, env!("CARGO_PKG_VERSION"), RESET);
    println!();
    println!("{}{}USAGE:{}", BOLD, YELLOW, RESET);
    println!("    {} volatilehop{}", GREEN, RESET);
    println!();
    println!("     With no arguments, runs the five reference checks of the");
    println!("     Mercury volatile model and prints one pass/fail line each.");
    println!();
    println!("    {} volatilehop <FILE_PATH>{}", GREEN, RESET);
    println!();
    println!("     FILE_PATH: path to a toml scenario file");
    println!();
    println!("     Each [[scenarios]] entry (latitude in radians, molecule");
    println!("     selector) is evaluated and printed as a summary table.");
    println!();
    println!("{}{}OPTIONS:{}", BOLD, YELLOW, RESET);
    println!(
        "    {}  -v, --version{}{}    Print version information",
        GREEN, RESET, RESET
    );
    println!(
        "    {}  -h, --help{}{}       Print help information",
        GREEN, RESET, RESET
    );
    println!();
    println!("{}{}EXAMPLES:{}", BOLD, YELLOW, RESET);
    println!("    {} # Reference checklist{}", CYAN, RESET);
    println!("    {} volatilehop{}", GREEN, RESET);
    println!();
    println!("    {} # Scenario file (relative path){}", CYAN, RESET);
    println!("    {} volatilehop files/scenarios.toml{}", GREEN, RESET);
    println!();
}

pub fn print_scenarios(scenarios: &[Scenario]) {
    println!();
    for (i, scenario) in scenarios.iter().enumerate() {
        let temperature = molecule_temperature(scenario.latitude);
        let velocity = velocity_at(scenario.latitude, scenario.molecule);
        let molecule_name = if scenario.molecule == 0 {
            "water"
        } else {
            "carbon dioxide"
        };

        println!("\nScenario {}: {}", i + 1, scenario.name);
        // the formatting `{:>10.4}` aligns positive and negative numbers
        // on the decimal
        println!("Latitude:\t\t{:>10.4} rad", scenario.latitude);
        println!("Molecule:\t\t{:>10}", molecule_name);
        println!("Temperature:\t\t{:>10.2} K", temperature);
        println!("Launch Velocity:\t{:>10.2} m/s", velocity);
    }
    println!();
    println!("Evaluated {} scenario(s)", scenarios.len());
}
