//! Linear Equation Solver
//!
//! Reads a square system of linear equations, either from a JSON file or
//! interactively, and prints the unique solution if there is one.
//!
//! Usage:
//!   cargo run --release --bin solve-equations -- --system system.json
//!   cargo run --release --bin solve-equations -- --max-equations 8 --verify

use clap::Parser;
use math_audio_equations::{EquationLimits, EquationSystem, parse_coefficient};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "solve-equations",
    about = "Solve a system of linear equations by Gaussian elimination"
)]
struct Args {
    /// JSON file holding `coefficients` and `constants` (prompts on stdin when omitted)
    #[arg(long)]
    system: Option<PathBuf>,

    /// Smallest number of equations accepted interactively
    #[arg(long, default_value_t = 2)]
    min_equations: usize,

    /// Largest number of equations accepted interactively
    #[arg(long, default_value_t = 5)]
    max_equations: usize,

    /// Print the residual of every equation after solving
    #[arg(long)]
    verify: bool,

    /// Save the system (as entered or loaded) to this JSON file
    #[arg(long)]
    save: Option<PathBuf>,
}

/// Print a prompt and read one trimmed line
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, String> {
    write!(output, "{}: ", message).map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Unexpected end of input".to_string());
    }
    Ok(line.trim().to_string())
}

/// Ask for the equation count, then every coefficient and constant
fn read_system<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    limits: &EquationLimits,
) -> Result<EquationSystem, String> {
    let count = prompt(
        input,
        output,
        &format!("Number of equations ({}-{})", limits.min, limits.max),
    )?;
    let n = limits.parse_count(&count)?;

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n + 1);
        for j in 0..n {
            let value = prompt(
                input,
                output,
                &format!("Equation {}: enter coefficient for variable {}", i + 1, j + 1),
            )?;
            row.push(parse_coefficient(&value)?);
        }
        let value = prompt(input, output, &format!("Equation {}: enter constant", i + 1))?;
        row.push(parse_coefficient(&value)?);
        rows.push(row);
    }

    EquationSystem::from_rows(&rows).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let limits = EquationLimits {
        min: args.min_equations,
        max: args.max_equations,
    };
    if let Err(message) = limits.validate() {
        eprintln!("Error: {}", message);
        process::exit(2);
    }

    let system = if let Some(path) = &args.system {
        log::info!("Loading system from: {}", path.display());
        EquationSystem::from_file(path)?
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        match read_system(&mut input, &mut output, &limits) {
            Ok(system) => system,
            Err(message) => {
                eprintln!("Error: {}", message);
                process::exit(1);
            }
        }
    };

    if let Some(path) = &args.save {
        system.to_file(path)?;
        log::info!("Saved system to: {}", path.display());
    }

    match system.solve() {
        Ok(solution) => {
            println!("Solution: {}", solution);
            if args.verify {
                let residuals = system.residuals(solution.values())?;
                for (i, r) in residuals.iter().enumerate() {
                    println!("  equation {}: residual = {:.3e}", i + 1, r);
                }
            }
            Ok(())
        }
        Err(err) if err.is_singular() => {
            eprintln!("Error: the system has no unique solution ({})", err);
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
