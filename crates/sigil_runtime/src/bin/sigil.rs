//! Sigil CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use sigil_foundation::Value;
use sigil_language::Env;
use sigil_runtime::Repl;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    expressions: Vec<String>,
    inputs: Vec<String>,
    seed: Option<u64>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-e" | "--eval" => {
                i += 1;
                if i >= args.len() {
                    return Err("-e requires a program".into());
                }
                config.expressions.push(args[i].clone());
            }
            "-i" | "--input" => {
                i += 1;
                if i >= args.len() {
                    return Err("-i requires a value".into());
                }
                config.inputs.push(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seed requires a value".into());
                }
                config.seed = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {}", args[i]))?,
                );
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("sigil {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Create REPL (this builds and validates the tables; a malformed table
    // refuses to start here).
    let mut repl = Repl::new()?;

    // Configure the environment before any program runs.
    let mut env = Env::new();
    if let Some(seed) = config.seed {
        env = env.with_seed(seed);
    }
    env.set_inputs(
        config
            .inputs
            .iter()
            .map(|raw| parse_input(raw))
            .collect(),
    );
    repl.session_mut().set_env(env);

    // Evaluate any -e programs, then any program files.
    for expr in &config.expressions {
        repl.eval_and_print(expr);
    }
    for file in &config.files {
        let source = std::fs::read_to_string(file)
            .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
        repl.eval_and_print(&source);
    }

    // If anything ran in batch mode (or at all), skip the interactive loop.
    if config.batch_mode || !config.expressions.is_empty() || !config.files.is_empty() {
        return Ok(());
    }

    repl.run()?;
    Ok(())
}

// Inputs parse as literals: integers, floats, anything else as text.
fn parse_input(raw: &str) -> Value {
    raw.parse::<i64>().map_or_else(
        |_| {
            raw.parse::<f64>()
                .map_or_else(|_| Value::from(raw), Value::Float)
        },
        Value::Int,
    )
}

fn print_help() {
    println!(
        "\x1b[1mSigil\x1b[0m - stack-based golfing language

\x1b[1mUSAGE:\x1b[0m
    sigil [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]       Program files to run

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -e, --eval PROG  Run a program given on the command line
    -i, --input VAL  Queue a program input (repeatable)
    --seed N         Seed the RNG for a reproducible run
    -b, --batch      Never enter the interactive REPL

\x1b[1mEXAMPLES:\x1b[0m
    sigil                    Start the interactive REPL
    sigil -e '3 4+'          Evaluate a one-liner
    sigil -i 5 -e '?›'       Run with the input 5
    sigil golf.sgl           Run a program file"
    );
}
