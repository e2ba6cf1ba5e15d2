use anyhow::{bail, Context, Result};
use intel8080_cpm::{CpmMachine, CpmOptions};

const USAGE: &str = "usage: intel8080_cpm <program.com> [--debug] [--max-steps N]";

/// Logger configured from `RUST_LOG`. `--debug` turns on the core's
/// per-instruction trace even when `RUST_LOG` is unset.
fn logger_builder(debug: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_module("intel8080", log::LevelFilter::Debug);
    }
    builder
}

fn main() -> Result<()> {
    let mut program_path: Option<String> = None;
    let mut debug = false;
    let mut max_steps = u64::MAX;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--debug" => debug = true,
            "--max-steps" => {
                let value = args.next().context("--max-steps needs a value")?;
                max_steps = value
                    .parse()
                    .with_context(|| format!("invalid --max-steps value '{}'", value))?;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            flag if flag.starts_with("--") => bail!("unknown option '{}'\n{}", flag, USAGE),
            path => {
                if program_path.replace(path.to_string()).is_some() {
                    bail!("only one program can be run at a time\n{}", USAGE);
                }
            }
        }
    }

    logger_builder(debug).init();

    let Some(path) = program_path else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    log::info!("Running CP/M program '{}'", path);
    let program =
        std::fs::read(&path).with_context(|| format!("failed to read program '{}'", path))?;

    let options = CpmOptions::builder().echo(true).debug(debug).build();
    let mut machine = CpmMachine::new(&program, options)?;
    let report = machine.run(max_steps)?;

    println!();
    log::info!(
        "Program returned to CP/M after {} instructions ({} cycles)",
        report.steps,
        report.cycles
    );
    Ok(())
}
