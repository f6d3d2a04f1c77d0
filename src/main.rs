use std::{collections::HashMap, path::PathBuf};

use clap::{ArgAction, Parser};
use polish::{
    batch::run,
    resolver::{Prompt, Seeded, VariableResolver},
};

/// polish converts infix arithmetic expressions to postfix notation and
/// evaluates them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with one infix expression per line.
    input: PathBuf,

    /// File receiving the postfix form of every accepted expression.
    output: PathBuf,

    /// Pre-set a variable, for example `--var x=2.5`. May be repeated.
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Never ask for values on the console; unset variables are reported as
    /// unbound instead.
    #[arg(long)]
    no_prompt: bool,

    /// Increase logging verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_binding(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s.split_once('=')
                         .ok_or_else(|| format!("expected NAME=VALUE, found '{s}'"))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(format!("'{name}' is not a lowercase variable name"));
    }
    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((name.to_string(), value))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let seeds: HashMap<String, f64> = args.vars.into_iter().collect();
    let mut resolver: Box<dyn VariableResolver> = if args.no_prompt {
        Box::new(seeds)
    } else {
        Box::new(Seeded::new(seeds, Prompt::stdio()))
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = run(&args.input, &args.output, resolver.as_mut(), &mut stdout) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
