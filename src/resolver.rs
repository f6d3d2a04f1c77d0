use std::{
    collections::{HashMap, VecDeque},
    io::{BufRead, Write},
};

use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Supplies values for the unknowns of an expression.
///
/// The engine never reads the console itself: whatever source the values come
/// from (a pre-seeded map, interactive input, a file) is hidden behind this
/// trait and handed in by the caller.
pub trait VariableResolver {
    /// Returns the value of `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnboundVariable`] when no value can be supplied.
    fn resolve(&mut self, name: &str) -> EvalResult<f64>;
}

impl VariableResolver for HashMap<String, f64> {
    fn resolve(&mut self, name: &str) -> EvalResult<f64> {
        self.get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_string() })
    }
}

/// Resolves each distinct unknown once, in order of first appearance.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use polish::resolver::resolve_unknowns;
///
/// let mut seeds = HashMap::from([("x".to_string(), 1.0), ("y".to_string(), 2.0)]);
/// let unknowns = ["x".to_string(), "y".to_string(), "x".to_string()];
/// let bindings = resolve_unknowns(&unknowns, &mut seeds).unwrap();
/// assert_eq!(bindings.len(), 2);
/// ```
pub fn resolve_unknowns<R>(unknowns: &[String], resolver: &mut R) -> EvalResult<HashMap<String, f64>>
    where R: VariableResolver + ?Sized
{
    let mut bindings = HashMap::with_capacity(unknowns.len());
    for name in unknowns {
        if !bindings.contains_key(name) {
            let value = resolver.resolve(name)?;
            log::debug!("resolved {name} = {value}");
            bindings.insert(name.clone(), value);
        }
    }
    Ok(bindings)
}

/// Asks for values interactively.
///
/// Writes `name = ` to `output` and reads the next whitespace-separated word
/// from `input`. Words that are not numbers are answered with a hint and the
/// question is repeated. Running out of input leaves the variable unbound.
pub struct Prompt<R, W> {
    input:   R,
    output:  W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input,
               output,
               pending: VecDeque::new() }
    }

    fn next_word(&mut self) -> std::io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn ask(&mut self, name: &str) -> std::io::Result<Option<f64>> {
        loop {
            write!(self.output, "{name} = ")?;
            self.output.flush()?;

            let Some(word) = self.next_word()? else {
                return Ok(None);
            };
            match word.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please insert the value correctly")?,
            }
        }
    }
}

impl Prompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// A prompt on the process' standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> VariableResolver for Prompt<R, W> {
    fn resolve(&mut self, name: &str) -> EvalResult<f64> {
        match self.ask(name) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => {
                log::warn!("input ended before a value for '{name}' was given");
                Err(RuntimeError::UnboundVariable { name: name.to_string() })
            },
            Err(e) => {
                log::error!("failed to prompt for '{name}': {e}");
                Err(RuntimeError::UnboundVariable { name: name.to_string() })
            },
        }
    }
}

/// Consults a fixed set of values first and falls back to another resolver.
pub struct Seeded<R> {
    seeds:    HashMap<String, f64>,
    fallback: R,
}

impl<R: VariableResolver> Seeded<R> {
    pub const fn new(seeds: HashMap<String, f64>, fallback: R) -> Self {
        Self { seeds, fallback }
    }
}

impl<R: VariableResolver> VariableResolver for Seeded<R> {
    fn resolve(&mut self, name: &str) -> EvalResult<f64> {
        match self.seeds.get(name) {
            Some(value) => Ok(*value),
            None => self.fallback.resolve(name),
        }
    }
}
