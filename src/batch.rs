use std::{fs, io::Write, path::Path};

use crate::{
    error::BatchError,
    parse_to_postfix,
    resolver::{VariableResolver, resolve_unknowns},
};

/// Outcome of a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rendered postfix form of every expression that was converted.
    pub postfixes: Vec<String>,
    /// Expressions rejected as illegal input.
    pub rejected:  usize,
    /// Converted expressions that could not be evaluated because a variable
    /// stayed unbound.
    pub unbound:   usize,
}

impl BatchSummary {
    /// Number of expressions that were converted to postfix.
    #[must_use]
    pub fn converted(&self) -> usize {
        self.postfixes.len()
    }
}

/// Converts and evaluates a sequence of expressions, one per line.
///
/// Blank lines are skipped. For every expression the infix text, the rendered
/// postfix form and the result are written to `report`. Illegal expressions
/// and unbound variables are reported with their line and the run continues
/// with the next expression.
///
/// # Errors
/// - `BatchError::Output` if `report` cannot be written.
/// - `BatchError::Internal` if evaluation violates an internal invariant. The
///   run stops at that expression.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use polish::batch::process;
///
/// let mut values = HashMap::from([("x".to_string(), 2.0)]);
/// let mut report = Vec::new();
/// let summary = process(["x*3", "", "1 2"], &mut values, &mut report).unwrap();
/// assert_eq!(summary.postfixes, ["x 3 * "]);
/// assert_eq!(summary.rejected, 1);
/// ```
pub fn process<I, S, R, W>(lines: I,
                           resolver: &mut R,
                           report: &mut W)
                           -> Result<BatchSummary, BatchError>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>,
          R: VariableResolver + ?Sized,
          W: Write
{
    let mut summary = BatchSummary::default();
    let report_error = |source: std::io::Error| BatchError::Output { target:
                                                                         "report".to_string(),
                                                                     source };

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let postfix = match parse_to_postfix(line) {
            Ok(postfix) => postfix,
            Err(e) => {
                log::info!("rejected {line:?}: {e}");
                writeln!(report, "{e} at line: {line}").map_err(report_error)?;
                summary.rejected += 1;
                continue;
            },
        };

        let rendered = postfix.render();
        writeln!(report, "Infix:\t\t{line}").map_err(report_error)?;
        writeln!(report, "Postfix:\t{rendered}").map_err(report_error)?;
        summary.postfixes.push(rendered);

        let result = resolve_unknowns(&postfix.unknowns(), resolver)
                         .and_then(|bindings| postfix.evaluate(&bindings));

        match result {
            Ok(value) => {
                writeln!(report, "Result:\t\t{value}\n").map_err(report_error)?;
            },
            Err(source) if source.is_internal() => {
                return Err(BatchError::Internal { line: line.to_string(),
                                                  source });
            },
            Err(e) => {
                writeln!(report, "{e} at line: {line}\n").map_err(report_error)?;
                summary.unbound += 1;
            },
        }
    }

    log::info!("converted {} expression(s), rejected {}",
               summary.converted(),
               summary.rejected);
    Ok(summary)
}

/// Reads the expressions of an input file, dropping empty lines.
///
/// # Errors
/// Returns `BatchError::Input` if the file cannot be read.
pub fn read_expressions(path: &Path) -> Result<Vec<String>, BatchError> {
    let contents = fs::read_to_string(path).map_err(|source| {
                                                 BatchError::Input { path: path.display()
                                                                               .to_string(),
                                                                     source }
                                             })?;
    Ok(contents.lines()
               .filter(|line| !line.is_empty())
               .map(str::to_string)
               .collect())
}

/// Writes one rendered postfix expression per line, replacing the file.
///
/// # Errors
/// Returns `BatchError::Output` if the file cannot be written.
pub fn write_postfixes(path: &Path, postfixes: &[String]) -> Result<(), BatchError> {
    let mut contents = String::new();
    for postfix in postfixes {
        contents.push_str(postfix);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|source| BatchError::Output { target: path.display()
                                                                                .to_string(),
                                                                    source })
}

/// Runs a whole batch: reads `input`, processes every expression and writes
/// the postfix forms to `output`.
///
/// # Errors
/// Propagates the errors of [`read_expressions`], [`process`] and
/// [`write_postfixes`].
pub fn run<R, W>(input: &Path,
                 output: &Path,
                 resolver: &mut R,
                 report: &mut W)
                 -> Result<BatchSummary, BatchError>
    where R: VariableResolver + ?Sized,
          W: Write
{
    let lines = read_expressions(input)?;
    log::debug!("read {} expression(s) from {}", lines.len(), input.display());

    let summary = process(&lines, resolver, report)?;
    write_postfixes(output, &summary.postfixes)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

    struct Broken;

    impl VariableResolver for Broken {
        fn resolve(&mut self, _name: &str) -> EvalResult<f64> {
            Err(RuntimeError::UnknownOperator { symbol: "%".to_string() })
        }
    }

    fn values(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    fn run_lines(lines: &[&str], bindings: &[(&str, f64)]) -> (BatchSummary, String) {
        let mut resolver = values(bindings);
        let mut report = Vec::new();
        let summary = process(lines, &mut resolver, &mut report).unwrap();
        (summary, String::from_utf8(report).unwrap())
    }

    #[test]
    fn reports_infix_postfix_and_result() {
        let (summary, report) = run_lines(&["x+y"], &[("x", 2.0), ("y", 3.0)]);
        assert_eq!(summary.postfixes, ["x y + "]);
        assert_eq!(report, "Infix:\t\tx+y\nPostfix:\tx y + \nResult:\t\t5\n\n");
    }

    #[test]
    fn illegal_lines_are_skipped() {
        let (summary, report) = run_lines(&["1++", "(1+2", "2*3"], &[]);
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.postfixes, ["2 3 * "]);
        assert!(report.contains("at line: 1++"));
        assert!(report.contains("at line: (1+2"));
        assert!(report.contains("Result:\t\t6"));
    }

    #[test]
    fn unbound_variables_do_not_stop_the_batch() {
        let (summary, report) = run_lines(&["x+y", "x*2"], &[("x", 4.0)]);
        assert_eq!(summary.unbound, 1);
        assert_eq!(summary.converted(), 2);
        assert!(report.contains("No value bound to variable 'y'. at line: x+y"));
        assert!(report.contains("Result:\t\t8"));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (summary, report) = run_lines(&["", "   ", "1"], &[]);
        assert_eq!(summary.converted(), 1);
        assert_eq!(summary.rejected, 0);
        assert!(report.starts_with("Infix:\t\t1\n"));
    }

    #[test]
    fn dangling_operator_in_brackets_is_rejected_and_the_batch_continues() {
        let (summary, report) = run_lines(&["1+1", "(*)", "2*3"], &[]);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.postfixes, ["1 1 + ", "2 3 * "]);
        assert!(report.contains("at line: (*)"));
        assert!(report.contains("Result:\t\t6"));
    }

    #[test]
    fn internal_errors_stop_the_batch_with_exit_code_three() {
        let mut report = Vec::new();
        let err = process(["1", "x+1", "2"], &mut Broken, &mut report).unwrap_err();
        assert!(matches!(&err,
                         BatchError::Internal { line,
                                                source: RuntimeError::UnknownOperator { .. } }
                         if line == "x+1"));
        assert_eq!(err.exit_code(), 3);
        let report = String::from_utf8(report).unwrap();
        assert!(report.contains("Postfix:\tx 1 + "));
        assert!(!report.contains("Infix:\t\t2"));
    }
}
