//! # Interactive prompts
//!
//! [Prompter] asks the user for a value until a valid one is given. It is
//! generic over the input and the output, so it works with the terminal
//! (`stdin().lock()`, `stdout()`) as well as with in-memory buffers.
//!
//! The validation itself is done by the pure functions of [crate::validation].

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    configuration::{ALLOWED_INTERVAL_COUNTS, MAX_SAMPLE_SIZE},
    distributions::distribution_spec::{DistributionKind, DistributionSpec},
    errors::VariateError,
    validation,
};

/// Reads answers from `input` and writes the questions to `output`.
pub struct Prompter<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Prompter<I, O> {
    pub fn new(input: I, output: O) -> Prompter<I, O> {
        return Prompter { input, output };
    }

    /// Returns the input and the output, dropping self.
    pub fn into_inner(self) -> (I, O) {
        return (self.input, self.output);
    }

    /// Reads a line, without the line terminator.
    ///
    /// Returns an [io::ErrorKind::UnexpectedEof] error if the input has ended.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line: String = String::new();
        let read: usize = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "the input ended before a valid value was given",
            ));
        }

        let len: usize = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        return Ok(line);
    }

    /// Writes `message`, reads a line and validates it with `validate`.
    ///
    /// While the validation fails, the reason is written followed by `retry`
    /// and a new line is read. Only I/O errors (including the end of the
    /// input) are returned.
    pub fn ask<T, F>(&mut self, message: &str, retry: &str, mut validate: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Result<T, VariateError>,
    {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        loop {
            let line: String = self.read_line()?;
            match validate(&line) {
                Ok(v) => return Ok(v),
                Err(e) => {
                    debug!(input = %line, error = %e, "rejected input");
                    writeln!(self.output, "{e}")?;
                    write!(self.output, "{retry}")?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Asks for one of the distribution names.
    pub fn ask_distribution(&mut self) -> io::Result<DistributionKind> {
        let names: String = DistributionKind::ALL
            .iter()
            .map(DistributionKind::name)
            .collect::<Vec<&str>>()
            .join(", ");

        return self.ask(
            &format!("Select the distribution ({names}): "),
            &format!("Invalid distribution. Select the distribution ({names}): "),
            validation::parse_distribution,
        );
    }

    /// Asks for the sample size.
    pub fn ask_sample_size(&mut self) -> io::Result<usize> {
        return self.ask(
            &format!("Enter the sample size (max. {MAX_SAMPLE_SIZE}): "),
            &format!("Invalid sample size. Enter a number between 1 and {MAX_SAMPLE_SIZE}: "),
            validation::parse_sample_size,
        );
    }

    /// Asks for every parameter of `kind` (see [DistributionKind::parameter_names]).
    ///
    /// If the numbers are valid on their own but not together (`a >= b` for
    /// a uniform, a negative `lambda`...), the reason is written and all the
    /// parameters are asked again.
    pub fn ask_parameters(&mut self, kind: DistributionKind) -> io::Result<DistributionSpec> {
        let mut retrying: bool = false;
        loop {
            let mut parameters: Vec<f64> = Vec::with_capacity(kind.parameter_names().len());
            for (i, name) in kind.parameter_names().iter().enumerate() {
                let message: String = if retrying && i == 0 {
                    format!("Invalid parameters. Enter the {name}: ")
                } else {
                    format!("Enter the {name}: ")
                };
                let retry: String = format!("Enter the {name}: ");
                parameters.push(self.ask(&message, &retry, validation::parse_number)?);
            }

            let checked: Result<DistributionSpec, VariateError> = match kind {
                DistributionKind::Uniform => {
                    validation::validate_uniform_bounds(parameters[0], parameters[1])
                        .and_then(|(a, b)| DistributionSpec::uniform(a, b))
                }
                _ => DistributionSpec::from_parameters(kind, &parameters),
            };

            match checked {
                Ok(spec) => return Ok(spec),
                Err(e) => {
                    debug!(%kind, error = %e, "rejected parameters");
                    writeln!(self.output, "{e}")?;
                    retrying = true;
                }
            }
        }
    }

    /// Asks for the number of intervals of the histogram.
    pub fn ask_interval_count(&mut self) -> io::Result<usize> {
        let options: String = ALLOWED_INTERVAL_COUNTS
            .iter()
            .map(usize::to_string)
            .collect::<Vec<String>>()
            .join(", ");

        return self.ask(
            &format!("Select the number of intervals ({options}): "),
            &format!("Invalid number of intervals. Select one of {options}: "),
            validation::parse_interval_count,
        );
    }
}
