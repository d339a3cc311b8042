//! Interactive collection of run parameters.
//!
//! Validation lives in pure `parse_*` functions; [`Prompter`] only loops,
//! asking again until the parse function accepts the answer. Reader and
//! writer are generic so the loop can be driven from tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::analytics::Section;
use crate::config::AgeLimits;
use crate::error::{EngineError, EngineResult};
use crate::generator::AgeRange;

/// Validated parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParameters {
    /// Requested age range.
    pub ages: AgeRange,
    /// Number of employees to generate.
    pub count: usize,
    /// Output section to print.
    pub section: Section,
}

/// Run parameters given up front, e.g. as command line flags.
///
/// Absent values are asked for interactively by [`RunParameters::resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// Minimum age, if given.
    pub min_age: Option<u32>,
    /// Maximum age, if given.
    pub max_age: Option<u32>,
    /// Employee count, if given.
    pub count: Option<usize>,
    /// Output section number, if given.
    pub section: Option<u8>,
}

impl RunParameters {
    /// Validates the values present in `flags` and prompts for the rest.
    ///
    /// Given values are checked with the same rules as prompted answers, but
    /// an invalid flag fails immediately instead of asking again. The
    /// maximum age must exceed the minimum age whichever way each was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// use employee_analytics::analytics::Section;
    /// use employee_analytics::cli::{Prompter, RunFlags, RunParameters};
    /// use employee_analytics::config::AgeLimits;
    ///
    /// let flags = RunFlags {
    ///     min_age: Some(20),
    ///     max_age: Some(30),
    ///     count: Some(10),
    ///     section: Some(2),
    /// };
    /// let mut prompter = Prompter::new(io::empty(), io::sink());
    ///
    /// let params = RunParameters::resolve(flags, &mut prompter, AgeLimits::default()).unwrap();
    /// assert_eq!(params.section, Section::Statistics);
    /// ```
    pub fn resolve<R: BufRead, W: Write>(
        flags: RunFlags,
        prompter: &mut Prompter<R, W>,
        limits: AgeLimits,
    ) -> EngineResult<Self> {
        // A maximum at the lower limit leaves no minimum to ask for.
        if let Some(max) = flags.max_age {
            check_max_age(max, limits.min, limits)?;
        }

        let min = match flags.min_age {
            Some(age) => check_age("min_age", age, limits)?,
            None => {
                let upper = flags.max_age.map_or(limits.max, |max| max - 1);
                prompter.prompt_until(
                    &format!("Minimum age ({}-{}):", limits.min, upper),
                    |input| parse_min_age_below(input, flags.max_age, limits),
                )?
            }
        };
        let max = match flags.max_age {
            Some(age) => check_max_age(age, min, limits)?,
            None => prompter.prompt_until(
                &format!("Maximum age ({}-{}, above {}):", limits.min, limits.max, min),
                |input| parse_max_age(input, min, limits),
            )?,
        };
        let count = match flags.count {
            Some(0) => return Err(count_error()),
            Some(count) => count,
            None => prompter.prompt_until("Number of employees:", parse_count)?,
        };
        let section = match flags.section {
            Some(number) => Section::try_from(number)?,
            None => prompter.prompt_until(&section_menu(), parse_section)?,
        };

        Ok(Self {
            ages: AgeRange::new(min, max)?,
            count,
            section,
        })
    }
}

/// Parses a minimum age, which must lie within `limits`.
pub fn parse_age(input: &str, limits: AgeLimits) -> EngineResult<u32> {
    let age = parse_number::<u32>("min_age", input)?;
    check_age("min_age", age, limits)
}

/// Parses a maximum age, which must lie within `limits` and be strictly
/// greater than `min_age`.
pub fn parse_max_age(input: &str, min_age: u32, limits: AgeLimits) -> EngineResult<u32> {
    let age = parse_number::<u32>("max_age", input)?;
    check_max_age(age, min_age, limits)
}

/// Parses a positive employee count.
pub fn parse_count(input: &str) -> EngineResult<usize> {
    match parse_number::<usize>("count", input)? {
        0 => Err(count_error()),
        count => Ok(count),
    }
}

/// Parses an output section number (1-4).
pub fn parse_section(input: &str) -> EngineResult<Section> {
    let number = parse_number::<u8>("section", input).map_err(|_| {
        EngineError::invalid_parameter("section", format!("'{}' is not one of 1-4", input.trim()))
    })?;
    Section::try_from(number)
}

fn parse_min_age_below(input: &str, max_age: Option<u32>, limits: AgeLimits) -> EngineResult<u32> {
    let age = parse_age(input, limits)?;
    match max_age {
        Some(max) if age >= max => Err(EngineError::invalid_parameter(
            "min_age",
            format!("must be less than {}", max),
        )),
        _ => Ok(age),
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, input: &str) -> EngineResult<T> {
    let trimmed = input.trim();
    trimmed.parse::<T>().map_err(|_| {
        EngineError::invalid_parameter(field, format!("'{}' is not a whole number", trimmed))
    })
}

fn check_age(field: &str, age: u32, limits: AgeLimits) -> EngineResult<u32> {
    if limits.contains(age) {
        Ok(age)
    } else {
        Err(EngineError::invalid_parameter(
            field,
            format!("must be between {} and {}", limits.min, limits.max),
        ))
    }
}

fn check_max_age(age: u32, min_age: u32, limits: AgeLimits) -> EngineResult<u32> {
    let age = check_age("max_age", age, limits)?;
    if age <= min_age {
        return Err(EngineError::invalid_parameter(
            "max_age",
            format!("must be greater than {}", min_age),
        ));
    }
    Ok(age)
}

fn count_error() -> EngineError {
    EngineError::invalid_parameter("count", "must be a positive whole number")
}

/// Asks questions on a writer and reads answers from a reader.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks `question` until `parse` accepts the answer.
    ///
    /// Rejected answers print the validation message and ask again.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Io`] if reading or writing fails, including
    /// when the input ends before a valid answer was given.
    pub fn prompt_until<T, F>(&mut self, question: &str, parse: F) -> EngineResult<T>
    where
        F: Fn(&str) -> EngineResult<T>,
    {
        loop {
            write!(self.output, "{} ", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before a valid answer was given",
                )
                .into());
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(question, answer = line.trim(), error = %err, "Rejected input");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

/// Prompts for every run parameter in turn.
///
/// The maximum age is asked again until it exceeds the minimum age.
pub fn collect_parameters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    limits: AgeLimits,
) -> EngineResult<RunParameters> {
    RunParameters::resolve(RunFlags::default(), prompter, limits)
}

/// Builds the section question listing every option.
pub fn section_menu() -> String {
    let options: Vec<String> = Section::ALL
        .iter()
        .map(|section| format!("{} = {}", section.number(), section.description()))
        .collect();
    format!("Output section ({}):", options.join(", "))
}
