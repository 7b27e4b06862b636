//! Command-line surface of `merge-sort`.

use clap::Parser;
use merge_sort::TieBreak;

use crate::error::CliError;

/// Sorted when no values are given on the command line.
pub const DEMO_VALUES: [i64; 10] = [4, 2, 1, 3, 5, 6, 7, 8, 9, 10];

#[derive(Parser, Debug)]
#[command(name = "merge-sort")]
#[command(about = "Sort integers with a top-down merge sort", version)]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Integers to sort, separated by spaces or commas within or across arguments.
    /// Defaults to a demo sequence.
    #[arg(value_name = "VALUES")]
    pub values: Vec<String>,

    /// Keep equal elements in input order
    #[arg(long)]
    pub stable: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn tie_break(&self) -> TieBreak {
        if self.stable {
            TieBreak::PreferLeft
        } else {
            TieBreak::PreferRight
        }
    }

    /// Parses the positional arguments, falling back to [`DEMO_VALUES`].
    pub fn input(&self) -> Result<Vec<i64>, CliError> {
        if self.values.is_empty() {
            return Ok(DEMO_VALUES.to_vec());
        }
        parse_values(&self.values)
    }
}

pub fn parse_values<S: AsRef<str>>(arguments: &[S]) -> Result<Vec<i64>, CliError> {
    let mut out = Vec::new();
    for argument in arguments {
        let argument = argument.as_ref();
        for item in argument.split(',') {
            if item.trim().is_empty() {
                return Err(CliError::EmptyValue {
                    argument: argument.to_string(),
                });
            }
            for token in item.split_whitespace() {
                let value = token.parse::<i64>().map_err(|source| CliError::InvalidValue {
                    token: token.to_string(),
                    source,
                })?;
                out.push(value);
            }
        }
    }
    Ok(out)
}
