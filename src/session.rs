//! Interactive prompt loop: read the nine parameters, print equations, repeat on request.

use std::io::{self, BufRead, Write};

use log::info;
use thiserror::Error;

use crate::formula::{self, FormulaError, HelixRequest};
use crate::report;

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended while waiting for {0}")]
    UnexpectedEof(&'static str),
    #[error("invalid number for {label}: {input:?}")]
    InvalidNumber { label: &'static str, input: String },
    #[error(transparent)]
    Formula(#[from] FormulaError),
}

/// Prompt session over any line-oriented input and writable output.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run rounds until the user declines another one.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.round()?;
            let choice =
                self.read_line("\nDo you want to generate another set of equations? (Y/N): ")?;
            let again = choice
                .map(|c| c.trim().eq_ignore_ascii_case("y"))
                .unwrap_or(false);
            if !again {
                writeln!(self.output, "Exiting the program.")?;
                return Ok(());
            }
        }
    }

    /// One full pass: table, prompts, equations, instructions.
    pub fn round(&mut self) -> Result<(), SessionError> {
        report::write_parameter_table(&mut self.output)?;

        writeln!(self.output, "\nEnter parameters for the Primary Helix:")?;
        let r0 = self.read_number("Initial Radius (r0)")?;
        let r1 = self.read_number("Final Radius (r1)")?;
        let h = self.read_number("Height (h)")?;
        let n = self.read_number("Number of Turns (N)")?;

        writeln!(self.output, "\nEnter parameters for the Secondary Helix:")?;
        let rs0 = self.read_number("Initial Radius (rs0)")?;
        let rs1 = self.read_number("Final Radius (rs1)")?;
        let m = self.read_number("Number of Turns (M)")?;

        writeln!(self.output, "\nEnter parameter range for t:")?;
        let t1 = self.read_number("Start of t (t1)")?;
        let t2 = self.read_number("End of t (t2)")?;

        let request = HelixRequest {
            r0,
            r1,
            h,
            n,
            rs0,
            rs1,
            m,
            t1,
            t2,
        };
        info!("generating equations for {:?}", request);
        let formulas = formula::generate(&request)?;
        report::write_report(&mut self.output, &formulas)?;
        Ok(())
    }

    fn read_number(&mut self, label: &'static str) -> Result<f64, SessionError> {
        let line = self
            .read_line(&format!("{label}: "))?
            .ok_or(SessionError::UnexpectedEof(label))?;
        let trimmed = line.trim();
        trimmed
            .parse::<f64>()
            .map_err(|_| SessionError::InvalidNumber {
                label,
                input: trimmed.to_string(),
            })
    }

    /// Print `prompt` and read one line; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Hand back the output, mainly for inspecting captured text.
    pub fn into_output(self) -> W {
        self.output
    }
}
