//! Rendering helpers for the parameter table, equations, and usage instructions.

use std::io::{self, Write};

use nested_helix_core::format::number;
use nested_helix_formula::HelixFormulas;
use serde::Serialize;

const NAME_WIDTH: usize = 25;
const DESCRIPTION_WIDTH: usize = 50;
const RULE_WIDTH: usize = 75;

/// Row of the help table: parameter label and description.
type Row = (&'static str, &'static str);

const PRIMARY_ROWS: &[Row] = &[
    ("Initial Radius (r0)", "The starting radius of the primary helix."),
    ("Final Radius (r1)", "The ending radius of the primary helix."),
    ("Height (h)", "The vertical height of the primary helix."),
    (
        "Number of Turns (N)",
        "The number of full rotations of the primary helix.",
    ),
];

const SECONDARY_ROWS: &[Row] = &[
    ("Initial Radius (rs0)", "The starting radius of the secondary helix."),
    ("Final Radius (rs1)", "The ending radius of the secondary helix."),
    (
        "Number of Turns (M)",
        "The number of full rotations of the secondary helix.",
    ),
];

const RANGE_ROWS: &[Row] = &[
    ("Start of t (t1)", "The starting value of parameter t."),
    ("End of t (t2)", "The ending value of parameter t."),
];

/// Write the introduction and the table of parameters a user is asked for.
pub fn write_parameter_table(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(
        writer,
        "This tool produces parametric equations to define a nested helix that wraps around the tangent of a primary tapered helix."
    )?;
    writeln!(writer, "\nParameters to be entered:")?;
    write_row(writer, ("Parameter", "Description"))?;
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;

    write_row(writer, ("Primary Helix Parameters", ""))?;
    for row in PRIMARY_ROWS {
        write_row(writer, *row)?;
    }
    writeln!(writer)?;
    write_row(writer, ("Secondary Helix Parameters", ""))?;
    for row in SECONDARY_ROWS {
        write_row(writer, *row)?;
    }
    writeln!(writer)?;
    write_row(writer, ("Parameter Range", ""))?;
    for row in RANGE_ROWS {
        write_row(writer, *row)?;
    }
    Ok(())
}

fn write_row(writer: &mut dyn Write, (name, description): Row) -> io::Result<()> {
    writeln!(
        writer,
        "{:<name_w$} {:<desc_w$}",
        name,
        description,
        name_w = NAME_WIDTH,
        desc_w = DESCRIPTION_WIDTH
    )
}

/// Write the three equations under a heading.
pub fn write_equations(writer: &mut dyn Write, formulas: &HelixFormulas) -> io::Result<()> {
    writeln!(writer, "\nSolidWorks Equations:")?;
    writeln!(writer, "X(t) = {}", formulas.equations.x)?;
    writeln!(writer, "Y(t) = {}", formulas.equations.y)?;
    writeln!(writer, "Z(t) = {}", formulas.equations.z)
}

/// Write the steps for entering the equations into an equation-driven curve.
pub fn write_instructions(writer: &mut dyn Write, t1: f64, t2: f64) -> io::Result<()> {
    writeln!(writer, "\nInstructions:")?;
    writeln!(
        writer,
        "1. Open a new 3D sketch in SolidWorks and select the 'Equation Driven Curve' feature."
    )?;
    writeln!(
        writer,
        "2. Set the parameter 't' to vary from {} to {}.",
        number(t1),
        number(t2)
    )?;
    writeln!(writer, "3. Input the provided equations for X(t), Y(t), and Z(t).")?;
    writeln!(writer, "4. Confirm and generate the curve.")
}

/// Write equations followed by instructions, the full report for one request.
pub fn write_report(writer: &mut dyn Write, formulas: &HelixFormulas) -> io::Result<()> {
    write_equations(writer, formulas)?;
    write_instructions(writer, formulas.request.t1, formulas.request.t2)
}

/// Write a result, or a list of results, as pretty-printed JSON.
pub fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)
}
