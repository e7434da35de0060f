//! Demonstration routine run when the binary gets no subcommand.

use std::io::{self, Write};

use crate::arithmetic::{Operation, add};
use crate::constants::LOADED_BANNER;
use crate::models::Calculation;
use crate::output::OutputRenderer;
use crate::output::terminal::TerminalRenderer;

/// Print the loaded banner followed by `10 + 5 = 15`.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let (x, y) = (10, 5);
    let calc = Calculation::new(Operation::Add, x, y, add(x, y));

    writeln!(out, "{LOADED_BANNER}")?;
    out.write_all(TerminalRenderer.render(&calc).as_bytes())?;
    out.flush()
}
