//! Human-readable stock listing. Diagnostic output, not a data format.

use std::io::{self, Write};

use crate::store::Inventory;

impl Inventory {
    /// Write `Items Report` followed by one `item -> qty` line per entry.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Items Report")?;
        for (item, qty) in self.iter() {
            writeln!(out, "{item} -> {qty}")?;
        }
        Ok(())
    }

    /// [`Inventory::write_report`] to standard output.
    pub fn print_report(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out)
    }
}
