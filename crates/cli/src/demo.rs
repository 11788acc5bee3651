//! Fixed demonstration run over a fresh inventory.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use stockroom_core::DomainError;
use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, Removal};

/// Run the demonstration against `path`, writing user-facing lines to `out`.
///
/// An invalid argument anywhere in the sequence is reported as a single
/// `Input error:` line and ends the run normally. Everything else (invariant
/// violations, saving the file, writing to `out`) is returned.
pub fn run<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<Inventory> {
    let mut inventory = Inventory::new();

    if let Err(err) = sequence(&mut inventory, path, out) {
        report_input_error(err, out)?;
    }

    Ok(inventory)
}

/// Print an invalid-argument error as the run's single diagnostic line;
/// hand any other error back.
fn report_input_error<W: Write>(err: anyhow::Error, out: &mut W) -> anyhow::Result<()> {
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::InvalidArgument(msg)) => {
            writeln!(out, "Input error: {msg}")?;
            Ok(())
        }
        _ => Err(err),
    }
}

fn sequence<W: Write>(inventory: &mut Inventory, path: &Path, out: &mut W) -> anyhow::Result<()> {
    inventory.add("apple", 10, None)?;
    inventory.add("banana", 2, None)?;

    inventory.remove("apple", 3)?;
    if let Removal::NotFound = inventory.remove("orange", 1)? {
        writeln!(out, "Warning: item 'orange' not found.")?;
    }

    writeln!(out, "Apple stock: {}", inventory.get_quantity("apple"))?;

    let low = inventory.list_low_stock(DEFAULT_LOW_STOCK_THRESHOLD)?;
    let low: Vec<&str> = low.iter().map(String::as_str).collect();
    writeln!(out, "Low items: {}", low.join(", "))?;

    inventory
        .save(path)
        .with_context(|| format!("failed to save inventory to {}", path.display()))?;
    inventory.load(path);

    inventory.write_report(out).context("failed to write report")?;
    Ok(())
}
