//! Matrix Command
//!
//! Print the GF(2) matrix of a mixing function and check its inverse.

use super::LinearFunction;
use anyhow::Result;

/// Print the matrix (or its inverse) as 32 rows of 0/1, column 0 leftmost.
pub fn print_matrix(function: LinearFunction, inverse: bool) -> Result<()> {
    let inverter = function.inverter()?;
    let (m, m_inv) = (inverter.matrix(), inverter.inverse());

    let shown = if inverse { m_inv } else { m };
    println!("{shown}");
    println!();

    let label = if inverse { "^-1" } else { "" };
    println!("{}{label}: rank {}", function.name(), shown.rank());

    let identity = m.mul(m_inv).is_identity();
    println!("M * M^-1 == I: {}", if identity { "OK" } else { "FAILED" });
    if !identity {
        anyhow::bail!("{} inverse check failed", function.name());
    }

    Ok(())
}
