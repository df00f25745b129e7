use crate::io::error::Error;
use crate::model::contact::{ContactReport, ContactSet};
use std::io::Write;

pub fn write<W: Write>(mut writer: W, report: &ContactReport) -> Result<(), Error> {
    writeln!(
        writer,
        "# Contact Residues within {} Å",
        format_cutoff(report.cutoff)
    )?;
    writeln!(writer, "# Structure: {}", report.structure_label())?;
    writeln!(writer)?;

    for chain in &report.antibody {
        writeln!(
            writer,
            "## Antibody Chain ({}) Contact Residues:",
            chain.chain_id
        )?;
        write_residues(&mut writer, &chain.contacts)?;
        writeln!(writer)?;
    }

    writeln!(
        writer,
        "## Protein Chain ({}) Contact Residues:",
        report.antigen.chain_id
    )?;
    write_residues(&mut writer, &report.antigen.contacts)?;

    Ok(())
}

fn write_residues<W: Write>(writer: &mut W, contacts: &ContactSet) -> Result<(), Error> {
    if contacts.is_empty() {
        writeln!(writer, "None")?;
        return Ok(());
    }
    for residue in contacts.residues() {
        writeln!(writer, "{}", residue)?;
    }
    Ok(())
}

/// Renders a cutoff in the shortest round-trip form, keeping one decimal on
/// whole numbers (`4.0`, `3.5`). Exponents below -4 or from 16 upward switch
/// to scientific notation with a signed two-digit exponent (`1e-05`, `1e+16`).
pub fn format_cutoff(cutoff: f64) -> String {
    if !cutoff.is_finite() {
        return format!("{}", cutoff);
    }

    let scientific = format!("{:e}", cutoff);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .and_then(|(m, e)| Some((m, e.parse::<i32>().ok()?)))
        .unwrap_or((scientific.as_str(), 0));

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if cutoff.fract() == 0.0 {
        format!("{:.1}", cutoff)
    } else {
        format!("{}", cutoff)
    }
}
