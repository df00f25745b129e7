//! PyMOL command script that highlights interface contacts.
//!
//! Each antibody chain's contact atoms become a selection named
//! `ab_contacts_<chain>` colored from [`PALETTE`] by chain position; antigen
//! contacts become `prot_contacts` in [`ANTIGEN_COLOR`]. All selections are
//! shown as sticks and the view is zoomed onto the interface.

use crate::io::error::Error;
use crate::io::text::writer::format_cutoff;
use crate::model::contact::{ContactReport, ContactSet};
use std::io::Write;

/// Colors cycled over antibody chains in request order.
pub const PALETTE: [&str; 4] = ["yellow", "orange", "palegreen", "lightpink"];
pub const ANTIGEN_COLOR: &str = "cyan";
pub const ANTIGEN_SELECTION: &str = "prot_contacts";

pub fn antibody_selection_name(chain_id: &str) -> String {
    format!("ab_contacts_{}", chain_id)
}

pub fn antibody_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

pub fn write<W: Write>(mut writer: W, report: &ContactReport) -> Result<(), Error> {
    writeln!(
        writer,
        "# Interface contacts within {} Å",
        format_cutoff(report.cutoff)
    )?;
    match &report.structure {
        Some(path) => {
            writeln!(writer, "delete all")?;
            writeln!(writer, "load {}", path.display())?;
        }
        None => writeln!(writer, "# structure was read from stdin; load it before running")?,
    }
    writeln!(writer, "remove solvent")?;
    writeln!(writer)?;

    for chain in &report.antibody {
        writeln!(
            writer,
            "select {}, {}",
            antibody_selection_name(&chain.chain_id),
            selection_expr(&chain.chain_id, &chain.contacts)
        )?;
    }
    writeln!(
        writer,
        "select {}, {}",
        ANTIGEN_SELECTION,
        selection_expr(&report.antigen.chain_id, &report.antigen.contacts)
    )?;
    writeln!(writer)?;

    for (i, chain) in report.antibody.iter().enumerate() {
        let name = antibody_selection_name(&chain.chain_id);
        writeln!(writer, "color {}, {}", antibody_color(i), name)?;
        writeln!(writer, "show sticks, {}", name)?;
    }
    writeln!(writer, "color {}, {}", ANTIGEN_COLOR, ANTIGEN_SELECTION)?;
    writeln!(writer, "show sticks, {}", ANTIGEN_SELECTION)?;

    let antibody_chains: Vec<&str> = report.antibody_chain_ids().collect();
    writeln!(
        writer,
        "zoom ({} or chain {})",
        ANTIGEN_SELECTION,
        antibody_chains.join("+")
    )?;
    writeln!(writer, "deselect")?;

    Ok(())
}

/// A leading `-` would read as a range operator in a `resi` selector.
fn quote_resi(resi: &str) -> String {
    match resi.strip_prefix('-') {
        Some(rest) => format!("\\-{}", rest),
        None => resi.to_string(),
    }
}

/// Selection matching exactly the contacting atoms of `contacts` in `chain_id`.
fn selection_expr(chain_id: &str, contacts: &ContactSet) -> String {
    if contacts.is_empty() {
        return "none".to_string();
    }

    let residues: Vec<String> = contacts
        .iter()
        .map(|(residue, atoms)| {
            let names: Vec<String> = atoms.iter().map(|a| quote_atom_name(a)).collect();
            format!(
                "(resi {} and name {})",
                quote_resi(&residue.resi()),
                names.join("+")
            )
        })
        .collect();

    format!("chain {} and ({})", chain_id, residues.join(" or "))
}

/// Escapes characters that the selection language would otherwise parse,
/// such as the prime in nucleic acid atom names (`O5'`).
fn quote_atom_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '\'' | '"' | '*' | '+' | '(' | ')') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
