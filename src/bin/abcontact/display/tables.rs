use std::collections::{BTreeSet, HashMap};
use std::io::{self, Write};

use abcontact::{ContactReport, ResidueCategory, Structure};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    width: usize,
    align: Align,
}

impl Column {
    const fn left(header: &'static str, width: usize) -> Self {
        Self {
            header,
            width,
            align: Align::Left,
        }
    }

    const fn right(header: &'static str, width: usize) -> Self {
        Self {
            header,
            width,
            align: Align::Right,
        }
    }

    fn cell(&self, value: &str) -> String {
        let value = truncate(value, self.width);
        match self.align {
            Align::Left => format!("{:<w$}", value, w = self.width),
            Align::Right => format!("{:>w$}", value, w = self.width),
        }
    }
}

pub fn print_structure_info(structure: &Structure) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let residues: BTreeSet<_> = structure
        .atoms
        .iter()
        .map(|a| {
            (
                a.chain_id(),
                a.site.residue_id,
                a.site.insertion_code,
            )
        })
        .collect();
    let hetero = structure
        .atoms
        .iter()
        .filter(|a| a.site.category != ResidueCategory::Standard)
        .count();
    let hydrogens = structure.atoms.iter().filter(|a| a.is_hydrogen()).count();

    let rows = [
        ("Total Atoms", structure.atom_count().to_string()),
        ("Residues", residues.len().to_string()),
        ("Chains", structure.chain_ids().len().to_string()),
        ("Hetero Atoms", hetero.to_string()),
        ("Hydrogens", hydrogens.to_string()),
    ];

    print_kv_table(&mut out, "Structure Summary", &rows);
}

pub fn print_chain_breakdown(structure: &Structure) {
    if structure.is_empty() {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();
    write_chain_breakdown(&mut out, structure);
}

/// Writes one row per chain, in order of first appearance in the file.
pub fn write_chain_breakdown(out: &mut impl Write, structure: &Structure) {
    let mut residues: HashMap<&str, BTreeSet<(i32, Option<char>)>> = HashMap::new();
    let mut atoms: HashMap<&str, usize> = HashMap::new();
    let mut hetero: HashMap<&str, usize> = HashMap::new();

    for atom in &structure.atoms {
        let chain = atom.chain_id();
        residues
            .entry(chain)
            .or_default()
            .insert((atom.site.residue_id, atom.site.insertion_code));
        *atoms.entry(chain).or_insert(0) += 1;
        if atom.site.category != ResidueCategory::Standard {
            *hetero.entry(chain).or_insert(0) += 1;
        }
    }

    let chain_w = 7;
    let residues_w = 10;
    let hetero_w = 8;
    let atoms_w = SAFE_TABLE_WIDTH.saturating_sub(chain_w + residues_w + hetero_w + 9);
    let columns = [
        Column::left("Chain", chain_w),
        Column::right("Residues", residues_w),
        Column::right("Atoms", atoms_w),
        Column::right("Hetero", hetero_w),
    ];

    let rows: Vec<Vec<String>> = structure
        .chain_ids()
        .into_iter()
        .map(|chain| {
            vec![
                chain.to_string(),
                residues.get(chain).map_or(0, |r| r.len()).to_string(),
                atoms.get(chain).copied().unwrap_or(0).to_string(),
                hetero.get(chain).copied().unwrap_or(0).to_string(),
            ]
        })
        .collect();

    write_table(out, "Chain Breakdown", &columns, &rows);
}

pub fn print_contact_summary(report: &ContactReport) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let role_w = 9;
    let chain_w = 7;
    let residues_w = 10;
    let atoms_w = SAFE_TABLE_WIDTH.saturating_sub(role_w + chain_w + residues_w + 9);
    let columns = [
        Column::left("Role", role_w),
        Column::left("Chain", chain_w),
        Column::right("Residues", residues_w),
        Column::right("Atoms", atoms_w),
    ];

    let mut rows: Vec<Vec<String>> = report
        .antibody
        .iter()
        .map(|chain| {
            vec![
                "Antibody".to_string(),
                chain.chain_id.clone(),
                chain.contacts.len().to_string(),
                chain.contacts.atom_count().to_string(),
            ]
        })
        .collect();
    rows.push(vec![
        "Antigen".to_string(),
        report.antigen.chain_id.clone(),
        report.antigen.contacts.len().to_string(),
        report.antigen.contacts.atom_count().to_string(),
    ]);

    let title = format!("Interface Contacts (≤ {:.2} Å)", report.cutoff);
    write_table(&mut out, &title, &columns, &rows);
}

fn write_table(out: &mut impl Write, title: &str, columns: &[Column], rows: &[Vec<String>]) {
    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = columns.iter().map(|c| "─".repeat(c.width + 2)).collect();
        format!("{}{}{}{}", INDENT, left, segments.join(mid), right)
    };
    let line = |cells: Vec<String>| format!("{}│ {} │", INDENT, cells.join(" │ "));

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}",
        line(columns.iter().map(|c| c.cell(c.header)).collect())
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for row in rows {
        let cells = columns
            .iter()
            .zip(row)
            .map(|(c, value)| c.cell(value))
            .collect();
        let _ = writeln!(out, "{}", line(cells));
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + 6);
    let columns = [Column::left("Metric", key_w), Column::right("Value", val_w)];

    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|(key, val)| vec![key.to_string(), val.clone()])
        .collect();

    write_table(out, title, &columns, &rows);
}

#[cfg(test)]
mod tests {
    use super::*;
    use abcontact::{Atom, AtomSite};

    fn atom(chain: &str, resid: i32, name: &str, category: ResidueCategory) -> Atom {
        Atom::new(
            "C",
            [0.0, 0.0, 0.0],
            AtomSite::new(name, "GLY", resid, chain, None, category),
        )
    }

    #[test]
    fn chain_breakdown_lists_chains_in_file_order() {
        let mut structure = Structure::new();
        structure.atoms = vec![
            atom("H", 1, "N", ResidueCategory::Standard),
            atom("H", 1, "CA", ResidueCategory::Standard),
            atom("H", 2, "N", ResidueCategory::Standard),
            atom("A", 5, "N", ResidueCategory::Standard),
            atom("A", 900, "ZN", ResidueCategory::Ion),
        ];

        let mut buf = Vec::new();
        write_chain_breakdown(&mut buf, &structure);
        let text = String::from_utf8(buf).unwrap();

        let h_row = text.lines().position(|l| l.contains("│ H ")).unwrap();
        let a_row = text.lines().position(|l| l.contains("│ A ")).unwrap();
        assert!(h_row < a_row);

        let a_line = text.lines().nth(a_row).unwrap();
        let cells: Vec<&str> = a_line
            .split('│')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(cells, vec!["A", "2", "2", "1"]);
    }

    #[test]
    fn table_rows_have_uniform_width() {
        let mut structure = Structure::new();
        structure.atoms = vec![atom("HC", 1, "N", ResidueCategory::Standard)];

        let mut buf = Vec::new();
        write_chain_breakdown(&mut buf, &structure);
        let text = String::from_utf8(buf).unwrap();

        let widths: BTreeSet<usize> = text
            .lines()
            .skip(1)
            .map(|l| l.chars().count())
            .collect();
        assert_eq!(widths.len(), 1);
    }
}
