//! Alternate-location recovery.
//!
//! The structure parser keeps one conformer per atom (highest occupancy). A
//! `within` query in a molecular viewer tests every conformer, so the other
//! conformers are scanned from the raw text and appended as extra atoms that
//! share the kept atom's site annotation.

use std::collections::HashMap;

use crate::model::{atom::Atom, structure::Structure};

/// Coordinates below this separation are treated as the same conformer.
const SAME_POSITION_TOLERANCE: f64 = 1e-3;

/// One atom record carrying a non-blank alternate-location identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AltSite {
    pub chain_id: String,
    pub residue_id: i32,
    pub insertion_code: Option<char>,
    pub atom_name: String,
    pub alt_id: char,
    pub position: [f64; 3],
}

type SiteKey = (String, i32, Option<char>, String);

/// Appends conformers that the parser collapsed away and returns how many were added.
///
/// An alternate is only restored when its residue and atom survived parsing
/// and cleaning; waters or hydrogens removed by cleaning stay removed.
pub fn restore(structure: &mut Structure, alternates: Vec<AltSite>) -> usize {
    if alternates.is_empty() {
        return 0;
    }

    let mut kept: HashMap<SiteKey, (usize, Vec<[f64; 3]>)> = HashMap::new();
    for (idx, atom) in structure.atoms.iter().enumerate() {
        let key = (
            atom.site.chain_id.clone(),
            atom.site.residue_id,
            atom.site.insertion_code,
            atom.site.atom_name.clone(),
        );
        kept.entry(key)
            .or_insert_with(|| (idx, Vec::new()))
            .1
            .push(atom.position);
    }

    let mut restored = 0;
    for alt in alternates {
        let key = (
            alt.chain_id,
            alt.residue_id,
            alt.insertion_code.filter(|c| !c.is_whitespace()),
            alt.atom_name,
        );
        let Some((template, positions)) = kept.get_mut(&key) else {
            continue;
        };
        if positions
            .iter()
            .any(|p| distance(p, &alt.position) < SAME_POSITION_TOLERANCE)
        {
            continue;
        }

        let source = &structure.atoms[*template];
        let atom = Atom::new(source.element.clone(), alt.position, source.site.clone());
        positions.push(alt.position);
        structure.atoms.push(atom);
        restored += 1;
    }

    restored
}

fn distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
