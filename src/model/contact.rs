use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use super::metadata::AtomSite;

/// A residue identified by sequence number, insertion code and name.
///
/// Field order drives the derived ordering: numeric sequence number first,
/// then insertion code (`None` before any letter), then name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactResidue {
    pub residue_id: i32,
    pub insertion_code: Option<char>,
    pub name: String,
}

impl ContactResidue {
    pub fn new(name: impl Into<String>, residue_id: i32, insertion_code: Option<char>) -> Self {
        Self {
            residue_id,
            insertion_code,
            name: name.into(),
        }
    }

    pub fn from_site(site: &AtomSite) -> Self {
        Self::new(site.residue_name.clone(), site.residue_id, site.insertion_code)
    }

    /// Residue index as a selection-language token, e.g. `100` or `100A`.
    pub fn resi(&self) -> String {
        match self.insertion_code {
            Some(code) => format!("{}{}", self.residue_id, code),
            None => self.residue_id.to_string(),
        }
    }
}

impl fmt::Display for ContactResidue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.resi())
    }
}

/// Contact residues of one chain, each with the names of its matched atoms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSet {
    residues: BTreeMap<ContactResidue, BTreeSet<String>>,
}

impl ContactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one matched atom. Repeated residues collapse into one entry.
    pub fn insert(&mut self, residue: ContactResidue, atom_name: impl Into<String>) {
        self.residues
            .entry(residue)
            .or_default()
            .insert(atom_name.into());
    }

    pub fn insert_site(&mut self, site: &AtomSite) {
        self.insert(ContactResidue::from_site(site), site.atom_name.clone());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn contains(&self, residue: &ContactResidue) -> bool {
        self.residues.contains_key(residue)
    }

    /// Residues in ascending numeric order.
    pub fn residues(&self) -> impl Iterator<Item = &ContactResidue> {
        self.residues.keys()
    }

    /// Residues with their matched atom names, in ascending numeric order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContactResidue, &BTreeSet<String>)> {
        self.residues.iter()
    }

    pub fn atom_count(&self) -> usize {
        self.residues.values().map(BTreeSet::len).sum()
    }

    pub fn is_subset(&self, other: &ContactSet) -> bool {
        self.residues.keys().all(|r| other.contains(r))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainContacts {
    pub chain_id: String,
    pub contacts: ContactSet,
}

impl ChainContacts {
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            contacts: ContactSet::new(),
        }
    }
}

/// Result of one antibody/antigen interface analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactReport {
    /// Source file, `None` when the structure came from stdin.
    pub structure: Option<PathBuf>,
    pub cutoff: f64,
    /// Antibody chains in the order they were requested.
    pub antibody: Vec<ChainContacts>,
    pub antigen: ChainContacts,
}

impl ContactReport {
    pub fn antibody_chain_ids(&self) -> impl Iterator<Item = &str> {
        self.antibody.iter().map(|c| c.chain_id.as_str())
    }

    pub fn antibody_residue_count(&self) -> usize {
        self.antibody.iter().map(|c| c.contacts.len()).sum()
    }

    pub fn structure_label(&self) -> String {
        self.structure
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
