#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueCategory {
    Standard,
    Hetero,
    Ion,
}

/// Per-atom residue and chain annotation carried over from the structure file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomSite {
    pub atom_name: String,
    pub residue_name: String,
    pub residue_id: i32,
    /// Author chain identifier; mmCIF allows more than one character.
    pub chain_id: String,
    pub insertion_code: Option<char>,
    pub category: ResidueCategory,
}

impl AtomSite {
    pub fn new(
        atom_name: impl Into<String>,
        residue_name: impl Into<String>,
        residue_id: i32,
        chain_id: impl Into<String>,
        insertion_code: Option<char>,
        category: ResidueCategory,
    ) -> Self {
        Self {
            atom_name: atom_name.into(),
            residue_name: residue_name.into(),
            residue_id,
            chain_id: chain_id.into(),
            insertion_code: insertion_code.filter(|c| !c.is_whitespace()),
            category,
        }
    }
}
