use super::atom::Atom;

#[derive(Debug, Clone, Default)]
pub struct Structure {
    pub atoms: Vec<Atom>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Chain identifiers in order of first appearance.
    pub fn chain_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for atom in &self.atoms {
            let id = atom.chain_id();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    pub fn has_chain(&self, chain_id: &str) -> bool {
        self.atoms.iter().any(|a| a.chain_id() == chain_id)
    }

    /// Indices of all atoms belonging to `chain_id`, ascending.
    pub fn chain_atom_indices(&self, chain_id: &str) -> Vec<usize> {
        self.atoms
            .iter()
            .enumerate()
            .filter(|(_, a)| a.chain_id() == chain_id)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| a.position).collect()
    }
}
