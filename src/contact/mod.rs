mod config;
mod error;
mod spatial;

pub use config::{ContactConfig, DEFAULT_CUTOFF};
pub use error::Error;
pub use spatial::SpatialGrid;

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::model::contact::{ChainContacts, ContactReport};
use crate::model::structure::Structure;

/// Finds interface contact residues between antibody chains and an antigen chain.
///
/// For every antibody chain, its atoms within `config.cutoff` of any antigen
/// atom are reduced to residues. Antigen contacts are the antigen atoms
/// within the cutoff of any atom of the antibody chains taken together.
///
/// Chains absent from `structure` are not an error; they produce empty
/// contact sets and a warning.
///
/// # Errors
///
/// Returns [`Error`] when `config` fails [`ContactConfig::validate`].
pub fn find_contacts(structure: &Structure, config: &ContactConfig) -> Result<ContactReport, Error> {
    find_contacts_in(structure, config, None)
}

/// Same as [`find_contacts`], recording `source` as the structure path in the report.
pub fn find_contacts_in(
    structure: &Structure,
    config: &ContactConfig,
    source: Option<PathBuf>,
) -> Result<ContactReport, Error> {
    config.validate()?;

    let cutoff = config.cutoff;
    let positions = structure.positions();

    let antigen_indices = chain_indices(structure, &config.antigen_chain);
    let antigen_positions = gather(&positions, &antigen_indices);

    let mut antibody = Vec::with_capacity(config.antibody_chains.len());
    let mut antibody_indices_all = Vec::new();

    for chain_id in &config.antibody_chains {
        let indices = chain_indices(structure, chain_id);
        let grid = SpatialGrid::from_indices(&positions, &indices, cutoff);
        let hits = grid.within(&antigen_positions, &positions, cutoff);

        let mut chain = ChainContacts::new(chain_id.clone());
        for idx in &hits {
            chain.contacts.insert_site(&structure.atoms[*idx].site);
        }

        debug!(
            "antibody chain {}: {} atoms, {} atoms in contact, {} residues",
            chain_id,
            indices.len(),
            hits.len(),
            chain.contacts.len()
        );

        antibody_indices_all.extend(indices);
        antibody.push(chain);
    }

    let antibody_positions = gather(&positions, &antibody_indices_all);
    let grid = SpatialGrid::from_indices(&positions, &antigen_indices, cutoff);
    let hits = grid.within(&antibody_positions, &positions, cutoff);

    let mut antigen = ChainContacts::new(config.antigen_chain.clone());
    for idx in &hits {
        antigen.contacts.insert_site(&structure.atoms[*idx].site);
    }

    debug!(
        "antigen chain {}: {} atoms, {} atoms in contact, {} residues",
        config.antigen_chain,
        antigen_indices.len(),
        hits.len(),
        antigen.contacts.len()
    );

    let report = ContactReport {
        structure: source,
        cutoff,
        antibody,
        antigen,
    };

    info!(
        "found {} antibody and {} antigen contact residues within {} Å",
        report.antibody_residue_count(),
        report.antigen.contacts.len(),
        cutoff
    );

    Ok(report)
}

fn chain_indices(structure: &Structure, chain_id: &str) -> Vec<usize> {
    let indices = structure.chain_atom_indices(chain_id);
    if indices.is_empty() {
        warn!(
            "chain '{}' not found in structure (available: {})",
            chain_id,
            structure.chain_ids().join(", ")
        );
    }
    indices
}

fn gather(positions: &[[f64; 3]], indices: &[usize]) -> Vec<[f64; 3]> {
    indices.iter().map(|&i| positions[i]).collect()
}
