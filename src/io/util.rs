use super::CleanConfig;
use super::altloc::{self, AltSite};
use super::error::Error;
use crate::model::{
    atom::Atom,
    metadata::{AtomSite, ResidueCategory},
    structure::Structure,
};
use bio_forge as bf;

pub fn to_bf_clean_config(config: CleanConfig) -> bf::ops::CleanConfig {
    bf::ops::CleanConfig {
        remove_water: config.remove_water,
        remove_ions: config.remove_ions,
        remove_hydrogens: config.remove_hydrogens,
        remove_hetero: config.remove_hetero,
        remove_residue_names: config.remove_residue_names,
        keep_residue_names: config.keep_residue_names,
    }
}

/// Applies the optional cleaning pass and converts into the crate's model.
///
/// Alternate conformers collapsed by the parser are appended afterwards.
pub fn finish(
    mut bio_struct: bf::Structure,
    clean_config: Option<CleanConfig>,
    alternates: Vec<AltSite>,
) -> Result<Structure, Error> {
    if let Some(clean_config) = clean_config {
        let before = bio_struct.atom_count();
        bf::ops::clean_structure(&mut bio_struct, &to_bf_clean_config(clean_config))?;
        log::debug!(
            "cleaning removed {} of {} atoms",
            before.saturating_sub(bio_struct.atom_count()),
            before
        );
    }

    let mut structure = from_bio_structure(&bio_struct);
    let restored = altloc::restore(&mut structure, alternates);
    if restored > 0 {
        log::info!("kept {restored} alternate-location atoms alongside their primary conformers");
    }

    Ok(structure)
}

pub fn from_bio_structure(bio_struct: &bf::Structure) -> Structure {
    let mut atoms = Vec::with_capacity(bio_struct.atom_count());

    for (chain, residue, bio_atom) in bio_struct.iter_atoms_with_context() {
        let site = AtomSite::new(
            bio_atom.name.clone(),
            residue.name.clone(),
            residue.id,
            chain.id.clone(),
            residue.insertion_code,
            convert_res_cat_from_bf(residue.category),
        );

        atoms.push(Atom::new(
            bio_atom.element.symbol().to_string(),
            [bio_atom.pos.x, bio_atom.pos.y, bio_atom.pos.z],
            site,
        ));
    }

    Structure { atoms }
}

fn convert_res_cat_from_bf(category: bf::ResidueCategory) -> ResidueCategory {
    match category {
        bf::ResidueCategory::Standard => ResidueCategory::Standard,
        bf::ResidueCategory::Hetero => ResidueCategory::Hetero,
        bf::ResidueCategory::Ion => ResidueCategory::Ion,
    }
}
