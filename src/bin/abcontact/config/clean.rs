use abcontact::io::CleanConfig;

use crate::cli::CleanOptions;

pub fn build_clean_config(opts: &CleanOptions) -> CleanConfig {
    CleanConfig {
        remove_water: !opts.keep_water,
        remove_ions: opts.no_ions,
        remove_hydrogens: opts.no_hydrogens,
        remove_hetero: opts.no_hetero,
        remove_residue_names: opts.remove.iter().cloned().collect(),
        keep_residue_names: opts.keep.iter().cloned().collect(),
    }
}

/// Human-readable list of what cleaning removes, empty when nothing is removed.
pub fn clean_actions(opts: &CleanOptions) -> Vec<&'static str> {
    let mut actions = Vec::new();
    if !opts.keep_water {
        actions.push("water");
    }
    if opts.no_ions {
        actions.push("ions");
    }
    if opts.no_hetero {
        actions.push("hetero");
    }
    if opts.no_hydrogens {
        actions.push("hydrogens");
    }
    if !opts.remove.is_empty() {
        actions.push("specified residues");
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> CleanOptions {
        CleanOptions {
            keep_water: false,
            no_ions: false,
            no_hydrogens: false,
            no_hetero: false,
            remove: Vec::new(),
            keep: Vec::new(),
        }
    }

    #[test]
    fn water_is_removed_by_default() {
        let config = build_clean_config(&defaults());
        assert!(config.remove_water);
        assert!(!config.remove_ions);
        assert_eq!(clean_actions(&defaults()), vec!["water"]);
    }

    #[test]
    fn keep_water_disables_solvent_removal() {
        let opts = CleanOptions {
            keep_water: true,
            ..defaults()
        };
        assert!(!build_clean_config(&opts).remove_water);
        assert!(clean_actions(&opts).is_empty());
    }

    #[test]
    fn residue_lists_are_forwarded() {
        let opts = CleanOptions {
            no_ions: true,
            remove: vec!["SO4".into(), "GOL".into()],
            ..defaults()
        };
        let config = build_clean_config(&opts);
        assert!(config.remove_ions);
        assert!(config.remove_residue_names.contains("GOL"));
        assert_eq!(
            clean_actions(&opts),
            vec!["water", "ions", "specified residues"]
        );
    }
}
