use anyhow::{Result, bail};

use abcontact::{ContactConfig, DEFAULT_CUTOFF};

use super::job::JobFile;
use crate::cli::ContactOptions;

/// Merges command-line options over job-file values.
pub fn build_contact_config(opts: &ContactOptions, job: &JobFile) -> Result<ContactConfig> {
    let antibody: Vec<String> = if !opts.antibody.is_empty() {
        opts.antibody
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    } else {
        job.antibody_chains.clone().unwrap_or_default()
    };

    if antibody.is_empty() {
        bail!("No antibody chains specified. Use -H/--antibody (e.g. -H H,L) or a job file.");
    }

    let Some(antigen) = opts
        .antigen
        .clone()
        .or_else(|| job.antigen_chain.clone())
    else {
        bail!("No antigen chain specified. Use -g/--antigen or a job file.");
    };

    let cutoff = opts.cutoff.or(job.cutoff).unwrap_or(DEFAULT_CUTOFF);

    let config = ContactConfig::new(antibody, antigen).cutoff(cutoff);
    config.validate()?;
    Ok(config)
}
