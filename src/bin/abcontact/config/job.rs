use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::util::path::relative_to;

/// Run parameters stored in a TOML job file.
///
/// ```toml
/// structure = "1abc.pdb"
/// antibody_chains = ["A", "C"]
/// antigen_chain = "F"
/// cutoff = 3.5
/// outputs = ["contacts_HL_output.txt", "contacts_HL_output.pml"]
/// ```
///
/// Relative paths are resolved against the directory holding the job file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    pub structure: Option<PathBuf>,
    pub antibody_chains: Option<Vec<String>>,
    pub antigen_chain: Option<String>,
    pub cutoff: Option<f64>,
    #[serde(default)]
    pub outputs: Vec<PathBuf>,
}

impl JobFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid job file")
    }

    fn resolve_paths(mut self, base: &Path) -> Self {
        self.structure = self.structure.map(|p| relative_to(base, &p));
        self.outputs = self
            .outputs
            .into_iter()
            .map(|p| relative_to(base, &p))
            .collect();
        self
    }
}

pub fn load_job(path: &Path) -> Result<JobFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file: {}", path.display()))?;
    let job = JobFile::parse(&content)
        .with_context(|| format!("Failed to load job file: {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(job.resolve_paths(base))
}
