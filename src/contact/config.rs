use super::error::Error;

/// Default interface distance cutoff in Ångströms.
pub const DEFAULT_CUTOFF: f64 = 4.0;

/// Which chains to compare and how close atoms must be to count as a contact.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    /// Antibody chain identifiers (for example heavy and light chain).
    pub antibody_chains: Vec<String>,
    pub antigen_chain: String,
    /// Maximum atom-atom distance in Ångströms, inclusive.
    pub cutoff: f64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            antibody_chains: vec!["H".to_string(), "L".to_string()],
            antigen_chain: "A".to_string(),
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl ContactConfig {
    /// Builds a configuration with the default cutoff.
    ///
    /// Repeated antibody chain identifiers are dropped, keeping the first
    /// occurrence so report sections follow the requested order.
    pub fn new<I, S>(antibody_chains: I, antigen_chain: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut chains: Vec<String> = Vec::new();
        for chain in antibody_chains {
            let chain = chain.into();
            if !chains.contains(&chain) {
                chains.push(chain);
            }
        }

        Self {
            antibody_chains: chains,
            antigen_chain: antigen_chain.into(),
            cutoff: DEFAULT_CUTOFF,
        }
    }

    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.antibody_chains.is_empty() {
            return Err(Error::EmptyAntibodyChains);
        }

        for chain in self
            .antibody_chains
            .iter()
            .chain(std::iter::once(&self.antigen_chain))
        {
            if chain.is_empty() || chain.chars().any(char::is_whitespace) {
                return Err(Error::InvalidChainId(chain.clone()));
            }
        }

        if !self.cutoff.is_finite() || self.cutoff <= 0.0 {
            return Err(Error::InvalidCutoff(self.cutoff));
        }

        if self.antibody_chains.contains(&self.antigen_chain) {
            return Err(Error::AntigenIsAntibody(self.antigen_chain.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_cutoff_and_dedups_in_order() {
        let config = ContactConfig::new(["C", "A", "C"], "F");
        assert_eq!(config.antibody_chains, vec!["C", "A"]);
        assert_eq!(config.antigen_chain, "F");
        assert_eq!(config.cutoff, DEFAULT_CUTOFF);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_is_valid() {
        assert!(ContactConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_antibody_list() {
        let config = ContactConfig::new(Vec::<String>::new(), "F");
        assert_eq!(config.validate(), Err(Error::EmptyAntibodyChains));
    }

    #[test]
    fn rejects_bad_cutoffs() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ContactConfig::new(["H"], "A").cutoff(bad);
            assert!(matches!(config.validate(), Err(Error::InvalidCutoff(_))));
        }
    }

    #[test]
    fn rejects_antigen_listed_as_antibody() {
        let config = ContactConfig::new(["H", "A"], "A");
        assert_eq!(
            config.validate(),
            Err(Error::AntigenIsAntibody("A".to_string()))
        );
    }

    #[test]
    fn rejects_blank_chain_ids() {
        let config = ContactConfig::new(["H", " "], "A");
        assert_eq!(
            config.validate(),
            Err(Error::InvalidChainId(" ".to_string()))
        );
        let config = ContactConfig::new(["H"], "");
        assert_eq!(config.validate(), Err(Error::InvalidChainId(String::new())));
    }
}
