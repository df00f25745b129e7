//! Error types for interface contact analysis.
//!
//! Only invalid requests are errors. A chain that is missing from the
//! structure, or an interface with no contacts, yields empty contact sets.

use thiserror::Error;

/// Errors that can occur when running [`find_contacts`](super::find_contacts).
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// No antibody chain identifiers were given.
    #[error("at least one antibody chain must be specified")]
    EmptyAntibodyChains,

    /// A chain identifier was empty or contained whitespace.
    #[error("invalid chain identifier '{0}'")]
    InvalidChainId(String),

    /// The distance cutoff is not a positive finite number.
    #[error("distance cutoff must be a positive number of Ångströms, got {0}")]
    InvalidCutoff(f64),

    /// The antigen chain also appears among the antibody chains.
    #[error("chain '{0}' cannot be both an antibody chain and the antigen chain")]
    AntigenIsAntibody(String),
}
