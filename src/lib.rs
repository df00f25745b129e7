//! Antibody–antigen interface analysis for macromolecular structures.
//!
//! Reads a PDB or mmCIF structure, strips solvent, and reports which residues
//! of each antibody chain lie within a distance cutoff of the antigen chain,
//! and which antigen residues lie within the cutoff of the antibody chains
//! taken together.
//!
//! # Features
//!
//! - **Structure input** — PDB and mmCIF parsing and solvent removal through
//!   [`bio_forge`]
//! - **Contact search** — grid-accelerated `within <cutoff> of <chain>` queries
//!   with an inclusive distance boundary
//! - **Reports** — the plain-text contact listing, a JSON document, and a
//!   PyMOL script that colors and zooms onto the interface
//!
//! # Quick Start
//!
//! ```
//! use abcontact::{Atom, AtomSite, ContactConfig, ResidueCategory, Structure, find_contacts};
//!
//! let site = |chain: &str, resn: &str, resi: i32, name: &str| {
//!     AtomSite::new(name, resn, resi, chain, None, ResidueCategory::Standard)
//! };
//!
//! let structure = Structure {
//!     atoms: vec![
//!         Atom::new("N", [0.0, 0.0, 0.0], site("A", "LYS", 50, "NZ")),
//!         Atom::new("O", [0.0, 3.1, 0.0], site("H", "TYR", 101, "OH")),
//!         Atom::new("O", [0.0, -3.4, 0.0], site("L", "SER", 32, "OG")),
//!         Atom::new("C", [0.0, 20.0, 0.0], site("H", "GLY", 8, "CA")),
//!     ],
//! };
//!
//! let report = find_contacts(&structure, &ContactConfig::new(["H", "L"], "A"))?;
//!
//! assert_eq!(report.antibody[0].contacts.len(), 1); // TYR101
//! assert_eq!(report.antibody[1].contacts.len(), 1); // SER32
//! assert_eq!(report.antigen.contacts.len(), 1); // LYS50, counted once
//! # Ok::<(), abcontact::ContactError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Structure readers and report writers
//! - [`find_contacts`] — The interface search
//! - [`ContactConfig`] — Chains and cutoff for a search
//!
//! # Data Types
//!
//! - [`Structure`] — Flat list of annotated atoms
//! - [`Atom`] / [`AtomSite`] — Coordinates plus chain/residue annotation
//! - [`ContactResidue`] — Residue name, number and insertion code, ordered numerically
//! - [`ContactSet`] — Contact residues of a chain with their matched atoms
//! - [`ChainContacts`] / [`ContactReport`] — Per-chain results and the full report

mod contact;
mod model;

pub mod io;

pub use model::atom::Atom;
pub use model::contact::{ChainContacts, ContactReport, ContactResidue, ContactSet};
pub use model::metadata::{AtomSite, ResidueCategory};
pub use model::structure::Structure;

pub use contact::{
    ContactConfig, DEFAULT_CUTOFF, SpatialGrid, find_contacts, find_contacts_in,
};

pub use contact::Error as ContactError;
