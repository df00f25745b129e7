//! Core data structures for structures and interface contacts.
//!
//! - [`atom`] – Atom with element, Cartesian coordinates and residue annotation.
//! - [`metadata`] – Residue/chain annotation attached to every atom.
//! - [`structure`] – A parsed, cleaned macromolecular structure.
//! - [`contact`] – Contact residues, per-chain contact sets and the final report.
//!
//! Geometry ([`Structure`]) is kept apart from analysis output ([`ContactReport`])
//! so the [`crate::contact`] pipeline turns one into the other.
//!
//! [`Structure`]: structure::Structure
//! [`ContactReport`]: contact::ContactReport

pub mod atom;
pub mod contact;
pub mod metadata;
pub mod structure;
