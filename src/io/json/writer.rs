use crate::io::error::Error;
use crate::model::contact::{ChainContacts, ContactReport};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ReportDoc<'a> {
    structure: Option<String>,
    cutoff: f64,
    antibody_chains: Vec<ChainDoc<'a>>,
    antigen: ChainDoc<'a>,
}

#[derive(Serialize)]
struct ChainDoc<'a> {
    chain: &'a str,
    residues: Vec<ResidueDoc<'a>>,
}

#[derive(Serialize)]
struct ResidueDoc<'a> {
    name: &'a str,
    id: i32,
    insertion_code: Option<char>,
    label: String,
    atoms: Vec<&'a str>,
}

impl<'a> ChainDoc<'a> {
    fn from_chain(chain: &'a ChainContacts) -> Self {
        let residues = chain
            .contacts
            .iter()
            .map(|(residue, atoms)| ResidueDoc {
                name: &residue.name,
                id: residue.residue_id,
                insertion_code: residue.insertion_code,
                label: residue.to_string(),
                atoms: atoms.iter().map(String::as_str).collect(),
            })
            .collect();

        Self {
            chain: &chain.chain_id,
            residues,
        }
    }
}

pub fn write<W: Write>(mut writer: W, report: &ContactReport) -> Result<(), Error> {
    let doc = ReportDoc {
        structure: report.structure.as_ref().map(|p| p.display().to_string()),
        cutoff: report.cutoff,
        antibody_chains: report.antibody.iter().map(ChainDoc::from_chain).collect(),
        antigen: ChainDoc::from_chain(&report.antigen),
    };

    serde_json::to_writer_pretty(&mut writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contact::ContactResidue;
    use serde_json::Value;
    use std::path::PathBuf;

    #[test]
    fn serializes_chains_in_request_order() {
        let mut h = ChainContacts::new("H");
        h.contacts.insert(ContactResidue::new("TYR", 101, None), "OH");
        h.contacts.insert(ContactResidue::new("TYR", 101, None), "CZ");
        h.contacts
            .insert(ContactResidue::new("GLY", 100, Some('A')), "CA");
        let l = ChainContacts::new("L");
        let mut antigen = ChainContacts::new("A");
        antigen
            .contacts
            .insert(ContactResidue::new("LYS", 50, None), "NZ");

        let report = ContactReport {
            structure: Some(PathBuf::from("model.cif")),
            cutoff: 4.0,
            antibody: vec![h, l],
            antigen,
        };

        let mut buf = Vec::new();
        write(&mut buf, &report).unwrap();
        let value: Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["structure"], "model.cif");
        assert_eq!(value["cutoff"], 4.0);
        assert_eq!(value["antibody_chains"][0]["chain"], "H");
        assert_eq!(value["antibody_chains"][1]["chain"], "L");
        assert_eq!(
            value["antibody_chains"][1]["residues"]
                .as_array()
                .unwrap()
                .len(),
            0
        );

        let residues = &value["antibody_chains"][0]["residues"];
        assert_eq!(residues[0]["label"], "GLY100A");
        assert_eq!(residues[0]["insertion_code"], "A");
        assert_eq!(residues[1]["label"], "TYR101");
        assert_eq!(residues[1]["insertion_code"], Value::Null);
        assert_eq!(residues[1]["atoms"], serde_json::json!(["CZ", "OH"]));
        assert_eq!(value["antigen"]["residues"][0]["id"], 50);
    }

    #[test]
    fn stdin_structure_is_null() {
        let report = ContactReport {
            structure: None,
            cutoff: 3.5,
            antibody: vec![ChainContacts::new("H")],
            antigen: ChainContacts::new("A"),
        };
        let mut buf = Vec::new();
        write(&mut buf, &report).unwrap();
        let value: Value = serde_json::from_slice(&buf).unwrap();
        assert!(value["structure"].is_null());
    }
}
