use crate::io::{StructureReader, altloc::AltSite, error::Error, util};
use crate::model::structure::Structure;
use bio_forge as bf;
use std::io::{BufRead, Cursor, Read};

pub fn read<R: BufRead>(mut builder: StructureReader<R>) -> Result<Structure, Error> {
    let mut text = String::new();
    builder.reader.read_to_string(&mut text)?;
    let alternates = scan_alternates(&text);

    let bio_context = bf::io::IoContext::new_default();
    let bio_struct = bf::io::read_mmcif_structure(Cursor::new(text.as_bytes()), &bio_context)?;

    util::finish(bio_struct, builder.clean_config, alternates)
}

/// `_atom_site` columns needed to locate an alternate conformer.
///
/// Author columns win over label columns, the same preference the
/// structure parser applies.
#[derive(Debug, Default)]
struct AltColumns {
    alt_id: Option<usize>,
    atom_name: Option<usize>,
    chain_id: Option<usize>,
    residue_id: Option<usize>,
    insertion_code: Option<usize>,
    x: Option<usize>,
    y: Option<usize>,
    z: Option<usize>,
}

impl AltColumns {
    fn from_headers(headers: &[String]) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let either = |auth: &str, label: &str| find(auth).or_else(|| find(label));

        Self {
            alt_id: find("_atom_site.label_alt_id"),
            atom_name: either("_atom_site.auth_atom_id", "_atom_site.label_atom_id"),
            chain_id: either("_atom_site.auth_asym_id", "_atom_site.label_asym_id"),
            residue_id: either("_atom_site.auth_seq_id", "_atom_site.label_seq_id"),
            insertion_code: find("_atom_site.pdbx_PDB_ins_code"),
            x: find("_atom_site.Cartn_x"),
            y: find("_atom_site.Cartn_y"),
            z: find("_atom_site.Cartn_z"),
        }
    }

    fn parse(&self, tokens: &[String]) -> Option<AltSite> {
        let get = |idx: Option<usize>| {
            idx.and_then(|i| tokens.get(i))
                .map(String::as_str)
                .filter(|v| !matches!(*v, "." | "?"))
        };
        let coord = |idx: Option<usize>| get(idx)?.parse::<f64>().ok();

        let alt_id = get(self.alt_id)?.chars().next()?;
        let residue_id = get(self.residue_id)
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Some(AltSite {
            chain_id: get(self.chain_id).unwrap_or("?").to_string(),
            residue_id,
            insertion_code: get(self.insertion_code).and_then(|v| v.chars().next()),
            atom_name: get(self.atom_name)?.to_string(),
            alt_id,
            position: [coord(self.x)?, coord(self.y)?, coord(self.z)?],
        })
    }
}

/// Collects `_atom_site` rows that carry a `label_alt_id`.
fn scan_alternates(text: &str) -> Vec<AltSite> {
    let mut alternates = Vec::new();
    let mut headers: Vec<String> = Vec::new();
    let mut columns: Option<AltColumns> = None;
    let mut in_header = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens = tokenize(trimmed);
        let Some(first) = tokens.first() else {
            continue;
        };

        if first == "loop_" {
            in_header = true;
            headers.clear();
            columns = None;
            continue;
        }

        if first.starts_with('_') {
            if in_header {
                headers.push(first.clone());
            } else {
                columns = None;
            }
            continue;
        }

        if in_header {
            in_header = false;
            if headers.iter().any(|h| h.starts_with("_atom_site.")) {
                columns = Some(AltColumns::from_headers(&headers));
            }
        }

        if let Some(site) = columns.as_ref().and_then(|c| c.parse(&tokens)) {
            alternates.push(site);
        }
    }

    alternates
}

/// Whitespace tokenizer for one mmCIF line; a quote opens a field only at token start.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None if (c == '\'' || c == '"') && current.is_empty() => quote = Some(c),
            None => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
