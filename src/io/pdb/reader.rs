use crate::io::{StructureReader, altloc::AltSite, error::Error, util};
use crate::model::structure::Structure;
use bio_forge as bf;
use std::io::{BufRead, Cursor, Read};

pub fn read<R: BufRead>(mut builder: StructureReader<R>) -> Result<Structure, Error> {
    let mut text = String::new();
    builder.reader.read_to_string(&mut text)?;
    let alternates = scan_alternates(&text);

    let bio_context = bf::io::IoContext::new_default();
    let bio_struct = bf::io::read_pdb_structure(Cursor::new(text.as_bytes()), &bio_context)?;

    util::finish(bio_struct, builder.clean_config, alternates)
}

/// Collects ATOM/HETATM records of the first model whose altLoc column is set.
fn scan_alternates(text: &str) -> Vec<AltSite> {
    let mut alternates = Vec::new();

    for line in text.lines() {
        if line.starts_with("ENDMDL") {
            break;
        }
        if !(line.starts_with("ATOM") || line.starts_with("HETATM")) {
            continue;
        }
        if let Some(site) = parse_alt_record(line) {
            alternates.push(site);
        }
    }

    alternates
}

fn parse_alt_record(line: &str) -> Option<AltSite> {
    let alt_id = line.get(16..17)?.chars().next().filter(|c| !c.is_whitespace())?;
    let coord = |range: std::ops::Range<usize>| line.get(range)?.trim().parse::<f64>().ok();

    Some(AltSite {
        chain_id: line.get(21..22)?.trim().to_string(),
        residue_id: line.get(22..26)?.trim().parse().ok()?,
        insertion_code: line.get(26..27).and_then(|s| s.chars().next()),
        atom_name: line.get(12..16)?.trim().to_string(),
        alt_id,
        position: [coord(30..38)?, coord(38..46)?, coord(46..54)?],
    })
}
