//! End-to-end checks: PDB file on disk, contact search, reports on disk.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use abcontact::io::{CleanConfig, Format, ReportWriter, StructureReader};
use abcontact::{ContactConfig, ContactReport, ContactResidue, Structure, find_contacts_in};
use tempfile::TempDir;

#[allow(clippy::too_many_arguments)]
fn atom_line(
    record: &str,
    serial: usize,
    name: &str,
    resn: &str,
    chain: char,
    resi: i32,
    icode: char,
    pos: [f64; 3],
    element: &str,
) -> String {
    format!(
        "{:<6}{:>5}  {:<3} {:>3} {}{:>4}{}   {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
        record, serial, name, resn, chain, resi, icode, pos[0], pos[1], pos[2], 1.0, 20.0, element
    )
}

/// Antigen LYS A50 sits at the origin; heavy chain residues H100 and H100A
/// and light chain ASP L92 surround it within 4 Å.
fn interface_pdb() -> String {
    let lines = [
        atom_line("ATOM", 1, "OG", "SER", 'H', 100, ' ', [3.5, 0.0, 0.0], "O"),
        atom_line("ATOM", 2, "OH", "TYR", 'H', 100, 'A', [0.0, 3.1, 0.0], "O"),
        atom_line("ATOM", 3, "CZ", "TYR", 'H', 100, 'A', [0.0, 4.4, 0.0], "C"),
        atom_line("ATOM", 4, "CA", "GLY", 'L', 30, ' ', [0.0, 0.0, -9.0], "C"),
        atom_line("ATOM", 5, "OD1", "ASP", 'L', 92, ' ', [0.0, 0.0, -3.9], "O"),
        atom_line("ATOM", 6, "CE", "LYS", 'A', 50, ' ', [0.0, -1.5, 0.0], "C"),
        atom_line("ATOM", 7, "NZ", "LYS", 'A', 50, ' ', [0.0, 0.0, 0.0], "N"),
        atom_line("ATOM", 8, "OE1", "GLU", 'A', 60, ' ', [20.0, 0.0, 0.0], "O"),
        atom_line("HETATM", 9, "O", "HOH", 'W', 1, ' ', [0.0, 0.0, 2.0], "O"),
    ];
    let mut pdb = lines.join("\n");
    pdb.push_str("\nEND\n");
    pdb
}

fn read_structure(path: &Path) -> Structure {
    let reader = BufReader::new(File::open(path).expect("open pdb"));
    StructureReader::new(reader, Format::Pdb)
        .clean(CleanConfig::solvent())
        .read()
        .expect("read pdb")
}

fn setup() -> (TempDir, std::path::PathBuf, Structure) {
    let dir = TempDir::new().expect("temp dir");
    let pdb_path = dir.path().join("complex.pdb");
    fs::write(&pdb_path, interface_pdb()).expect("write pdb");
    let structure = read_structure(&pdb_path);
    (dir, pdb_path, structure)
}

fn write_report(report: &ContactReport, path: &Path, format: Format) -> String {
    let file = BufWriter::new(File::create(path).expect("create report"));
    ReportWriter::new(file, format)
        .write(report)
        .expect("write report");
    fs::read_to_string(path).expect("read report back")
}

#[test]
fn text_report_lists_sorted_residues_per_chain() {
    let (dir, pdb_path, structure) = setup();
    assert_eq!(structure.atom_count(), 8);

    let config = ContactConfig::new(["H", "L"], "A");
    let report =
        find_contacts_in(&structure, &config, Some(pdb_path.clone())).expect("find contacts");

    let text = write_report(&report, &dir.path().join("contacts.txt"), Format::Text);
    let expected = format!(
        "# Contact Residues within 4.0 Å\n\
         # Structure: {}\n\
         \n\
         ## Antibody Chain (H) Contact Residues:\n\
         SER100\n\
         TYR100A\n\
         \n\
         ## Antibody Chain (L) Contact Residues:\n\
         ASP92\n\
         \n\
         ## Protein Chain (A) Contact Residues:\n\
         LYS50\n",
        pdb_path.display()
    );
    assert_eq!(text, expected);
}

#[test]
fn antigen_contacts_record_every_matched_atom() {
    let (_dir, _pdb_path, structure) = setup();

    let report = find_contacts_in(&structure, &ContactConfig::new(["H", "L"], "A"), None)
        .expect("find contacts");

    let (residue, atoms) = report
        .antigen
        .contacts
        .iter()
        .next()
        .expect("one antigen residue");
    assert_eq!(residue, &ContactResidue::new("LYS", 50, None));
    let atoms: Vec<&str> = atoms.iter().map(String::as_str).collect();
    assert_eq!(atoms, vec!["CE", "NZ"]);
}

#[test]
fn tighter_cutoff_yields_a_subset() {
    let (_dir, _pdb_path, structure) = setup();

    let wide = find_contacts_in(&structure, &ContactConfig::new(["H", "L"], "A"), None)
        .expect("wide search");
    let tight = find_contacts_in(
        &structure,
        &ContactConfig::new(["H", "L"], "A").cutoff(3.5),
        None,
    )
    .expect("tight search");

    for (narrow, broad) in tight.antibody.iter().zip(&wide.antibody) {
        assert!(narrow.contacts.is_subset(&broad.contacts));
    }
    assert!(tight.antigen.contacts.is_subset(&wide.antigen.contacts));

    // OG at exactly 3.5 Å stays in; ASP L92 at 3.9 Å drops out.
    assert!(tight.antibody[0]
        .contacts
        .contains(&ContactResidue::new("SER", 100, None)));
    assert!(tight.antibody[1].contacts.is_empty());
}

#[test]
fn pymol_script_selects_exact_atoms() {
    let (dir, pdb_path, structure) = setup();

    let report = find_contacts_in(
        &structure,
        &ContactConfig::new(["H", "L"], "A"),
        Some(pdb_path.clone()),
    )
    .expect("find contacts");

    let script = write_report(&report, &dir.path().join("contacts.pml"), Format::Pml);

    assert!(script.contains(&format!("load {}", pdb_path.display())));
    assert!(script.contains(
        "select ab_contacts_H, chain H and ((resi 100 and name OG) or (resi 100A and name OH))"
    ));
    assert!(script.contains("select ab_contacts_L, chain L and ((resi 92 and name OD1))"));
    assert!(script.contains("select prot_contacts, chain A and ((resi 50 and name CE+NZ))"));
    assert!(script.contains("zoom (prot_contacts or chain H+L)"));
}

#[test]
fn json_report_carries_labels_and_atoms() {
    let (dir, pdb_path, structure) = setup();

    let report = find_contacts_in(
        &structure,
        &ContactConfig::new(["H", "L"], "A"),
        Some(pdb_path),
    )
    .expect("find contacts");

    let json = write_report(&report, &dir.path().join("contacts.json"), Format::Json);
    let doc: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(doc["cutoff"], 4.0);
    assert_eq!(doc["antibody_chains"][0]["chain"], "H");
    assert_eq!(doc["antibody_chains"][0]["residues"][1]["label"], "TYR100A");
    assert_eq!(doc["antibody_chains"][0]["residues"][1]["insertion_code"], "A");
    assert_eq!(doc["antigen"]["residues"][0]["atoms"][1], "NZ");
}

#[test]
fn missing_antibody_chain_yields_empty_section() {
    let (_dir, _pdb_path, structure) = setup();

    let report = find_contacts_in(&structure, &ContactConfig::new(["H", "K"], "A"), None)
        .expect("missing chains are not fatal");

    assert_eq!(report.antibody[1].chain_id, "K");
    assert!(report.antibody[1].contacts.is_empty());
    assert_eq!(report.antigen.contacts.len(), 1);
}

fn with_alt(line: String, alt_id: char, occupancy: f64) -> String {
    format!(
        "{}{}{}{:>6.2}{}",
        &line[..16],
        alt_id,
        &line[17..54],
        occupancy,
        &line[60..]
    )
}

fn contacts_for(pdb: String) -> ContactReport {
    let dir = TempDir::new().expect("temp dir");
    let pdb_path = dir.path().join("complex.pdb");
    fs::write(&pdb_path, pdb).expect("write pdb");
    let structure = read_structure(&pdb_path);
    find_contacts_in(&structure, &ContactConfig::new(["H"], "A"), None).expect("find contacts")
}

#[test]
fn minor_alternate_conformer_counts_as_contact() {
    let lines = [
        atom_line("ATOM", 1, "CB", "SER", 'H', 31, ' ', [21.0, 0.0, 0.0], "C"),
        with_alt(
            atom_line("ATOM", 2, "OG", "SER", 'H', 31, ' ', [20.0, 0.0, 0.0], "O"),
            'A',
            0.60,
        ),
        with_alt(
            atom_line("ATOM", 3, "OG", "SER", 'H', 31, ' ', [0.0, 3.0, 0.0], "O"),
            'B',
            0.40,
        ),
        atom_line("ATOM", 4, "NZ", "LYS", 'A', 50, ' ', [0.0, 0.0, 0.0], "N"),
    ];
    let report = contacts_for(format!("{}\nEND\n", lines.join("\n")));

    let ser: Vec<_> = report.antibody[0].contacts.residues().collect();
    assert_eq!(ser, vec![&ContactResidue::new("SER", 31, None)]);
    let lys: Vec<_> = report.antigen.contacts.residues().collect();
    assert_eq!(lys, vec![&ContactResidue::new("LYS", 50, None)]);
}

#[test]
fn water_on_antibody_chain_is_not_a_contact() {
    let lines = [
        atom_line("ATOM", 1, "OG", "SER", 'H', 31, ' ', [12.0, 0.0, 0.0], "O"),
        atom_line("HETATM", 2, "O", "HOH", 'H', 301, ' ', [0.0, 2.5, 0.0], "O"),
        atom_line("ATOM", 3, "NZ", "LYS", 'A', 50, ' ', [0.0, 0.0, 0.0], "N"),
    ];
    let report = contacts_for(format!("{}\nEND\n", lines.join("\n")));

    assert!(report.antibody[0].contacts.is_empty());
    assert!(report.antigen.contacts.is_empty());
}
