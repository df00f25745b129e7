use std::path::Path;

use abcontact::io::Format;

pub fn input(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "pdb" | "ent" => Some(Format::Pdb),
        "cif" | "mmcif" => Some(Format::Mmcif),
        _ => None,
    }
}

pub fn output(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "txt" | "text" => Some(Format::Text),
        "json" => Some(Format::Json),
        "pml" => Some(Format::Pml),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_extensions() {
        assert_eq!(input(Path::new("1abc.pdb")), Some(Format::Pdb));
        assert_eq!(input(Path::new("pdb1abc.ENT")), Some(Format::Pdb));
        assert_eq!(input(Path::new("1abc.cif")), Some(Format::Mmcif));
        assert_eq!(input(Path::new("1abc.txt")), None);
        assert_eq!(input(Path::new("1abc")), None);
    }

    #[test]
    fn report_extensions() {
        assert_eq!(output(Path::new("out.txt")), Some(Format::Text));
        assert_eq!(output(Path::new("out.JSON")), Some(Format::Json));
        assert_eq!(output(Path::new("view.pml")), Some(Format::Pml));
        assert_eq!(output(Path::new("out.pdb")), None);
    }
}
