use std::collections::HashSet;
use std::fmt;
use std::io::{BufRead, Write};

pub mod altloc;
pub mod error;
pub mod util;

pub mod json;
pub mod mmcif;
pub mod pdb;
pub mod pml;
pub mod text;

pub use error::Error;
pub use json::writer::write as write_json_report;
pub use pml::writer::{PALETTE, write as write_pml_script};
pub use text::writer::write as write_text_report;

use crate::model::contact::ContactReport;
use crate::model::structure::Structure;

#[derive(Debug, Clone, Default)]
pub struct CleanConfig {
    pub remove_water: bool,
    pub remove_ions: bool,
    pub remove_hydrogens: bool,
    pub remove_hetero: bool,
    pub remove_residue_names: HashSet<String>,
    pub keep_residue_names: HashSet<String>,
}

impl CleanConfig {
    /// Removes water only, matching the viewer's `remove solvent`.
    pub fn solvent() -> Self {
        Self {
            remove_water: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdb,
    Mmcif,
    Text,
    Json,
    Pml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Pdb => write!(f, "PDB"),
            Format::Mmcif => write!(f, "mmCIF"),
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "JSON"),
            Format::Pml => write!(f, "PyMOL script"),
        }
    }
}

/// Builder that reads a structure file and optionally cleans it.
///
/// ```no_run
/// use abcontact::io::{CleanConfig, Format, StructureReader};
/// use std::fs::File;
/// use std::io::BufReader;
///
/// let file = BufReader::new(File::open("1abc.pdb")?);
/// let structure = StructureReader::new(file, Format::Pdb)
///     .clean(CleanConfig::solvent())
///     .read()?;
/// println!("{} atoms", structure.atom_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct StructureReader<R: BufRead> {
    pub(crate) reader: R,
    pub(crate) format: Format,
    pub(crate) clean_config: Option<CleanConfig>,
}

impl<R: BufRead> StructureReader<R> {
    pub fn new(reader: R, format: Format) -> Self {
        Self {
            reader,
            format,
            clean_config: None,
        }
    }

    pub fn clean(mut self, config: CleanConfig) -> Self {
        self.clean_config = Some(config);
        self
    }

    pub fn read(self) -> Result<Structure, Error> {
        match self.format {
            Format::Pdb => pdb::reader::read(self),
            Format::Mmcif => mmcif::reader::read(self),
            other => Err(Error::UnsupportedReadFormat(other)),
        }
    }
}

/// Writes a [`ContactReport`] in one of the report formats.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: Format,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: Format) -> Self {
        Self { writer, format }
    }

    pub fn write(mut self, report: &ContactReport) -> Result<(), Error> {
        match self.format {
            Format::Text => text::writer::write(&mut self.writer, report)?,
            Format::Json => json::writer::write(&mut self.writer, report)?,
            Format::Pml => pml::writer::write(&mut self.writer, report)?,
            other => return Err(Error::UnsupportedWriteFormat(other)),
        }
        self.writer.flush()?;
        Ok(())
    }
}
