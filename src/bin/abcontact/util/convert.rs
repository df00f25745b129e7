use abcontact::io::Format;

use crate::cli;

impl From<cli::InputFormat> for Format {
    fn from(f: cli::InputFormat) -> Self {
        match f {
            cli::InputFormat::Pdb => Self::Pdb,
            cli::InputFormat::Mmcif => Self::Mmcif,
        }
    }
}

impl From<cli::ReportFormat> for Format {
    fn from(f: cli::ReportFormat) -> Self {
        match f {
            cli::ReportFormat::Text => Self::Text,
            cli::ReportFormat::Json => Self::Json,
            cli::ReportFormat::Pml => Self::Pml,
        }
    }
}

pub fn format_display_name(format: Format) -> &'static str {
    match format {
        Format::Pdb => "PDB",
        Format::Mmcif => "mmCIF",
        Format::Text => "text report",
        Format::Json => "JSON report",
        Format::Pml => "PyMOL script",
    }
}
