use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "abcontact",
    about = "Antibody-antigen interface contact residues",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find contact residues between antibody chains and an antigen chain
    #[command(visible_alias = "f")]
    Find(FindArgs),

    /// List the chains of a structure with residue and atom counts
    #[command(visible_alias = "c")]
    Chains(ChainsArgs),
}

/// I/O options for the find command.
#[derive(Args)]
pub struct IoOptions {
    /// Input structure (stdin if omitted, requires --infmt)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Report file(s), repeatable for multi-format output (.txt, .json, .pml)
    #[arg(short, long, value_name = "FILE", action = clap::ArgAction::Append)]
    pub output: Vec<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Interface")]
pub struct ContactOptions {
    /// Antibody chain ID(s), repeatable or comma-separated (e.g. -H H,L)
    #[arg(
        short = 'H',
        long = "antibody",
        value_name = "CHAIN",
        value_delimiter = ',',
        action = clap::ArgAction::Append
    )]
    pub antibody: Vec<String>,

    /// Antigen chain ID
    #[arg(short = 'g', long = "antigen", value_name = "CHAIN")]
    pub antigen: Option<String>,

    /// Contact distance cutoff (Å) [default: 4.0]
    #[arg(short, long, value_name = "Å")]
    pub cutoff: Option<f64>,
}

#[derive(Args)]
#[command(next_help_heading = "Structure Cleaning")]
pub struct CleanOptions {
    /// Keep water molecules (removed by default)
    #[arg(long)]
    pub keep_water: bool,

    /// Remove ions
    #[arg(long)]
    pub no_ions: bool,

    /// Remove hydrogens
    #[arg(long)]
    pub no_hydrogens: bool,

    /// Remove hetero atoms (HETATM)
    #[arg(long)]
    pub no_hetero: bool,

    /// Remove specific residues (comma-separated names)
    #[arg(long, value_name = "RES", value_delimiter = ',')]
    pub remove: Vec<String>,

    /// Keep only these residues (comma-separated names)
    #[arg(long, value_name = "RES", value_delimiter = ',')]
    pub keep: Vec<String>,
}

#[derive(Args)]
pub struct FindArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Input format (inferred from extension if not specified)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Report format for first/only output
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<ReportFormat>,

    /// Job file (TOML) providing structure, chains, cutoff and outputs
    #[arg(long, value_name = "FILE")]
    pub job: Option<PathBuf>,

    #[command(flatten)]
    pub contact: ContactOptions,

    #[command(flatten)]
    pub clean: CleanOptions,
}

#[derive(Args)]
pub struct ChainsArgs {
    /// Input structure (stdin if omitted, requires --infmt)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format (inferred from extension if not specified)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub clean: CleanOptions,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormat {
    Pdb,
    Mmcif,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Plain-text contact listing
    #[value(alias = "txt")]
    Text,
    /// JSON document with matched atoms
    Json,
    /// PyMOL command script highlighting the interface
    #[value(alias = "pymol")]
    Pml,
}

pub fn parse() -> Cli {
    Cli::parse()
}
