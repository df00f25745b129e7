use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

const PANEL_WIDTH: usize = 62;

/// Renders `err`, its cause chain and any hints as a boxed panel on stderr.
pub fn print_error(err: &Error) {
    let mut panel = Panel::new(io::stderr().lock());

    panel.top();
    panel.line(2, "✗ Error");
    panel.divider();
    panel.wrapped(2, &err.to_string());

    for cause in err.chain().skip(1) {
        panel.divider();
        panel.line(2, "Caused by:");
        panel.wrapped(4, &cause.to_string());
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        panel.divider();
        panel.line(2, "Hints:");
        for hint in &hints {
            panel.bullet(hint);
        }
    }

    panel.bottom();
}

struct Panel<W: Write> {
    out: W,
}

impl<W: Write> Panel<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn top(&mut self) {
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "   ╔{}╗", "═".repeat(PANEL_WIDTH));
    }

    fn divider(&mut self) {
        let _ = writeln!(self.out, "   ╟{}╢", "─".repeat(PANEL_WIDTH));
    }

    fn bottom(&mut self) {
        let _ = writeln!(self.out, "   ╚{}╝", "═".repeat(PANEL_WIDTH));
        let _ = writeln!(self.out);
    }

    fn line(&mut self, indent: usize, text: &str) {
        let width = PANEL_WIDTH - indent - 1;
        let _ = writeln!(self.out, "   ║{}{:<width$} ║", " ".repeat(indent), text);
    }

    fn wrapped(&mut self, indent: usize, text: &str) {
        for line in wrap(text, PANEL_WIDTH - indent - 1) {
            self.line(indent, &line);
        }
    }

    fn bullet(&mut self, text: &str) {
        let wrapped = wrap(text, PANEL_WIDTH - 7);
        for (i, line) in wrapped.iter().enumerate() {
            let marker = if i == 0 { "• " } else { "  " };
            self.line(4, &format!("{marker}{line}"));
        }
    }
}

/// Gathers remediation hints from typed errors first, then from message text.
#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    typed: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        collector.collect_io_hints(err);
        collector.collect_contact_hints(err);

        if !collector.typed {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use abcontact::io::Error as IoError;

        if let Some(source) = err.downcast_ref::<std::io::Error>() {
            self.typed = true;
            self.collect_std_io_hints(source);
            return;
        }

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.typed = true;

        match io_err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::UnsupportedReadFormat(fmt) => {
                self.add(format!("The '{}' format cannot be used for input", fmt));
                self.add("Supported input formats: pdb, mmcif");
            }

            IoError::UnsupportedWriteFormat(fmt) => {
                self.add(format!("The '{}' format cannot be used for a report", fmt));
                self.add("Supported report formats: text, json, pml");
            }

            IoError::Clean(_) => {
                self.add("Structure cleaning failed");
                self.add("Check the --remove and --keep residue lists");
                self.add("Or pass --keep-water to skip solvent removal");
            }

            IoError::StructureParse(msg) => {
                let msg = msg.to_lowercase();
                if msg.contains("cif") || msg.contains("loop") {
                    self.add("mmCIF: Verify the _atom_site loop and its column headers");
                } else {
                    self.add("PDB: Check ATOM/HETATM record columns (1-80)");
                }
                self.add("Try --infmt if the file extension is misleading");
            }

            IoError::Serialization(_) => {
                self.add("The JSON report could not be serialized");
                self.add("Try the text report with --outfmt text");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData | ErrorKind::UnexpectedEof => {
                self.add("File contains invalid or truncated data");
                self.add("Verify the download of the structure completed");
            }

            ErrorKind::BrokenPipe => {
                self.add("Output consumer closed the pipe early");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_contact_hints(&mut self, err: &Error) {
        use abcontact::ContactError;

        let Some(contact_err) = err.downcast_ref::<ContactError>() else {
            return;
        };

        self.typed = true;

        match contact_err {
            ContactError::EmptyAntibodyChains => {
                self.add("Pass at least one antibody chain, e.g. -H H,L");
            }

            ContactError::InvalidChainId(_) => {
                self.add("Chain identifiers must be non-empty without whitespace");
                self.add("Run `abcontact chains -i <INPUT>` to list available chains");
            }

            ContactError::InvalidCutoff(_) => {
                self.add("The cutoff is a distance in Ångström and must be positive");
                self.add("Typical interface cutoffs range from 3.5 to 5.0");
            }

            ContactError::AntigenIsAntibody(chain) => {
                self.add(format!(
                    "Chain {} cannot be both antibody and antigen",
                    chain
                ));
                self.add("Remove it from -H/--antibody or choose another -g/--antigen");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Provide input via -i/--input or pipe data to stdin");
            return;
        }

        if msg.contains("infer format") {
            self.add("Recognized structure extensions: .pdb, .ent, .cif, .mmcif");
            self.add("Recognized report extensions: .txt, .json, .pml");
            return;
        }

        if msg.contains("job file") || msg.contains("toml") {
            self.add("Job files accept: structure, antibody_chains, antigen_chain, cutoff, outputs");
            self.add("Relative paths are resolved against the job file's directory");
            return;
        }

        if msg.contains("chain") {
            self.add("Run `abcontact chains -i <INPUT>` to list available chains");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
