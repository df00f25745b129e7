use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use abcontact::io::{Format, ReportWriter, StructureReader};
use abcontact::{ContactConfig, ContactReport, Structure, find_contacts_in};

use crate::cli::FindArgs;
use crate::config::{JobFile, build_clean_config, build_contact_config, clean_actions, load_job};
use crate::display::{
    Context as DisplayContext, Progress, print_chain_breakdown, print_contact_summary,
    print_structure_info,
};
use crate::io::{
    OutputSpec, create_output, infer_input_format, infer_output_format, input_label, open_input,
    stdin_is_tty, stdout_is_tty,
};
use crate::util::convert::format_display_name;
use crate::util::path::with_suffix;

const TOTAL_STEPS: u8 = 3;

pub fn run_find(args: FindArgs, ctx: DisplayContext) -> Result<()> {
    let job = match &args.job {
        Some(path) => load_job(path)?,
        None => JobFile::default(),
    };

    let input = args.io.input.clone().or_else(|| job.structure.clone());
    if input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: abcontact find -i <INPUT> -H <CHAINS> -g <CHAIN> or pipe data via stdin."
        );
    }

    let contact_config = build_contact_config(&args.contact, &job)?;
    let input_format = resolve_input_format(&args, input.as_deref())?;
    let output_specs = resolve_outputs(&args, &job, input.as_deref(), stdout_is_tty())?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let structure = read_structure(&args, input.as_deref(), input_format)?;

    let read_substeps = build_read_substeps(&args, input_format, &structure);
    let read_substeps_ref: Vec<&str> = read_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reading structure", &read_substeps_ref);

    if ctx.interactive {
        print_structure_info(&structure);
        print_chain_breakdown(&structure);
    }

    progress.step("Searching interface contacts");
    let report = find_contacts_in(&structure, &contact_config, input.clone())
        .context("Contact search failed")?;

    let search_substeps = build_search_substeps(&contact_config, &report);
    let search_substeps_ref: Vec<&str> = search_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Searching interface contacts", &search_substeps_ref);

    if ctx.interactive {
        print_contact_summary(&report);
    }

    progress.step("Writing output");
    write_outputs(&report, &output_specs)?;

    let write_substeps = build_write_substeps(&output_specs);
    let write_substeps_ref: Vec<&str> = write_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Writing output", &write_substeps_ref);

    progress.finish();

    if !args.io.quiet {
        let saved: Vec<String> = output_specs
            .iter()
            .filter_map(|s| s.path.as_ref().map(|p| p.display().to_string()))
            .collect();
        if !saved.is_empty() {
            eprintln!(
                "Contact analysis complete. Results saved to '{}'.",
                saved.join("', '")
            );
        }
    }

    Ok(())
}

fn build_read_substeps(args: &FindArgs, format: Format, structure: &Structure) -> Vec<String> {
    let mut steps = vec![format!("Parse {} file", format_display_name(format))];

    let actions = clean_actions(&args.clean);
    if !actions.is_empty() {
        steps.push(format!("Remove {}", actions.join(", ")));
    }

    steps.push(format!(
        "{} atoms in {} chain(s)",
        structure.atom_count(),
        structure.chain_ids().len()
    ));

    steps
}

fn build_search_substeps(config: &ContactConfig, report: &ContactReport) -> Vec<String> {
    let mut steps = Vec::with_capacity(report.antibody.len() + 2);

    steps.push(format!("Cutoff {:.2} Å", config.cutoff));
    for chain in &report.antibody {
        steps.push(format!(
            "Antibody chain {} → {} residue(s)",
            chain.chain_id,
            chain.contacts.len()
        ));
    }
    steps.push(format!(
        "Antigen chain {} → {} residue(s)",
        report.antigen.chain_id,
        report.antigen.contacts.len()
    ));

    steps
}

fn build_write_substeps(specs: &[OutputSpec]) -> Vec<String> {
    specs
        .iter()
        .map(|spec| format!("Write {} → {}", format_display_name(spec.format), spec.label()))
        .collect()
}

fn resolve_input_format(args: &FindArgs, input: Option<&Path>) -> Result<Format> {
    if let Some(fmt) = args.input_format {
        return Ok(fmt.into());
    }

    if let Some(path) = input {
        if let Some(fmt) = infer_input_format(path) {
            return Ok(fmt);
        }
        bail!(
            "Cannot infer format from '{}'. Use --infmt to specify.",
            path.display()
        );
    }

    bail!("Reading from stdin requires --infmt");
}

/// Suffix of the report written next to the input when no output is given.
fn default_report_suffix(format: Format) -> &'static str {
    match format {
        Format::Json => "_contacts.json",
        Format::Pml => "_contacts.pml",
        _ => "_contacts.txt",
    }
}

fn resolve_outputs(
    args: &FindArgs,
    job: &JobFile,
    input: Option<&Path>,
    stdout_tty: bool,
) -> Result<Vec<OutputSpec>> {
    let outputs: &[PathBuf] = if !args.io.output.is_empty() {
        &args.io.output
    } else {
        &job.outputs
    };

    if outputs.is_empty() {
        let format = args.output_format.map(|f| f.into()).unwrap_or(Format::Text);
        if !stdout_tty {
            return Ok(vec![OutputSpec { path: None, format }]);
        }
        let Some(input) = input else {
            bail!(
                "No output file specified and stdout is a terminal.\n\nUsage: abcontact find ... -o <REPORT> or pipe output."
            );
        };
        return Ok(vec![OutputSpec {
            path: Some(with_suffix(input, default_report_suffix(format))),
            format,
        }]);
    }

    let mut specs = Vec::with_capacity(outputs.len());

    let first = &outputs[0];
    let first_format = if let Some(fmt) = args.output_format {
        fmt.into()
    } else if let Some(fmt) = infer_output_format(first) {
        fmt
    } else {
        bail!(
            "Cannot infer format from '{}'. Use --outfmt to specify.",
            first.display()
        );
    };
    specs.push(OutputSpec {
        path: Some(first.clone()),
        format: first_format,
    });

    for path in &outputs[1..] {
        let format = infer_output_format(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Cannot infer format from '{}'. Use explicit extension (.txt, .json, .pml).",
                path.display()
            )
        })?;
        specs.push(OutputSpec {
            path: Some(path.clone()),
            format,
        });
    }

    Ok(specs)
}

fn read_structure(args: &FindArgs, input: Option<&Path>, format: Format) -> Result<Structure> {
    let reader = open_input(input)?;

    StructureReader::new(reader, format)
        .clean(build_clean_config(&args.clean))
        .read()
        .with_context(|| format!("Failed to read structure from {}", input_label(input)))
}

fn write_outputs(report: &ContactReport, specs: &[OutputSpec]) -> Result<()> {
    for spec in specs {
        let writer = create_output(spec.path.as_deref())?;

        ReportWriter::new(writer, spec.format)
            .write(report)
            .with_context(|| format!("Failed to write {}", format_display_name(spec.format)))?;
    }

    Ok(())
}
