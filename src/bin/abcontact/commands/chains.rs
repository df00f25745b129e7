use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use abcontact::io::{Format, StructureReader};

use crate::cli::ChainsArgs;
use crate::config::build_clean_config;
use crate::display::{Context as DisplayContext, write_chain_breakdown};
use crate::io::{infer_input_format, input_label, open_input, stdin_is_tty};

pub fn run_chains(args: ChainsArgs, _ctx: DisplayContext) -> Result<()> {
    if args.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: abcontact chains -i <INPUT> or pipe data via stdin."
        );
    }

    let format = resolve_input_format(&args)?;
    let reader = open_input(args.input.as_deref())?;

    let structure = StructureReader::new(reader, format)
        .clean(build_clean_config(&args.clean))
        .read()
        .with_context(|| {
            format!(
                "Failed to read structure from {}",
                input_label(args.input.as_deref())
            )
        })?;

    if structure.is_empty() {
        log::warn!("structure contains no atoms after cleaning");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_chain_breakdown(&mut out, &structure);
    out.flush().context("Failed to write chain listing")?;

    Ok(())
}

fn resolve_input_format(args: &ChainsArgs) -> Result<Format> {
    if let Some(fmt) = args.input_format {
        return Ok(fmt.into());
    }

    match &args.input {
        Some(path) => infer_input_format(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Cannot infer format from '{}'. Use --infmt to specify.",
                path.display()
            )
        }),
        None => bail!("Reading from stdin requires --infmt"),
    }
}
