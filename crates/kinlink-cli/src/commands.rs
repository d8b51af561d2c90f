use std::io::{self, Write};

use anyhow::{Context, Result, ensure};
use comfy_table::{Cell, Table};
use tracing::info_span;

use kinlink_cli::pipeline;
use kinlink_cli::types::{RunConfig, RunResult};
use kinlink_report::ReportFormat;
use kinlink_validate::{Stage, ValidationOptions};

use crate::cli::{ReportFormatArg, RunArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Rule"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for (index, stage) in Stage::ALL.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(stage.name()),
            Cell::new(stage.description()),
        ]);
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{table}").context("write rules table")?;
    Ok(())
}

pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let config = run_config(args)?;
    let span = info_span!(
        "run",
        input = %config.input.display(),
        output = %config.output.display()
    );
    let _guard = span.enter();
    Ok(pipeline::run(&config))
}

fn run_config(args: &RunArgs) -> Result<RunConfig> {
    ensure!(args.max_field_len > 0, "--max-field-len must be at least 1");
    Ok(RunConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        max_records: args.max_records,
        format: match args.format {
            ReportFormatArg::Text => ReportFormat::Text,
            ReportFormatArg::Json => ReportFormat::Json,
        },
        validation: ValidationOptions::new().with_max_field_len(args.max_field_len),
    })
}
