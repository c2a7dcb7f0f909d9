//! `cdshape operations`: list the operation registry.

use serde::Serialize;
use tabled::Tabled;

use codedeploy_model::operations::REGISTRY;

use crate::cli::{GlobalOpts, OperationsArgs};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize, Tabled)]
struct OperationRow {
    #[tabled(rename = "Operation")]
    name: &'static str,
    #[tabled(rename = "Paginated")]
    paginated: bool,
}

pub fn handle(args: &OperationsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let rows: Vec<OperationRow> = REGISTRY
        .iter()
        .filter(|info| !args.paginated || info.paginated)
        .map(|info| OperationRow {
            name: info.name,
            paginated: info.paginated,
        })
        .collect();

    let rendered = output::render_list(
        global.output_format(),
        &rows,
        |row| OperationRow {
            name: row.name,
            paginated: row.paginated,
        },
        |row| row.name.to_owned(),
    )?;
    output::print_output(&rendered, global.quiet);
    Ok(())
}
