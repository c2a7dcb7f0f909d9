//! Output formatting: text, table, JSON, YAML.
//!
//! `--output` picks the format. Tables go through `tabled`, JSON and YAML
//! through serde, and text is whatever the command decides.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Dispatch ────────────────────────────────────────────────────────

/// Format a list of items.
///
/// Tables are built from `to_row`; text mode prints `id_fn` of each item
/// on its own line; structured formats serialize `data` as is.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Text => Ok(data.iter().map(&id_fn).collect::<Vec<_>>().join("\n")),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Format one item.
///
/// Text and table both use `text_fn`; single items have no tabular form.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    text_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize + ?Sized,
{
    match format {
        OutputFormat::Text | OutputFormat::Table => Ok(text_fn(data)),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Write to stdout unless `--quiet` is set or there is nothing to print.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Formats ─────────────────────────────────────────────────────────

pub(crate) fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let text = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(text)
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize, Tabled)]
    struct Row {
        name: &'static str,
        paginated: bool,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "GetDeployment",
                paginated: false,
            },
            Row {
                name: "ListDeployments",
                paginated: true,
            },
        ]
    }

    #[test]
    fn text_lists_one_item_per_line() {
        let out = render_list(
            OutputFormat::Text,
            &rows(),
            |r| Row {
                name: r.name,
                paginated: r.paginated,
            },
            |r| r.name.to_owned(),
        )
        .unwrap();
        assert_eq!(out, "GetDeployment\nListDeployments");
    }

    #[test]
    fn compact_json_is_one_line() {
        let out = render_single(OutputFormat::JsonCompact, &rows()[1], |_| String::new()).unwrap();
        assert_eq!(out, r#"{"name":"ListDeployments","paginated":true}"#);
    }

    #[test]
    fn table_has_headers() {
        let out = render_list(
            OutputFormat::Table,
            &rows(),
            |r| Row {
                name: r.name,
                paginated: r.paginated,
            },
            |r| r.name.to_owned(),
        )
        .unwrap();
        assert!(out.contains("name"));
        assert!(out.contains("ListDeployments"));
    }
}
