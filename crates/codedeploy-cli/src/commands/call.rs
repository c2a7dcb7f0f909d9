//! `cdshape call`: send one request and print the decoded response.

use tracing::{debug, warn};

use codedeploy_model::{ValidationMode, operation};

use crate::cli::{CallArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(args: &CallArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let info = operation::find(&args.operation)?;
    let json = match args.file {
        Some(ref path) => util::read_payload(Some(path))?,
        None => "{}".to_owned(),
    };

    let request = (info.inspect_input)(&json)?;
    let client = config::build_client(global)?;

    if let Some(ref violations) = request.violations {
        match client.validation() {
            ValidationMode::Strict => {
                return Err(CliError::ConstraintViolations {
                    operation: info.name.to_owned(),
                    count: violations.len(),
                    details: violations.to_string(),
                });
            }
            ValidationMode::Warn => {
                warn!(operation = info.name, %violations, "request violates documented constraints; sending anyway");
            }
            ValidationMode::Off => {}
        }
    }

    debug!(operation = info.name, request = %request.rendered, "sending");
    let body = serde_json::to_vec(&request.canonical)?;
    let raw = client.send_raw(info.name, body).await?;

    let text = String::from_utf8(raw).map_err(|e| CliError::Decode {
        message: format!("response body is not valid UTF-8: {e}"),
    })?;

    if args.raw {
        output::print_output(&text, global.quiet);
        return Ok(());
    }

    let response = (info.inspect_output)(&text)?;
    let rendered = output::render_single(global.output_format(), &response.canonical, |_| {
        response.rendered.clone()
    })?;
    output::print_output(&rendered, global.quiet);
    Ok(())
}
