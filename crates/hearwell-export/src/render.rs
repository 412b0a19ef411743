use tera::{Context, Tera};

use crate::context::ReportContext;
use crate::error::ExportError;

/// Built-in visit summary. Produces the Markdown subset that
/// [`crate::docx::generate_docx`] understands.
pub const VISIT_SUMMARY_TEMPLATE: &str = include_str!("../templates/visit_summary.md.tera");

const VISIT_SUMMARY_NAME: &str = "visit_summary.md";

/// Render a visit summary from a clinic-supplied template.
///
/// Every [`ReportContext`] field is a top-level template variable
/// (`customer_name`, `pure_tone.ears`, `protocol.outstanding`, ...). Values
/// are already formatted, so templates only place text.
pub fn render_template(
    name: &str,
    template: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, template)
        .map_err(|e| ExportError::TemplateParse {
            name: name.to_string(),
            message: error_chain(&e),
        })?;

    let variables =
        Context::from_value(serde_json::to_value(context)?).map_err(|e| {
            ExportError::TemplateRender {
                name: name.to_string(),
                message: error_chain(&e),
            }
        })?;
    let summary = tera
        .render(name, &variables)
        .map_err(|e| ExportError::TemplateRender {
            name: name.to_string(),
            message: error_chain(&e),
        })?;

    tracing::debug!(template = name, bytes = summary.len(), "rendered visit summary");
    Ok(summary)
}

/// Render the built-in visit summary.
pub fn render_visit_summary(context: &ReportContext) -> Result<String, ExportError> {
    render_template(VISIT_SUMMARY_NAME, VISIT_SUMMARY_TEMPLATE, context)
}

/// Tera keeps the useful detail (line, missing variable) in the source chain.
fn error_chain(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
