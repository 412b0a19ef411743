use std::path::Path;

use eyre::WrapErr;

use hearwell_core::models::document::VisitDocument;
use hearwell_export::context::ReportContext;
use hearwell_export::docx::generate_docx;
use hearwell_export::render::{render_template, render_visit_summary};
use hearwell_scoring::analysis::VisitAnalysis;

use crate::config::{self, HearwellConfig, OutputFormat};

pub fn load_visit(path: &Path) -> eyre::Result<VisitDocument> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read visit document {}", path.display()))?;
    VisitDocument::from_json(&json)
        .wrap_err_with(|| format!("invalid visit document {}", path.display()))
}

/// Run the engine over a visit, logging any out-of-range thresholds.
pub fn analyze_document(document: &VisitDocument) -> VisitAnalysis {
    let analysis = VisitAnalysis::from_results(&document.results);
    let pure_tone = analysis.pure_tone.iter().flat_map(|p| &p.range_violations);
    let aided = analysis.aided.iter().flat_map(|a| &a.range_violations);
    for v in pure_tone.chain(aided) {
        tracing::warn!(
            ear = v.ear.label(),
            pathway = v.pathway.label(),
            frequency = v.frequency.hz(),
            value = v.value,
            "threshold outside -10..=120 dB HL"
        );
    }
    tracing::info!(
        visit_id = %document.visit.id,
        pure_tone = analysis.pure_tone.is_some(),
        speech = analysis.speech.is_some(),
        middle_ear = analysis.middle_ear.is_some(),
        aided = analysis.aided.is_some(),
        "visit analysed"
    );
    analysis
}

/// `json` prints the analysis itself, `text` prints the rendered summary.
pub fn format_analysis(
    document: &VisitDocument,
    analysis: &VisitAnalysis,
    format: OutputFormat,
    config: &HearwellConfig,
) -> eyre::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
        OutputFormat::Text => {
            let context = ReportContext::new(document, analysis, &config.preferences);
            Ok(render_visit_summary(&context)?)
        }
    }
}

/// Render the summary for a visit and return the bytes to write: DOCX, or
/// the Markdown text itself when `markdown` is set.
pub fn build_report(
    document: &VisitDocument,
    config: &HearwellConfig,
    template: Option<&Path>,
    markdown: bool,
) -> eyre::Result<Vec<u8>> {
    let analysis = analyze_document(document);
    let context = ReportContext::new(document, &analysis, &config.preferences);

    let rendered = match template {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read template {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_string());
            render_template(&name, &content, &context)?
        }
        None => render_visit_summary(&context)?,
    };

    if markdown {
        return Ok(rendered.into_bytes());
    }
    Ok(generate_docx(&rendered, &config.styles)?)
}

pub fn next_visit_line(document: &VisitDocument) -> String {
    match (
        document.visit.recommended_next_visit_date(),
        document.visit.effective_next_visit_rule(),
    ) {
        (Some(date), Some(rule)) => format!("{date} (in {} days)", rule.days()),
        _ => "no follow-up rule for this visit".to_string(),
    }
}

pub fn run_analyze(
    visit: &Path,
    format: Option<OutputFormat>,
    config: &HearwellConfig,
) -> eyre::Result<()> {
    let document = load_visit(visit)?;
    let analysis = analyze_document(&document);
    let output = format_analysis(
        &document,
        &analysis,
        format.unwrap_or(config.output_format),
        config,
    )?;
    println!("{output}");
    Ok(())
}

pub fn run_report(
    visit: &Path,
    out: &Path,
    template: Option<&Path>,
    markdown: bool,
    config: &HearwellConfig,
) -> eyre::Result<()> {
    let document = load_visit(visit)?;
    let bytes = build_report(&document, config, template, markdown)?;
    std::fs::write(out, &bytes)
        .wrap_err_with(|| format!("failed to write report {}", out.display()))?;
    tracing::info!(path = %out.display(), bytes = bytes.len(), "report written");
    Ok(())
}

pub fn run_next_visit(visit: &Path) -> eyre::Result<()> {
    let document = load_visit(visit)?;
    println!("{}", next_visit_line(&document));
    Ok(())
}

pub fn run_config_show(path: &Path, config: &HearwellConfig) -> eyre::Result<()> {
    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

/// Write the config, applying any overrides to what is already there.
pub fn run_config_init(
    path: &Path,
    mut config: HearwellConfig,
    center: Option<String>,
    counselor: Option<String>,
) -> eyre::Result<HearwellConfig> {
    if let Some(center) = center {
        config.preferences.center_id = center;
    }
    if let Some(counselor) = counselor {
        config.preferences.counselor_name = counselor;
    }
    config::save_config(path, &config)?;
    config::load_config(path)
}
