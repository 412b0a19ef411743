use thiserror::Error;

/// Failures while turning a visit analysis into a summary document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The summary template has a syntax error.
    #[error("summary template '{name}' is invalid: {message}")]
    TemplateParse { name: String, message: String },

    /// The template parsed but referenced something the visit context lacks.
    #[error("summary template '{name}' failed to render: {message}")]
    TemplateRender { name: String, message: String },

    #[error("could not build DOCX: {0}")]
    Docx(String),

    #[error("could not serialize report context: {0}")]
    Context(#[from] serde_json::Error),
}
