use hearwell_export::docx::generate_docx;
use hearwell_export::styles::DocumentStyles;

#[test]
fn docx_output_is_a_zip_package() {
    let text = "# Hearing Assessment Summary\n\n**Customer:** Park\n\n## Pure-Tone Audiometry\n- PTA (3-point): 70 dB HL\n---\nnext page";
    let bytes = generate_docx(text, &DocumentStyles::default()).expect("docx");
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn unbalanced_bold_marker_still_generates() {
    let styles = DocumentStyles {
        body_font: "Arial".to_string(),
        ..DocumentStyles::default()
    };
    let bytes = generate_docx("**open bold without close", &styles).expect("docx");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn empty_input_still_generates_a_document() {
    let bytes = generate_docx("", &DocumentStyles::default()).expect("docx");
    assert_eq!(&bytes[..2], b"PK");
}
