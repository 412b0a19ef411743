//! hearwell-scoring
//!
//! Audiometric scoring and validation. Pure functions only: no I/O, no
//! logging, no shared state. Every function is a deterministic mapping from
//! threshold data to derived values, labels, and flags.
//!
//! Absent measurements are a normal state here, not an error. They surface as
//! `None`, `UNKNOWN`, or an "insufficient data" message in the result.

pub mod abg;
pub mod agreement;
pub mod analysis;
pub mod classification;
pub mod eligibility;
pub mod masking;
pub mod pta;
pub mod range;
pub mod rounding;
pub mod tympanometry;

pub use abg::{AbgResult, calculate_abg};
pub use agreement::{AgreementResult, AgreementStatus, validate_srt_pta};
pub use classification::{ClassificationResult, HearingLossType, Severity, classify_hearing_loss};
pub use eligibility::{EligibilityResult, EligibilityRule, check_eligibility};
pub use masking::{MaskingResult, check_masking_need};
pub use pta::{pta3, pta6};
pub use range::is_valid_db_hl;
pub use tympanometry::suggest_tymp_type;
