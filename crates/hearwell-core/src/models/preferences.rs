use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinic defaults stamped onto new records and reports.
///
/// Callers resolve these from their own configuration and pass them in
/// explicitly; nothing in Hearwell reads them from ambient state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ClinicPreferences {
    pub center_id: String,
    pub counselor_name: String,
}
