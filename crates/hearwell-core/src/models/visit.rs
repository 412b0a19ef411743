use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::customer::RecordMeta;
use crate::models::protocol::{ChecklistEntry, ChecklistProgress};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum VisitType {
    #[default]
    General,
    HaProtocol,
}

/// Stage in the hearing-aid fitting protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HaStage {
    #[serde(rename = "HA_1")]
    Ha1,
    #[serde(rename = "HA_2")]
    Ha2,
    #[serde(rename = "HA_3")]
    Ha3,
    #[serde(rename = "AFTERCARE_3MO")]
    Aftercare3Mo,
}

impl HaStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ha1 => "1st visit: assessment and planning",
            Self::Ha2 => "2nd visit: fitting and verification",
            Self::Ha3 => "3rd visit: fine tuning and outcomes",
            Self::Aftercare3Mo => "3-month aftercare",
        }
    }

    /// Follow-up interval the protocol recommends after this stage.
    pub fn default_next_visit_rule(self) -> NextVisitRule {
        match self {
            Self::Ha1 | Self::Ha2 => NextVisitRule::Weekly,
            Self::Ha3 | Self::Aftercare3Mo => NextVisitRule::ThreeMonth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum NextVisitRule {
    Weekly,
    ThreeMonth,
}

impl NextVisitRule {
    pub fn days(self) -> i32 {
        match self {
            Self::Weekly => 7,
            Self::ThreeMonth => 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Visit {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub visit_date: jiff::civil::Date,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub purpose: Vec<String>,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub visit_type: VisitType,
    #[serde(default)]
    pub ha_stage: Option<HaStage>,
    /// Explicit follow-up rule. Falls back to the stage default when absent.
    #[serde(default)]
    pub next_visit_rule: Option<NextVisitRule>,
    /// Protocol checklist entries keyed by item key.
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub checklist: BTreeMap<String, ChecklistEntry>,
    pub record: RecordMeta,
}

impl Visit {
    /// The rule in effect: explicit, else the protocol stage default.
    pub fn effective_next_visit_rule(&self) -> Option<NextVisitRule> {
        self.next_visit_rule
            .or_else(|| self.ha_stage.map(HaStage::default_next_visit_rule))
    }

    /// Checklist tally for protocol visits. `None` without a stage.
    pub fn checklist_progress(&self) -> Option<ChecklistProgress> {
        self.ha_stage
            .map(|stage| ChecklistProgress::evaluate(stage, &self.checklist))
    }

    /// Visit date plus the follow-up interval, if any rule applies.
    pub fn recommended_next_visit_date(&self) -> Option<jiff::civil::Date> {
        let rule = self.effective_next_visit_rule()?;
        self.visit_date
            .checked_add(jiff::Span::new().days(rule.days()))
            .ok()
    }
}
