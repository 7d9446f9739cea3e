use crate::core::normalize::format_duration;
use crate::models::cell::Cell;
use crate::models::metrics::{DerivedMetrics, HEADERS};
use serde::Serialize;

/// Flat export row; field names are the view's column headers.
#[derive(Serialize, Clone, Debug)]
pub struct MetricsExport {
    #[serde(rename = "Agent Name")]
    pub agent_name: String,
    #[serde(rename = "Answered")]
    pub answered: Cell,
    #[serde(rename = "Outbound")]
    pub outbound: Cell,
    #[serde(rename = "Handle")]
    pub handle: Cell,
    #[serde(rename = "Alert - No Answer")]
    pub alert_no_answer: Cell,
    #[serde(rename = "Non Productive")]
    pub non_productive: String,
    #[serde(rename = "Logged In")]
    pub logged_in: String,
    #[serde(rename = "Total Break")]
    pub total_break: String,
    #[serde(rename = "Exceeded Break")]
    pub exceeded_break: String,
    #[serde(rename = "Idle")]
    pub idle: String,
    #[serde(rename = "Total Handle")]
    pub total_handle: String,
    #[serde(rename = "Total Talk")]
    pub total_talk: String,
    #[serde(rename = "Total Hold")]
    pub total_hold: String,
    #[serde(rename = "Total ACW")]
    pub total_acw: String,
    #[serde(rename = "Away")]
    pub away: String,
    #[serde(rename = "Break")]
    pub break_time: String,
    #[serde(rename = "Meal")]
    pub meal: String,
    #[serde(rename = "Training")]
    pub training: String,
    #[serde(rename = "Meeting")]
    pub meeting: String,
    #[serde(rename = "Mentoring")]
    pub mentoring: String,
    #[serde(rename = "Dispatch")]
    pub dispatch: String,
    #[serde(rename = "Productive")]
    pub productive: String,
}

impl From<&DerivedMetrics> for MetricsExport {
    fn from(m: &DerivedMetrics) -> Self {
        let hms = format_duration;
        Self {
            agent_name: m.agent_name.clone(),
            answered: m.answered.clone(),
            outbound: m.outbound.clone(),
            handle: m.handle.clone(),
            alert_no_answer: m.alert_no_answer.clone(),
            non_productive: hms(m.non_productive),
            logged_in: hms(m.logged_in),
            total_break: hms(m.total_break),
            exceeded_break: hms(m.exceeded_break),
            idle: hms(m.idle),
            total_handle: hms(m.total_handle),
            total_talk: hms(m.total_talk),
            total_hold: hms(m.total_hold),
            total_acw: hms(m.total_acw),
            away: hms(m.away),
            break_time: hms(m.break_time),
            meal: hms(m.meal),
            training: hms(m.training),
            meeting: hms(m.meeting),
            mentoring: hms(m.mentoring),
            dispatch: hms(m.dispatch),
            productive: hms(m.productive),
        }
    }
}

/// Header for XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    HEADERS.to_vec()
}
