//! Types exchanged with the remote inference endpoint and helpers for
//! presenting its answer. The request itself is made by the front ends.

use crate::constants::{ASK_PATH, DEFAULT_BASE_URL};
use crate::error::{OracleError, SpinError};
use crate::geometry::Sector;
use crate::outcome::{Outcome, Probability};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use url::Url;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OracleResponse {
    pub p_yes: f64,
    pub p_no: f64,
    pub answer: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
}

impl OracleResponse {
    pub fn from_json(body: &str) -> Result<Self, OracleError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Validated input for one spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinRequest {
    pub probability: Probability,
    pub outcome: Outcome,
}

impl SpinRequest {
    pub fn new(p_yes: f64, outcome: Outcome) -> Result<Self, SpinError> {
        Ok(Self {
            probability: Probability::new(p_yes)?,
            outcome,
        })
    }

    /// Accept a service answer only if its outcome owns part of the wheel.
    pub fn from_response(response: &OracleResponse) -> Result<Self, SpinError> {
        let request = Self::new(response.p_yes, response.answer)?;
        if Sector::for_outcome(request.probability, request.outcome).is_empty() {
            return Err(SpinError::EmptySector(request.outcome));
        }
        Ok(request)
    }
}

/// `POST` target for a question. A blank base falls back to the default
/// endpoint; the ask path is rooted at the host.
pub fn ask_url(base_url: &str, question: &str) -> Result<Url, OracleError> {
    let trimmed = base_url.trim();
    let base = if trimmed.is_empty() {
        DEFAULT_BASE_URL
    } else {
        trimmed
    };
    let base: Cow<'_, str> = if base.ends_with('/') {
        Cow::Borrowed(base)
    } else {
        Cow::Owned(format!("{base}/"))
    };
    let mut url = Url::parse(&base)?.join(ASK_PATH)?;
    url.query_pairs_mut().append_pair("question", question);
    Ok(url)
}

pub fn format_percentage(p: f64) -> String {
    format!("{}%", (p * 100.0).round() as i64)
}

pub fn confidence_label(p_yes: f64) -> &'static str {
    if p_yes > 0.9 {
        "Absolute Certainty"
    } else if p_yes > 0.75 {
        "Very Likely"
    } else if p_yes > 0.6 {
        "Probable"
    } else if p_yes > 0.5 {
        "Leaning Yes"
    } else if p_yes == 0.5 {
        "Uncertain"
    } else if p_yes > 0.4 {
        "Leaning No"
    } else if p_yes > 0.25 {
        "Doubtful"
    } else if p_yes > 0.1 {
        "Very Unlikely"
    } else {
        "Impossible"
    }
}
