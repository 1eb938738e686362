use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for reporting a new issue. The reporter is passed separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportIssue {
    pub name: String,
    pub description: String,
    pub office_id: Uuid,
    #[serde(default)]
    pub rating: i32,
}

/// Mutable fields of an existing issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueUpdate {
    pub description: String,
    pub office_id: Uuid,
    pub status: String,
}

/// Status listing filter. `None` office or employee matches any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFilter {
    pub status: String,
    pub office_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
}

impl StatusFilter {
    pub fn new(status: impl Into<String>) -> Self {
        Self { status: status.into(), office_id: None, employee_id: None }
    }

    pub fn matches(&self, issue: &models::issue::Model) -> bool {
        issue.status == self.status
            && self.office_id.map_or(true, |o| issue.office_id == o)
            && self.employee_id.map_or(true, |e| issue.employee_id == e)
    }
}
