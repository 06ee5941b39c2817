use std::{fmt, str::FromStr};

use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct JobApplication {
    pub id: i64,
    pub user_id: i64,
    pub job_title: String,
    pub company_name: String,
    pub job_description: Option<String>,
    pub job_location: Option<String>,
    pub job_url: Option<String>,
    pub application_deadline_date: Option<String>,
    pub application_date: Option<String>,
    pub resume_version: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub is_marked: i64,
}

/// Validated field set for an insert or a full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_title: String,
    pub company_name: String,
    pub job_description: Option<String>,
    pub job_location: Option<String>,
    pub job_url: Option<String>,
    pub application_deadline_date: Option<String>,
    pub application_date: Option<String>,
    pub resume_version: Option<String>,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub is_marked: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Applied,
    Viewed,
    Rejected,
    GaveUp,
    Interviewing,
    Expired,
    Saved,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 7] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Viewed,
        ApplicationStatus::Rejected,
        ApplicationStatus::GaveUp,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Expired,
        ApplicationStatus::Saved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Viewed => "Viewed",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::GaveUp => "Gave up",
            ApplicationStatus::Interviewing => "Interviewing",
            ApplicationStatus::Expired => "Expired",
            ApplicationStatus::Saved => "Saved",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown status: {}", self.0)
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
