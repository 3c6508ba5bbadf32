use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportRow {
    Average(AverageRow),
    UserAgent(UserAgentRow),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageRow {
    pub handler: String,
    pub total: u64,
    /// Rounded to 3 decimal places.
    pub avg_response_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAgentRow {
    pub user_agent: String,
    pub total: u64,
}

impl ReportRow {
    pub fn total(&self) -> u64 {
        match self {
            ReportRow::Average(row) => row.total,
            ReportRow::UserAgent(row) => row.total,
        }
    }

    /// Cell values in column order.
    pub fn cells(&self) -> Vec<String> {
        match self {
            ReportRow::Average(row) => vec![
                row.handler.clone(),
                row.total.to_string(),
                row.avg_response_time.to_string(),
            ],
            ReportRow::UserAgent(row) => vec![row.user_agent.clone(), row.total.to_string()],
        }
    }
}
