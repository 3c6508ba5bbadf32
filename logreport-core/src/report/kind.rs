use crate::report::error::UnknownReport;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Average,
    /// Accepted by name, but has no strategy behind it yet.
    Max,
    UserAgent,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Average, ReportKind::Max, ReportKind::UserAgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Average => "average",
            ReportKind::Max => "max",
            ReportKind::UserAgent => "user-agent",
        }
    }

    /// Table headers for the rows this report produces.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ReportKind::Average => &["handler", "total", "avg_response_time"],
            ReportKind::Max => &[],
            ReportKind::UserAgent => &["user_agent", "total"],
        }
    }

    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(ReportKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = UnknownReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownReport {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}
