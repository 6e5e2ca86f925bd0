//! Triage categories and their query descriptors.
//!
//! Each category maps to a structured set of advanced-search filters which
//! render to URL parameters at request time. The set is fixed; iteration
//! over [`Category::ALL`] covers every tracked bucket exactly once.

use std::fmt;

/// Status set an open security bug can be in.
pub(crate) const OPEN_STATUSES: &[&str] = &["UNCONFIRMED", "NEW", "ASSIGNED", "REOPENED"];

const CLOSED_RESOLUTIONS: &[&str] = &[
    "FIXED",
    "INVALID",
    "WONTFIX",
    "DUPLICATE",
    "WORKSFORME",
    "INCOMPLETE",
    "EXPIRED",
    "MOVED",
];

/// Group that flags a bug as an unrated security report.
const SECURITY_GROUP: &str = "core-security";

/// Whiteboard keywords for the four severity ratings combined.
const SEVERITY_KEYWORDS: &str = "[sg:critical, [sg:high, [sg:moderate, [sg:low";

/// A rated bug with no activity for this many days counts as untouched.
const UNTOUCHED_DAYS: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Critical,
    High,
    Moderate,
    Low,
    Total,
    Unconfirmed,
    NeedsTriage,
    Investigate,
    Vector,
    NeedsInfo,
    Untouched,
    OpenedThisWeek,
    ClosedThisWeek,
}

impl Category {
    pub(crate) const ALL: [Category; 13] = [
        Category::Critical,
        Category::High,
        Category::Moderate,
        Category::Low,
        Category::Total,
        Category::Unconfirmed,
        Category::NeedsTriage,
        Category::Investigate,
        Category::Vector,
        Category::NeedsInfo,
        Category::Untouched,
        Category::OpenedThisWeek,
        Category::ClosedThisWeek,
    ];

    /// Identifier used in artifact names and the results store.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Category::Critical => "critical",
            Category::High => "high",
            Category::Moderate => "moderate",
            Category::Low => "low",
            Category::Total => "total",
            Category::Unconfirmed => "unconfirmed",
            Category::NeedsTriage => "needs-triage",
            Category::Investigate => "investigate",
            Category::Vector => "vector",
            Category::NeedsInfo => "needs-info",
            Category::Untouched => "untouched",
            Category::OpenedThisWeek => "opened-this-week",
            Category::ClosedThisWeek => "closed-this-week",
        }
    }

    /// The search filters this category tracks.
    pub(crate) fn query(self) -> QuerySpec {
        match self {
            Category::Critical => QuerySpec::open().whiteboard(
                "[sg:critical",
                WhiteboardMatch::AllWordsSubstr,
            ),
            Category::High => {
                QuerySpec::open().whiteboard("[sg:high", WhiteboardMatch::AllWordsSubstr)
            }
            Category::Moderate => {
                QuerySpec::open().whiteboard("[sg:moderate", WhiteboardMatch::AllWordsSubstr)
            }
            Category::Low => {
                QuerySpec::open().whiteboard("[sg:low", WhiteboardMatch::AllWordsSubstr)
            }
            Category::Total => {
                QuerySpec::open().whiteboard(SEVERITY_KEYWORDS, WhiteboardMatch::AnyWordsSubstr)
            }
            Category::Unconfirmed => QuerySpec {
                statuses: &["UNCONFIRMED"],
                ..QuerySpec::open()
            }
            .whiteboard("sg:needinfo", WhiteboardMatch::NotRegexp)
            .in_security_group(),
            Category::NeedsTriage => QuerySpec::open()
                .whiteboard("\\[sg:", WhiteboardMatch::NotRegexp)
                .in_security_group(),
            Category::Investigate => {
                QuerySpec::open().whiteboard("[sg:investigat", WhiteboardMatch::AllWordsSubstr)
            }
            Category::Vector => {
                QuerySpec::open().whiteboard("[sg:vector", WhiteboardMatch::AllWordsSubstr)
            }
            Category::NeedsInfo => {
                QuerySpec::open().whiteboard("[sg:need", WhiteboardMatch::AllWordsSubstr)
            }
            Category::Untouched => QuerySpec::open()
                .whiteboard(SEVERITY_KEYWORDS, WhiteboardMatch::AnyWordsSubstr)
                .idle_longer_than(UNTOUCHED_DAYS),
            Category::OpenedThisWeek => QuerySpec::default()
                .changed_within("[Bug creation]", "-1w")
                .in_security_group(),
            Category::ClosedThisWeek => QuerySpec {
                resolutions: CLOSED_RESOLUTIONS,
                ..QuerySpec::default()
            }
            .changed_within("resolution", "-1w")
            .in_security_group(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WhiteboardMatch {
    AllWordsSubstr,
    AnyWordsSubstr,
    NotRegexp,
}

impl WhiteboardMatch {
    fn as_param(self) -> &'static str {
        match self {
            WhiteboardMatch::AllWordsSubstr => "allwordssubstr",
            WhiteboardMatch::AnyWordsSubstr => "anywordssubstr",
            WhiteboardMatch::NotRegexp => "notregexp",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct WhiteboardFilter {
    pattern: &'static str,
    matching: WhiteboardMatch,
}

/// Structured filter set for one category.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct QuerySpec {
    statuses: &'static [&'static str],
    whiteboard: Option<WhiteboardFilter>,
    security_group: bool,
    idle_days: Option<u32>,
    changed_field: Option<&'static str>,
    changed_from: Option<&'static str>,
    resolutions: &'static [&'static str],
}

impl QuerySpec {
    /// Base filter for queries over open bugs.
    fn open() -> Self {
        Self {
            statuses: OPEN_STATUSES,
            ..Self::default()
        }
    }

    fn whiteboard(mut self, pattern: &'static str, matching: WhiteboardMatch) -> Self {
        self.whiteboard = Some(WhiteboardFilter { pattern, matching });
        self
    }

    fn in_security_group(mut self) -> Self {
        self.security_group = true;
        self
    }

    fn idle_longer_than(mut self, days: u32) -> Self {
        self.idle_days = Some(days);
        self
    }

    fn changed_within(mut self, field: &'static str, from: &'static str) -> Self {
        self.changed_field = Some(field);
        self.changed_from = Some(from);
        self
    }

    /// Render to URL query parameters for the tracker's search endpoint.
    pub(crate) fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("query_format".to_string(), "advanced".to_string())];

        for status in self.statuses {
            params.push(("bug_status".to_string(), (*status).to_string()));
        }

        if let Some(wb) = self.whiteboard {
            params.push(("status_whiteboard".to_string(), wb.pattern.to_string()));
            params.push((
                "status_whiteboard_type".to_string(),
                wb.matching.as_param().to_string(),
            ));
        }

        // Custom search rows are numbered f1/o1/v1, f2/o2/v2, ...
        let mut row = 1;
        if self.security_group {
            params.push((format!("f{row}"), "bug_group".to_string()));
            params.push((format!("o{row}"), "equals".to_string()));
            params.push((format!("v{row}"), SECURITY_GROUP.to_string()));
            row += 1;
        }
        if let Some(days) = self.idle_days {
            params.push((format!("f{row}"), "days_elapsed".to_string()));
            params.push((format!("o{row}"), "greaterthan".to_string()));
            params.push((format!("v{row}"), days.to_string()));
        }

        if let Some(field) = self.changed_field {
            params.push(("chfield".to_string(), field.to_string()));
            if let Some(from) = self.changed_from {
                params.push(("chfieldfrom".to_string(), from.to_string()));
            }
            params.push(("chfieldto".to_string(), "Now".to_string()));
        }

        for resolution in self.resolutions {
            params.push(("resolution".to_string(), (*resolution).to_string()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn values<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn every_category_has_a_unique_label() {
        let labels: HashSet<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), Category::ALL.len());
    }

    #[test]
    fn thirteen_categories_tracked() {
        assert_eq!(Category::ALL.len(), 13);
    }

    #[test]
    fn severity_queries_filter_open_statuses_and_whiteboard() {
        let params = Category::High.query().params();
        assert_eq!(
            values(&params, "bug_status"),
            vec!["UNCONFIRMED", "NEW", "ASSIGNED", "REOPENED"]
        );
        assert_eq!(values(&params, "status_whiteboard"), vec!["[sg:high"]);
        assert_eq!(
            values(&params, "status_whiteboard_type"),
            vec!["allwordssubstr"]
        );
    }

    #[test]
    fn total_matches_any_severity_keyword() {
        let params = Category::Total.query().params();
        assert_eq!(
            values(&params, "status_whiteboard"),
            vec!["[sg:critical, [sg:high, [sg:moderate, [sg:low"]
        );
        assert_eq!(
            values(&params, "status_whiteboard_type"),
            vec!["anywordssubstr"]
        );
    }

    #[test]
    fn unconfirmed_restricts_to_unconfirmed_status() {
        let params = Category::Unconfirmed.query().params();
        assert_eq!(values(&params, "bug_status"), vec!["UNCONFIRMED"]);
        assert_eq!(values(&params, "v1"), vec!["core-security"]);
    }

    #[test]
    fn untouched_requires_two_weeks_idle() {
        let params = Category::Untouched.query().params();
        assert_eq!(values(&params, "f1"), vec!["days_elapsed"]);
        assert_eq!(values(&params, "o1"), vec!["greaterthan"]);
        assert_eq!(values(&params, "v1"), vec!["14"]);
    }

    #[test]
    fn weekly_windows_cover_one_week() {
        let opened = Category::OpenedThisWeek.query().params();
        assert_eq!(values(&opened, "chfield"), vec!["[Bug creation]"]);
        assert_eq!(values(&opened, "chfieldfrom"), vec!["-1w"]);
        assert_eq!(values(&opened, "chfieldto"), vec!["Now"]);
        assert!(values(&opened, "bug_status").is_empty());

        let closed = Category::ClosedThisWeek.query().params();
        assert_eq!(values(&closed, "chfield"), vec!["resolution"]);
        assert_eq!(values(&closed, "resolution").len(), 8);
    }

    #[test]
    fn needs_triage_excludes_rated_bugs() {
        let params = Category::NeedsTriage.query().params();
        assert_eq!(values(&params, "status_whiteboard"), vec!["\\[sg:"]);
        assert_eq!(values(&params, "status_whiteboard_type"), vec!["notregexp"]);
        assert_eq!(values(&params, "f1"), vec!["bug_group"]);
    }
}
