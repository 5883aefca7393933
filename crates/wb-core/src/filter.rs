use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::category::Category;
use crate::job::JobRecord;

/// Sentinel selector value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Lowercased category tag
    Only(String),
}

impl CategoryFilter {
    pub fn parse(selector: &str) -> Self {
        if selector.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Only(selector.to_lowercase())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(tag) => category.to_lowercase() == *tag,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category.id().to_string())
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(tag) => f.write_str(tag),
        }
    }
}

/// Free-text and category constraints over job listings.
///
/// A job is kept when its category passes the [`CategoryFilter`] and, for a non-empty query,
/// its title or description contains the query ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    query: String,
    category: CategoryFilter,
}

impl JobFilter {
    pub fn new(query: &str, category: CategoryFilter) -> Self {
        Self {
            query: query.to_lowercase(),
            category,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn matches(&self, job: &JobRecord) -> bool {
        self.category.matches(&job.category) && self.matches_query(job)
    }

    fn matches_query(&self, job: &JobRecord) -> bool {
        self.query.is_empty()
            || job.title.to_lowercase().contains(&self.query)
            || job.description.to_lowercase().contains(&self.query)
    }

    /// Lazily yields matching jobs in their original order
    pub fn apply<'f, 'j: 'f>(
        &'f self,
        jobs: &'j [JobRecord],
    ) -> impl Iterator<Item = &'j JobRecord> + 'f {
        jobs.iter().filter(move |job| self.matches(job))
    }
}

pub fn filter_jobs<'j>(jobs: &'j [JobRecord], query: &str, category: &str) -> Vec<&'j JobRecord> {
    let filter = JobFilter::new(query, CategoryFilter::parse(category));
    jobs.iter().filter(|job| filter.matches(job)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listings() -> Vec<JobRecord> {
        vec![
            JobRecord::new(
                "Kitchen Plumbing Repair",
                "Fix the sink and replace the trap",
                "Plumbing",
                0,
            ),
            JobRecord::new("Wedding Photography", "Full day event coverage", "Photography", 0),
            JobRecord::new(
                "Interior Wall Painting",
                "Two coats on living room walls",
                "Painting",
                0,
            ),
            JobRecord::new(
                "Electrical Wiring Setup",
                "Install LED lights and points in the kitchen",
                "Electrical",
                0,
            ),
        ]
    }

    fn titles(jobs: Vec<&JobRecord>) -> Vec<&str> {
        jobs.into_iter().map(|j| j.title.as_str()).collect()
    }

    #[test]
    fn test_no_constraints_is_identity() {
        let jobs = listings();
        let result = filter_jobs(&jobs, "", "all");
        assert_eq!(result.len(), jobs.len());
        assert!(result.iter().zip(&jobs).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_query_ignores_case() {
        let jobs = listings();
        assert_eq!(titles(filter_jobs(&jobs, "PAINT", "all")), ["Interior Wall Painting"]);
    }

    #[test]
    fn test_query_matches_title() {
        let jobs = listings();
        let two = &jobs[..2];
        assert_eq!(titles(filter_jobs(two, "kitchen", "all")), ["Kitchen Plumbing Repair"]);
    }

    #[test]
    fn test_query_matches_description_in_order() {
        let jobs = listings();
        assert_eq!(
            titles(filter_jobs(&jobs, "kitchen", "all")),
            ["Kitchen Plumbing Repair", "Electrical Wiring Setup"]
        );
    }

    #[test]
    fn test_category_ignores_case() {
        let jobs = listings();
        assert_eq!(titles(filter_jobs(&jobs, "", "PLUMBING")), ["Kitchen Plumbing Repair"]);
        assert_eq!(titles(filter_jobs(&jobs, "", "plumbing")), ["Kitchen Plumbing Repair"]);
    }

    #[test]
    fn test_both_constraints_must_hold() {
        let jobs = listings();
        assert_eq!(
            titles(filter_jobs(&jobs, "kitchen", "electrical")),
            ["Electrical Wiring Setup"]
        );
        assert!(filter_jobs(&jobs, "wedding", "plumbing").is_empty());
    }

    #[test]
    fn test_no_match_or_no_jobs_is_empty() {
        let jobs = listings();
        assert!(filter_jobs(&jobs, "roofing", "all").is_empty());
        assert!(filter_jobs(&[], "anything", "all").is_empty());
        assert!(filter_jobs(&jobs, "", "welding").is_empty());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(
            "Carpentry".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only("carpentry".into()))
        );
        assert_eq!(CategoryFilter::from(Category::Painting).to_string(), "painting");
    }

    #[test]
    fn test_apply_is_lazy_and_reusable() {
        let jobs = listings();
        let filter = JobFilter::new("wall", CategoryFilter::All);
        assert_eq!(filter.apply(&jobs).count(), 1);
        assert_eq!(filter.apply(&jobs).next().map(|j| j.category.as_str()), Some("Painting"));
    }

    #[test]
    fn test_applied_results_outlive_filter() {
        let jobs = listings();
        let kept: Vec<&JobRecord> = {
            let filter = JobFilter::new("", CategoryFilter::parse("painting"));
            filter.apply(&jobs).collect()
        };
        assert_eq!(titles(kept), ["Interior Wall Painting"]);
    }
}
