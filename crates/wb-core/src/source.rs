use crate::job::{Application, ApplicationStatus, JobRecord, JobStatus};

const MINUTE: i64 = 60 * 1000;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Provider of job records for a host to display
pub trait JobSource {
    /// Jobs as of `now` (epoch ms). Ids are stable across calls.
    fn jobs(&self, now: i64) -> Vec<JobRecord>;
}

/// Fixed in-memory listings. Expiries are stored relative to zero and rebased onto `now`.
#[derive(Debug, Clone)]
pub struct MockJobSource {
    listings: Vec<JobRecord>,
}

impl MockJobSource {
    pub fn new(listings: Vec<JobRecord>) -> Self {
        Self { listings }
    }

    /// Landing page highlights, closing within 20 minutes
    pub fn featured() -> Self {
        Self::new(vec![
            JobRecord::new(
                "Interior Wall Painting",
                "Repaint interior walls of a 2BHK apartment.",
                "Painting",
                MINUTE,
            )
            .with_budget(15_000)
            .with_location("Mumbai, Maharashtra")
            .with_duration("2 days"),
            JobRecord::new(
                "Kitchen Plumbing Repair",
                "Repair kitchen sink drainage and water supply lines.",
                "Plumbing",
                12 * MINUTE,
            )
            .with_budget(8_000)
            .with_location("Delhi, NCR")
            .with_duration("1 day"),
            JobRecord::new(
                "Wedding Photography",
                "Cover a full day wedding ceremony and reception.",
                "Photography",
                20 * MINUTE,
            )
            .with_budget(25_000)
            .with_location("Bangalore, Karnataka")
            .with_duration("1 day"),
        ])
    }

    /// Open listings shown on the worker dashboard
    pub fn worker_listings() -> Self {
        Self::new(vec![
            JobRecord::new(
                "Kitchen Cabinet Installation",
                "Install modular kitchen cabinets in a 2BHK apartment. Materials provided.",
                "Carpentry",
                2 * HOUR,
            )
            .with_budget(18_000)
            .with_location("Mumbai, Andheri")
            .with_duration("2 days")
            .with_poster("Ramesh Sharma", 4.8)
            .with_applicants(8),
            JobRecord::new(
                "Bathroom Pipe Repair",
                "Fix leaking pipes in bathroom and replace old faucets.",
                "Plumbing",
                5 * HOUR,
            )
            .with_budget(3_500)
            .with_location("Mumbai, Bandra")
            .with_duration("4 hours")
            .with_poster("Priya Patel", 4.9)
            .with_applicants(12),
            JobRecord::new(
                "Living Room Wall Painting",
                "Paint living room and dining area walls with premium Asian Paints.",
                "Painting",
                DAY,
            )
            .with_budget(12_000)
            .with_location("Mumbai, Powai")
            .with_duration("1 day")
            .with_poster("Amit Kumar", 4.7)
            .with_applicants(15),
            JobRecord::new(
                "Electrical Wiring Setup",
                "Install additional electrical points and LED lights in new room.",
                "Electrical",
                3 * HOUR,
            )
            .with_budget(8_000)
            .with_location("Mumbai, Malad")
            .with_duration("6 hours")
            .with_poster("Sunita Joshi", 5.0)
            .with_applicants(6),
        ])
    }

    /// Jobs already posted by the demo customer
    pub fn customer_jobs() -> Self {
        Self::new(vec![
            JobRecord::new(
                "Kitchen Renovation",
                "Complete kitchen renovation including cabinets and countertops",
                "Carpentry",
                3 * DAY,
            )
            .with_budget(25_000)
            .with_location("Mumbai, Maharashtra")
            .with_duration("3 days")
            .with_status(JobStatus::InProgress)
            .with_applicants(8),
            JobRecord::new(
                "Bathroom Plumbing Fix",
                "Fix leaking faucet and install new shower head",
                "Plumbing",
                4 * HOUR,
            )
            .with_budget(5_000)
            .with_location("Mumbai, Maharashtra")
            .with_duration("4 hours")
            .with_applicants(12),
            JobRecord::new(
                "Wall Painting - Living Room",
                "Paint living room walls with premium paint",
                "Painting",
                DAY,
            )
            .with_budget(8_000)
            .with_location("Mumbai, Maharashtra")
            .with_duration("1 day")
            .with_status(JobStatus::Completed)
            .with_applicants(15),
        ])
    }
}

/// Applications the demo worker made before the session, newest first
pub fn worker_applications(now: i64) -> Vec<Application> {
    let applied = [
        (
            JobRecord::new(
                "Ceiling Fan Installation",
                "Install a ceiling fan with regulator.",
                "Electrical",
                now + HOUR,
            )
            .with_budget(2_500)
            .with_location("Mumbai, Thane")
            .with_duration("3 hours"),
            ApplicationStatus::Pending,
            2 * HOUR,
        ),
        (
            JobRecord::new(
                "Door Frame Repair",
                "Repair and realign a damaged door frame.",
                "Carpentry",
                now + DAY,
            )
            .with_budget(4_500)
            .with_location("Mumbai, Vikhroli")
            .with_duration("1 day"),
            ApplicationStatus::Accepted,
            DAY,
        ),
    ];

    applied
        .into_iter()
        .map(|(job, status, ago)| Application {
            status,
            ..Application::for_job(&job, now.saturating_sub(ago))
        })
        .collect()
}

impl JobSource for MockJobSource {
    fn jobs(&self, now: i64) -> Vec<JobRecord> {
        self.listings.iter().map(|job| job.shifted(now)).collect()
    }
}
