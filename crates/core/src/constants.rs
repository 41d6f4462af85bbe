//! Paths and links shared by the services and UI layers.

/// Landing page.
pub const HOME_PATH: &str = "/";

/// The questionnaire itself.
pub const CHECKUP_PATH: &str = "/checkup";

/// Destination requested once a checkup completes.
pub const RESULTS_PATH: &str = "/results";

pub const ABOUT_US_URL: &str = "http://www.wclc.org.nz/about-us/";

pub const COMMUNITY_LAW_SERVICES_URL: &str = "https://communitylaw.org.nz/";
