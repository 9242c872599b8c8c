//! Response record shapes.
//!
//! One flat record per repeated `<sc_data>` node. Fields expose the raw XML
//! text verbatim; the API reports counts and percentages as text and no
//! numeric or date coercion is applied here.

use serde::{Deserialize, Serialize};

/// One project in the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Numeric project identifier.
    pub project_id: String,
    /// Display name of the project.
    pub project_name: String,
    /// URL of the tracked website.
    pub project_url: String,
}

/// Account owner details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    /// Account holder name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Log quota for the account.
    pub log_quota: String,
}

/// A freshly created project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    /// Numeric project identifier.
    pub project_id: String,
    /// Security code for the project's counter snippet.
    pub security_code: String,
}

/// Per-page view counts, shared by the popular, entry, and exit page
/// listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStats {
    /// View count for the page.
    pub page_views: String,
    /// Page title.
    pub page_title: String,
    /// Page URL.
    pub page_url: String,
}

/// A referring URL and its view count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referrer {
    /// View count attributed to the referrer.
    pub page_views: String,
    /// The referring URL.
    pub referring_url: String,
}

/// Browser share for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserStats {
    /// Page views from this browser.
    pub browser_page_views: String,
    /// Browser name.
    pub browser_name: String,
    /// Browser version.
    pub browser_version: String,
    /// Share of total page views, as a percentage.
    pub browser_percentage: String,
}

/// Operating system share for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsStats {
    /// Page views from this operating system.
    pub os_page_views: String,
    /// Operating system name.
    pub os_name: String,
    /// Share of total page views, as a percentage.
    pub os_percentage: String,
}

/// A single entry from the pageload log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageloadEntry {
    /// URL of the loaded page.
    pub page_url: String,
    /// Time of the pageload.
    pub time: String,
    /// Referring URL.
    pub referring_url: String,
    /// Title of the loaded page.
    pub page_title: String,
    /// Browser name.
    pub browser_name: String,
    /// Browser version.
    pub browser_version: String,
    /// Operating system name.
    pub os_name: String,
    /// Device vendor.
    pub device_vendor: String,
    /// Device model.
    pub device_model: String,
    /// Search engine keywords, when present.
    pub se_keywords: String,
    /// Screen resolution width.
    pub resolution_width: String,
    /// Screen resolution height.
    pub resolution_height: String,
    /// Visitor's ISP.
    pub isp: String,
    /// Visitor's city.
    pub city: String,
    /// Visitor's state or region.
    pub state: String,
    /// Visitor's country.
    pub country: String,
    /// Visitor's IP address.
    pub ip_address: String,
}

/// A clicked outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitLink {
    /// The outbound link that was followed.
    pub link: String,
    /// Time of the click.
    pub time: String,
    /// Page the link was clicked on.
    pub page_url: String,
    /// Title of that page.
    pub page_title: String,
    /// Visitor's IP address.
    pub ip_address: String,
}

/// A downloaded file link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    /// The downloaded file's link.
    pub link: String,
    /// Time of the download.
    pub time: String,
    /// Page the download started from.
    pub page_url: String,
    /// Title of that page.
    pub page_title: String,
    /// Visitor's IP address.
    pub ip_address: String,
    /// File extension of the download.
    pub extension: String,
}

/// Daily summary counts for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The day the counts cover.
    pub date: String,
    /// Total page views.
    pub page_views: String,
    /// Unique visits.
    pub unique_visits: String,
    /// Returning visits.
    pub returning_visits: String,
    /// First-time visits.
    pub first_time_visits: String,
}

/// One visitor session from the visitor log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    /// Visits recorded in the log for this visitor.
    pub log_visits: String,
    /// Number of pages in the visit.
    pub entries_in_visit: String,
    /// Time the visit started.
    pub entry_time: String,
    /// URL the visit started on.
    pub entry_url: String,
    /// Title of the entry page.
    pub entry_title: String,
    /// Search engine keywords, when present.
    pub se_keywords: String,
    /// Referring link.
    pub link: String,
    /// Visitor's country name.
    pub country_name: String,
    /// Visitor's state or region.
    pub state: String,
    /// Screen resolution label.
    pub resolution: String,
    /// Time the visit ended.
    pub exit_time: String,
    /// URL the visit ended on.
    pub exit_url: String,
    /// Title of the exit page.
    pub exit_page_title: String,
    /// How many times this visitor has returned.
    pub returning_count: String,
    /// Browser name.
    pub browser_name: String,
    /// Browser version.
    pub browser_version: String,
    /// Operating system.
    pub os: String,
    /// Screen resolution width.
    pub resolution_width: String,
    /// Screen resolution height.
    pub resolution_height: String,
    /// Whether JavaScript was available.
    pub javascript: String,
    /// Visitor's country code.
    pub country: String,
    /// Visitor's city.
    pub city: String,
    /// Visitor's ISP.
    pub isp: String,
    /// Visitor's IP address.
    pub ip_address: String,
    /// Latitude, when geolocation resolved.
    pub latitude: String,
    /// Longitude, when geolocation resolved.
    pub longitude: String,
    /// Entry count for the visit.
    pub num_entry: String,
    /// Length of the visit.
    pub visit_length: String,
}
