//! Ordered query parameter assembly for the endpoint catalog.
//!
//! Parameter order is load-bearing: the request signature covers the
//! serialized query string byte-for-byte, so every endpoint assembles its
//! parameters in the order the service documents.

use chrono::Datelike;
use statcounter_types::{DateRange, Device};

/// An ordered list of query parameters.
///
/// Insertion order is preserved in the serialized output; see
/// [`signed_url`](crate::url::signed_url) for how it enters the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.params.push((key, value.into()));
    }

    /// Appends a free-text parameter, percent-encoding the value.
    pub fn push_encoded(&mut self, key: &'static str, value: &str) {
        self.params
            .push((key, urlencoding::encode(value).into_owned()));
    }

    /// Appends the six start/end date parameters for a range, zero-padded.
    pub fn push_date_range(&mut self, range: DateRange) {
        self.push("sm", format!("{:02}", range.start.month()));
        self.push("sd", format!("{:02}", range.start.day()));
        self.push("sy", range.start.year().to_string());
        self.push("em", format!("{:02}", range.end.month()));
        self.push("ed", format!("{:02}", range.end.day()));
        self.push("ey", range.end.year().to_string());
    }

    /// Serializes as `&key=value` pairs in insertion order.
    #[must_use]
    pub fn serialized(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.params {
            out.push('&');
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

pub(crate) fn keyword_activity(
    project_id: &str,
    range: Option<DateRange>,
    count: u32,
    offset: u32,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("s", "keyword-activity");
    params.push("pi", project_id);
    if let Some(range) = range {
        params.push_date_range(range);
    }
    params.push("n", count.to_string());
    params.push("o", offset.to_string());
    params
}

pub(crate) fn popular_pages(
    project_id: &str,
    range: Option<DateRange>,
    count: u32,
    offset: u32,
    count_type: &str,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("s", "popular");
    params.push("pi", project_id);
    params.push("ct", count_type);
    if let Some(range) = range {
        params.push_date_range(range);
    }
    params.push("n", count.to_string());
    params.push("o", offset.to_string());
    params
}

/// The `entry` and `exit` listings share one parameter shape.
pub(crate) fn entry_or_exit_pages(
    section: &'static str,
    project_id: &str,
    range: Option<DateRange>,
    count: u32,
    offset: u32,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("s", section);
    params.push("pi", project_id);
    if let Some(range) = range {
        params.push_date_range(range);
    }
    params.push("n", count.to_string());
    params.push("o", offset.to_string());
    params
}

pub(crate) fn came_from(
    project_id: &str,
    range: Option<DateRange>,
    external: bool,
    count: u32,
    offset: u32,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("s", "camefrom");
    params.push("pi", project_id);
    params.push("e", if external { "1" } else { "0" });
    if let Some(range) = range {
        params.push_date_range(range);
    }
    params.push("n", count.to_string());
    params.push("o", offset.to_string());
    params
}

/// `browsers`, `os`, `pageload`, and `exit-link-activity` all take the
/// device filter ahead of the project id.
pub(crate) fn device_section(
    section: &'static str,
    device: Device,
    project_id: &str,
    range: Option<DateRange>,
    count: u32,
    offset: u32,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("s", section);
    params.push("de", device.as_str());
    params.push("pi", project_id);
    if let Some(range) = range {
        params.push_date_range(range);
    }
    params.push("n", count.to_string());
    params.push("o", offset.to_string());
    params
}

/// `download-link-activity` places the result count ahead of the date range.
pub(crate) fn download_link_activity(
    device: Device,
    project_id: &str,
    range: Option<DateRange>,
    count: u32,
    offset: u32,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("s", "download-link-activity");
    params.push("de", device.as_str());
    params.push("pi", project_id);
    params.push("n", count.to_string());
    if let Some(range) = range {
        params.push_date_range(range);
    }
    params.push("o", offset.to_string());
    params
}

pub(crate) fn summary(project_id: &str, range: DateRange) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("s", "summary");
    params.push("g", "daily");
    params.push_date_range(range);
    params.push("pi", project_id);
    params
}

pub(crate) fn visitors(
    project_id: &str,
    range: Option<DateRange>,
    count: u32,
    offset: u32,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("s", "visitor");
    params.push("g", "daily");
    params.push("pi", project_id);
    params.push("n", count.to_string());
    if let Some(range) = range {
        params.push_date_range(range);
    }
    params.push("o", offset.to_string());
    params
}

pub(crate) fn add_project(
    website_title: &str,
    website_url: &str,
    timezone: &str,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.push_encoded("wt", website_title);
    params.push_encoded("wu", website_url);
    params.push_encoded("tz", timezone);
    params.push("ps", "0");
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn january() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
        )
        .unwrap()
    }

    const JANUARY_PAIRS: &str = "&sm=01&sd=01&sy=2020&em=01&ed=31&ey=2020";

    #[test]
    fn test_date_range_pairs() {
        let mut params = QueryParams::new();
        params.push_date_range(january());
        assert_eq!(params.serialized(), JANUARY_PAIRS);
    }

    #[test]
    fn test_date_range_pairs_on_every_range_endpoint() {
        let range = Some(january());
        for params in [
            keyword_activity("123", range, 20, 0),
            popular_pages("123", range, 20, 0, "page_view"),
            entry_or_exit_pages("entry", "123", range, 20, 0),
            came_from("123", range, true, 20, 0),
            device_section("browsers", Device::All, "123", range, 20, 0),
            download_link_activity(Device::All, "123", range, 20, 0),
            summary("123", january()),
            visitors("123", range, 20, 0),
        ] {
            assert!(
                params.serialized().contains(JANUARY_PAIRS),
                "missing date pairs in {}",
                params.serialized()
            );
        }
    }

    #[test]
    fn test_keyword_activity_order() {
        let params = keyword_activity("123", Some(january()), 20, 40);
        assert_eq!(
            params.serialized(),
            format!("&s=keyword-activity&pi=123{JANUARY_PAIRS}&n=20&o=40")
        );
    }

    #[test]
    fn test_keyword_activity_without_range() {
        let params = keyword_activity("123", None, 10, 0);
        assert_eq!(params.serialized(), "&s=keyword-activity&pi=123&n=10&o=0");
    }

    #[test]
    fn test_popular_pages_order() {
        let params = popular_pages("123", Some(january()), 20, 0, "page_view");
        assert_eq!(
            params.serialized(),
            format!("&s=popular&pi=123&ct=page_view{JANUARY_PAIRS}&n=20&o=0")
        );
    }

    #[test]
    fn test_came_from_external_flag() {
        let params = came_from("123", None, false, 20, 0);
        assert_eq!(params.serialized(), "&s=camefrom&pi=123&e=0&n=20&o=0");
    }

    #[test]
    fn test_device_section_order() {
        let params = device_section("os", Device::Mobile, "123", None, 20, 0);
        assert_eq!(params.serialized(), "&s=os&de=mobile&pi=123&n=20&o=0");
    }

    #[test]
    fn test_download_link_activity_count_before_range() {
        let params = download_link_activity(Device::Desktop, "123", Some(january()), 15, 5);
        assert_eq!(
            params.serialized(),
            format!("&s=download-link-activity&de=desktop&pi=123&n=15{JANUARY_PAIRS}&o=5")
        );
    }

    #[test]
    fn test_summary_order() {
        let params = summary("123", january());
        assert_eq!(
            params.serialized(),
            format!("&s=summary&g=daily{JANUARY_PAIRS}&pi=123")
        );
    }

    #[test]
    fn test_visitors_order() {
        let params = visitors("123", Some(january()), 20, 0);
        assert_eq!(
            params.serialized(),
            format!("&s=visitor&g=daily&pi=123&n=20{JANUARY_PAIRS}&o=0")
        );
    }

    #[test]
    fn test_add_project_encodes_free_text() {
        let params = add_project("My Site", "https://example.com/", "America/Chicago");
        assert_eq!(
            params.serialized(),
            "&wt=My%20Site&wu=https%3A%2F%2Fexample.com%2F&tz=America%2FChicago&ps=0"
        );
    }

    #[test]
    fn test_empty_params_serialize_empty() {
        assert_eq!(QueryParams::new().serialized(), "");
    }
}
