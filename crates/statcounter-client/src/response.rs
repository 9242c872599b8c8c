//! XML response mapping.
//!
//! Every response carries a `status` attribute on its root element; any
//! value other than `ok` maps to the endpoint category's error. On success
//! the repeated `<sc_data>` children are extracted into records in document
//! order.

use roxmltree::{Document, Node};
use statcounter_types::{
    BrowserStats, DailySummary, DownloadLink, ExitLink, NewProject, OsStats, PageStats,
    PageloadEntry, Project, Referrer, UserDetails, Visitor,
};

use crate::error::StatCounterError;

/// Marker substring identifying encrypted-search keyword placeholders.
pub(crate) const ENCRYPTED_SEARCH_MARKER: &str = "Encrypted Search";

/// Maps a non-ok response status to the error variant for an endpoint.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Failure {
    /// Credential-sensitive endpoint.
    Auth(&'static str),
    /// Statistics endpoint.
    Stats(&'static str),
}

impl Failure {
    fn into_error(self, status: String) -> StatCounterError {
        match self {
            Self::Auth(message) => StatCounterError::Authentication { message, status },
            Self::Stats(message) => StatCounterError::RemoteService { message, status },
        }
    }
}

/// Extraction of one record from an `<sc_data>` node.
pub(crate) trait FromDataNode: Sized {
    fn from_node(node: Node<'_, '_>) -> Self;
}

/// Returns the text of a named child node.
///
/// A missing child yields an empty string; the gap is logged as a
/// schema-evolution signal rather than failing the whole response.
fn child_text(node: Node<'_, '_>, name: &str) -> String {
    match node.children().find(|child| child.has_tag_name(name)) {
        Some(child) => child.text().unwrap_or_default().to_string(),
        None => {
            tracing::warn!(field = name, "sc_data node is missing an expected field");
            String::new()
        }
    }
}

fn checked_root<'a, 'input>(
    doc: &'a Document<'input>,
    failure: Failure,
) -> Result<Node<'a, 'input>, StatCounterError> {
    let root = doc.root_element();
    match root.attribute("status") {
        Some("ok") => Ok(root),
        other => Err(failure.into_error(other.unwrap_or_default().to_string())),
    }
}

fn data_nodes<'a, 'input>(root: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    root.children().filter(|node| node.has_tag_name("sc_data"))
}

/// Parses a response body and maps every `<sc_data>` node to a record.
pub(crate) fn map_records<R: FromDataNode>(
    body: &str,
    failure: Failure,
) -> Result<Vec<R>, StatCounterError> {
    let doc = Document::parse(body)?;
    let root = checked_root(&doc, failure)?;
    Ok(data_nodes(root).map(R::from_node).collect())
}

/// Parses a response body expected to carry at least one `<sc_data>` node
/// and maps the first.
pub(crate) fn map_single<R: FromDataNode>(
    body: &str,
    failure: Failure,
) -> Result<R, StatCounterError> {
    map_records(body, failure)?
        .into_iter()
        .next()
        .ok_or(StatCounterError::MalformedResponse("missing sc_data element"))
}

/// Parses a keyword-activity response into the keyword list.
///
/// With `exclude_encrypted` set, any keyword containing the encrypted-search
/// placeholder is dropped, including a match at the very first byte.
pub(crate) fn map_keywords(
    body: &str,
    failure: Failure,
    exclude_encrypted: bool,
) -> Result<Vec<String>, StatCounterError> {
    let doc = Document::parse(body)?;
    let root = checked_root(&doc, failure)?;
    Ok(data_nodes(root)
        .map(|node| child_text(node, "keyword"))
        .filter(|keyword| !(exclude_encrypted && keyword.contains(ENCRYPTED_SEARCH_MARKER)))
        .collect())
}

/// Returns whether the response status is `ok`.
pub(crate) fn status_is_ok(body: &str) -> Result<bool, StatCounterError> {
    let doc = Document::parse(body)?;
    Ok(doc.root_element().attribute("status") == Some("ok"))
}

/// XML node names differ across the three page listings: popular reports the
/// URL as `url`, exit reports the title as `title`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PageListing {
    Popular,
    Entry,
    Exit,
}

impl PageListing {
    const fn url_tag(self) -> &'static str {
        match self {
            Self::Popular => "url",
            Self::Entry | Self::Exit => "page_url",
        }
    }

    const fn title_tag(self) -> &'static str {
        match self {
            Self::Popular | Self::Entry => "page_title",
            Self::Exit => "title",
        }
    }
}

/// Parses a page-listing response, resolving the listing's node names.
pub(crate) fn map_pages(
    body: &str,
    failure: Failure,
    listing: PageListing,
) -> Result<Vec<PageStats>, StatCounterError> {
    let doc = Document::parse(body)?;
    let root = checked_root(&doc, failure)?;
    Ok(data_nodes(root)
        .map(|node| PageStats {
            page_views: child_text(node, "page_views"),
            page_title: child_text(node, listing.title_tag()),
            page_url: child_text(node, listing.url_tag()),
        })
        .collect())
}

impl FromDataNode for Project {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            project_id: child_text(node, "project_id"),
            project_name: child_text(node, "project_name"),
            project_url: child_text(node, "url"),
        }
    }
}

impl FromDataNode for UserDetails {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            name: child_text(node, "name"),
            email: child_text(node, "email"),
            log_quota: child_text(node, "log_quota"),
        }
    }
}

impl FromDataNode for NewProject {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            project_id: child_text(node, "project_id"),
            security_code: child_text(node, "security_code"),
        }
    }
}

impl FromDataNode for Referrer {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            page_views: child_text(node, "page_views"),
            referring_url: child_text(node, "referring_url"),
        }
    }
}

impl FromDataNode for BrowserStats {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            browser_page_views: child_text(node, "page_views"),
            browser_name: child_text(node, "browser_name"),
            browser_version: child_text(node, "browser_version"),
            browser_percentage: child_text(node, "percentage"),
        }
    }
}

impl FromDataNode for OsStats {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            os_page_views: child_text(node, "page_views"),
            os_name: child_text(node, "os_name"),
            os_percentage: child_text(node, "percentage"),
        }
    }
}

impl FromDataNode for PageloadEntry {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            page_url: child_text(node, "page_url"),
            time: child_text(node, "time"),
            referring_url: child_text(node, "referring_url"),
            page_title: child_text(node, "page_title"),
            browser_name: child_text(node, "browser_name"),
            browser_version: child_text(node, "browser_version"),
            os_name: child_text(node, "os_name"),
            device_vendor: child_text(node, "device_vendor"),
            device_model: child_text(node, "device_model"),
            se_keywords: child_text(node, "se_keywords"),
            resolution_width: child_text(node, "resolution_width"),
            resolution_height: child_text(node, "resolution_height"),
            isp: child_text(node, "isp"),
            city: child_text(node, "city"),
            state: child_text(node, "state"),
            country: child_text(node, "country"),
            ip_address: child_text(node, "ip_address"),
        }
    }
}

impl FromDataNode for ExitLink {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            link: child_text(node, "link"),
            time: child_text(node, "time"),
            page_url: child_text(node, "page_url"),
            page_title: child_text(node, "page_title"),
            // the service reports the address under `ip_number` here
            ip_address: child_text(node, "ip_number"),
        }
    }
}

impl FromDataNode for DownloadLink {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            link: child_text(node, "link"),
            time: child_text(node, "time"),
            page_url: child_text(node, "page_url"),
            page_title: child_text(node, "page_title"),
            ip_address: child_text(node, "ip_number"),
            extension: child_text(node, "extension"),
        }
    }
}

impl FromDataNode for DailySummary {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            date: child_text(node, "date"),
            page_views: child_text(node, "page_views"),
            unique_visits: child_text(node, "unique_visits"),
            returning_visits: child_text(node, "returning_visits"),
            first_time_visits: child_text(node, "first_time_visits"),
        }
    }
}

impl FromDataNode for Visitor {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            log_visits: child_text(node, "log_visits"),
            entries_in_visit: child_text(node, "entries_in_visit"),
            entry_time: child_text(node, "entry_t"),
            entry_url: child_text(node, "entry_url"),
            entry_title: child_text(node, "entry_title"),
            se_keywords: child_text(node, "se_keywords"),
            link: child_text(node, "link"),
            country_name: child_text(node, "country_name"),
            state: child_text(node, "state"),
            resolution: child_text(node, "res"),
            exit_time: child_text(node, "exit_t"),
            exit_url: child_text(node, "exit_url"),
            exit_page_title: child_text(node, "exit_title"),
            returning_count: child_text(node, "returning_count"),
            browser_name: child_text(node, "browser_name"),
            browser_version: child_text(node, "browser_version"),
            os: child_text(node, "os"),
            resolution_width: child_text(node, "width"),
            resolution_height: child_text(node, "height"),
            javascript: child_text(node, "javascript"),
            country: child_text(node, "country"),
            city: child_text(node, "city"),
            isp: child_text(node, "isp"),
            ip_address: child_text(node, "ip_address"),
            latitude: child_text(node, "latitude"),
            longitude: child_text(node, "longitude"),
            num_entry: child_text(node, "num_entry"),
            visit_length: child_text(node, "visit_length"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTH: Failure = Failure::Auth("XML error: Check your username and password.");
    const STATS: Failure = Failure::Stats("XML Error: Check your project ID and login credentials.");

    fn wrap(inner: &str) -> String {
        format!(r#"<sc status="ok">{inner}</sc>"#)
    }

    #[test]
    fn test_map_projects() {
        let body = wrap(
            "<sc_data><project_id>123</project_id><project_name>Example</project_name>\
             <url>https://example.com</url></sc_data>",
        );
        let projects: Vec<Project> = map_records(&body, AUTH).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_id, "123");
        assert_eq!(projects[0].project_name, "Example");
        assert_eq!(projects[0].project_url, "https://example.com");
    }

    #[test]
    fn test_map_user_details() {
        let body = wrap(
            "<sc_data><name>Ada</name><email>ada@example.com</email>\
             <log_quota>500</log_quota></sc_data>",
        );
        let details: UserDetails = map_single(&body, AUTH).unwrap();
        assert_eq!(details.name, "Ada");
        assert_eq!(details.email, "ada@example.com");
        assert_eq!(details.log_quota, "500");
    }

    #[test]
    fn test_map_new_project() {
        let body = wrap(
            "<sc_data><project_id>77</project_id><security_code>abcd</security_code></sc_data>",
        );
        let project: NewProject = map_single(&body, AUTH).unwrap();
        assert_eq!(project.project_id, "77");
        assert_eq!(project.security_code, "abcd");
    }

    #[test]
    fn test_map_single_without_data_node() {
        let body = wrap("");
        let result: Result<NewProject, _> = map_single(&body, AUTH);
        assert!(matches!(
            result,
            Err(StatCounterError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_map_popular_pages_reads_url_tag() {
        let body = wrap(
            "<sc_data><page_views>42</page_views><page_title>Home</page_title>\
             <url>https://example.com/</url></sc_data>",
        );
        let pages = map_pages(&body, STATS, PageListing::Popular).unwrap();
        assert_eq!(pages[0].page_views, "42");
        assert_eq!(pages[0].page_title, "Home");
        assert_eq!(pages[0].page_url, "https://example.com/");
    }

    #[test]
    fn test_map_entry_pages_reads_page_url_tag() {
        let body = wrap(
            "<sc_data><page_views>7</page_views><page_title>Landing</page_title>\
             <page_url>/landing</page_url></sc_data>",
        );
        let pages = map_pages(&body, STATS, PageListing::Entry).unwrap();
        assert_eq!(pages[0].page_url, "/landing");
        assert_eq!(pages[0].page_title, "Landing");
    }

    #[test]
    fn test_map_exit_pages_reads_title_tag() {
        let body = wrap(
            "<sc_data><page_views>3</page_views><title>Goodbye</title>\
             <page_url>/bye</page_url></sc_data>",
        );
        let pages = map_pages(&body, STATS, PageListing::Exit).unwrap();
        assert_eq!(pages[0].page_title, "Goodbye");
        assert_eq!(pages[0].page_url, "/bye");
    }

    #[test]
    fn test_map_referrers() {
        let body = wrap(
            "<sc_data><page_views>9</page_views>\
             <referring_url>https://referrer.example</referring_url></sc_data>",
        );
        let referrers: Vec<Referrer> = map_records(&body, STATS).unwrap();
        assert_eq!(referrers[0].page_views, "9");
        assert_eq!(referrers[0].referring_url, "https://referrer.example");
    }

    #[test]
    fn test_map_browser_stats() {
        let body = wrap(
            "<sc_data><page_views>120</page_views><browser_name>Firefox</browser_name>\
             <browser_version>120.0</browser_version><percentage>34.5</percentage></sc_data>",
        );
        let browsers: Vec<BrowserStats> = map_records(&body, STATS).unwrap();
        assert_eq!(browsers[0].browser_page_views, "120");
        assert_eq!(browsers[0].browser_name, "Firefox");
        assert_eq!(browsers[0].browser_version, "120.0");
        assert_eq!(browsers[0].browser_percentage, "34.5");
    }

    #[test]
    fn test_map_os_stats() {
        let body = wrap(
            "<sc_data><page_views>80</page_views><os_name>Linux</os_name>\
             <percentage>12.1</percentage></sc_data>",
        );
        let systems: Vec<OsStats> = map_records(&body, STATS).unwrap();
        assert_eq!(systems[0].os_page_views, "80");
        assert_eq!(systems[0].os_name, "Linux");
        assert_eq!(systems[0].os_percentage, "12.1");
    }

    #[test]
    fn test_map_pageload_entry() {
        let body = wrap(
            "<sc_data><page_url>/p</page_url><time>12:00</time>\
             <referring_url>/r</referring_url><page_title>P</page_title>\
             <browser_name>Firefox</browser_name><browser_version>120.0</browser_version>\
             <os_name>Linux</os_name><device_vendor>Lenovo</device_vendor>\
             <device_model>X1</device_model><se_keywords>rust</se_keywords>\
             <resolution_width>1920</resolution_width><resolution_height>1080</resolution_height>\
             <isp>ISP</isp><city>Dublin</city><state>L</state><country>IE</country>\
             <ip_address>192.0.2.1</ip_address></sc_data>",
        );
        let entries: Vec<PageloadEntry> = map_records(&body, STATS).unwrap();
        let entry = &entries[0];
        assert_eq!(entry.page_url, "/p");
        assert_eq!(entry.se_keywords, "rust");
        assert_eq!(entry.resolution_width, "1920");
        assert_eq!(entry.ip_address, "192.0.2.1");
    }

    #[test]
    fn test_map_exit_link_reads_ip_number_tag() {
        let body = wrap(
            "<sc_data><link>https://out.example</link><time>12:01</time>\
             <page_url>/p</page_url><page_title>P</page_title>\
             <ip_number>192.0.2.2</ip_number></sc_data>",
        );
        let links: Vec<ExitLink> = map_records(&body, STATS).unwrap();
        assert_eq!(links[0].link, "https://out.example");
        assert_eq!(links[0].ip_address, "192.0.2.2");
    }

    #[test]
    fn test_map_download_link() {
        let body = wrap(
            "<sc_data><link>/file.pdf</link><time>12:02</time><page_url>/docs</page_url>\
             <page_title>Docs</page_title><ip_number>192.0.2.3</ip_number>\
             <extension>pdf</extension></sc_data>",
        );
        let links: Vec<DownloadLink> = map_records(&body, STATS).unwrap();
        assert_eq!(links[0].extension, "pdf");
        assert_eq!(links[0].ip_address, "192.0.2.3");
    }

    #[test]
    fn test_map_daily_summary() {
        let body = wrap(
            "<sc_data><date>2020-01-01</date><page_views>100</page_views>\
             <unique_visits>60</unique_visits><returning_visits>20</returning_visits>\
             <first_time_visits>40</first_time_visits></sc_data>",
        );
        let days: Vec<DailySummary> = map_records(&body, STATS).unwrap();
        assert_eq!(days[0].date, "2020-01-01");
        assert_eq!(days[0].page_views, "100");
        assert_eq!(days[0].first_time_visits, "40");
    }

    #[test]
    fn test_map_visitor_renamed_tags() {
        let body = wrap(
            "<sc_data><log_visits>2</log_visits><entries_in_visit>5</entries_in_visit>\
             <entry_t>12:00</entry_t><entry_url>/in</entry_url><entry_title>In</entry_title>\
             <se_keywords>rust</se_keywords><link>/ref</link>\
             <country_name>Ireland</country_name><state>L</state><res>1920x1080</res>\
             <exit_t>12:30</exit_t><exit_url>/out</exit_url><exit_title>Out</exit_title>\
             <returning_count>1</returning_count><browser_name>Firefox</browser_name>\
             <browser_version>120.0</browser_version><os>Linux</os>\
             <width>1920</width><height>1080</height><javascript>1</javascript>\
             <country>IE</country><city>Dublin</city><isp>ISP</isp>\
             <ip_address>192.0.2.4</ip_address><latitude>53.3</latitude>\
             <longitude>-6.2</longitude><num_entry>1</num_entry>\
             <visit_length>1800</visit_length></sc_data>",
        );
        let visitors: Vec<Visitor> = map_records(&body, STATS).unwrap();
        let visitor = &visitors[0];
        assert_eq!(visitor.entry_time, "12:00");
        assert_eq!(visitor.exit_time, "12:30");
        assert_eq!(visitor.resolution, "1920x1080");
        assert_eq!(visitor.resolution_width, "1920");
        assert_eq!(visitor.resolution_height, "1080");
        assert_eq!(visitor.exit_page_title, "Out");
        assert_eq!(visitor.visit_length, "1800");
    }

    #[test]
    fn test_records_preserve_document_order() {
        let body = wrap(
            "<sc_data><page_views>1</page_views><referring_url>a</referring_url></sc_data>\
             <sc_data><page_views>2</page_views><referring_url>b</referring_url></sc_data>",
        );
        let referrers: Vec<Referrer> = map_records(&body, STATS).unwrap();
        assert_eq!(referrers.len(), 2);
        assert_eq!(referrers[0].referring_url, "a");
        assert_eq!(referrers[1].referring_url, "b");
    }

    #[test]
    fn test_missing_field_yields_empty_string() {
        let body = wrap("<sc_data><page_views>9</page_views></sc_data>");
        let referrers: Vec<Referrer> = map_records(&body, STATS).unwrap();
        assert_eq!(referrers[0].page_views, "9");
        assert_eq!(referrers[0].referring_url, "");
    }

    #[test]
    fn test_non_ok_status_stats_message() {
        let body = r#"<sc status="error"></sc>"#;
        let result: Result<Vec<Referrer>, _> = map_records(body, STATS);
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "XML Error: Check your project ID and login credentials."
        );
        assert!(matches!(
            err,
            StatCounterError::RemoteService { status, .. } if status == "error"
        ));
    }

    #[test]
    fn test_non_ok_status_auth_message() {
        let body = r#"<sc status="fail"></sc>"#;
        let result: Result<Vec<Project>, _> = map_records(body, AUTH);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "XML error: Check your username and password.");
        assert!(matches!(err, StatCounterError::Authentication { .. }));
    }

    #[test]
    fn test_missing_status_attribute_is_error() {
        let body = "<sc></sc>";
        let result: Result<Vec<Project>, _> = map_records(body, AUTH);
        assert!(matches!(
            result,
            Err(StatCounterError::Authentication { status, .. }) if status.is_empty()
        ));
    }

    #[test]
    fn test_malformed_xml() {
        let result: Result<Vec<Project>, _> = map_records("not xml", AUTH);
        assert!(matches!(result, Err(StatCounterError::Xml(_))));
    }

    #[test]
    fn test_keywords_plain() {
        let body = wrap(
            "<sc_data><keyword>SEO</keyword></sc_data>\
             <sc_data><keyword>rust crates</keyword></sc_data>",
        );
        let keywords = map_keywords(&body, STATS, false).unwrap();
        assert_eq!(keywords, vec!["SEO", "rust crates"]);
    }

    #[test]
    fn test_keywords_exclude_encrypted() {
        let body = wrap(
            "<sc_data><keyword>SEO</keyword></sc_data>\
             <sc_data><keyword>Encrypted Search term</keyword></sc_data>\
             <sc_data><keyword>other</keyword></sc_data>",
        );
        let keywords = map_keywords(&body, STATS, true).unwrap();
        assert_eq!(keywords, vec!["SEO", "other"]);
    }

    #[test]
    fn test_keywords_exclude_disabled_keeps_all() {
        let body = wrap(
            "<sc_data><keyword>Encrypted Search term</keyword></sc_data>",
        );
        let keywords = map_keywords(&body, STATS, false).unwrap();
        assert_eq!(keywords, vec!["Encrypted Search term"]);
    }

    #[test]
    fn test_keywords_exclude_mid_string_match() {
        let body = wrap(
            "<sc_data><keyword>from Encrypted Search</keyword></sc_data>\
             <sc_data><keyword>plain</keyword></sc_data>",
        );
        let keywords = map_keywords(&body, STATS, true).unwrap();
        assert_eq!(keywords, vec!["plain"]);
    }

    #[test]
    fn test_status_is_ok() {
        assert!(status_is_ok(r#"<sc status="ok"></sc>"#).unwrap());
        assert!(!status_is_ok(r#"<sc status="error"></sc>"#).unwrap());
        assert!(status_is_ok("garbage").is_err());
    }
}
