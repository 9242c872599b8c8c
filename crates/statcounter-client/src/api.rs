//! The endpoint catalog.
//!
//! One method per remote capability. Each assembles its parameters
//! (validating locally first), builds the signed URL, performs a single GET,
//! and maps the XML response. Statistics calls take an optional [`DateRange`]
//! plus a pagination offset; omitting the range asks the service for the most
//! recent results.

use chrono::{NaiveDate, Utc};
use statcounter_types::{
    BrowserStats, DailySummary, DateRange, Device, DownloadLink, ExitLink, InvalidParameterError,
    NewProject, OsStats, PageStats, PageloadEntry, Project, Referrer, UserDetails, Visitor,
    validate_timezone,
};

use crate::client::StatCounterClient;
use crate::error::{Result, StatCounterError};
use crate::query::{self, QueryParams};
use crate::response::{self, Failure, PageListing};

const STATS: &str = "stats";
const USER_PROJECTS: &str = "user_projects";
const USER_DETAILS: &str = "user_details";
const ADD_PROJECT: &str = "add_project";

const ACCOUNT_FAILURE: Failure = Failure::Auth("XML error: Check your username and password.");
const ADD_PROJECT_FAILURE: Failure =
    Failure::Auth("Unable to create project. Check your login details.");
const STATS_FAILURE: Failure =
    Failure::Stats("XML Error: Check your project ID and login credentials.");
const SUMMARY_FAILURE: Failure =
    Failure::Stats("XML error: Check your login information and project ID.");
const VISITOR_FAILURE: Failure =
    Failure::Stats("XML Error: Check your login credentials and project ID.");

/// Rejects ranges that touch a future year before any request is sent.
fn check_range(range: Option<&DateRange>) -> std::result::Result<(), InvalidParameterError> {
    if let Some(range) = range {
        range.validate_not_future(Utc::now().date_naive())?;
    }
    Ok(())
}

impl StatCounterClient {
    /// Returns true if the stored credentials are accepted by the service.
    ///
    /// A rejected login is `Ok(false)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or XML decoding fails.
    pub async fn valid_login(&self) -> Result<bool> {
        let body = self.get_xml(USER_PROJECTS, &QueryParams::new()).await?;
        response::status_is_ok(&body)
    }

    /// Gets the account owner's details.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::Authentication`] if the credentials are
    /// rejected.
    pub async fn user_details(&self) -> Result<UserDetails> {
        let body = self.get_xml(USER_DETAILS, &QueryParams::new()).await?;
        response::map_single(&body, ACCOUNT_FAILURE)
    }

    /// Lists every project in the account.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::Authentication`] if the credentials are
    /// rejected.
    pub async fn user_projects(&self) -> Result<Vec<Project>> {
        let body = self.get_xml(USER_PROJECTS, &QueryParams::new()).await?;
        response::map_records(&body, ACCOUNT_FAILURE)
    }

    /// Creates a project for the given website, returning its new project ID
    /// and security code.
    ///
    /// The title and URL are percent-encoded before they enter the query
    /// string; `timezone` must be a canonical IANA identifier such as
    /// `America/Chicago`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::Timezone`] for an unknown timezone,
    /// or [`StatCounterError::Authentication`] if the service refuses the
    /// request.
    pub async fn create_project(
        &self,
        website_title: &str,
        website_url: &str,
        timezone: &str,
    ) -> Result<NewProject> {
        validate_timezone(timezone)?;
        let params = query::add_project(website_title, website_url, timezone);
        let body = self.get_xml(ADD_PROJECT, &params).await?;
        response::map_single(&body, ADD_PROJECT_FAILURE)
    }

    /// Returns recent search keywords for a project.
    ///
    /// With `exclude_encrypted_kws` set, keywords containing the
    /// "Encrypted Search" placeholder are dropped from the result.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn recent_keyword_activity(
        &self,
        project_id: &str,
        range: Option<DateRange>,
        count: u32,
        offset: u32,
        exclude_encrypted_kws: bool,
    ) -> Result<Vec<String>> {
        check_range(range.as_ref())?;
        let params = query::keyword_activity(project_id, range, count, offset);
        let body = self.get_xml(STATS, &params).await?;
        response::map_keywords(&body, STATS_FAILURE, exclude_encrypted_kws)
    }

    /// Gets the most viewed pages for a project.
    ///
    /// `count_type` selects what is counted; the service's default is
    /// `page_view`.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn popular_pages(
        &self,
        project_id: &str,
        range: Option<DateRange>,
        count: u32,
        offset: u32,
        count_type: &str,
    ) -> Result<Vec<PageStats>> {
        check_range(range.as_ref())?;
        let params = query::popular_pages(project_id, range, count, offset, count_type);
        let body = self.get_xml(STATS, &params).await?;
        response::map_pages(&body, STATS_FAILURE, PageListing::Popular)
    }

    /// Gets the pages visits most often start on.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn entry_pages(
        &self,
        project_id: &str,
        range: Option<DateRange>,
        count: u32,
        offset: u32,
    ) -> Result<Vec<PageStats>> {
        check_range(range.as_ref())?;
        let params = query::entry_or_exit_pages("entry", project_id, range, count, offset);
        let body = self.get_xml(STATS, &params).await?;
        response::map_pages(&body, STATS_FAILURE, PageListing::Entry)
    }

    /// Gets the pages visits most often end on.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn exit_pages(
        &self,
        project_id: &str,
        range: Option<DateRange>,
        count: u32,
        offset: u32,
    ) -> Result<Vec<PageStats>> {
        check_range(range.as_ref())?;
        let params = query::entry_or_exit_pages("exit", project_id, range, count, offset);
        let body = self.get_xml(STATS, &params).await?;
        response::map_pages(&body, STATS_FAILURE, PageListing::Exit)
    }

    /// Gets referring URLs for a project.
    ///
    /// `external` limits the listing to off-site referrers.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn came_from(
        &self,
        project_id: &str,
        range: Option<DateRange>,
        external: bool,
        count: u32,
        offset: u32,
    ) -> Result<Vec<Referrer>> {
        check_range(range.as_ref())?;
        let params = query::came_from(project_id, range, external, count, offset);
        let body = self.get_xml(STATS, &params).await?;
        response::map_records(&body, STATS_FAILURE)
    }

    /// Gets the browser breakdown for a project.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn browsers(
        &self,
        project_id: &str,
        range: Option<DateRange>,
        device: Device,
        count: u32,
        offset: u32,
    ) -> Result<Vec<BrowserStats>> {
        check_range(range.as_ref())?;
        let params = query::device_section("browsers", device, project_id, range, count, offset);
        let body = self.get_xml(STATS, &params).await?;
        response::map_records(&body, STATS_FAILURE)
    }

    /// Gets the operating system breakdown for a project.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn operating_systems(
        &self,
        project_id: &str,
        range: Option<DateRange>,
        device: Device,
        count: u32,
        offset: u32,
    ) -> Result<Vec<OsStats>> {
        check_range(range.as_ref())?;
        let params = query::device_section("os", device, project_id, range, count, offset);
        let body = self.get_xml(STATS, &params).await?;
        response::map_records(&body, STATS_FAILURE)
    }

    /// Gets recent pageload activity for a project.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn recent_pageload_activity(
        &self,
        project_id: &str,
        device: Device,
        range: Option<DateRange>,
        count: u32,
        offset: u32,
    ) -> Result<Vec<PageloadEntry>> {
        check_range(range.as_ref())?;
        let params = query::device_section("pageload", device, project_id, range, count, offset);
        let body = self.get_xml(STATS, &params).await?;
        response::map_records(&body, STATS_FAILURE)
    }

    /// Gets outbound link clicks for a project.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn exit_link_activity(
        &self,
        project_id: &str,
        device: Device,
        range: Option<DateRange>,
        count: u32,
        offset: u32,
    ) -> Result<Vec<ExitLink>> {
        check_range(range.as_ref())?;
        let params =
            query::device_section("exit-link-activity", device, project_id, range, count, offset);
        let body = self.get_xml(STATS, &params).await?;
        response::map_records(&body, STATS_FAILURE)
    }

    /// Gets download link activity for a project.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn download_link_activity(
        &self,
        project_id: &str,
        device: Device,
        range: Option<DateRange>,
        count: u32,
        offset: u32,
    ) -> Result<Vec<DownloadLink>> {
        check_range(range.as_ref())?;
        let params = query::download_link_activity(device, project_id, range, count, offset);
        let body = self.get_xml(STATS, &params).await?;
        response::map_records(&body, STATS_FAILURE)
    }

    /// Gets daily summary stats for each day of the range.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn summary_stats(
        &self,
        project_id: &str,
        range: DateRange,
    ) -> Result<Vec<DailySummary>> {
        check_range(Some(&range))?;
        let params = query::summary(project_id, range);
        let body = self.get_xml(STATS, &params).await?;
        response::map_records(&body, SUMMARY_FAILURE)
    }

    /// Gets the summary stats for a single day.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status, or
    /// [`StatCounterError::MalformedResponse`] if the service returns no row
    /// for the day.
    pub async fn summary_stats_for_date(
        &self,
        project_id: &str,
        date: NaiveDate,
    ) -> Result<DailySummary> {
        self.summary_stats(project_id, DateRange::single_day(date))
            .await?
            .into_iter()
            .next()
            .ok_or(StatCounterError::MalformedResponse("missing sc_data element"))
    }

    /// Fetches recent visitor sessions for a project.
    ///
    /// # Errors
    ///
    /// Returns [`StatCounterError::RemoteService`] on a non-ok status.
    pub async fn recent_visitors(
        &self,
        project_id: &str,
        range: Option<DateRange>,
        count: u32,
        offset: u32,
    ) -> Result<Vec<Visitor>> {
        check_range(range.as_ref())?;
        let params = query::visitors(project_id, range, count, offset);
        let body = self.get_xml(STATS, &params).await?;
        response::map_records(&body, VISITOR_FAILURE)
    }
}
