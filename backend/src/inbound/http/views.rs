//! JSON view models, submitted forms and response helpers shared by the
//! page handlers.
//!
//! Every page is a camelCase JSON object carrying its own fields plus the
//! `flashes` drained from the session. Form posts answer with `303 See Other`.

use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::error::ApiResult;
use super::flash::Flash;
use super::session::SessionContext;
use crate::domain::ports::AccountUpdate;
use crate::domain::{
    AppliedJob, Job, JobDraft, JobListing, Role, SessionIdentity, StatsReport, User,
};

/// Page payload: view-specific content plus pending flash messages.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(flatten)]
    pub content: T,
    pub flashes: Vec<Flash>,
}

/// Render `content` as a `200 OK` page, consuming queued flashes.
pub fn render<T: Serialize>(session: &SessionContext, content: T) -> HttpResponse {
    HttpResponse::Ok().json(Page {
        content,
        flashes: session.take_flashes(),
    })
}

/// `303 See Other` to `location`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

/// Queue `flash` and redirect to `location`.
pub fn flash_and_redirect(
    session: &SessionContext,
    flash: Flash,
    location: &str,
) -> ApiResult<HttpResponse> {
    session.push_flash(flash)?;
    Ok(see_other(location))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub action: &'static str,
    pub register_path: &'static str,
}

impl Default for LoginView {
    fn default() -> Self {
        Self {
            action: "/",
            register_path: "/register",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterView {
    pub action: &'static str,
    pub roles: [Role; 3],
}

impl Default for RegisterView {
    fn default() -> Self {
        Self {
            action: "/register",
            roles: Role::ALL,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardView {
    pub user: SessionIdentity,
    pub stats: StatsReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageJobsView {
    pub jobs: Vec<JobListing>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobView {
    pub job: Job,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageAccountsView {
    pub role: Role,
    pub accounts: Vec<User>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub account: User,
}

/// Role dashboard listing jobs (employer: own jobs, jobseeker: all jobs).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsDashboardView {
    pub user: SessionIdentity,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostJobView {
    pub action: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedView {
    pub applications: Vec<AppliedJob>,
}

/// `POST /`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// `POST /register`. The role stays raw so unknown values get a precise error.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// `POST /post-job` and `POST /admin/manage/jobs/edit/{id}`.
#[derive(Debug, Deserialize)]
pub struct JobForm {
    pub title: String,
    pub description: String,
}

impl From<JobForm> for JobDraft {
    fn from(form: JobForm) -> Self {
        Self {
            title: form.title,
            description: form.description,
        }
    }
}

/// Account edit and profile forms. An absent or empty password keeps the
/// stored hash.
#[derive(Debug, Deserialize)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<AccountForm> for AccountUpdate {
    fn from(form: AccountForm) -> Self {
        let password = (!form.password.is_empty()).then(|| Zeroizing::new(form.password));
        Self {
            name: form.name,
            email: form.email,
            password,
        }
    }
}
