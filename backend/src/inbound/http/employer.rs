//! Employer pages: own jobs, job posting and applicant lists.

use actix_web::{HttpResponse, web};
use tracing::info;

use super::ApiResult;
use super::flash::Flash;
use super::session::SessionContext;
use super::state::HttpState;
use super::views::{JobForm, JobsDashboardView, PostJobView, flash_and_redirect, render, see_other};
use crate::domain::{ErrorCode, JobId, SessionIdentity};

const EMPLOYER_HOME: &str = "/employer";

/// Jobs posted by the signed-in employer.
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
    identity: web::ReqData<SessionIdentity>,
) -> ApiResult<HttpResponse> {
    let user = identity.into_inner();
    let jobs = state.jobs.list_employer_jobs(user.user_id).await?;
    Ok(render(&session, JobsDashboardView { user, jobs }))
}

/// Blank job form.
pub async fn post_job_page(session: SessionContext) -> HttpResponse {
    render(
        &session,
        PostJobView {
            action: "/post-job",
        },
    )
}

/// Create a job owned by the signed-in employer and return to the dashboard.
pub async fn post_job(
    state: web::Data<HttpState>,
    identity: web::ReqData<SessionIdentity>,
    form: web::Form<JobForm>,
) -> ApiResult<HttpResponse> {
    let job = state
        .jobs_command
        .post_job(identity.user_id, form.into_inner().into())
        .await?;
    info!(job_id = %job.id, employer_id = %job.employer_id, "job posted");
    Ok(see_other(EMPLOYER_HOME))
}

/// Applicants for one of the signed-in employer's jobs.
///
/// Jobs owned by someone else are reported exactly like missing ones.
pub async fn applications(
    state: web::Data<HttpState>,
    session: SessionContext,
    identity: web::ReqData<SessionIdentity>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let job = JobId::new(path.into_inner());
    match state.applications.list_applicants(identity.user_id, job).await {
        Ok(applicants) => Ok(render(&session, applicants)),
        Err(err) if err.code() == ErrorCode::NotFound => {
            flash_and_redirect(&session, Flash::danger(err.message()), EMPLOYER_HOME)
        }
        Err(err) => Err(err),
    }
}
