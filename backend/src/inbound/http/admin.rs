//! Admin dashboard and management pages.
//!
//! Everything here sits behind the admin gate. Account management is shared
//! between employers and jobseekers through [`AccountKind`], taken from the
//! `{kind}` path segment.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

use super::ApiResult;
use super::flash::Flash;
use super::session::SessionContext;
use super::state::HttpState;
use super::views::{
    AccountForm, AccountView, AdminDashboardView, JobForm, JobView, ManageAccountsView,
    ManageJobsView, flash_and_redirect, render,
};
use crate::domain::{ErrorCode, JobId, Role, SessionIdentity, UserId};

const MANAGE_JOBS_PATH: &str = "/admin/manage/jobs";

/// Account collections an admin can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Employers,
    Jobseekers,
}

impl AccountKind {
    pub const fn role(self) -> Role {
        match self {
            Self::Employers => Role::Employer,
            Self::Jobseekers => Role::Jobseeker,
        }
    }

    pub const fn listing_path(self) -> &'static str {
        match self {
            Self::Employers => "/admin/manage/employers",
            Self::Jobseekers => "/admin/manage/jobseekers",
        }
    }

    fn edit_path(self, id: i64) -> String {
        format!("{}/edit/{id}", self.listing_path())
    }
}

/// Admin landing page with job and account totals for each window.
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
    identity: web::ReqData<SessionIdentity>,
) -> ApiResult<HttpResponse> {
    let stats = state.stats.dashboard_stats().await?;
    Ok(render(
        &session,
        AdminDashboardView {
            user: identity.into_inner(),
            stats,
        },
    ))
}

/// Every job, newest first, with the name of the employer who posted it.
pub async fn manage_jobs(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let jobs = state.jobs.list_jobs_with_employers().await?;
    Ok(render(&session, ManageJobsView { jobs }))
}

/// Edit form for one job; a missing id flashes back to the job listing.
pub async fn edit_job_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    match state.jobs.find_job(JobId::new(path.into_inner())).await {
        Ok(job) => Ok(render(&session, JobView { job })),
        Err(err) if err.code() == ErrorCode::NotFound => {
            flash_and_redirect(&session, Flash::danger(err.message()), MANAGE_JOBS_PATH)
        }
        Err(err) => Err(err),
    }
}

/// Apply the submitted title and description to a job.
pub async fn edit_job(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
    form: web::Form<JobForm>,
) -> ApiResult<HttpResponse> {
    let id = JobId::new(path.into_inner());
    match state.jobs_command.update_job(id, form.into_inner().into()).await {
        Ok(_) => {
            info!(job_id = %id, "admin updated job");
            flash_and_redirect(&session, Flash::success("Job updated successfully!"), MANAGE_JOBS_PATH)
        }
        Err(err) if err.code() == ErrorCode::NotFound => {
            flash_and_redirect(&session, Flash::danger(err.message()), MANAGE_JOBS_PATH)
        }
        Err(err) => Err(err),
    }
}

/// Remove a job. Applications to it stay stored but drop out of listings.
pub async fn delete_job(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = JobId::new(path.into_inner());
    match state.jobs_command.delete_job(id).await {
        Ok(()) => {
            info!(job_id = %id, "admin deleted job");
            flash_and_redirect(&session, Flash::success("Job deleted successfully!"), MANAGE_JOBS_PATH)
        }
        Err(err) if err.code() == ErrorCode::NotFound => {
            flash_and_redirect(&session, Flash::danger(err.message()), MANAGE_JOBS_PATH)
        }
        Err(err) => Err(err),
    }
}

/// Accounts holding the role named in the path.
pub async fn manage_accounts(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<AccountKind>,
) -> ApiResult<HttpResponse> {
    let role = path.into_inner().role();
    let accounts = state.accounts.list_accounts(role).await?;
    Ok(render(&session, ManageAccountsView { role, accounts }))
}

/// Edit form for one employer or jobseeker account.
///
/// Ids belonging to another role flash "not found" like missing ones.
pub async fn edit_account_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(AccountKind, i64)>,
) -> ApiResult<HttpResponse> {
    let (kind, id) = path.into_inner();
    match state.accounts.find_account(UserId::new(id), kind.role()).await {
        Ok(account) => Ok(render(&session, AccountView { account })),
        Err(err) if err.code() == ErrorCode::NotFound => {
            flash_and_redirect(&session, Flash::danger(err.message()), kind.listing_path())
        }
        Err(err) => Err(err),
    }
}

/// Save an admin's changes to an account.
///
/// A blank password keeps the current one; a taken email returns to the form.
pub async fn edit_account(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(AccountKind, i64)>,
    form: web::Form<AccountForm>,
) -> ApiResult<HttpResponse> {
    let (kind, id) = path.into_inner();
    let role = kind.role();
    let result = state
        .accounts_command
        .update_account(UserId::new(id), role, form.into_inner().into())
        .await;
    match result {
        Ok(account) => {
            info!(user_id = %account.id, %role, "admin updated account");
            let message = format!("{} updated successfully!", role.label());
            flash_and_redirect(&session, Flash::success(message), kind.listing_path())
        }
        Err(err) if err.code() == ErrorCode::NotFound => {
            flash_and_redirect(&session, Flash::danger(err.message()), kind.listing_path())
        }
        Err(err) if err.code() == ErrorCode::Conflict => {
            flash_and_redirect(&session, Flash::danger(err.message()), &kind.edit_path(id))
        }
        Err(err) => Err(err),
    }
}

/// Delete an employer or jobseeker account scoped to the role in the path.
pub async fn delete_account(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(AccountKind, i64)>,
) -> ApiResult<HttpResponse> {
    let (kind, id) = path.into_inner();
    let role = kind.role();
    match state.accounts_command.delete_account(UserId::new(id), role).await {
        Ok(()) => {
            info!(user_id = id, %role, "admin deleted account");
            let message = format!("{} deleted successfully!", role.label());
            flash_and_redirect(&session, Flash::success(message), kind.listing_path())
        }
        Err(err) if err.code() == ErrorCode::NotFound => {
            flash_and_redirect(&session, Flash::danger(err.message()), kind.listing_path())
        }
        Err(err) => Err(err),
    }
}
