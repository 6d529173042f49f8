//! Jobseeker pages: job board, applying, applied list and profile.

use actix_web::{HttpResponse, web};
use tracing::{info, warn};

use super::ApiResult;
use super::flash::Flash;
use super::session::SessionContext;
use super::state::HttpState;
use super::views::{
    AccountForm, AccountView, AppliedView, JobsDashboardView, flash_and_redirect, render,
    see_other,
};
use crate::domain::{ErrorCode, JobId, Role, SessionIdentity};

const JOBSEEKER_HOME: &str = "/jobseeker";
const PROFILE_PATH: &str = "/profile";

/// Flash queued after a successful application.
pub const APPLIED_MESSAGE: &str = "You have successfully applied for the job!";

/// Every posted job, for the signed-in jobseeker.
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
    identity: web::ReqData<SessionIdentity>,
) -> ApiResult<HttpResponse> {
    let jobs = state.jobs.list_jobs().await?;
    Ok(render(
        &session,
        JobsDashboardView {
            user: identity.into_inner(),
            jobs,
        },
    ))
}

/// Apply to a job once; repeats are answered with a warning.
pub async fn apply(
    state: web::Data<HttpState>,
    session: SessionContext,
    identity: web::ReqData<SessionIdentity>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let job = JobId::new(path.into_inner());
    match state.applications_command.apply(identity.user_id, job).await {
        Ok(application) => {
            info!(application_id = %application.id, job_id = %job, "application stored");
            flash_and_redirect(&session, Flash::success(APPLIED_MESSAGE), JOBSEEKER_HOME)
        }
        Err(err) if err.code() == ErrorCode::Conflict => {
            flash_and_redirect(&session, Flash::warning(err.message()), JOBSEEKER_HOME)
        }
        Err(err) if err.code() == ErrorCode::NotFound => {
            flash_and_redirect(&session, Flash::danger(err.message()), JOBSEEKER_HOME)
        }
        Err(err) => Err(err),
    }
}

/// Jobs the signed-in jobseeker has applied to.
pub async fn applied(
    state: web::Data<HttpState>,
    session: SessionContext,
    identity: web::ReqData<SessionIdentity>,
) -> ApiResult<HttpResponse> {
    let applications = state.applications.list_applied(identity.user_id).await?;
    Ok(render(&session, AppliedView { applications }))
}

fn sign_out_vanished(session: &SessionContext, identity: &SessionIdentity) -> HttpResponse {
    warn!(user_id = %identity.user_id, "session account no longer exists; signing out");
    session.purge();
    see_other("/")
}

/// Profile form for the signed-in jobseeker.
///
/// A session whose account has since been deleted is signed out.
pub async fn profile_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    identity: web::ReqData<SessionIdentity>,
) -> ApiResult<HttpResponse> {
    match state
        .accounts
        .find_account(identity.user_id, Role::Jobseeker)
        .await
    {
        Ok(account) => Ok(render(&session, AccountView { account })),
        Err(err) if err.code() == ErrorCode::NotFound => Ok(sign_out_vanished(&session, &identity)),
        Err(err) => Err(err),
    }
}

/// Update the signed-in jobseeker and refresh the session copy from the
/// stored row.
pub async fn update_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
    identity: web::ReqData<SessionIdentity>,
    form: web::Form<AccountForm>,
) -> ApiResult<HttpResponse> {
    let result = state
        .accounts_command
        .update_account(identity.user_id, Role::Jobseeker, form.into_inner().into())
        .await;
    match result {
        Ok(account) => {
            session.persist_identity(&SessionIdentity::from(&account))?;
            info!(user_id = %account.id, "profile updated");
            flash_and_redirect(&session, Flash::success("Profile updated successfully!"), PROFILE_PATH)
        }
        Err(err) if err.code() == ErrorCode::Conflict => {
            flash_and_redirect(&session, Flash::danger(err.message()), PROFILE_PATH)
        }
        Err(err) if err.code() == ErrorCode::NotFound => Ok(sign_out_vanished(&session, &identity)),
        Err(err) => Err(err),
    }
}
