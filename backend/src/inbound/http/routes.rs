//! Route table.
//!
//! ```text
//! GET|POST /                                    login
//! GET|POST /register                            registration
//! GET      /logout                              logout
//! GET      /admin                               admin   stats dashboard
//! GET      /admin/manage/jobs                   admin   job listing
//! GET|POST /admin/manage/jobs/edit/{id}         admin   edit job
//! GET      /admin/manage/jobs/delete/{id}       admin   delete job
//! GET      /admin/manage/{kind}                 admin   employer/jobseeker listing
//! GET|POST /admin/manage/{kind}/edit/{id}       admin   edit account
//! GET      /admin/manage/{kind}/delete/{id}     admin   delete account
//! GET      /employer                            employer  own jobs
//! GET|POST /post-job                            employer  post a job
//! GET      /employer/applications/{job_id}      employer  applicants
//! GET      /jobseeker                           jobseeker all jobs
//! GET      /apply/{job_id}                      jobseeker apply
//! GET      /applied                             jobseeker own applications
//! GET|POST /profile                             jobseeker own profile
//! ```
//!
//! Every protected scope or resource is wrapped in [`RequireRole`], so the
//! gate runs before extraction and before any port is called.

use actix_web::web;

use super::{admin, auth, employer, jobseeker};
use crate::domain::Role;
use crate::middleware::RequireRole;

/// Register every page route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(auth::login_page))
            .route(web::post().to(auth::login)),
    )
    .service(
        web::resource("/register")
            .route(web::get().to(auth::register_page))
            .route(web::post().to(auth::register)),
    )
    .route("/logout", web::get().to(auth::logout))
    // Job routes come first so `jobs` is never read as an account kind.
    .service(
        web::scope("/admin")
            .wrap(RequireRole::new(Role::Admin))
            .route("", web::get().to(admin::dashboard))
            .route("/manage/jobs", web::get().to(admin::manage_jobs))
            .service(
                web::resource("/manage/jobs/edit/{id}")
                    .route(web::get().to(admin::edit_job_page))
                    .route(web::post().to(admin::edit_job)),
            )
            .route("/manage/jobs/delete/{id}", web::get().to(admin::delete_job))
            .route("/manage/{kind}", web::get().to(admin::manage_accounts))
            .service(
                web::resource("/manage/{kind}/edit/{id}")
                    .route(web::get().to(admin::edit_account_page))
                    .route(web::post().to(admin::edit_account)),
            )
            .route("/manage/{kind}/delete/{id}", web::get().to(admin::delete_account)),
    )
    .service(
        web::scope("/employer")
            .wrap(RequireRole::new(Role::Employer))
            .route("", web::get().to(employer::dashboard))
            .route("/applications/{job_id}", web::get().to(employer::applications)),
    )
    .service(
        web::resource("/post-job")
            .wrap(RequireRole::new(Role::Employer))
            .route(web::get().to(employer::post_job_page))
            .route(web::post().to(employer::post_job)),
    )
    .service(
        web::resource("/jobseeker")
            .wrap(RequireRole::new(Role::Jobseeker))
            .route(web::get().to(jobseeker::dashboard)),
    )
    .service(
        web::resource("/apply/{job_id}")
            .wrap(RequireRole::new(Role::Jobseeker))
            .route(web::get().to(jobseeker::apply)),
    )
    .service(
        web::resource("/applied")
            .wrap(RequireRole::new(Role::Jobseeker))
            .route(web::get().to(jobseeker::applied)),
    )
    .service(
        web::resource("/profile")
            .wrap(RequireRole::new(Role::Jobseeker))
            .route(web::get().to(jobseeker::profile_page))
            .route(web::post().to(jobseeker::update_profile)),
    );
}
