//! End-to-end page flows over the real application and a temporary SQLite
//! database.
//!
//! Requests carry the session cookie forward the way a browser would, so the
//! cookie store, role gate and flash messages are all exercised together.

use std::sync::Arc;

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::test::{self, TestRequest};
use actix_web::web;
use jobboard::inbound::http::session_config::SessionSettings;
use jobboard::server::{SESSION_COOKIE_NAME, build_app, build_http_state};
use mockable::DefaultClock;
use serde_json::Value;

mod support;

use support::TestDatabase;

/// Cookie jar holding the single session cookie.
#[derive(Default)]
struct Jar(Option<Cookie<'static>>);

impl Jar {
    fn attach(&self, req: TestRequest) -> TestRequest {
        match &self.0 {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }

    fn store<B>(&mut self, res: &ServiceResponse<B>) {
        if let Some(cookie) = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        {
            self.0 = (!cookie.value().is_empty()).then(|| cookie.into_owned());
        }
    }
}

fn session_settings() -> SessionSettings {
    SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }
}

fn location<B>(res: &ServiceResponse<B>) -> String {
    res.headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

macro_rules! call {
    ($app:expr, $jar:expr, $req:expr) => {{
        let res = test::call_service(&$app, $jar.attach($req).to_request()).await;
        $jar.store(&res);
        res
    }};
}

macro_rules! get_json {
    ($app:expr, $jar:expr, $path:expr) => {{
        let res = call!($app, $jar, TestRequest::get().uri($path));
        assert_eq!(res.status(), StatusCode::OK, "GET {}", $path);
        let body: Value = test::read_body_json(res).await;
        body
    }};
}

macro_rules! post_form {
    ($app:expr, $jar:expr, $path:expr, $form:expr) => {{
        let res = call!(
            $app,
            $jar,
            TestRequest::post().uri($path).set_form($form)
        );
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "POST {}", $path);
        location(&res)
    }};
}

macro_rules! register_and_login {
    ($app:expr, $jar:expr, $name:expr, $email:expr, $role:expr) => {{
        let landing = post_form!(
            $app,
            $jar,
            "/register",
            [
                ("name", $name),
                ("email", $email),
                ("password", "hunter2"),
                ("role", $role),
            ]
        );
        assert_eq!(landing, "/");
        post_form!($app, $jar, "/", [("email", $email), ("password", "hunter2")])
    }};
}

fn flash_messages(body: &Value) -> Vec<(String, String)> {
    body["flashes"]
        .as_array()
        .into_iter()
        .flatten()
        .map(|flash| {
            (
                flash["level"].as_str().unwrap_or_default().to_owned(),
                flash["message"].as_str().unwrap_or_default().to_owned(),
            )
        })
        .collect()
}

#[actix_web::test]
async fn employers_post_and_jobseekers_apply_once() {
    let db = TestDatabase::provision().await;
    let state = web::Data::new(build_http_state(&db.pool, Arc::new(DefaultClock)));
    let app = test::init_service(build_app(state, session_settings())).await;

    let mut employer = Jar::default();
    let home = register_and_login!(app, employer, "Acme", "hr@acme.test", "employer");
    assert_eq!(home, "/employer");
    let after_post = post_form!(
        app,
        employer,
        "/post-job",
        [("title", "Backend Dev"), ("description", "Rust and SQL")]
    );
    assert_eq!(after_post, "/employer");
    let dashboard = get_json!(app, employer, "/employer");
    assert_eq!(dashboard["jobs"][0]["title"], "Backend Dev");
    let job_id = dashboard["jobs"][0]["id"].as_i64().expect("job id");

    let mut seeker = Jar::default();
    let home = register_and_login!(app, seeker, "Sam", "sam@example.test", "jobseeker");
    assert_eq!(home, "/jobseeker");
    let listing = get_json!(app, seeker, "/jobseeker");
    assert_eq!(listing["jobs"][0]["id"], job_id);

    let res = call!(app, seeker, TestRequest::get().uri(&format!("/apply/{job_id}")));
    assert_eq!(location(&res), "/jobseeker");
    let page = get_json!(app, seeker, "/jobseeker");
    assert_eq!(
        flash_messages(&page),
        [(
            "success".to_owned(),
            "You have successfully applied for the job!".to_owned()
        )]
    );

    let res = call!(app, seeker, TestRequest::get().uri(&format!("/apply/{job_id}")));
    assert_eq!(location(&res), "/jobseeker");
    let page = get_json!(app, seeker, "/jobseeker");
    assert_eq!(
        flash_messages(&page),
        [(
            "warning".to_owned(),
            "You have already applied for this job.".to_owned()
        )]
    );

    let applied = get_json!(app, seeker, "/applied");
    let applications = applied["applications"].as_array().expect("applications");
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["title"], "Backend Dev");

    let applicants = get_json!(app, employer, &format!("/employer/applications/{job_id}"));
    assert_eq!(applicants["applicants"][0]["email"], "sam@example.test");
}

#[actix_web::test]
async fn admins_see_totals_and_other_roles_are_turned_away() {
    let db = TestDatabase::provision().await;
    let state = web::Data::new(build_http_state(&db.pool, Arc::new(DefaultClock)));
    let app = test::init_service(build_app(state, session_settings())).await;

    let mut employer = Jar::default();
    register_and_login!(app, employer, "Acme", "hr@acme.test", "employer");
    post_form!(
        app,
        employer,
        "/post-job",
        [("title", "Backend Dev"), ("description", "Rust")]
    );
    let res = call!(app, employer, TestRequest::get().uri("/admin"));
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    let mut admin = Jar::default();
    let home = register_and_login!(app, admin, "Root", "root@example.test", "admin");
    assert_eq!(home, "/admin");
    let dashboard = get_json!(app, admin, "/admin");
    assert_eq!(dashboard["stats"]["jobs"]["total"], 1);
    assert_eq!(dashboard["stats"]["employers"]["total"], 1);
    assert_eq!(dashboard["stats"]["jobseekers"]["total"], 0);

    let res = call!(app, admin, TestRequest::get().uri("/logout"));
    assert_eq!(location(&res), "/");
    let res = call!(app, admin, TestRequest::get().uri("/admin"));
    assert_eq!(location(&res), "/");
}

#[actix_web::test]
async fn duplicate_registrations_are_flashed_back() {
    let db = TestDatabase::provision().await;
    let state = web::Data::new(build_http_state(&db.pool, Arc::new(DefaultClock)));
    let app = test::init_service(build_app(state, session_settings())).await;

    let mut visitor = Jar::default();
    register_and_login!(app, visitor, "Acme", "hr@acme.test", "employer");
    call!(app, visitor, TestRequest::get().uri("/logout"));

    let landing = post_form!(
        app,
        visitor,
        "/register",
        [
            ("name", "Other"),
            ("email", "hr@acme.test"),
            ("password", "pw"),
            ("role", "jobseeker"),
        ]
    );
    assert_eq!(landing, "/register");
    let page = get_json!(app, visitor, "/register");
    assert_eq!(
        flash_messages(&page),
        [(
            "danger".to_owned(),
            "An account with this email already exists.".to_owned()
        )]
    );
}

#[actix_web::test]
async fn responses_carry_a_trace_id() {
    let db = TestDatabase::provision().await;
    let state = web::Data::new(build_http_state(&db.pool, Arc::new(DefaultClock)));
    let app = test::init_service(build_app(state, session_settings())).await;

    let res = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("trace-id"));
}

fn job_ids(body: &Value) -> Vec<i64> {
    body["jobs"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|job| job["id"].as_i64())
        .collect()
}

macro_rules! login_status {
    ($app:expr, $jar:expr, $email:expr, $password:expr) => {{
        let res = call!(
            $app,
            $jar,
            TestRequest::post()
                .uri("/")
                .set_form([("email", $email), ("password", $password)])
        );
        (res.status(), location(&res))
    }};
}

#[actix_web::test]
async fn padded_emails_and_blank_passwords_log_in_as_registered() {
    let db = TestDatabase::provision().await;
    let state = web::Data::new(build_http_state(&db.pool, Arc::new(DefaultClock)));
    let app = test::init_service(build_app(state, session_settings())).await;

    let accounts = [
        (" pad@example.test ", "pw"),
        ("blankpw@example.test", ""),
        ("spaces@example.test", " "),
    ];
    for (email, password) in accounts {
        let mut visitor = Jar::default();
        let landing = post_form!(
            app,
            visitor,
            "/register",
            [
                ("name", "Edge"),
                ("email", email),
                ("password", password),
                ("role", "jobseeker"),
            ]
        );
        assert_eq!(landing, "/", "register {email:?}");

        let (status, home) = login_status!(app, visitor, email, password);
        assert_eq!(status, StatusCode::SEE_OTHER, "login {email:?}");
        assert_eq!(home, "/jobseeker");
        let listing = get_json!(app, visitor, "/jobseeker");
        assert_eq!(listing["user"]["name"], "Edge");
    }

    let mut stranger = Jar::default();
    let (status, _) = login_status!(app, stranger, "pad@example.test", "pw");
    assert_eq!(status, StatusCode::OK);
    let (status, _) = login_status!(app, stranger, "blankpw@example.test", " ");
    assert_eq!(status, StatusCode::OK);
    let (status, _) = login_status!(app, stranger, "spaces@example.test", "");
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn profile_password_changes_apply_at_next_login() {
    let db = TestDatabase::provision().await;
    let state = web::Data::new(build_http_state(&db.pool, Arc::new(DefaultClock)));
    let app = test::init_service(build_app(state, session_settings())).await;

    let mut seeker = Jar::default();
    register_and_login!(app, seeker, "Sam", "sam@example.test", "jobseeker");
    let back = post_form!(
        app,
        seeker,
        "/profile",
        [
            ("name", "Samantha"),
            ("email", "sam@example.test"),
            ("password", "new-secret"),
        ]
    );
    assert_eq!(back, "/profile");
    let profile = get_json!(app, seeker, "/profile");
    assert_eq!(profile["account"]["name"], "Samantha");
    assert_eq!(
        flash_messages(&profile),
        [("success".to_owned(), "Profile updated successfully!".to_owned())]
    );
    call!(app, seeker, TestRequest::get().uri("/logout"));

    let (status, _) = login_status!(app, seeker, "sam@example.test", "hunter2");
    assert_eq!(status, StatusCode::OK);
    let (status, home) = login_status!(app, seeker, "sam@example.test", "new-secret");
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(home, "/jobseeker");

    let back = post_form!(
        app,
        seeker,
        "/profile",
        [
            ("name", "Sam"),
            ("email", "sam@example.test"),
            ("password", ""),
        ]
    );
    assert_eq!(back, "/profile");
    call!(app, seeker, TestRequest::get().uri("/logout"));

    let (status, _) = login_status!(app, seeker, "sam@example.test", "");
    assert_eq!(status, StatusCode::OK);
    let (status, home) = login_status!(app, seeker, "sam@example.test", "new-secret");
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(home, "/jobseeker");
    let profile = get_json!(app, seeker, "/profile");
    assert_eq!(profile["account"]["name"], "Sam");
}

#[actix_web::test]
async fn deleted_jobs_leave_every_listing() {
    let db = TestDatabase::provision().await;
    let state = web::Data::new(build_http_state(&db.pool, Arc::new(DefaultClock)));
    let app = test::init_service(build_app(state, session_settings())).await;

    let mut employer = Jar::default();
    register_and_login!(app, employer, "Acme", "hr@acme.test", "employer");
    for title in ["Backend Dev", "Frontend Dev"] {
        post_form!(
            app,
            employer,
            "/post-job",
            [("title", title), ("description", "Remote")]
        );
    }
    let dashboard = get_json!(app, employer, "/employer");
    let doomed = dashboard["jobs"][0]["id"].as_i64().expect("job id");
    let kept = dashboard["jobs"][1]["id"].as_i64().expect("job id");

    let mut seeker = Jar::default();
    register_and_login!(app, seeker, "Sam", "sam@example.test", "jobseeker");
    call!(app, seeker, TestRequest::get().uri(&format!("/apply/{doomed}")));
    assert_eq!(get_json!(app, seeker, "/jobseeker")["jobs"].as_array().map(Vec::len), Some(2));

    let mut admin = Jar::default();
    register_and_login!(app, admin, "Root", "root@example.test", "admin");
    let mut listed = job_ids(&get_json!(app, admin, "/admin/manage/jobs"));
    listed.sort_unstable();
    assert_eq!(listed, [doomed, kept]);

    let res = call!(
        app,
        admin,
        TestRequest::get().uri(&format!("/admin/manage/jobs/delete/{doomed}"))
    );
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/admin/manage/jobs");

    let managed = get_json!(app, admin, "/admin/manage/jobs");
    assert_eq!(job_ids(&managed), [kept]);
    assert_eq!(
        flash_messages(&managed),
        [("success".to_owned(), "Job deleted successfully!".to_owned())]
    );
    assert_eq!(job_ids(&get_json!(app, seeker, "/jobseeker")), [kept]);
    assert_eq!(job_ids(&get_json!(app, employer, "/employer")), [kept]);
    let applied = get_json!(app, seeker, "/applied");
    assert_eq!(applied["applications"].as_array().map(Vec::len), Some(0));
    let dashboard = get_json!(app, admin, "/admin");
    assert_eq!(dashboard["stats"]["jobs"]["total"], 1);

    let res = call!(
        app,
        admin,
        TestRequest::get().uri(&format!("/admin/manage/jobs/delete/{doomed}"))
    );
    assert_eq!(location(&res), "/admin/manage/jobs");
    let managed = get_json!(app, admin, "/admin/manage/jobs");
    assert_eq!(flash_messages(&managed)[0].0, "danger");
}
