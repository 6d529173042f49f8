//! Login, registration and logout handlers.
//!
//! ```text
//! GET  /          login view
//! POST /          email=..&password=..        303 -> /{role} or login view
//! GET  /register  registration view
//! POST /register  name=..&email=..&password=..&role=..
//! GET  /logout    303 -> /
//! ```

use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::info;
use zeroize::Zeroizing;

use super::ApiResult;
use super::flash::Flash;
use super::session::SessionContext;
use super::state::HttpState;
use super::views::{LoginForm, LoginView, RegisterForm, RegisterView, flash_and_redirect, render, see_other};
use crate::domain::{
    Error, ErrorCode, LoginCredentials, Registration, Role, SessionIdentity, UnknownRoleError,
};

/// Flash queued after a successful registration.
pub const REGISTERED_MESSAGE: &str = "Registration successful. Please log in.";

/// Login form, with any queued flashes.
pub async fn login_page(session: SessionContext) -> HttpResponse {
    render(&session, LoginView::default())
}

/// Authenticate and store the identity, or show the login view again.
///
/// Unknown emails and wrong passwords produce the same response. Inputs are
/// compared exactly as registration stored them.
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let LoginForm { email, password } = form.into_inner();
    let credentials = LoginCredentials::new(&email, &Zeroizing::new(password));

    match state.login.authenticate(&credentials).await? {
        Some(user) => {
            session.renew();
            session.persist_identity(&SessionIdentity::from(&user))?;
            info!(user_id = %user.id, role = %user.role, "login succeeded");
            Ok(see_other(&user.role.home_path()))
        }
        None => Ok(render(&session, LoginView::default())),
    }
}

/// Registration form.
pub async fn register_page(session: SessionContext) -> HttpResponse {
    render(&session, RegisterView::default())
}

fn map_unknown_role(err: UnknownRoleError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": "role", "code": "unknown_role", "value": err.0 }))
}

/// Create an account from the registration form.
///
/// Success flashes a prompt to log in; a taken email flashes back to the form.
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<RegisterForm>,
) -> ApiResult<HttpResponse> {
    let RegisterForm {
        name,
        email,
        password,
        role,
    } = form.into_inner();
    let role: Role = role.parse().map_err(map_unknown_role)?;
    let registration = Registration {
        name,
        email,
        password: Zeroizing::new(password),
        role,
    };

    match state.login.register(registration).await {
        Ok(_) => flash_and_redirect(&session, Flash::success(REGISTERED_MESSAGE), "/"),
        Err(err) if err.code() == ErrorCode::Conflict => {
            flash_and_redirect(&session, Flash::danger(err.message()), "/register")
        }
        Err(err) => Err(err),
    }
}

/// Clear all session state.
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    see_other("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::make_user;
    use crate::domain::EMAIL_TAKEN_MESSAGE;
    use crate::inbound::http::state::test_state::MockPorts;
    use crate::inbound::http::test_utils::{location, page_app, session_cookie};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::Value;

    fn login_ports(password: &'static str) -> MockPorts {
        let mut ports = MockPorts::default();
        ports
            .login
            .expect_authenticate()
            .returning(move |creds: &LoginCredentials| {
                Ok((creds.email() == "employer1@example.com" && creds.password() == password)
                    .then(|| make_user(1, Role::Employer)))
            });
        ports
    }

    #[actix_web::test]
    async fn login_redirects_to_the_role_home() {
        let app = page_app!(login_ports("pw"));
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/")
                .set_form([("email", "employer1@example.com"), ("password", "pw")])
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/employer");

        let cookie = session_cookie(&res);
        let home = test::call_service(
            &app,
            test::TestRequest::get().uri("/logout").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(location(&home), "/");
    }

    #[rstest]
    #[case("employer1@example.com", "wrong")]
    #[case("nobody@example.com", "pw")]
    #[case("   ", "pw")]
    #[actix_web::test]
    async fn failed_login_shows_the_login_view(#[case] email: &str, #[case] password: &str) {
        let app = page_app!(login_ports("pw"));
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/")
                .set_form([("email", email), ("password", password)])
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["action"], "/");
        assert_eq!(body["flashes"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn login_forwards_padded_and_blank_values_untouched() {
        let mut ports = MockPorts::default();
        ports
            .login
            .expect_authenticate()
            .withf(|creds: &LoginCredentials| {
                creds.email() == " pad@example.test " && creds.password().is_empty()
            })
            .return_once(|_| Ok(Some(make_user(4, Role::Jobseeker))));
        let app = page_app!(ports);

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/")
                .set_form([("email", " pad@example.test "), ("password", "")])
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/jobseeker");
    }

    #[actix_web::test]
    async fn login_form_requires_both_fields() {
        let app = page_app!(MockPorts::default());
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/")
                .set_form([("email", "a@b.c")])
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    fn register_form(role: &'static str) -> [(&'static str, &'static str); 4] {
        [
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("password", "pw"),
            ("role", role),
        ]
    }

    #[actix_web::test]
    async fn registration_flashes_success_on_the_login_view() {
        let mut ports = MockPorts::default();
        ports
            .login
            .expect_register()
            .withf(|reg| reg.role == Role::Jobseeker && reg.email == "ada@example.com")
            .return_once(|_| Ok(make_user(2, Role::Jobseeker)));
        let app = page_app!(ports);

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/register")
                .set_form(register_form("jobseeker"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/");

        let page = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/")
                .cookie(session_cookie(&res))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(page).await;
        assert_eq!(body["flashes"][0]["level"], "success");
        assert_eq!(body["flashes"][0]["message"], REGISTERED_MESSAGE);
    }

    #[actix_web::test]
    async fn duplicate_email_returns_to_the_form() {
        let mut ports = MockPorts::default();
        ports
            .login
            .expect_register()
            .return_once(|_| Err(Error::conflict(EMAIL_TAKEN_MESSAGE)));
        let app = page_app!(ports);

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/register")
                .set_form(register_form("employer"))
                .to_request(),
        )
        .await;
        assert_eq!(location(&res), "/register");
    }

    #[rstest]
    #[case("Admin")]
    #[case("recruiter")]
    #[actix_web::test]
    async fn unknown_roles_are_rejected(#[case] role: &'static str) {
        let mut ports = MockPorts::default();
        ports.login.expect_register().never();
        let app = page_app!(ports);

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/register")
                .set_form(register_form(role))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["field"], "role");
    }
}
