//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, web};

use super::ApiResult;
use super::session::SessionContext;
use crate::domain::{Role, SessionIdentity, UserId};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie a response set, panicking when absent.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// `Location` header of a redirect response.
pub fn location<B>(res: &ServiceResponse<B>) -> &str {
    res.headers()
        .get(LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii location")
}

/// Route used by handler tests to seed a signed-in session.
pub const TEST_LOGIN_PATH: &str = "/__test/login";

/// Persist the posted identity, standing in for a real login.
pub async fn test_login(
    session: SessionContext,
    identity: web::Json<SessionIdentity>,
) -> ApiResult<HttpResponse> {
    session.persist_identity(&identity)?;
    Ok(HttpResponse::Ok().finish())
}

/// Session identity matching `make_user(id, role)`.
pub fn identity(id: i64, role: Role) -> SessionIdentity {
    SessionIdentity {
        user_id: UserId::new(id),
        role,
        name: format!("{} {id}", role.label()),
    }
}

/// Initialise the full route table over mocked ports.
macro_rules! page_app {
    ($ports:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap($crate::inbound::http::test_utils::test_session_middleware())
                .app_data(actix_web::web::Data::new(
                    $crate::inbound::http::state::HttpState::from($ports),
                ))
                .route(
                    $crate::inbound::http::test_utils::TEST_LOGIN_PATH,
                    actix_web::web::post().to($crate::inbound::http::test_utils::test_login),
                )
                .configure($crate::inbound::http::routes::configure),
        )
        .await
    };
}
pub(crate) use page_app;

/// Sign `$identity` in and return the resulting session cookie.
macro_rules! sign_in {
    ($app:expr, $identity:expr) => {{
        let res = actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::post()
                .uri($crate::inbound::http::test_utils::TEST_LOGIN_PATH)
                .set_json(&$identity)
                .to_request(),
        )
        .await;
        $crate::inbound::http::test_utils::session_cookie(&res)
    }};
}
pub(crate) use sign_in;
