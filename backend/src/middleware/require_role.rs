//! Role gate for protected scopes and resources.
//!
//! Runs before any handler: requests whose session identity does not hold
//! exactly the required role are answered with `303 See Other` to `/`
//! without touching the wrapped service. Admitted requests carry the
//! identity in their extensions for handlers to extract via
//! `web::ReqData<SessionIdentity>`.

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::LOCATION;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::warn;

use crate::domain::{Role, authorize};
use crate::inbound::http::session::identity_from;

/// Where rejected requests are sent.
pub const GATE_REDIRECT: &str = "/";

/// Middleware factory admitting only sessions holding `role`.
///
/// # Examples
/// ```
/// use actix_web::{web, App, HttpResponse};
/// use jobboard::domain::Role;
/// use jobboard::middleware::RequireRole;
///
/// let app = App::new().service(
///     web::scope("/admin")
///         .wrap(RequireRole::new(Role::Admin))
///         .route("", web::get().to(|| async { HttpResponse::Ok().finish() })),
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireRole {
    role: Role,
}

impl RequireRole {
    /// Gate a scope on sessions holding `role`.
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service,
            role: self.role,
        }))
    }
}

/// Service wrapper produced by [`RequireRole`].
pub struct RequireRoleMiddleware<S> {
    service: S,
    role: Role,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let identity = identity_from(&req.get_session());
        match identity.filter(|identity| authorize(Some(identity), self.role)) {
            Some(identity) => {
                req.extensions_mut().insert(identity);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            None => {
                warn!(
                    required = %self.role,
                    path = %req.path(),
                    "session lacks required role; redirecting"
                );
                let response = HttpResponse::SeeOther()
                    .insert_header((LOCATION, GATE_REDIRECT))
                    .finish()
                    .map_into_right_body();
                Box::pin(ready(Ok(req.into_response(response))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Gate decisions for anonymous, mismatched and matching sessions.
    use super::*;
    use crate::domain::{SessionIdentity, UserId};
    use crate::inbound::http::session::SessionContext;
    use crate::inbound::http::test_utils::{location, session_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use rstest::rstest;

    async fn login_as(session: SessionContext, role: web::Path<String>) -> HttpResponse {
        let role = match role.as_str() {
            "admin" => Role::Admin,
            "employer" => Role::Employer,
            _ => Role::Jobseeker,
        };
        let identity = SessionIdentity {
            user_id: UserId::new(5),
            role,
            name: "Tester".to_owned(),
        };
        match session.persist_identity(&identity) {
            Ok(()) => HttpResponse::Ok().finish(),
            Err(_) => HttpResponse::InternalServerError().finish(),
        }
    }

    async fn whoami(identity: web::ReqData<SessionIdentity>) -> HttpResponse {
        HttpResponse::Ok().body(identity.name.clone())
    }

    macro_rules! gated_app {
        () => {
            test::init_service(
                App::new()
                    .wrap(test_session_middleware())
                    .route("/login/{role}", web::get().to(login_as))
                    .service(
                        web::scope("/admin")
                            .wrap(RequireRole::new(Role::Admin))
                            .route("", web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn anonymous_requests_are_redirected_home() {
        let app = gated_app!();
        let res = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), GATE_REDIRECT);
    }

    #[rstest]
    #[case("employer", StatusCode::SEE_OTHER)]
    #[case("jobseeker", StatusCode::SEE_OTHER)]
    #[case("admin", StatusCode::OK)]
    #[actix_web::test]
    async fn only_the_exact_role_passes(#[case] role: &str, #[case] expected: StatusCode) {
        let app = gated_app!();
        let login = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/login/{role}"))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&login);

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/admin").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
        if expected == StatusCode::OK {
            let body = test::read_body(res).await;
            assert_eq!(body, "Tester");
        }
    }
}
