use axum::{
    http::{header, Method},
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{self, applications, auth, quickadd, user},
    AppState,
};

/// Every route the service answers. Adding a variant without wiring a
/// handler in [`Endpoint::method_router`] fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    ListApplications,
    AddApplication,
    QuickAddApplication,
    EditApplication,
    DeleteApplications,
    UserDetails,
    UpdateUser,
}

impl Endpoint {
    pub const ALL: [Endpoint; 9] = [
        Endpoint::Login,
        Endpoint::Register,
        Endpoint::ListApplications,
        Endpoint::AddApplication,
        Endpoint::QuickAddApplication,
        Endpoint::EditApplication,
        Endpoint::DeleteApplications,
        Endpoint::UserDetails,
        Endpoint::UpdateUser,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "/login",
            Endpoint::Register => "/register",
            Endpoint::ListApplications => "/applications",
            Endpoint::AddApplication => "/applications/add",
            Endpoint::QuickAddApplication => "/applications/quickadd",
            Endpoint::EditApplication => "/applications/edit",
            Endpoint::DeleteApplications => "/applications/delete",
            Endpoint::UserDetails => "/user/details",
            Endpoint::UpdateUser => "/user/update",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::ListApplications | Endpoint::UserDetails => Method::GET,
            _ => Method::POST,
        }
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, Endpoint::Login | Endpoint::Register)
    }

    fn method_router(self) -> MethodRouter<AppState> {
        let route = match self {
            Endpoint::Login => post(auth::login),
            Endpoint::Register => post(auth::register),
            Endpoint::ListApplications => get(applications::list),
            Endpoint::AddApplication => post(applications::add),
            Endpoint::QuickAddApplication => post(quickadd::quick_add),
            Endpoint::EditApplication => post(applications::edit),
            Endpoint::DeleteApplications => post(applications::delete),
            Endpoint::UserDetails => get(user::details),
            Endpoint::UpdateUser => post(user::update),
        };
        // a known path with the wrong method is still "not found"
        route.fallback(handlers::not_found)
    }
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn router(state: AppState) -> Router {
    Endpoint::ALL
        .into_iter()
        .fold(Router::new(), |router, endpoint| {
            tracing::debug!("route {} {}", endpoint.method(), endpoint.path());
            router.route(endpoint.path(), endpoint.method_router())
        })
        .fallback(handlers::not_found)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
