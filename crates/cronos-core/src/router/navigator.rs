use thiserror::Error;
use tracing::debug;

use crate::api::Backend;
use crate::session::SessionStore;
use crate::tenant::{self, BookingContext, TenantPage};

use super::{GuardDecision, Route, RouteGuard};

/// Upper bound on guard redirects followed for one navigation
const MAX_REDIRECTS: usize = 4;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Too many redirects navigating to {0}")]
    TooManyRedirects(String),
}

/// What ends up on screen after a navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home,
    Login,
    Register,
    /// Placeholder dashboard; `section` is the path below `/dashboard`
    Dashboard { section: String },
    Booking(BookingContext),
    TenantNotFound { slug: String, message: String },
    NotFound { path: String },
}

/// A finished navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Where the visitor ended up
    pub route: Route,
    pub view: View,
    /// Every redirect taken on the way, in order
    pub redirects: Vec<Route>,
}

/// Runs the guard for a navigation and produces the view to render.
pub struct Navigator<'a, B> {
    backend: &'a B,
}

impl<'a, B: Backend> Navigator<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub async fn navigate(&self, session: &SessionStore, route: Route) -> Result<Page, NavigationError> {
        let requested = route.path();
        let mut route = route;
        let mut redirects = Vec::new();

        loop {
            match RouteGuard::evaluate(session, &route) {
                GuardDecision::Redirect(target) => {
                    if redirects.len() >= MAX_REDIRECTS {
                        return Err(NavigationError::TooManyRedirects(requested));
                    }
                    debug!(from = %route, to = %target, "Guard redirect");
                    redirects.push(target.clone());
                    route = target;
                }
                GuardDecision::Render => {
                    let view = Self::static_view(&route);
                    return Ok(Page { route, view, redirects });
                }
                GuardDecision::ResolveTenant { slug } => {
                    let section = match &route {
                        Route::Book { rest, .. } => rest.clone(),
                        _ => String::new(),
                    };
                    let view = match tenant::resolve(self.backend, &slug, &section).await {
                        TenantPage::Found(context) => View::Booking(context),
                        TenantPage::NotFound { slug, message } => View::TenantNotFound { slug, message },
                    };
                    return Ok(Page { route, view, redirects });
                }
            }
        }
    }

    /// Parse `path` and navigate to it
    pub async fn open(&self, session: &SessionStore, path: &str) -> Result<Page, NavigationError> {
        self.navigate(session, Route::parse(path)).await
    }

    fn static_view(route: &Route) -> View {
        match route {
            Route::Home => View::Home,
            Route::Login => View::Login,
            Route::Register => View::Register,
            Route::Dashboard { rest } => View::Dashboard {
                section: rest.clone(),
            },
            Route::NotFound { path } => View::NotFound { path: path.clone() },
            Route::Book { slug, .. } => View::TenantNotFound {
                slug: slug.clone(),
                message: tenant::TENANT_NOT_FOUND_MESSAGE.to_string(),
            },
        }
    }
}
