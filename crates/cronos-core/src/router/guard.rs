use crate::session::{AuthState, SessionStore};

use super::{AccessClass, Route};

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
    /// Tenant pages skip the guard and look the tenant up instead
    ResolveTenant { slug: String },
}

/// The per-navigation access check.
pub struct RouteGuard;

impl RouteGuard {
    /// Decide whether `route` may render for the given session.
    ///
    /// Only the auth pages bounce a signed-in visitor; home always renders.
    pub fn evaluate(session: &SessionStore, route: &Route) -> GuardDecision {
        let authenticated = session.auth_state() == AuthState::Authenticated;
        match route.access_class() {
            AccessClass::PublicOnly => match route {
                Route::Login | Route::Register if authenticated => {
                    GuardDecision::Redirect(Route::dashboard())
                }
                _ => GuardDecision::Render,
            },
            AccessClass::Private if !authenticated => GuardDecision::Redirect(Route::Login),
            AccessClass::Private => GuardDecision::Render,
            AccessClass::TenantPublic => match route {
                Route::Book { slug, .. } => GuardDecision::ResolveTenant { slug: slug.clone() },
                _ => GuardDecision::Render,
            },
            AccessClass::Unguarded => GuardDecision::Render,
        }
    }
}
