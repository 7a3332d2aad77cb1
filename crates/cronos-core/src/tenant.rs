//! Public tenant lookup for booking pages.
//!
//! Booking pages don't go through the route guard. They fetch the tenant by
//! slug on every navigation and hand the result down to child views in a
//! `BookingContext`. Nothing here reads or writes the session.

use tracing::warn;

use crate::api::Backend;
use crate::models::PublicTenant;

/// Shown for any slug that did not resolve
pub const TENANT_NOT_FOUND_MESSAGE: &str = "Business not found";

/// Everything a booking view needs about the tenant it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingContext {
    pub slug: String,
    pub tenant: PublicTenant,
    /// Path below `/book/{slug}`, empty for the booking shell itself
    pub section: String,
}

impl BookingContext {
    /// Name shown in the booking header when there is no logo
    pub fn display_name(&self) -> &str {
        &self.tenant.name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TenantPage {
    Found(BookingContext),
    NotFound { slug: String, message: String },
}

/// Look a tenant up by slug.
///
/// Every failure, whether a 404, a network error or a malformed body,
/// becomes `TenantPage::NotFound`; this never returns an error.
pub async fn resolve<B: Backend>(backend: &B, slug: &str, section: &str) -> TenantPage {
    let slug = slug.trim();
    // `.` and `..` would be collapsed out of the request path
    if slug.is_empty() || slug == "." || slug == ".." {
        return not_found(slug);
    }

    match backend.public_tenant(slug).await {
        Ok(tenant) => TenantPage::Found(BookingContext {
            slug: slug.to_string(),
            tenant,
            section: section.to_string(),
        }),
        Err(e) => {
            warn!(slug, error = %e, "Failed to load tenant");
            not_found(slug)
        }
    }
}

fn not_found(slug: &str) -> TenantPage {
    TenantPage::NotFound {
        slug: slug.to_string(),
        message: TENANT_NOT_FOUND_MESSAGE.to_string(),
    }
}
