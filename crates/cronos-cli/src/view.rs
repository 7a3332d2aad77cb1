//! Plain-text rendering of pages.

use std::fmt::Write;

use cronos_core::password::StrengthReport;
use cronos_core::router::{Page, View};
use cronos_core::models::UserProfile;
use cronos_core::SessionStore;

/// Render a page the way the browser would show it, minus the styling.
pub fn render_page(page: &Page) -> String {
    let mut out = String::new();
    for hop in &page.redirects {
        let _ = writeln!(out, "-> redirected to {}", hop);
    }
    let _ = writeln!(out, "[{}]", page.route);

    match &page.view {
        View::Home => {
            out.push_str("Cronos - appointment booking for your business\n");
            out.push_str("Sign in with `cronos login` or create an account with `cronos register`.\n");
        }
        View::Login => out.push_str("Sign in to your account (`cronos login`).\n"),
        View::Register => out.push_str("Create your account (`cronos register`).\n"),
        View::Dashboard { section } => {
            out.push_str("Cronos Platform - Dashboard\n");
            if !section.is_empty() {
                let _ = writeln!(out, "Section: {}", section);
            }
            out.push_str("No recent activity to display.\n");
        }
        View::Booking(context) => {
            let _ = writeln!(out, "{}", context.display_name());
            if let Some(logo) = context.tenant.logo_url() {
                let _ = writeln!(out, "Logo: {}", logo);
            }
            if let Some(color) = context.tenant.brand_color() {
                let _ = writeln!(out, "Brand color: {}", color);
            }
            if !context.section.is_empty() {
                let _ = writeln!(out, "Section: {}", context.section);
            }
            out.push_str("Book Now\n");
        }
        View::TenantNotFound { message, .. } => {
            let _ = writeln!(out, "404\n{}", message);
        }
        View::NotFound { path } => {
            let _ = writeln!(out, "404\nNothing lives at {}", path);
        }
    }
    out
}

pub fn render_status(session: &SessionStore) -> String {
    match session.get() {
        Some(data) => match data.tenant_id() {
            Some(tenant) => format!("Signed in (tenant {})\n", tenant),
            None => "Signed in\n".to_string(),
        },
        None => "Not signed in\n".to_string(),
    }
}

pub fn render_profile(profile: &UserProfile) -> String {
    let mut out = format!("{} <{}>\n", profile.display_name(), profile.email);
    if let Some(ref role) = profile.role {
        let _ = writeln!(out, "Role: {}", role);
    }
    out
}

pub fn render_strength(report: &StrengthReport) -> String {
    let mut out = format!("Password strength: {}\n", report.strength);
    for (label, met) in &report.checklist {
        let mark = if *met { "x" } else { " " };
        let _ = writeln!(out, "  [{}] {}", mark, label);
    }
    out
}
