//! Application state and command handlers.
//!
//! `App` is built once at start-up. It owns the one `SessionStore` for the
//! process and passes it explicitly to the gateway and the navigator.

use std::io::{self, Write};

use anyhow::{Context, Result};
use cronos_core::gateway::RegistrationForm;
use cronos_core::models::AuthResponse;
use cronos_core::router::{Navigator, Page, Route};
use cronos_core::{password, ApiClient, AuthGateway, Config, SessionStore};
use tracing::{debug, info, warn};

use crate::view;

/// Environment variable supplying the login password
const PASSWORD_ENV: &str = "CRONOS_PASSWORD";

pub struct App {
    config: Config,
    session: SessionStore,
    gateway: AuthGateway<ApiClient>,
}

impl App {
    /// Create a new application instance
    pub fn new(api_url: Option<&str>, data_dir: Option<std::path::PathBuf>) -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };
        let base_url = config.api_base_url(api_url);
        debug!(%base_url, "API base URL configured");
        let api = ApiClient::new(&base_url, config.request_timeout())
            .with_context(|| format!("Invalid API base URL {}", base_url))?;

        let data_dir = match data_dir {
            Some(dir) => dir,
            None => config.data_dir()?,
        };
        debug!(?data_dir, "Data directory configured");

        // A corrupt session file is treated as signed out
        let mut session = SessionStore::new(data_dir);
        if let Err(e) = session.load() {
            warn!(error = %e, "Discarding unreadable session");
            session.clear();
        }

        Ok(Self {
            config,
            session,
            gateway: AuthGateway::new(api),
        })
    }

    async fn navigate(&self, route: Route) -> Result<Page> {
        let page = Navigator::new(self.gateway.backend())
            .navigate(&self.session, route)
            .await?;
        Ok(page)
    }

    async fn show(&self, route: Route) -> Result<()> {
        let page = self.navigate(route).await?;
        print!("{}", view::render_page(&page));
        Ok(())
    }

    pub async fn open(&self, path: &str) -> Result<()> {
        self.show(Route::parse(path)).await
    }

    pub async fn book(&self, slug: &str, section: Option<&str>) -> Result<()> {
        self.show(Route::Book {
            slug: slug.to_string(),
            rest: section.unwrap_or_default().trim_matches('/').to_string(),
        })
        .await
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    pub async fn login(&mut self, email: Option<String>) -> Result<()> {
        // The login page itself bounces signed-in visitors
        let page = self.navigate(Route::Login).await?;
        if page.route != Route::Login {
            println!("Already signed in.");
            print!("{}", view::render_page(&page));
            return Ok(());
        }

        let email = match email.or_else(|| self.config.last_email.clone()) {
            Some(last) if !last.trim().is_empty() => prompt_with_default("Email", &last)?,
            _ => prompt_line("Email")?,
        };
        let password = match std::env::var(PASSWORD_ENV) {
            Ok(p) if !p.is_empty() => p,
            _ => rpassword::prompt_password("Password: ")?,
        };

        self.gateway
            .login(&mut self.session, &email, &password)
            .await?;

        self.config.last_email = Some(email.trim().to_string());
        if let Err(e) = self.config.save() {
            warn!(error = %e, "Failed to save config");
        }

        info!("Login successful");
        println!("Login successful!");
        self.show(Route::dashboard()).await
    }

    pub async fn register(&mut self, first_name: String, last_name: String, email: String) -> Result<()> {
        let page = self.navigate(Route::Register).await?;
        if page.route != Route::Register {
            println!("Already signed in.");
            print!("{}", view::render_page(&page));
            return Ok(());
        }

        let password = rpassword::prompt_password("Password: ")?;
        if let Some(report) = password::evaluate(&password) {
            print!("{}", view::render_strength(&report));
        }
        let confirm_password = rpassword::prompt_password("Confirm password: ")?;

        let form = RegistrationForm {
            first_name,
            last_name,
            email,
            password,
            confirm_password,
        };
        let request = form.validate()?;

        let response = self
            .gateway
            .register(&mut self.session, &request)
            .await?;

        let target = route_after_register(&response);
        if target == Route::Login {
            println!("Account created. Please sign in.");
        } else {
            println!("Account created. You are signed in.");
        }
        self.show(target).await
    }

    pub async fn logout(&mut self) -> Result<()> {
        let target = self.gateway.logout(&mut self.session);
        self.show(target).await
    }

    /// The dashboard's home button. Only offered from the dashboard, so it
    /// checks the visitor could reach it first.
    pub async fn go_home(&mut self) -> Result<()> {
        let page = self.navigate(Route::dashboard()).await?;
        if page.route != Route::dashboard() {
            print!("{}", view::render_page(&page));
            return Ok(());
        }
        let target = self.gateway.go_home(&mut self.session);
        self.show(target).await
    }

    pub async fn whoami(&self) -> Result<()> {
        let profile = self
            .gateway
            .current_user(&self.session)
            .await?;
        print!("{}", view::render_profile(&profile));
        Ok(())
    }

    pub fn status(&self) {
        print!("{}", view::render_status(&self.session));
    }

    pub fn password_strength(&self) -> Result<()> {
        let password = rpassword::prompt_password("Password: ")?;
        match password::evaluate(&password) {
            Some(report) => print!("{}", view::render_strength(&report)),
            None => println!("Enter a password to rate it."),
        }
        Ok(())
    }
}

/// Where a successful registration lands: the dashboard when the server
/// signed the new account in, the login page otherwise.
fn route_after_register(response: &AuthResponse) -> Route {
    if response.token().is_some() {
        Route::dashboard()
    } else {
        Route::Login
    }
}

fn prompt_line(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn prompt_with_default(label: &str, default: &str) -> Result<String> {
    let input = prompt_line(&format!("{} [{}]", label, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> AuthResponse {
        serde_json::from_str(json).expect("parse auth response")
    }

    #[test]
    fn test_register_with_token_lands_on_dashboard() {
        let target = route_after_register(&response(r#"{"token":"R1"}"#));
        assert_eq!(target, Route::dashboard());
    }

    #[test]
    fn test_register_without_token_lands_on_login() {
        assert_eq!(route_after_register(&response(r#"{"message":"User registered"}"#)), Route::Login);
        assert_eq!(route_after_register(&response(r#"{"token":""}"#)), Route::Login);
    }
}
