use std::fmt;

use percent_encoding::percent_decode_str;

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessClass {
    /// Home and the auth pages
    PublicOnly,
    /// The dashboard and everything below it
    Private,
    /// Tenant booking pages; they do their own existence check
    TenantPublic,
    /// Paths nobody handles
    Unguarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    /// `/dashboard/{rest}`; `rest` is empty for the dashboard itself
    Dashboard { rest: String },
    /// `/book/{slug}/{rest}`
    Book { slug: String, rest: String },
    NotFound { path: String },
}

impl Route {
    pub fn dashboard() -> Self {
        Route::Dashboard {
            rest: String::new(),
        }
    }

    /// Parse a navigation path.
    ///
    /// Query strings, fragments, repeated and trailing slashes are ignored.
    /// Each segment is percent-decoded. Fixed segments match
    /// case-insensitively; slugs keep their case.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let decoded: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();
        let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();

        match segments.as_slice() {
            [] => Route::Home,
            [first] if first.eq_ignore_ascii_case("login") => Route::Login,
            [first] if first.eq_ignore_ascii_case("register") => Route::Register,
            [first, rest @ ..] if first.eq_ignore_ascii_case("dashboard") => Route::Dashboard {
                rest: rest.join("/"),
            },
            [first, slug, rest @ ..] if first.eq_ignore_ascii_case("book") => Route::Book {
                slug: (*slug).to_string(),
                rest: rest.join("/"),
            },
            _ => Route::NotFound {
                path: format!("/{}", segments.join("/")),
            },
        }
    }

    pub fn access_class(&self) -> AccessClass {
        match self {
            Route::Home | Route::Login | Route::Register => AccessClass::PublicOnly,
            Route::Dashboard { .. } => AccessClass::Private,
            Route::Book { .. } => AccessClass::TenantPublic,
            Route::NotFound { .. } => AccessClass::Unguarded,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard { rest } => join_path("/dashboard", rest),
            Route::Book { slug, rest } => join_path(&format!("/book/{}", slug), rest),
            Route::NotFound { path } => path.clone(),
        }
    }
}

fn join_path(base: &str, rest: &str) -> String {
    if rest.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, rest)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/register/"), Route::Register);
        assert_eq!(Route::parse("/dashboard"), Route::dashboard());
        assert_eq!(
            Route::parse("/book/barber-bros"),
            Route::Book {
                slug: "barber-bros".to_string(),
                rest: String::new()
            }
        );
    }

    #[test]
    fn test_parse_descendants() {
        assert_eq!(
            Route::parse("/dashboard/appointments/today"),
            Route::Dashboard {
                rest: "appointments/today".to_string()
            }
        );
        assert_eq!(
            Route::parse("/book/Acme/services"),
            Route::Book {
                slug: "Acme".to_string(),
                rest: "services".to_string()
            }
        );
    }

    #[test]
    fn test_parse_ignores_query_fragment_and_case() {
        assert_eq!(Route::parse("/login?next=/dashboard"), Route::Login);
        assert_eq!(Route::parse("/LOGIN#form"), Route::Login);
        assert_eq!(Route::parse("//dashboard//"), Route::dashboard());
    }

    #[test]
    fn test_parse_decodes_segments() {
        assert_eq!(
            Route::parse("/book/caf%C3%A9"),
            Route::Book {
                slug: "café".to_string(),
                rest: String::new()
            }
        );
        assert_eq!(Route::parse("/%6Cogin"), Route::Login);
        assert_eq!(
            Route::parse("/book/a%2Fb/services"),
            Route::Book {
                slug: "a/b".to_string(),
                rest: "services".to_string()
            }
        );
    }

    #[test]
    fn test_parse_keeps_dot_slugs_for_tenant_lookup() {
        assert_eq!(
            Route::parse("/book/.."),
            Route::Book {
                slug: "..".to_string(),
                rest: String::new()
            }
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(
            Route::parse("/book"),
            Route::NotFound {
                path: "/book".to_string()
            }
        );
        assert_eq!(
            Route::parse("/login/extra"),
            Route::NotFound {
                path: "/login/extra".to_string()
            }
        );
        assert_eq!(Route::parse("/pricing").access_class(), AccessClass::Unguarded);
    }

    #[test]
    fn test_access_classes() {
        assert_eq!(Route::Home.access_class(), AccessClass::PublicOnly);
        assert_eq!(Route::Login.access_class(), AccessClass::PublicOnly);
        assert_eq!(Route::Register.access_class(), AccessClass::PublicOnly);
        assert_eq!(Route::parse("/dashboard/settings").access_class(), AccessClass::Private);
        assert_eq!(Route::parse("/book/acme").access_class(), AccessClass::TenantPublic);
    }

    #[test]
    fn test_path_round_trips_through_display() {
        for path in ["/", "/login", "/register", "/dashboard", "/dashboard/clients", "/book/acme/staff"] {
            assert_eq!(Route::parse(path).to_string(), path);
        }
    }
}
