//! Client-side routing.
//!
//! - `Route`: the navigation surface, parsed from a path
//! - `RouteGuard`: decides per navigation whether to render or redirect
//! - `Navigator`: runs the guard, follows redirects, resolves tenant pages
//!
//! | Path          | Access class  |
//! |---------------|---------------|
//! | `/`           | public-only   |
//! | `/login`      | public-only   |
//! | `/register`   | public-only   |
//! | `/book/:slug` | tenant-public |
//! | `/dashboard`  | private       |

pub mod guard;
pub mod navigator;
pub mod route;

pub use guard::{GuardDecision, RouteGuard};
pub use navigator::{NavigationError, Navigator, Page, View};
pub use route::{AccessClass, Route};
