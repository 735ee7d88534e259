use serde::Serialize;
use std::fmt;

/// Screens reachable through a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Schedule,
    Status,
    Help,
    NotFound { path: String },
}

impl View {
    pub fn title(&self) -> String {
        match self {
            Self::Schedule => "Schedule".to_string(),
            Self::Status => "Stage".to_string(),
            Self::Help => "Help".to_string(),
            Self::NotFound { path } => format!("Not found: {path}"),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

/// A link shown in the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Schedule",
        href: "#/",
    },
    NavLink {
        label: "Stage",
        href: "#/status",
    },
    NavLink {
        label: "Help",
        href: "#/help",
    },
];

/// Maps hash-style paths to views and remembers where we are.
#[derive(Debug, Clone)]
pub struct Router {
    path: String,
    view: View,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            view: View::Schedule,
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// `#` prefix and trailing `/` are ignored; anything unmatched is not found.
    pub fn resolve(path: &str) -> View {
        match normalize(path).as_str() {
            "/" => View::Schedule,
            "/status" => View::Status,
            "/help" => View::Help,
            other => View::NotFound {
                path: other.to_string(),
            },
        }
    }

    pub fn navigate_to(&mut self, path: &str) -> &View {
        self.path = normalize(path);
        self.view = Self::resolve(&self.path);
        tracing::debug!(path = %self.path, view = %self.view, "navigated");
        &self.view
    }

    /// Follows a link the way an intercepted click would.
    pub fn follow(&mut self, href: &str) -> &View {
        let target = link_target(href).to_string();
        self.navigate_to(&target)
    }

    pub const fn current(&self) -> &View {
        &self.view
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// The part of `href` from its last `/` on, or all of it when there is none.
pub fn link_target(href: &str) -> &str {
    href.rfind('/').map_or(href, |index| &href[index..])
}

fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path.strip_prefix('#').unwrap_or(path);
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_with_or_without_decoration() {
        assert_eq!(Router::resolve("/"), View::Schedule);
        assert_eq!(Router::resolve(""), View::Schedule);
        assert_eq!(Router::resolve("#/"), View::Schedule);
        assert_eq!(Router::resolve("#/status"), View::Status);
        assert_eq!(Router::resolve("/status/"), View::Status);
        assert_eq!(Router::resolve("/help"), View::Help);
    }

    #[test]
    fn unknown_paths_carry_the_attempted_path() {
        assert_eq!(
            Router::resolve("#/outages"),
            View::NotFound {
                path: "/outages".to_string()
            }
        );
        assert_eq!(Router::resolve("/outages").title(), "Not found: /outages");
    }

    #[test]
    fn link_target_keeps_the_last_segment() {
        assert_eq!(link_target("http://localhost:7000/#/status"), "/status");
        assert_eq!(link_target("#/help"), "/help");
        assert_eq!(link_target("/nested/deep/help"), "/help");
        assert_eq!(link_target("status"), "status");
    }

    #[test]
    fn following_links_updates_the_current_view() {
        let mut router = Router::new();
        assert_eq!(router.current(), &View::Schedule);

        assert_eq!(router.follow(NAV_LINKS[1].href), &View::Status);
        assert_eq!(router.path(), "/status");

        router.follow("https://elsewhere.test/a/b/missing");
        assert_eq!(
            router.current(),
            &View::NotFound {
                path: "/missing".to_string()
            }
        );

        assert_eq!(router.navigate_to("#/"), &View::Schedule);
    }
}
