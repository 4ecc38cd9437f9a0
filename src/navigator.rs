use anyhow::Result;
use parking_lot::RwLock;
use serde::Serialize;

/// The routing capability the resolver depends on.
///
/// It reports the active locale and switches locale by navigating to a
/// path with a new locale, the way a client-side router does.
pub trait Navigator: Send + Sync {
    /// The active locale code, `None` if the router has no locale set.
    fn current_code(&self) -> Option<String>;

    /// The path currently displayed.
    fn current_path(&self) -> String;

    /// Navigate to `path`, displayed with `locale`.
    fn navigate(&self, path: &str, locale: &str) -> Result<()>;
}

/// A route: a path and the locale it is displayed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    pub locale: Option<String>,
}

/// An in-memory [`Navigator`], recording every route it visited.
#[derive(Debug)]
pub struct MemoryNavigator {
    state: RwLock<NavigatorState>,
}

#[derive(Debug)]
struct NavigatorState {
    current: Route,
    history: Vec<Route>,
}

impl MemoryNavigator {
    pub fn new(path: impl Into<String>) -> Self {
        MemoryNavigator {
            state: RwLock::new(NavigatorState {
                current: Route {
                    path: path.into(),
                    locale: None,
                },
                history: Vec::new(),
            }),
        }
    }

    pub fn with_locale(self, locale: impl Into<String>) -> Self {
        self.state.write().current.locale = Some(locale.into());
        self
    }

    pub fn route(&self) -> Route {
        self.state.read().current.clone()
    }

    /// The routes left behind by [`Navigator::navigate`], oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.state.read().history.clone()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        MemoryNavigator::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn current_code(&self) -> Option<String> {
        self.state.read().current.locale.clone()
    }

    fn current_path(&self) -> String {
        self.state.read().current.path.clone()
    }

    fn navigate(&self, path: &str, locale: &str) -> Result<()> {
        let mut state = self.state.write();
        let next = Route {
            path: path.to_owned(),
            locale: Some(locale.to_owned()),
        };
        let previous = std::mem::replace(&mut state.current, next);
        state.history.push(previous);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryNavigator, Navigator, Route};

    #[test]
    fn test_memory_navigator() {
        let navigator = MemoryNavigator::new("/blog/hello");
        assert_eq!(navigator.current_code(), None);
        assert_eq!(navigator.current_path(), "/blog/hello");

        navigator.navigate("/blog/hello", "fr").unwrap();
        assert_eq!(navigator.current_code().as_deref(), Some("fr"));
        assert_eq!(
            navigator.route(),
            Route {
                path: String::from("/blog/hello"),
                locale: Some(String::from("fr")),
            }
        );
        assert_eq!(
            navigator.history(),
            vec![Route {
                path: String::from("/blog/hello"),
                locale: None,
            }]
        );
    }

    #[test]
    fn test_default_navigator() {
        let navigator = MemoryNavigator::default().with_locale("ja");
        assert_eq!(navigator.current_path(), "/");
        assert_eq!(navigator.current_code().as_deref(), Some("ja"));
        assert!(navigator.history().is_empty());
    }
}
