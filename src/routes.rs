//! SPA route table and matcher
//!
//! The four client routes are a static table of [`RouteDef`]s, resolved by a
//! pure matching function. Matching is segment-wise: literal segments must
//! compare equal, `:name` segments bind the corresponding path segment as a
//! string parameter. Unmatched paths resolve to `None`; there is no
//! catch-all route.

/// A resolved route with its bound parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - landing page
    Home,
    /// `/categories/:id` - article list for a category
    ArticleList {
        /// Raw `:id` path segment (e.g., `"42"`)
        id: String,
    },
    /// `/articles/:id` - single article view
    ArticleDetail {
        /// Raw `:id` path segment
        id: String,
    },
    /// `/about` - static about page
    About,
}

impl Route {
    /// The route's name, matching its [`RouteDef`] table entry
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::ArticleList { .. } => "ArticleList",
            Route::ArticleDetail { .. } => "ArticleDetail",
            Route::About => "About",
        }
    }
}

/// A route definition: pattern, parameter names, and constructor
pub struct RouteDef {
    /// Route name (stable identifier for view dispatch)
    pub name: &'static str,
    /// Path pattern; `:name` segments bind parameters
    pub pattern: &'static str,
    /// Parameter names, in pattern order
    pub params: &'static [&'static str],
    /// Builds the route from bound parameter values, in pattern order
    build: fn(Vec<String>) -> Route,
}

/// The client route table
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        name: "Home",
        pattern: "/",
        params: &[],
        build: |_| Route::Home,
    },
    RouteDef {
        name: "ArticleList",
        pattern: "/categories/:id",
        params: &["id"],
        build: |mut values| Route::ArticleList {
            id: values.pop().unwrap_or_default(),
        },
    },
    RouteDef {
        name: "ArticleDetail",
        pattern: "/articles/:id",
        params: &["id"],
        build: |mut values| Route::ArticleDetail {
            id: values.pop().unwrap_or_default(),
        },
    },
    RouteDef {
        name: "About",
        pattern: "/about",
        params: &[],
        build: |_| Route::About,
    },
];

impl RouteDef {
    /// Match a path against this definition, binding `:name` parameters
    ///
    /// Returns the bound parameter values in pattern order, or `None` if the
    /// path does not match. Trailing and repeated slashes are tolerated.
    #[must_use]
    pub fn bind(&self, path: &str) -> Option<Vec<String>> {
        let pattern = segments(self.pattern);
        let path = segments(path);
        if pattern.len() != path.len() {
            return None;
        }

        let mut values = Vec::with_capacity(self.params.len());
        for (expected, actual) in pattern.iter().zip(&path) {
            if expected.starts_with(':') {
                values.push((*actual).to_string());
            } else if expected != actual {
                return None;
            }
        }
        Some(values)
    }
}

impl std::fmt::Debug for RouteDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDef")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("params", &self.params)
            .finish()
    }
}

/// Resolve a path to a route, or `None` if nothing in the table matches
///
/// # Example
///
/// ```
/// use blog_client::{resolve, Route};
///
/// assert_eq!(resolve("/"), Some(Route::Home));
/// assert_eq!(
///     resolve("/categories/42"),
///     Some(Route::ArticleList { id: "42".to_string() })
/// );
/// assert_eq!(resolve("/missing"), None);
/// ```
#[must_use]
pub fn resolve(path: &str) -> Option<Route> {
    ROUTES
        .iter()
        .find_map(|def| def.bind(path).map(def.build))
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
