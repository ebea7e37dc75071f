//! API route definitions for the remote user service.

/// The user resource
pub mod users {
    /// List and create
    pub const COLLECTION: &str = "/users";
    /// Get, replace and delete one user
    pub const ITEM: &str = "/users/{id}";
}

/// Helper utilities for working with route templates
pub mod utils {
    /// Replace a single path parameter (e.g. `"{id}"`) with the provided value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_route_substitutes_id() {
        let path = utils::replace_param(users::ITEM, "{id}", "3");
        assert_eq!(path, "/users/3");
    }
}
