use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use userdesk_model::UserId;

const USERS_PATH: &str = "/";
const USER_DETAIL_PREFIX: &str = "/user/";

/// The two screens of the application, addressed by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Users,
    /// `/user/{id}`
    UserDetail(UserId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matches '{0}'")]
    UnknownPath(String),

    #[error("'{0}' is not a valid user id")]
    InvalidId(String),
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let path = path.trim();
        if path.is_empty() || path == USERS_PATH {
            return Ok(Route::Users);
        }

        let Some(raw_id) = path.strip_prefix(USER_DETAIL_PREFIX) else {
            return Err(RouteError::UnknownPath(path.to_string()));
        };
        let raw_id = raw_id.trim_end_matches('/');
        if raw_id.is_empty() || raw_id.contains('/') {
            return Err(RouteError::UnknownPath(path.to_string()));
        }

        raw_id
            .parse::<UserId>()
            .map(Route::UserDetail)
            .map_err(|_| RouteError::InvalidId(raw_id.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Users => USERS_PATH.to_string(),
            Route::UserDetail(id) => format!("{USER_DETAIL_PREFIX}{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
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
    fn parses_both_routes() {
        assert_eq!(Route::parse("/"), Ok(Route::Users));
        assert_eq!(Route::parse("/user/42"), Ok(Route::UserDetail(UserId(42))));
        assert_eq!(Route::parse("/user/42/"), Ok(Route::UserDetail(UserId(42))));
    }

    #[test]
    fn path_round_trips_through_parse() {
        let route = Route::UserDetail(UserId(7));
        assert_eq!(route.path(), "/user/7");
        assert_eq!(route.path().parse::<Route>(), Ok(route));
    }

    #[test]
    fn rejects_unknown_paths_and_bad_ids() {
        assert_eq!(
            Route::parse("/users"),
            Err(RouteError::UnknownPath("/users".to_string()))
        );
        assert_eq!(
            Route::parse("/user/abc"),
            Err(RouteError::InvalidId("abc".to_string()))
        );
        assert!(matches!(
            Route::parse("/user/1/edit"),
            Err(RouteError::UnknownPath(_))
        ));
    }
}
