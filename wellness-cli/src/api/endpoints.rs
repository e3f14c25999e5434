// Remote endpoints used by the client. Paths are relative to the configured base URL.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    /// Requires a bearer token
    pub authenticated: bool,
}

impl Endpoint {
    const fn public(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            authenticated: false,
        }
    }

    const fn private(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            authenticated: true,
        }
    }
}

pub const CREATE_EXERCISE: Endpoint = Endpoint::public(Method::Post, "/api/exercises");
pub const LIST_EXERCISES: Endpoint = Endpoint::public(Method::Get, "/api/exercises");
pub const SET_GOALS: Endpoint = Endpoint::public(Method::Post, "/api/goals");
pub const RECORD_PROGRESS: Endpoint = Endpoint::public(Method::Post, "/api/progress");
pub const SET_NUTRITION_GOALS: Endpoint = Endpoint::public(Method::Post, "/api/nutrition-goals");
pub const CREATE_FOOD_LOG: Endpoint = Endpoint::public(Method::Post, "/api/foodlogs");
pub const LOGIN: Endpoint = Endpoint::public(Method::Post, "/api/auth/login");
pub const REGISTER: Endpoint = Endpoint::public(Method::Post, "/api/auth/register");
pub const GET_PROFILE: Endpoint = Endpoint::private(Method::Get, "/api/user/profile");
pub const UPDATE_PROFILE: Endpoint = Endpoint::private(Method::Put, "/api/user/profile");
pub const TRACKING_HISTORY: Endpoint = Endpoint::private(Method::Get, "/api/user/tracking");
