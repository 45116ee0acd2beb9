pub const API_PREFIX: &str = "/api/v1";

pub mod messages {

    pub const MOVIE_NOT_FOUND: &str = "That movie does not exist.";

    pub const DATABASE_ERROR: &str = "A database error occurred";

    pub const INTERNAL_ERROR: &str = "An internal error occurred";

    pub const ROUTE_NOT_FOUND: &str = "Route not found";

    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
}
