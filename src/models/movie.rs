use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub name: String,
    pub genre: String,
    pub rating: i32,
    pub explicit: bool,
}

/// A fully specified movie that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub name: String,
    pub genre: String,
    pub rating: i32,
    pub explicit: bool,
}

/// Column updates for an existing movie. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieChanges {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<i32>,
    pub explicit: Option<bool>,
}

impl MovieChanges {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.genre.is_none()
            && self.rating.is_none()
            && self.explicit.is_none()
    }
}

/// Raw movie fields as received from a client. Every field is optional here;
/// whether a missing field is an error depends on the operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieInput {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<i32>,
    pub explicit: Option<bool>,
}
