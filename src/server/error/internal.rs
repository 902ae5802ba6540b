use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A status column holds a value no enum variant matches.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} '{value}' stored in database")]
    UnknownStatus {
        /// Which status column was read
        kind: &'static str,
        /// The stored value
        value: String,
    },

    /// A product or event `images` column is not a JSON list of strings.
    #[error("Malformed image list for {entity} {id}: {source}")]
    MalformedImages {
        entity: &'static str,
        id: i32,
        #[source]
        source: serde_json::Error,
    },

    /// A row expected to exist was gone after being written.
    #[error("{0} missing after write")]
    MissingAfterWrite(String),
}

/// Lets repositories surface conversion failures through their `DbErr` return type.
impl From<InternalError> for sea_orm::DbErr {
    fn from(err: InternalError) -> Self {
        sea_orm::DbErr::Custom(err.to_string())
    }
}
