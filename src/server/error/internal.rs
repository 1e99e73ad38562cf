use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Could not find a free short link code after repeated attempts.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to generate a unique short link after {attempts} attempts")]
    ShortLinkExhausted {
        /// Number of codes that collided
        attempts: u32,
    },

    /// A row that was just written could not be read back.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite {
        /// Table or domain name of the row
        entity: &'static str,
        /// Primary key of the row
        id: i32,
    },

    /// A row points at another row that does not exist.
    #[error("{entity} {id} is referenced but missing")]
    MissingRelation {
        /// Table or domain name of the missing row
        entity: &'static str,
        /// Primary key of the missing row
        id: i32,
    },
}
