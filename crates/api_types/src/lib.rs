use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod auth {
    use super::*;

    /// Request body for `POST /auth/login`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Login {
        pub email: String,
        pub password: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TokenResponse {
        pub token: String,
    }
}

pub mod record {
    use super::*;

    /// A ledger record as returned by `GET /{kind}/`.
    ///
    /// The service stores income and expense records in the same shape but
    /// names the label field differently: `source` for income, `category`
    /// for expense. Both sides are carried as optionals and the consumer
    /// picks the one matching the record kind.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct RecordView {
        #[serde(rename = "_id")]
        pub id: String,
        /// Amount in major units, as the service speaks plain JSON numbers.
        pub amount: f64,
        pub date: DateTime<Utc>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub source: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub icon: Option<String>,
    }

    /// Request body for `POST /{kind}/`.
    ///
    /// `date` and `icon` are always sent; the client defaults them before
    /// submission. Exactly one of `category`/`source` is set.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct RecordNew {
        pub amount: f64,
        pub date: DateTime<Utc>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub source: Option<String>,
        pub icon: String,
    }

    /// Error body the service attaches to non-success responses.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ErrorBody {
        pub message: String,
    }
}
