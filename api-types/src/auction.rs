use {
    crate::{
        AccessLevel,
        RouteTrait,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    time::{
        Duration,
        OffsetDateTime,
    },
};

/// How long a created auction stays open for bids.
pub const AUCTION_DURATION: Duration = Duration::hours(2);

/// The active period of an auction: `ends_at` is always exactly
/// [`AUCTION_DURATION`] after `starts_at`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuctionWindow {
    pub starts_at: OffsetDateTime,
    pub ends_at:   OffsetDateTime,
}

impl AuctionWindow {
    pub fn starting_at(starts_at: OffsetDateTime) -> Self {
        Self {
            starts_at,
            ends_at: starts_at + AUCTION_DURATION,
        }
    }
}

/// Body of the auction creation request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuction {
    /// When the auction opens, in the service's millisecond wire format.
    #[serde(with = "crate::serde::datetime_millis")]
    pub starts_at: OffsetDateTime,
    /// When the auction closes.
    #[serde(with = "crate::serde::datetime_millis")]
    pub ends_at:   OffsetDateTime,
    pub title:     String,
    pub currency:  String,
}

impl CreateAuction {
    pub fn new(window: AuctionWindow, title: String, currency: String) -> Self {
        Self {
            starts_at: window.starts_at,
            ends_at: window.ends_at,
            title,
            currency,
        }
    }
}

#[derive(AsRefStr, Clone)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "")]
    CreateAuction,
}

impl RouteTrait for Route {
    fn access_level(&self) -> AccessLevel {
        match self {
            Route::CreateAuction => AccessLevel::LoggedIn,
        }
    }

    fn method(&self) -> http::Method {
        match self {
            Route::CreateAuction => http::Method::POST,
        }
    }

    fn full_path(&self) -> String {
        let path = format!("{}{}", crate::Route::Auction.as_ref(), self.as_ref());
        path.trim_end_matches('/').to_string()
    }
}
