use {
    ::serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
};

pub mod auction;
pub mod serde;

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBodyResponse {
    pub error: String,
}

#[derive(AsRefStr)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "auction")]
    Auction,
}

#[derive(PartialEq)]
pub enum AccessLevel {
    LoggedIn,
    Public,
}

pub trait RouteTrait: AsRef<str> + Clone {
    fn access_level(&self) -> AccessLevel;
    fn method(&self) -> http::Method;
    fn full_path(&self) -> String;
}
