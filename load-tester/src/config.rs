use {
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    url::Url,
};

/// Identity payload the development deployment accepts; a base64-encoded
/// claims object for a test user.
pub const DEFAULT_AUTH_TOKEN: &str = "eyJzdWIiOiJhMSIsICJuYW1lIjoiVGVzdCIsICJ1X3R5cCI6IjAifQo=";

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the load generator.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// The http url of the auction server.
    #[arg(long = "server-url")]
    #[arg(env = "SERVER_URL")]
    pub server_url: Url,

    /// Pre-encoded identity payload sent in the x-jwt-payload header.
    #[arg(long = "auth-token")]
    #[arg(env = "AUTH_TOKEN")]
    #[arg(default_value = DEFAULT_AUTH_TOKEN)]
    pub auth_token: String,

    /// Title for the created auctions.
    #[arg(long = "title")]
    #[arg(default_value = "Some auction")]
    pub title: String,

    /// Currency for the created auctions.
    #[arg(long = "currency")]
    #[arg(default_value = "VAC")]
    pub currency: String,

    /// Number of creation requests each user issues per cycle.
    #[arg(long = "auctions-per-cycle")]
    #[arg(default_value = "10000")]
    pub auctions_per_cycle: u64,

    /// Number of simulated users issuing requests concurrently.
    #[arg(long = "users")]
    #[arg(default_value = "1")]
    pub users: usize,

    /// Minimum wait between cycles, in seconds.
    #[arg(long = "wait-min-secs")]
    #[arg(default_value = "1")]
    pub wait_min_secs: u64,

    /// Maximum wait between cycles, in seconds.
    #[arg(long = "wait-max-secs")]
    #[arg(default_value = "5")]
    pub wait_max_secs: u64,

    /// Number of cycles each user runs before stopping. Runs until
    /// interrupted when not set.
    #[arg(long = "cycles")]
    pub cycles: Option<u64>,
}
