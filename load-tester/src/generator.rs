use {
    crate::config::RunOptions,
    anyhow::{
        anyhow,
        Result,
    },
    auction_api_types::{
        auction::{
            AuctionWindow,
            CreateAuction,
        },
        serde::datetime_millis,
    },
    auction_client::{
        Client,
        ClientConfig,
    },
    rand::Rng,
    std::time::Duration,
    time::OffsetDateTime,
};

pub async fn run_load_test(opts: RunOptions) -> Result<()> {
    if opts.wait_min_secs > opts.wait_max_secs {
        return Err(anyhow!(
            "wait-min-secs ({}) must not exceed wait-max-secs ({})",
            opts.wait_min_secs,
            opts.wait_max_secs
        ));
    }

    let client = Client::try_new(ClientConfig {
        http_url:   opts.server_url.to_string(),
        auth_token: Some(opts.auth_token.clone()),
    })
    .map_err(|e| anyhow!("Failed to create client: {:?}", e))?;

    let users = (0..opts.users)
        .map(|user| tokio::spawn(run_user(client.clone(), opts.clone(), user)))
        .collect::<Vec<_>>();
    for user in users {
        user.await??;
    }
    Ok(())
}

async fn run_user(client: Client, opts: RunOptions, user: usize) -> Result<()> {
    let mut completed = 0;
    loop {
        let single_run = run_cycle(&client, &opts, user).await;
        if let Err(err) = single_run {
            tracing::error!("Error running create auction cycle: {:?}", err);
        }
        completed += 1;
        if opts.cycles.is_some_and(|cycles| completed >= cycles) {
            return Ok(());
        }
        tokio::time::sleep(wait_time(opts.wait_min_secs, opts.wait_max_secs)).await;
    }
}

async fn run_cycle(client: &Client, opts: &RunOptions, user: usize) -> Result<()> {
    let now = OffsetDateTime::now_utc();
    let window = AuctionWindow::starting_at(now);
    let starts_at = datetime_millis::format_datetime(&window.starts_at)?;
    let ends_at = datetime_millis::format_datetime(&window.ends_at)?;
    tracing::info!(
        user,
        starts_at = starts_at.as_str(),
        ends_at = ends_at.as_str(),
        "Creating auctions"
    );

    let auction = CreateAuction::new(window, opts.title.clone(), opts.currency.clone());
    let mut failures = 0u64;
    for _ in 0..opts.auctions_per_cycle {
        if let Err(err) = client.create_auction(auction.clone()).await {
            failures += 1;
            tracing::debug!("Failed to create auction: {:?}", err);
        }
    }
    tracing::info!(
        user,
        requests = opts.auctions_per_cycle,
        failures,
        "Create auction cycle finished"
    );
    Ok(())
}

/// Uniformly random wait between cycles, like an interactive user pausing
/// between actions.
fn wait_time(min_secs: u64, max_secs: u64) -> Duration {
    Duration::from_secs(rand::thread_rng().gen_range(min_secs..=max_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_time_stays_within_bounds() {
        for _ in 0..100 {
            let wait = wait_time(1, 5);
            assert!(wait >= Duration::from_secs(1));
            assert!(wait <= Duration::from_secs(5));
        }
    }

    #[test]
    fn test_wait_time_accepts_equal_bounds() {
        assert_eq!(wait_time(3, 3), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_run_load_test_rejects_inverted_wait_bounds() {
        let opts = RunOptions {
            server_url:         url::Url::parse("http://auction-server:9000").unwrap(),
            auth_token:         crate::config::DEFAULT_AUTH_TOKEN.to_string(),
            title:              "Some auction".to_string(),
            currency:           "VAC".to_string(),
            auctions_per_cycle: 1,
            users:              1,
            wait_min_secs:      5,
            wait_max_secs:      1,
            cycles:             Some(1),
        };
        assert!(run_load_test(opts).await.is_err());
    }
}
