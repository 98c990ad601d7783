// src/core/net.rs

// Blocking HTTP GET with a hard timeout. Runs on the loader thread, never on the UI thread.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Build the client once per source; reqwest pools connections inside it.
pub fn client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| Error::Fetch { url: s!("<client>"), source })
}

/// GET `url` and return the body. Non-2xx statuses are errors.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let t = Instant::now();
    let fail = |source| Error::Fetch { url: s!(url), source };

    let resp = client.get(url).send().map_err(fail)?;
    let status = resp.status();
    let body = resp.error_for_status().map_err(fail)?.text().map_err(fail)?;

    logd!("Net: GET {} → {} ({} bytes) in {:?}", url, status, body.len(), t.elapsed());
    Ok(body)
}
