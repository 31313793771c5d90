// src/core/net.rs
//
// Blocking HTTPS GET for the image downloader.
//
// The supplier's certificate chain doesn't verify on every machine, so the
// default client skips verification. With `try_secure_first` a verified
// client goes first and the unverified one is only used after a
// connect/TLS failure.

use std::{error::Error, time::Duration};

use reqwest::blocking::{Client, Response};

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};

pub struct Fetcher {
    secure: Option<Client>,
    insecure: Client,
}

fn client(verify: bool) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .danger_accept_invalid_certs(!verify)
        .build()
}

impl Fetcher {
    pub fn new(try_secure_first: bool) -> Result<Self, Box<dyn Error>> {
        let secure = if try_secure_first { Some(client(true)?) } else { None };
        Ok(Self { secure, insecure: client(false)? })
    }

    fn get(&self, url: &str) -> Result<Response, Box<dyn Error>> {
        if let Some(secure) = &self.secure {
            match secure.get(url).send() {
                Ok(resp) => return Ok(resp.error_for_status()?),
                Err(e) if e.is_connect() => {
                    logw!("HTTP: verified connection to {} failed ({}), retrying without verification", url, e);
                }
                Err(e) => return Err(e.into()),
            }
        }
        let resp = self.insecure.get(url).send()?;
        Ok(resp.error_for_status()?)
    }

    /// GET a page body as text (charset from the response headers).
    pub fn get_text(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let body = self.get(url)?.text()?;
        logd!("HTTP: GET {} -> {} bytes", url, body.len());
        Ok(body)
    }

    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        let body = self.get(url)?.bytes()?;
        logd!("HTTP: GET {} -> {} bytes", url, body.len());
        Ok(body.to_vec())
    }
}
