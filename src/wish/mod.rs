//! Wish service client: a stateless request/response call to a remote
//! text-generation endpoint.
//!
//! The client is infallible by design: any failure — unreachable host,
//! bad status, unreadable body, invalid JSON — collapses to a fixed
//! fallback reply and a warning in the log. Nothing here touches the
//! morph engine; the scatter-while-pending visual cue is wired at the
//! input boundary by the caller.

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ArborError;
use crate::options::WishOptions;

/// Message used whenever the remote service cannot be reached or parsed.
pub const FALLBACK_MESSAGE: &str =
    "May your holidays be draped in emerald and gold.";
/// Signature paired with the fallback message.
pub const FALLBACK_SIGNATURE: &str = "Arix Signature";

/// A generated holiday wish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishResponse {
    /// The poetic holiday message.
    pub message: String,
    /// A signature closing line.
    pub signature: String,
}

impl WishResponse {
    /// The fixed fallback reply.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            message: FALLBACK_MESSAGE.to_owned(),
            signature: FALLBACK_SIGNATURE.to_owned(),
        }
    }
}

#[derive(Serialize)]
struct WishRequest<'a> {
    keyword: &'a str,
}

/// Blocking client for the wish endpoint.
pub struct WishClient {
    endpoint: String,
    api_key_env: String,
    agent: ureq::Agent,
}

impl WishClient {
    /// Build a client from options. An empty endpoint is accepted; every
    /// request then takes the fallback path.
    #[must_use]
    pub fn new(opts: &WishOptions) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(opts.timeout_secs)))
            .build();
        Self {
            endpoint: opts.endpoint.clone(),
            api_key_env: opts.api_key_env.clone(),
            agent: ureq::Agent::new_with_config(config),
        }
    }

    /// Generate a wish for the given keyword.
    ///
    /// Never fails: any request or parse error yields
    /// [`WishResponse::fallback`].
    pub fn generate(&self, keyword: &str) -> WishResponse {
        match self.request(keyword) {
            Ok(wish) => wish,
            Err(e) => {
                log::warn!("wish request failed, using fallback: {e}");
                WishResponse::fallback()
            }
        }
    }

    fn request(
        &self,
        keyword: &str,
    ) -> Result<WishResponse, Box<dyn std::error::Error>> {
        let body = serde_json::to_string(&WishRequest { keyword })?;
        let mut request = self
            .agent
            .post(&self.endpoint)
            .header("content-type", "application/json");
        if let Ok(key) = std::env::var(&self.api_key_env) {
            request = request.header("authorization", &format!("Bearer {key}"));
        }
        let text = request.send(body.as_str())?.into_body().read_to_string()?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Fire-and-forget submission: generate on a background thread and send
/// the result over `tx`. There is no cancellation; preventing a second
/// in-flight submission is the caller's responsibility.
pub fn submit_background(
    client: WishClient,
    keyword: String,
    tx: Sender<WishResponse>,
) -> Result<JoinHandle<()>, ArborError> {
    std::thread::Builder::new()
        .name("wish-service".to_owned())
        .spawn(move || {
            let wish = client.generate(&keyword);
            if tx.send(wish).is_err() {
                log::debug!("wish receiver dropped before completion");
            }
        })
        .map_err(ArborError::ThreadSpawn)
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;

    use super::*;

    /// Serve exactly one canned HTTP response on a loopback port.
    fn one_shot_server(body: &str) -> (String, std::thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            // Drain the full request (head + content-length body) before
            // replying, so the client never sees a reset mid-send.
            let mut buf = [0u8; 4096];
            let mut received = Vec::new();
            loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                if let Some(head_end) = received
                    .windows(4)
                    .position(|w| w == b"\r\n\r\n")
                    .map(|p| p + 4)
                {
                    let head =
                        String::from_utf8_lossy(&received[..head_end])
                            .to_lowercase();
                    let body_len = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if received.len() >= head_end + body_len {
                        break;
                    }
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
        });
        (format!("http://{addr}"), handle)
    }

    fn client_for(endpoint: &str) -> WishClient {
        WishClient::new(&WishOptions {
            endpoint: endpoint.to_owned(),
            api_key_env: "ARBOR_TEST_NO_SUCH_KEY".to_owned(),
            timeout_secs: 5,
        })
    }

    #[test]
    fn valid_response_is_parsed() {
        let (endpoint, handle) = one_shot_server(
            r#"{"message": "Gold upon green.", "signature": "Arix 2024"}"#,
        );
        let wish = client_for(&endpoint).generate("gold");
        handle.join().unwrap();
        assert_eq!(wish.message, "Gold upon green.");
        assert_eq!(wish.signature, "Arix 2024");
    }

    #[test]
    fn invalid_json_resolves_to_fallback() {
        let (endpoint, handle) = one_shot_server("not json at all");
        let wish = client_for(&endpoint).generate("gold");
        handle.join().unwrap();
        assert_eq!(wish, WishResponse::fallback());
    }

    #[test]
    fn empty_endpoint_resolves_to_fallback() {
        let wish = client_for("").generate("gold");
        assert_eq!(wish, WishResponse::fallback());
    }

    #[test]
    fn unreachable_endpoint_resolves_to_fallback() {
        // Port 1 on loopback: connection refused immediately.
        let client = WishClient::new(&WishOptions {
            endpoint: "http://127.0.0.1:1".to_owned(),
            api_key_env: "ARBOR_TEST_NO_SUCH_KEY".to_owned(),
            timeout_secs: 1,
        });
        assert_eq!(client.generate("gold"), WishResponse::fallback());
    }

    #[test]
    fn background_submission_delivers_over_channel() {
        let (tx, rx) = mpsc::channel();
        let handle =
            submit_background(client_for(""), "gold".to_owned(), tx)
                .unwrap();
        let wish = rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .unwrap();
        handle.join().unwrap();
        assert_eq!(wish, WishResponse::fallback());
    }
}
