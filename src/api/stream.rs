//! Live Server-Sent-Events subscription yielding decoded JSON messages

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use eventsource_stream::Eventsource;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::fetch_utils::build_url;
use crate::error::BlaseballError;

/// An open subscription to the live data stream.
///
/// Yields one decoded JSON value per stream message, suspending between
/// messages. The sequence has no natural end: if the connection drops or the
/// server closes the body, one final `Stream` error is yielded and the
/// stream then terminates. A message that is not valid JSON yields a
/// `Decode` error and the subscription keeps going.
///
/// The underlying connection is owned by this value and released when it is
/// dropped or [`DataStream::close`] is called. It cannot be restarted; call
/// `stream_data` again for a new subscription.
pub struct DataStream {
    url: String,
    inner: BoxStream<'static, Result<Value, BlaseballError>>,
}

impl DataStream {
    fn from_response(response: reqwest::Response, url: String) -> Self {
        let events = Box::pin(response.bytes_stream().eventsource());
        let stream_url = url.clone();

        let inner = stream::unfold(Some(events), move |state| {
            let url = stream_url.clone();
            async move {
                let mut events = state?;
                loop {
                    match events.next().await {
                        Some(Ok(event)) => {
                            if event.data.trim().is_empty() {
                                continue;
                            }
                            debug!("Received stream message ({} bytes)", event.data.len());
                            let item = serde_json::from_str::<Value>(&event.data).map_err(|e| {
                                error!("Failed to parse stream message: {} (URL: {})", e, url);
                                BlaseballError::decode(e.to_string(), &url)
                            });
                            return Some((item, Some(events)));
                        }
                        Some(Err(e)) => {
                            warn!("Live stream interrupted: {} (URL: {})", e, url);
                            return Some((Err(BlaseballError::stream(&url, e.to_string())), None));
                        }
                        None => {
                            warn!("Live stream closed by server (URL: {})", url);
                            return Some((
                                Err(BlaseballError::stream(&url, "closed by server")),
                                None,
                            ));
                        }
                    }
                }
            }
        })
        .boxed();

        DataStream { url, inner }
    }

    /// URL the subscription was opened against
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Ends the subscription and releases the connection.
    pub fn close(self) {
        info!("Closing live stream (URL: {})", self.url);
    }
}

impl Stream for DataStream {
    type Item = Result<Value, BlaseballError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}

impl fmt::Debug for DataStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStream").field("url", &self.url).finish()
    }
}

/// Opens the event stream at `{base_url}/{path}`.
///
/// Fails with `Http` if the server refuses the subscription and `Network`
/// if the connection cannot be made; after that, failures arrive as stream
/// items.
#[instrument(skip(client, base_url), fields(base_url = %base_url))]
pub(crate) async fn open_stream(
    client: &Client,
    base_url: &Url,
    path: &str,
) -> Result<DataStream, BlaseballError> {
    let request = client
        .get(build_url(base_url, path))
        .header(ACCEPT, "text/event-stream")
        .build()?;
    let url = request.url().to_string();

    info!("Opening live stream: {url}");

    let response = client.execute(request).await.map_err(|e| {
        error!("Stream request failed for URL {}: {}", url, e);
        BlaseballError::network(&url, e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("HTTP {} while opening stream (URL: {})", status.as_u16(), url);
        return Err(BlaseballError::http(status.as_u16(), body, url));
    }

    debug!("Live stream open, status {status}");
    Ok(DataStream::from_response(response, url))
}
