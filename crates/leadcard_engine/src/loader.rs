use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use leadcard_logging::{lead_debug, lead_info};
use tokio_util::sync::CancellationToken;

use crate::decode::decode_text;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{FailureKind, FetchError, LoadEvent};

/// Where the CSV payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Text compiled into the binary or supplied by the caller.
    Inline(String),
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// `http(s)://` locations are fetched, anything else is a file path.
    pub fn from_location(location: &str) -> Self {
        let lower = location.trim().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(location.trim().to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Inline(_) => "embedded sample".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }
}

/// Loads one dataset on a background thread.
///
/// Dropping the handle (or calling [`DatasetLoader::cancel`]) discards a
/// result that arrives afterwards.
pub struct DatasetLoader {
    event_rx: mpsc::Receiver<LoadEvent>,
    cancel: CancellationToken,
}

impl DatasetLoader {
    pub fn spawn(source: DatasetSource, settings: FetchSettings) -> Self {
        Self::spawn_with(source, Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn spawn_with(source: DatasetSource, fetcher: Arc<dyn Fetcher>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let guard = cancel.clone();

        thread::spawn(move || {
            let origin = source.describe();
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    let _ = event_tx.send(LoadEvent::Finished {
                        origin,
                        result: Err(FetchError::new(FailureKind::Io, err.to_string())),
                    });
                    return;
                }
            };

            let result = runtime.block_on(async {
                tokio::select! {
                    _ = guard.cancelled() => None,
                    result = load(source, fetcher.as_ref()) => Some(result),
                }
            });

            match result {
                Some(result) if !guard.is_cancelled() => {
                    lead_info!("Dataset load from {} finished", origin);
                    let _ = event_tx.send(LoadEvent::Finished { origin, result });
                }
                _ => lead_debug!("Discarding dataset load from {} after cancel", origin),
            }
        });

        Self { event_rx, cancel }
    }

    pub fn try_recv(&self) -> Option<LoadEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<LoadEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for DatasetLoader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn load(source: DatasetSource, fetcher: &dyn Fetcher) -> Result<String, FetchError> {
    match source {
        DatasetSource::Inline(text) => Ok(text),
        DatasetSource::File(path) => {
            let bytes = tokio::fs::read(&path).await.map_err(|err| {
                FetchError::new(FailureKind::Io, format!("{}: {err}", path.display()))
            })?;
            decode(&bytes, None)
        }
        DatasetSource::Url(url) => {
            let output = fetcher.fetch(&url).await?;
            if output.final_url != url {
                lead_info!("Dataset request {} redirected to {}", url, output.final_url);
            }
            decode(&output.bytes, output.content_type.as_deref())
        }
    }
}

fn decode(bytes: &[u8], content_type: Option<&str>) -> Result<String, FetchError> {
    let decoded = decode_text(bytes, content_type)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    lead_debug!(
        "Decoded {} byte(s) of CSV as {}",
        bytes.len(),
        decoded.encoding_label
    );
    Ok(decoded.text)
}
