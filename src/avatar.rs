//! Profile picture upload flow.
//!
//! Two inputs, a URL and a local file:
//! - both empty  → stored picture removed, placeholder shown
//! - URL         → must be http(s), then verified by loading it on a worker
//! - file        → at most 2 MiB, embedded as a `data:` URL
//!
//! Only accepted sources reach storage. The picture is stored under its own
//! key, independent of the résumé content.

use std::io::Read;
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use url::Url;

use crate::error::AvatarError;
use crate::net::image::{decode_bytes, decode_data_url, encode_data_url, fetch_and_decode, ImageData};
use crate::storage::{LocalStore, PROFILE_IMAGE_KEY};

/// Where the displayed picture comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AvatarSource {
    #[default]
    Placeholder,
    Remote(String),
    Embedded(String),
}

impl AvatarSource {
    pub fn from_stored(value: Option<String>) -> Self {
        match value {
            Some(v) if v.starts_with("data:") => AvatarSource::Embedded(v),
            Some(v) if !v.is_empty() => AvatarSource::Remote(v),
            _ => AvatarSource::Placeholder,
        }
    }

    pub fn load(store: &dyn LocalStore) -> Self {
        Self::from_stored(store.get(PROFILE_IMAGE_KEY))
    }

    /// Loader key, `None` for the placeholder.
    pub fn key(&self) -> Option<&str> {
        match self {
            AvatarSource::Placeholder => None,
            AvatarSource::Remote(s) | AvatarSource::Embedded(s) => Some(s),
        }
    }
}

/// Initials shown when no picture is set.
pub fn placeholder_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// An accepted picture, decoded and ready for display.
#[derive(Debug, Clone)]
pub struct Accepted {
    pub source: AvatarSource,
    pub image: ImageData,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Cleared,
    Saved(Accepted),
    /// Remote verification started; watch `poll`.
    Verifying,
}

/// Remote picture check: load and decode the URL.
pub type Verifier = Arc<dyn Fn(&str) -> Result<ImageData, AvatarError> + Send + Sync>;

pub struct AvatarUploader {
    max_bytes: u64,
    verifier: Verifier,
    pending: Option<(String, mpsc::Receiver<Result<ImageData, AvatarError>>)>,
}

impl AvatarUploader {
    pub fn new(max_bytes: u64, timeout: Duration) -> Self {
        Self::with_verifier(max_bytes, Arc::new(move |url: &str| fetch_and_decode(url, timeout)))
    }

    /// Custom remote check, used to keep tests off the network.
    pub fn with_verifier(max_bytes: u64, verifier: Verifier) -> Self {
        Self {
            max_bytes,
            verifier,
            pending: None,
        }
    }

    pub fn is_verifying(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any in-flight verification (modal cancelled).
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Handle the save button. The URL wins when both inputs are filled.
    pub fn submit(
        &mut self,
        url_input: &str,
        file: Option<&Path>,
        store: &mut dyn LocalStore,
        on_done: impl FnOnce() + Send + 'static,
    ) -> Result<SubmitOutcome, AvatarError> {
        let url_input = url_input.trim();
        match (url_input.is_empty(), file) {
            (true, None) => {
                store.remove(PROFILE_IMAGE_KEY);
                self.pending = None;
                log::info!("Profile picture cleared");
                Ok(SubmitOutcome::Cleared)
            }
            (false, _) => {
                let url = validate_url(url_input)?;
                let (tx, rx) = mpsc::channel();
                let verifier = Arc::clone(&self.verifier);
                let target = url.clone();
                std::thread::spawn(move || {
                    let _ = tx.send(verifier(&target));
                    on_done();
                });
                self.pending = Some((url, rx));
                Ok(SubmitOutcome::Verifying)
            }
            (true, Some(path)) => {
                let data_url = read_file_as_data_url(path, self.max_bytes)?;
                let image = decode_bytes(&decode_data_url(&data_url)?)?;
                store.set(PROFILE_IMAGE_KEY, data_url.clone());
                log::info!("Profile picture set from {}", path.display());
                Ok(SubmitOutcome::Saved(Accepted {
                    source: AvatarSource::Embedded(data_url),
                    image,
                }))
            }
        }
    }

    /// Result of a pending URL verification, once available.
    pub fn poll(&mut self, store: &mut dyn LocalStore) -> Option<Result<Accepted, AvatarError>> {
        let (url, rx) = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(r) => r,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => {
                Err(AvatarError::Unreachable("verification aborted".into()))
            }
        };
        let url = url.clone();
        self.pending = None;
        Some(match result {
            Ok(image) => {
                store.set(PROFILE_IMAGE_KEY, url.clone());
                log::info!("Profile picture set from {}", url);
                Ok(Accepted {
                    source: AvatarSource::Remote(url),
                    image,
                })
            }
            Err(e) => {
                log::warn!("Rejected profile picture {}: {}", url, e);
                Err(e)
            }
        })
    }
}

/// Accept only absolute http/https URLs.
pub fn validate_url(input: &str) -> Result<String, AvatarError> {
    let url = Url::parse(input).map_err(|_| AvatarError::InvalidUrl)?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(input.to_string()),
        _ => Err(AvatarError::InvalidUrl),
    }
}

/// Read a local image fully and embed it, refusing files over `max_bytes`.
pub fn read_file_as_data_url(path: &Path, max_bytes: u64) -> Result<String, AvatarError> {
    let file = std::fs::File::open(path)?;
    let size = file.metadata()?.len();
    if size > max_bytes {
        return Err(AvatarError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    let bytes = read_capped(file, max_bytes)?;
    encode_data_url(&bytes)
}

/// Read at most `max_bytes`; a longer stream is `TooLarge` even if the
/// file grew after its size was checked.
fn read_capped(reader: impl Read, max_bytes: u64) -> Result<Vec<u8>, AvatarError> {
    let mut bytes = Vec::new();
    reader.take(max_bytes + 1).read_to_end(&mut bytes)?;
    let size = bytes.len() as u64;
    if size > max_bytes {
        return Err(AvatarError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::image::png_fixture;
    use crate::storage::MemoryStore;
    use std::io::Write;
    use std::time::Instant;

    fn ok_verifier() -> Verifier {
        Arc::new(|_: &str| decode_bytes(&png_fixture(8, 8)))
    }

    fn failing_verifier() -> Verifier {
        Arc::new(|_: &str| -> Result<ImageData, AvatarError> {
            Err(AvatarError::Unreachable("HTTP 404 Not Found".into()))
        })
    }

    fn wait(up: &mut AvatarUploader, store: &mut MemoryStore) -> Result<Accepted, AvatarError> {
        let start = Instant::now();
        loop {
            if let Some(r) = up.poll(store) {
                return r;
            }
            assert!(start.elapsed() < Duration::from_secs(5), "verification hung");
            std::thread::sleep(Duration::from_millis(2));
        }
    }

    #[test]
    fn url_scheme_is_checked() {
        assert!(validate_url("https://example.com/me.png").is_ok());
        assert!(validate_url("http://example.com/me.png").is_ok());
        assert!(matches!(validate_url("ftp://example.com/me.png"), Err(AvatarError::InvalidUrl)));
        assert!(matches!(validate_url("example.com/me.png"), Err(AvatarError::InvalidUrl)));
        assert!(matches!(validate_url("javascript:alert(1)"), Err(AvatarError::InvalidUrl)));
    }

    #[test]
    fn verified_url_is_persisted() {
        let mut store = MemoryStore::new();
        let mut up = AvatarUploader::with_verifier(2 * 1024 * 1024, ok_verifier());
        let out = up
            .submit(" https://example.com/me.png ", None, &mut store, || {})
            .unwrap();
        assert!(matches!(out, SubmitOutcome::Verifying));
        assert!(up.is_verifying());
        assert!(store.get(PROFILE_IMAGE_KEY).is_none());

        let accepted = wait(&mut up, &mut store).unwrap();
        assert_eq!(accepted.source, AvatarSource::Remote("https://example.com/me.png".into()));
        assert_eq!(store.get(PROFILE_IMAGE_KEY).as_deref(), Some("https://example.com/me.png"));
        assert!(!up.is_verifying());
    }

    #[test]
    fn unreachable_url_leaves_storage_unchanged() {
        let mut store = MemoryStore::new();
        store.set(PROFILE_IMAGE_KEY, "https://example.com/old.png".into());
        let mut up = AvatarUploader::with_verifier(2 * 1024 * 1024, failing_verifier());
        up.submit("https://example.com/missing.png", None, &mut store, || {})
            .unwrap();
        assert!(matches!(wait(&mut up, &mut store), Err(AvatarError::Unreachable(_))));
        assert_eq!(store.get(PROFILE_IMAGE_KEY).as_deref(), Some("https://example.com/old.png"));
    }

    #[test]
    fn invalid_url_fails_immediately() {
        let mut store = MemoryStore::new();
        let mut up = AvatarUploader::with_verifier(1024, ok_verifier());
        assert!(matches!(
            up.submit("www.example.com/me.png", None, &mut store, || {}),
            Err(AvatarError::InvalidUrl)
        ));
        assert!(!up.is_verifying());
    }

    #[test]
    fn small_file_is_embedded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&png_fixture(16, 16)).unwrap();
        let mut store = MemoryStore::new();
        let mut up = AvatarUploader::with_verifier(2 * 1024 * 1024, ok_verifier());
        let out = up.submit("", Some(file.path()), &mut store, || {}).unwrap();
        let accepted = match out {
            SubmitOutcome::Saved(a) => a,
            other => panic!("expected Saved, got {:?}", other),
        };
        assert_eq!(accepted.image.width, 16);
        let stored = store.get(PROFILE_IMAGE_KEY).unwrap();
        assert!(stored.starts_with("data:image/png;base64,"));
        assert_eq!(AvatarSource::Embedded(stored), accepted.source);
    }

    #[test]
    fn oversized_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0u8; 2048]).unwrap();
        let mut store = MemoryStore::new();
        let mut up = AvatarUploader::with_verifier(1024, ok_verifier());
        let err = up.submit("", Some(file.path()), &mut store, || {}).unwrap_err();
        assert!(matches!(err, AvatarError::TooLarge { size: 2048, .. }));
        assert!(store.get(PROFILE_IMAGE_KEY).is_none());
    }

    #[test]
    fn read_stops_past_the_ceiling() {
        let err = read_capped(std::io::Cursor::new(vec![7u8; 5000]), 1024).unwrap_err();
        assert!(matches!(err, AvatarError::TooLarge { size: 1025, limit: 1024 }));
        let ok = read_capped(std::io::Cursor::new(vec![7u8; 1024]), 1024).unwrap();
        assert_eq!(ok.len(), 1024);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut store = MemoryStore::new();
        let mut up = AvatarUploader::with_verifier(1024, ok_verifier());
        let err = up
            .submit("", Some(Path::new("/nonexistent/me.png")), &mut store, || {})
            .unwrap_err();
        assert!(matches!(err, AvatarError::Io(_)));
    }

    #[test]
    fn empty_inputs_clear_stored_picture() {
        let mut store = MemoryStore::new();
        store.set(PROFILE_IMAGE_KEY, "https://example.com/old.png".into());
        let mut up = AvatarUploader::with_verifier(1024, ok_verifier());
        let out = up.submit("  ", None, &mut store, || {}).unwrap();
        assert!(matches!(out, SubmitOutcome::Cleared));
        assert_eq!(AvatarSource::load(&store), AvatarSource::Placeholder);
    }

    #[test]
    fn stored_values_map_to_sources() {
        assert_eq!(AvatarSource::from_stored(None), AvatarSource::Placeholder);
        assert_eq!(AvatarSource::from_stored(Some(String::new())), AvatarSource::Placeholder);
        assert!(matches!(
            AvatarSource::from_stored(Some("data:image/png;base64,AA==".into())),
            AvatarSource::Embedded(_)
        ));
        assert_eq!(
            AvatarSource::from_stored(Some("https://x.test/a.png".into())).key(),
            Some("https://x.test/a.png")
        );
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(placeholder_initials("Fahad Ali"), "FA");
        assert_eq!(placeholder_initials("ada"), "A");
        assert_eq!(placeholder_initials(""), "");
    }
}
