//! Background image loading.
//!
//! Spawns worker threads to download (or unpack `data:` URLs) and decode
//! images into RGBA pixel buffers ready for egui texture creation.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;
use std::time::Duration;

use base64::Engine as _;

use crate::error::AvatarError;

/// Largest edge kept after decoding; bigger images are scaled down.
const MAX_EDGE: u32 = 512;

/// Decoded image data (RGBA).
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Manages background image fetching and decoding, keyed by source string.
pub struct ImageLoader {
    pending: HashMap<String, mpsc::Receiver<Result<ImageData, AvatarError>>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
    timeout: Duration,
}

impl ImageLoader {
    pub fn new(timeout: Duration) -> Self {
        Self {
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
            timeout,
        }
    }

    /// Request a source to be loaded in the background.
    pub fn request(&mut self, source: &str) {
        if self.loaded.contains_key(source)
            || self.pending.contains_key(source)
            || self.failed.contains(source)
        {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let owned = source.to_string();
        let timeout = self.timeout;

        std::thread::spawn(move || {
            let _ = tx.send(fetch_and_decode(&owned, timeout));
        });

        self.pending.insert(source.to_string(), rx);
    }

    /// Store an image decoded elsewhere.
    pub fn insert(&mut self, source: &str, data: ImageData) {
        self.failed.remove(source);
        self.pending.remove(source);
        self.loaded.insert(source.to_string(), data);
    }

    /// Poll for completed loads. Call every frame.
    pub fn poll(&mut self) {
        let mut completed = Vec::new();
        for (source, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Ok(data)) => {
                    self.loaded.insert(source.clone(), data);
                    completed.push(source.clone());
                }
                Ok(Err(e)) => {
                    log::warn!("Failed to load image: {}", e);
                    self.failed.insert(source.clone());
                    completed.push(source.clone());
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.failed.insert(source.clone());
                    completed.push(source.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
        for source in completed {
            self.pending.remove(&source);
        }
    }

    pub fn get(&self, source: &str) -> Option<&ImageData> {
        self.loaded.get(source)
    }

    pub fn has_failed(&self, source: &str) -> bool {
        self.failed.contains(source)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Load `source` (http(s) URL or `data:` URL) and decode it.
pub fn fetch_and_decode(source: &str, timeout: Duration) -> Result<ImageData, AvatarError> {
    if source.starts_with("data:") {
        let bytes = decode_data_url(source)?;
        return decode_bytes(&bytes);
    }

    let resp = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AvatarError::Unreachable(e.to_string()))?
        .get(source)
        .send()
        .map_err(|e| AvatarError::Unreachable(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(AvatarError::Unreachable(format!("HTTP {}", resp.status())));
    }

    let bytes = resp
        .bytes()
        .map_err(|e| AvatarError::Unreachable(e.to_string()))?;
    decode_bytes(&bytes)
}

/// Decode encoded image bytes to RGBA, capping the longest edge.
pub fn decode_bytes(bytes: &[u8]) -> Result<ImageData, AvatarError> {
    let img = image::load_from_memory(bytes).map_err(|e| AvatarError::Decode(e.to_string()))?;
    let img = if img.width() > MAX_EDGE || img.height() > MAX_EDGE {
        img.resize(MAX_EDGE, MAX_EDGE, image::imageops::FilterType::Triangle)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// `data:<mime>;base64,<payload>` for `bytes`. The mime type is sniffed.
pub fn encode_data_url(bytes: &[u8]) -> Result<String, AvatarError> {
    let format = image::guess_format(bytes).map_err(|e| AvatarError::Decode(e.to_string()))?;
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", format.to_mime_type(), payload))
}

pub fn decode_data_url(url: &str) -> Result<Vec<u8>, AvatarError> {
    let (meta, payload) = url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(','))
        .ok_or_else(|| AvatarError::Decode("not a data URL".into()))?;
    if !meta.ends_with(";base64") {
        return Err(AvatarError::Decode("data URL is not base64".into()));
    }
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| AvatarError::Decode(e.to_string()))
}

#[cfg(test)]
pub(crate) fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}
