use serde::{Deserialize, Serialize};
use shared::error::Result;

use crate::resolution::ImageResolution;
use crate::streaming_format::VideoStreamingFormat;

/// Video streaming capability advertised by the head unit.
///
/// Every member is optional. `supported_formats` is ordered by the head
/// unit's preference, most preferred first, and that order must be kept by
/// whoever builds this value: [`preferred_format`](Self::preferred_format)
/// simply takes the first entry.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStreamingCapability {
    /// Highest bitrate the head unit accepts, in bits per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bitrate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_resolution: Option<ImageResolution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_formats: Option<Vec<VideoStreamingFormat>>,
}

impl VideoStreamingCapability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a capability from its JSON form, e.g. the body of a system
    /// capability response.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_max_bitrate(mut self, max_bitrate: i32) -> Self {
        self.max_bitrate = Some(max_bitrate);
        self
    }

    pub fn with_preferred_resolution(mut self, resolution: ImageResolution) -> Self {
        self.preferred_resolution = Some(resolution);
        self
    }

    pub fn with_supported_formats(mut self, formats: Vec<VideoStreamingFormat>) -> Self {
        self.supported_formats = Some(formats);
        self
    }

    /// The head unit's most preferred format: the first advertised entry.
    pub fn preferred_format(&self) -> Option<VideoStreamingFormat> {
        self.supported_formats
            .as_ref()
            .and_then(|formats| formats.first().copied())
    }
}
