use serde::{Deserialize, Serialize};
use shared::error::Result;

use super::VideoStreamingParameters;
use crate::resolution::ImageResolution;
use crate::streaming_format::VideoStreamingFormat;

/// Caller-supplied overrides for [`VideoStreamingParameters`].
///
/// `None` means "no opinion". A present scalar that is not positive is
/// ignored by [`VideoStreamingParameters::update`] as well, so the two cases
/// merge the same way but stay distinguishable here.
///
/// # Examples
///
/// ```
/// use rtc_video::{ImageResolution, PartialVideoStreamingParameters, VideoStreamingParameters};
///
/// let overrides = PartialVideoStreamingParameters::new()
///     .with_frame_rate(30)
///     .with_resolution(ImageResolution::default().with_height(720));
///
/// let mut params = VideoStreamingParameters::default();
/// params.update(&overrides);
/// assert_eq!(params.frame_rate(), 30);
/// assert_eq!(params.resolution().height, 720);
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialVideoStreamingParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_density: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ImageResolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<VideoStreamingFormat>,
}

impl PartialVideoStreamingParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses overrides from JSON, e.g. an application's streaming settings.
    /// Missing members are left as `None`.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_display_density(mut self, display_density: i32) -> Self {
        self.display_density = Some(display_density);
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: i32) -> Self {
        self.frame_rate = Some(frame_rate);
        self
    }

    pub fn with_bitrate(mut self, bitrate: i32) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    pub fn with_interval(mut self, interval: i32) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn with_resolution(mut self, resolution: ImageResolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn with_format(mut self, format: VideoStreamingFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl From<&VideoStreamingParameters> for PartialVideoStreamingParameters {
    fn from(params: &VideoStreamingParameters) -> Self {
        Self {
            display_density: Some(params.display_density),
            frame_rate: Some(params.frame_rate),
            bitrate: Some(params.bitrate),
            interval: Some(params.interval),
            resolution: Some(params.resolution.into()),
            format: Some(params.format),
        }
    }
}
