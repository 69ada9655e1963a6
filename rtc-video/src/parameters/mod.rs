//! The negotiated video streaming parameter set.
//!
//! Three sources feed a [`VideoStreamingParameters`]: its built-in defaults,
//! caller overrides ([`PartialVideoStreamingParameters`]) and the head unit's
//! [`VideoStreamingCapability`]. Merges are best effort. A source value is
//! applied only when it is present and, for numbers, positive; anything else
//! is skipped without error. The one exception is the capability's maximum
//! bitrate, which is applied whenever present (see
//! [`VideoStreamingParameters::update_with_capability`]).

mod partial;

pub use partial::PartialVideoStreamingParameters;

use std::fmt;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use shared::error::{Error, Result, flatten_errs};

use crate::capability::VideoStreamingCapability;
use crate::density::DENSITY_HIGH;
use crate::resolution::{ImageResolution, Resolution};
use crate::streaming_codec::VideoStreamingCodec;
use crate::streaming_format::VideoStreamingFormat;
use crate::streaming_protocol::VideoStreamingProtocol;

pub(crate) const DEFAULT_DENSITY: i32 = DENSITY_HIGH;
pub(crate) const DEFAULT_FRAME_RATE: i32 = 24;
pub(crate) const DEFAULT_BITRATE: i32 = 512_000;
pub(crate) const DEFAULT_INTERVAL: i32 = 5;

/// Video streaming parameters for one streaming session.
///
/// Every field always holds a value. The full constructor and the setters
/// store what they are given without validation; call
/// [`validate`](Self::validate) before handing the set to an encoder if the
/// inputs are not trusted.
///
/// The set is a plain value. Sharing one across threads needs external
/// synchronization, since each merge is a read-then-write sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoStreamingParameters {
    /// Display density class in dpi, see [`density`](crate::density).
    display_density: i32,
    /// Frames per second.
    frame_rate: i32,
    /// Bits per second.
    bitrate: i32,
    /// Seconds between forced keyframes.
    interval: i32,
    resolution: Resolution,
    format: VideoStreamingFormat,
}

impl Default for VideoStreamingParameters {
    fn default() -> Self {
        Self {
            display_density: DEFAULT_DENSITY,
            frame_rate: DEFAULT_FRAME_RATE,
            bitrate: DEFAULT_BITRATE,
            interval: DEFAULT_INTERVAL,
            resolution: Resolution::default(),
            format: VideoStreamingFormat::new(
                VideoStreamingProtocol::Raw,
                VideoStreamingCodec::H264,
            ),
        }
    }
}

impl VideoStreamingParameters {
    /// Creates a parameter set from explicit values, stored as given.
    pub fn new(
        display_density: i32,
        frame_rate: i32,
        bitrate: i32,
        interval: i32,
        resolution: Resolution,
        format: VideoStreamingFormat,
    ) -> Self {
        Self {
            display_density,
            frame_rate,
            bitrate,
            interval,
            resolution,
            format,
        }
    }

    /// Starts from the defaults and merges `params` over them with the same
    /// rules as [`update`](Self::update). Non-positive values in `params`
    /// fall back to the defaults.
    pub fn from_parameters(params: &VideoStreamingParameters) -> Self {
        let mut merged = Self::default();
        merged.update_from_parameters(params);
        merged
    }

    /// Merges caller overrides into this set.
    ///
    /// Each scalar is overwritten when the override is present and positive.
    /// Width and height are judged independently, so an invalid height does
    /// not stop a valid width from applying. A present format replaces the
    /// whole protocol/codec pair.
    pub fn update(&mut self, params: &PartialVideoStreamingParameters) {
        merge_positive(
            "display_density",
            &mut self.display_density,
            params.display_density,
        );
        merge_positive("frame_rate", &mut self.frame_rate, params.frame_rate);
        merge_positive("bitrate", &mut self.bitrate, params.bitrate);
        merge_positive("interval", &mut self.interval, params.interval);
        if let Some(resolution) = &params.resolution {
            self.merge_resolution(resolution);
        }
        if let Some(format) = params.format {
            self.replace_format(format);
        }
        debug!("video streaming parameters updated: {self}");
    }

    /// Same as [`update`](Self::update) with every field of `params` treated
    /// as present.
    pub fn update_from_parameters(&mut self, params: &VideoStreamingParameters) {
        self.update(&params.into());
    }

    /// Merges the capability advertised by the head unit.
    ///
    /// 1. A present `max_bitrate` replaces the bitrate. Unlike every other
    ///    field it is not checked for positivity: the head unit is trusted.
    ///    A non-positive value is still applied and logged as a warning.
    /// 2. A present `preferred_resolution` merges width and height
    ///    independently, each only when positive.
    /// 3. A non-empty `supported_formats` replaces the format with its first
    ///    entry, the head unit's most preferred one.
    ///
    /// A capability with nothing set leaves the parameters unchanged.
    pub fn update_with_capability(&mut self, capability: &VideoStreamingCapability) {
        if let Some(max_bitrate) = capability.max_bitrate {
            if max_bitrate <= 0 {
                warn!("non-positive max bitrate {max_bitrate} advertised, applying it anyway");
            }
            trace!("bitrate: {} -> {}", self.bitrate, max_bitrate);
            self.bitrate = max_bitrate;
        }
        if let Some(resolution) = &capability.preferred_resolution {
            self.merge_resolution(resolution);
        }
        if let Some(format) = capability.preferred_format() {
            self.replace_format(format);
        }
        debug!("video streaming parameters updated from capability: {self}");
    }

    /// Checks that every field holds a usable value, reporting all
    /// violations at once.
    pub fn validate(&self) -> Result<()> {
        let mut errs = vec![];
        if self.display_density <= 0 {
            errs.push(Error::ErrNonPositiveDisplayDensity(self.display_density));
        }
        if self.frame_rate <= 0 {
            errs.push(Error::ErrNonPositiveFrameRate(self.frame_rate));
        }
        if self.bitrate <= 0 {
            errs.push(Error::ErrNonPositiveBitrate(self.bitrate));
        }
        if self.interval <= 0 {
            errs.push(Error::ErrNonPositiveInterval(self.interval));
        }
        if self.resolution.width <= 0 {
            errs.push(Error::ErrNonPositiveResolutionWidth(self.resolution.width));
        }
        if self.resolution.height <= 0 {
            errs.push(Error::ErrNonPositiveResolutionHeight(self.resolution.height));
        }
        if self.format.protocol == VideoStreamingProtocol::Unspecified {
            errs.push(Error::ErrUnspecifiedProtocol);
        }
        if self.format.codec == VideoStreamingCodec::Unspecified {
            errs.push(Error::ErrUnspecifiedCodec);
        }

        match errs.len() {
            0 => Ok(()),
            1 => Err(errs.remove(0)),
            _ => flatten_errs(errs),
        }
    }

    pub fn display_density(&self) -> i32 {
        self.display_density
    }

    pub fn set_display_density(&mut self, display_density: i32) {
        self.display_density = display_density;
    }

    pub fn frame_rate(&self) -> i32 {
        self.frame_rate
    }

    pub fn set_frame_rate(&mut self, frame_rate: i32) {
        self.frame_rate = frame_rate;
    }

    pub fn bitrate(&self) -> i32 {
        self.bitrate
    }

    pub fn set_bitrate(&mut self, bitrate: i32) {
        self.bitrate = bitrate;
    }

    /// Keyframe interval in seconds.
    pub fn interval(&self) -> i32 {
        self.interval
    }

    pub fn set_interval(&mut self, interval: i32) {
        self.interval = interval;
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.resolution = resolution;
    }

    pub fn format(&self) -> VideoStreamingFormat {
        self.format
    }

    pub fn set_format(&mut self, format: VideoStreamingFormat) {
        self.format = format;
    }

    fn merge_resolution(&mut self, source: &ImageResolution) {
        let merged = self.resolution.merged(source);
        if merged != self.resolution {
            trace!("resolution: {} -> {}", self.resolution, merged);
        }
        self.resolution = merged;
    }

    fn replace_format(&mut self, format: VideoStreamingFormat) {
        trace!("format: {} -> {}", self.format, format);
        self.format = format;
    }
}

fn merge_positive(name: &str, field: &mut i32, source: Option<i32>) {
    if let Some(value) = source.filter(|v| *v > 0) {
        trace!("{name}: {} -> {}", *field, value);
        *field = value;
    }
}

impl fmt::Display for VideoStreamingParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "format: {{{}}}, resolution: {{{}}}",
            self.format, self.resolution
        )
    }
}
