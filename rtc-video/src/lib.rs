//! Video streaming parameters negotiated between a head unit and a mobile
//! application.
//!
//! [`VideoStreamingParameters`] starts from built-in defaults, takes caller
//! overrides through [`PartialVideoStreamingParameters`], and is refined by the
//! [`VideoStreamingCapability`] the head unit advertises. The result is handed,
//! read-only, to the encoder and transport.
//!
//! ```
//! use rtc_video::{
//!     ImageResolution, VideoStreamingCapability, VideoStreamingCodec, VideoStreamingFormat,
//!     VideoStreamingParameters, VideoStreamingProtocol,
//! };
//!
//! let mut params = VideoStreamingParameters::default();
//! let capability = VideoStreamingCapability::new()
//!     .with_max_bitrate(1_000_000)
//!     .with_preferred_resolution(ImageResolution::new(1920, 1080))
//!     .with_supported_formats(vec![
//!         VideoStreamingFormat::new(VideoStreamingProtocol::Rtp, VideoStreamingCodec::H265),
//!         VideoStreamingFormat::new(VideoStreamingProtocol::Raw, VideoStreamingCodec::H264),
//!     ]);
//! params.update_with_capability(&capability);
//!
//! assert_eq!(params.bitrate(), 1_000_000);
//! assert_eq!(params.format().protocol, VideoStreamingProtocol::Rtp);
//! ```
#![warn(rust_2018_idioms)]

pub mod capability;
pub mod density;
pub mod parameters;
pub mod resolution;
pub mod streaming_codec;
pub mod streaming_format;
pub mod streaming_protocol;

pub use capability::VideoStreamingCapability;
pub use parameters::{PartialVideoStreamingParameters, VideoStreamingParameters};
pub use resolution::{ImageResolution, Resolution};
pub use streaming_codec::VideoStreamingCodec;
pub use streaming_format::VideoStreamingFormat;
pub use streaming_protocol::VideoStreamingProtocol;

pub(crate) const UNSPECIFIED_STR: &str = "Unspecified";
