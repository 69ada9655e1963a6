use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport protocol used to carry the encoded video stream to the head unit.
///
/// The head unit lists the protocol/codec pairs it accepts in
/// [`VideoStreamingCapability`](crate::VideoStreamingCapability); the
/// protocol half of the negotiated pair is one of these.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum VideoStreamingProtocol {
    /// Raw elementary stream with no transport framing.
    #[default]
    #[serde(rename = "RAW")]
    Raw,

    /// RTP framing (RFC 3550)
    #[serde(rename = "RTP")]
    Rtp,

    /// RTSP session (RFC 2326)
    #[serde(rename = "RTSP")]
    Rtsp,

    /// Real-Time Messaging Protocol
    #[serde(rename = "RTMP")]
    Rtmp,

    /// WebM container
    #[serde(rename = "WEBM")]
    Webm,

    /// Unknown protocol string received from the wire
    #[serde(other)]
    Unspecified,
}

const PROTOCOL_RAW_STR: &str = "RAW";
const PROTOCOL_RTP_STR: &str = "RTP";
const PROTOCOL_RTSP_STR: &str = "RTSP";
const PROTOCOL_RTMP_STR: &str = "RTMP";
const PROTOCOL_WEBM_STR: &str = "WEBM";

impl From<&str> for VideoStreamingProtocol {
    fn from(raw: &str) -> Self {
        match raw {
            PROTOCOL_RAW_STR => VideoStreamingProtocol::Raw,
            PROTOCOL_RTP_STR => VideoStreamingProtocol::Rtp,
            PROTOCOL_RTSP_STR => VideoStreamingProtocol::Rtsp,
            PROTOCOL_RTMP_STR => VideoStreamingProtocol::Rtmp,
            PROTOCOL_WEBM_STR => VideoStreamingProtocol::Webm,
            _ => VideoStreamingProtocol::Unspecified,
        }
    }
}

impl fmt::Display for VideoStreamingProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            VideoStreamingProtocol::Raw => PROTOCOL_RAW_STR,
            VideoStreamingProtocol::Rtp => PROTOCOL_RTP_STR,
            VideoStreamingProtocol::Rtsp => PROTOCOL_RTSP_STR,
            VideoStreamingProtocol::Rtmp => PROTOCOL_RTMP_STR,
            VideoStreamingProtocol::Webm => PROTOCOL_WEBM_STR,
            VideoStreamingProtocol::Unspecified => crate::UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}
