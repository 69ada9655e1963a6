use std::fmt;

use serde::{Deserialize, Serialize};

use crate::streaming_codec::VideoStreamingCodec;
use crate::streaming_protocol::VideoStreamingProtocol;

/// A protocol/codec pair. Always negotiated and replaced as a whole; the
/// protocol of one advertised pair is never combined with the codec of
/// another.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoStreamingFormat {
    pub protocol: VideoStreamingProtocol,
    pub codec: VideoStreamingCodec,
}

impl VideoStreamingFormat {
    pub fn new(protocol: VideoStreamingProtocol, codec: VideoStreamingCodec) -> Self {
        Self { protocol, codec }
    }
}

impl fmt::Display for VideoStreamingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "protocol: {}, codec: {}", self.protocol, self.codec)
    }
}
