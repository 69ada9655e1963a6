use std::fmt;

use serde::{Deserialize, Serialize};

/// Video codec the mobile application encodes with.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum VideoStreamingCodec {
    /// H.264 / AVC
    #[default]
    #[serde(rename = "H264")]
    H264,

    /// H.265 / HEVC
    #[serde(rename = "H265")]
    H265,

    #[serde(rename = "Theora")]
    Theora,

    #[serde(rename = "VP8")]
    Vp8,

    #[serde(rename = "VP9")]
    Vp9,

    /// Unknown codec string received from the wire
    #[serde(other)]
    Unspecified,
}

const CODEC_H264_STR: &str = "H264";
const CODEC_H265_STR: &str = "H265";
const CODEC_THEORA_STR: &str = "Theora";
const CODEC_VP8_STR: &str = "VP8";
const CODEC_VP9_STR: &str = "VP9";

impl From<&str> for VideoStreamingCodec {
    fn from(raw: &str) -> Self {
        match raw {
            CODEC_H264_STR => VideoStreamingCodec::H264,
            CODEC_H265_STR => VideoStreamingCodec::H265,
            CODEC_THEORA_STR => VideoStreamingCodec::Theora,
            CODEC_VP8_STR => VideoStreamingCodec::Vp8,
            CODEC_VP9_STR => VideoStreamingCodec::Vp9,
            _ => VideoStreamingCodec::Unspecified,
        }
    }
}

impl fmt::Display for VideoStreamingCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            VideoStreamingCodec::H264 => CODEC_H264_STR,
            VideoStreamingCodec::H265 => CODEC_H265_STR,
            VideoStreamingCodec::Theora => CODEC_THEORA_STR,
            VideoStreamingCodec::Vp8 => CODEC_VP8_STR,
            VideoStreamingCodec::Vp9 => CODEC_VP9_STR,
            VideoStreamingCodec::Unspecified => crate::UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_video_streaming_codec() {
        let tests = vec![
            ("Unspecified", VideoStreamingCodec::Unspecified),
            ("H264", VideoStreamingCodec::H264),
            ("H265", VideoStreamingCodec::H265),
            ("Theora", VideoStreamingCodec::Theora),
            ("VP8", VideoStreamingCodec::Vp8),
            ("VP9", VideoStreamingCodec::Vp9),
            ("AV1", VideoStreamingCodec::Unspecified),
        ];

        for (codec_string, expected_codec) in tests {
            assert_eq!(VideoStreamingCodec::from(codec_string), expected_codec);
        }
    }

    #[test]
    fn test_video_streaming_codec_string() {
        let tests = vec![
            (VideoStreamingCodec::Unspecified, "Unspecified"),
            (VideoStreamingCodec::H264, "H264"),
            (VideoStreamingCodec::H265, "H265"),
            (VideoStreamingCodec::Theora, "Theora"),
            (VideoStreamingCodec::Vp8, "VP8"),
            (VideoStreamingCodec::Vp9, "VP9"),
        ];

        for (codec, expected_string) in tests {
            assert_eq!(codec.to_string(), expected_string);
        }
    }

    #[test]
    fn test_video_streaming_codec_serde() {
        let tests = vec![
            ("\"H265\"", VideoStreamingCodec::H265),
            ("\"VP8\"", VideoStreamingCodec::Vp8),
            ("\"AV1\"", VideoStreamingCodec::Unspecified),
            ("\"h264\"", VideoStreamingCodec::Unspecified),
        ];

        for (raw, expected_codec) in tests {
            let codec: VideoStreamingCodec = serde_json::from_str(raw).unwrap();
            assert_eq!(codec, expected_codec, "{raw}");
        }
    }
}
