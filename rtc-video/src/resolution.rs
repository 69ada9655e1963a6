use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolution as it appears on the wire, where either dimension may be
/// missing.
///
/// Used as the input side of a merge: a caller override or a head unit's
/// preferred resolution. A dimension only takes part in a merge if it is
/// present and positive, and width and height are judged independently.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResolution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_height: Option<i32>,
}

impl ImageResolution {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            resolution_width: Some(width),
            resolution_height: Some(height),
        }
    }

    pub fn with_width(mut self, width: i32) -> Self {
        self.resolution_width = Some(width);
        self
    }

    pub fn with_height(mut self, height: i32) -> Self {
        self.resolution_height = Some(height);
        self
    }
}

/// Resolution held by [`VideoStreamingParameters`](crate::VideoStreamingParameters).
/// Both dimensions are always set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    #[serde(rename = "resolutionWidth")]
    pub width: i32,
    #[serde(rename = "resolutionHeight")]
    pub height: i32,
}

pub(crate) const DEFAULT_WIDTH: i32 = 800;
pub(crate) const DEFAULT_HEIGHT: i32 = 480;

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Resolution {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns a copy of `self` with each dimension of `source` that is
    /// present and positive written over it.
    pub fn merged(&self, source: &ImageResolution) -> Self {
        let mut merged = *self;
        if let Some(height) = source.resolution_height.filter(|h| *h > 0) {
            merged.height = height;
        }
        if let Some(width) = source.resolution_width.filter(|w| *w > 0) {
            merged.width = width;
        }
        merged
    }
}

impl From<Resolution> for ImageResolution {
    fn from(resolution: Resolution) -> Self {
        ImageResolution::new(resolution.width, resolution.height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width: {}, height: {}", self.width, self.height)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolution_merged() {
        let base = Resolution::default();
        let tests = vec![
            ("empty", ImageResolution::default(), Resolution::new(800, 480)),
            ("both", ImageResolution::new(1280, 720), Resolution::new(1280, 720)),
            (
                "width only",
                ImageResolution::default().with_width(1024),
                Resolution::new(1024, 480),
            ),
            (
                "invalid height does not block width",
                ImageResolution::new(1024, -1),
                Resolution::new(1024, 480),
            ),
            (
                "zero width does not block height",
                ImageResolution::new(0, 720),
                Resolution::new(800, 720),
            ),
            ("both invalid", ImageResolution::new(-5, 0), Resolution::new(800, 480)),
        ];

        for (name, source, expected) in tests {
            assert_eq!(base.merged(&source), expected, "{name}");
        }
        assert_eq!(base, Resolution::default(), "merged must not mutate self");
    }

    #[test]
    fn test_image_resolution_json() {
        let res: ImageResolution = serde_json::from_str(r#"{"resolutionWidth":1920}"#).unwrap();
        assert_eq!(res.resolution_width, Some(1920));
        assert_eq!(res.resolution_height, None);

        assert_eq!(
            serde_json::to_string(&ImageResolution::default().with_height(720)).unwrap(),
            r#"{"resolutionHeight":720}"#
        );
    }

    #[test]
    fn test_resolution_json() {
        assert_eq!(
            serde_json::to_string(&Resolution::default()).unwrap(),
            r#"{"resolutionWidth":800,"resolutionHeight":480}"#
        );
    }
}
