// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::CardTemplate;

/// The playground catalog shipped with the portfolio site.
///
/// Nine generative-art experiments; each has a still for the grid and a
/// high-resolution companion video for the focus overlay.
#[must_use]
pub fn portfolio_catalog() -> Vec<CardTemplate> {
    vec![
        CardTemplate::with_video(
            "playground1.png",
            "playground1.mov",
            "GENUARY WITHOUT A FONT",
            "Generative Cityscape in P5JS",
        ),
        CardTemplate::with_video(
            "playground2.png",
            "playground2.mp4",
            "BOOLEAN ALGEBRA",
            "Algorithmic Geometry Study",
        ),
        CardTemplate::with_video(
            "playground3.png",
            "playground3.mp4",
            "ASCII VIDEO ENCODING",
            "Python Video Encoding",
        ),
        CardTemplate::with_video(
            "playground4.png",
            "playground4.mp4",
            "FIBONACCI SEQUENCE",
            "Audio Reactive Golden Spiral in P5JS",
        ),
        CardTemplate::with_video(
            "playground5.png",
            "playground5.mp4",
            "METROPOLIS",
            "Generative Cityscape in P5JS",
        ),
        CardTemplate::with_video(
            "playground6.png",
            "playground6.mp4",
            "LOWRES",
            "Audio Reactive Low Resolution in P5JS",
        ),
        CardTemplate::with_video(
            "playground7.png",
            "playground7.mp4",
            "NOTHING POINT",
            "Fluid Simulation Concept",
        ),
        CardTemplate::with_video(
            "playground8.png",
            "playground8.mp4",
            "FLUX",
            "Noise Field Visualization",
        ),
        CardTemplate::with_video(
            "playground9.png",
            "playground9.mp4",
            "ECHO",
            "Recursive Pattern Echo",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaKind;

    #[test]
    fn catalog_has_nine_video_backed_stills() {
        let catalog = portfolio_catalog();
        assert_eq!(catalog.len(), 9);
        for template in &catalog {
            assert_eq!(template.media_kind(), MediaKind::Image);
            assert!(template.video_filename.is_some());
        }
    }
}
