//! Playback adapter: trait seam plus the kira-backed implementation
mod error;
mod native;
mod trait_def;

pub use error::PlaybackError;
pub use native::{KiraLoader, KiraPlayer};
pub use trait_def::{SoundLoader, SoundPlayer};

#[cfg(test)]
pub(crate) mod fake;

/// Map a linear 0.0 - 1.0 amplitude onto decibels; zero and below mean silence.
pub fn volume_to_decibels(volume: f32) -> f32 {
    let clamped = volume.clamp(0.0, 1.0);
    if clamped <= 0.0 {
        -80.0
    } else {
        20.0 * clamped.log10()
    }
}

#[cfg(test)]
mod tests {
    use super::volume_to_decibels;

    #[test]
    fn volume_boundaries_map_to_silence_and_unity() {
        assert_eq!(volume_to_decibels(0.0), -80.0);
        assert_eq!(volume_to_decibels(-1.0), -80.0);
        assert_eq!(volume_to_decibels(1.0), 0.0);
        assert_eq!(volume_to_decibels(2.0), 0.0);
        assert!((volume_to_decibels(0.5) + 6.0206).abs() < 1e-3);
    }
}
