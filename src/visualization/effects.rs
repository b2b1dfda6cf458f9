//! Post-processing: bloom on the camera and a film-noise overlay

use bevy::asset::RenderAssetUsages;
use bevy::picking::Pickable;
use bevy::post_process::bloom::{Bloom, BloomPrefilter};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SceneConfig;

const NOISE_TEXTURE_SIZE: u32 = 128;

/// Bloom tuned from the scene's threshold and smoothing.
pub fn bloom_settings(scene: &SceneConfig) -> Bloom {
    Bloom {
        prefilter: BloomPrefilter {
            threshold: scene.bloom_threshold.max(0.0),
            threshold_softness: scene.bloom_smoothing.clamp(0.0, 1.0),
        },
        ..Bloom::NATURAL
    }
}

/// Film-noise texture and its random source
#[derive(Resource)]
pub struct FilmNoise {
    pub image: Handle<Image>,
    rng: ChaCha8Rng,
}

/// Fill RGBA texels with random gray, leaving alpha opaque.
pub fn fill_noise<R: Rng + ?Sized>(rng: &mut R, data: &mut [u8]) {
    for texel in data.chunks_exact_mut(4) {
        let v: u8 = rng.r#gen();
        texel[0] = v;
        texel[1] = v;
        texel[2] = v;
        texel[3] = u8::MAX;
    }
}

/// Create the noise texture and a full-screen, click-through UI layer for it.
pub fn spawn_film_noise(
    mut commands: Commands,
    scene: Res<SceneConfig>,
    mut images: ResMut<Assets<Image>>,
) {
    let opacity = scene.noise_opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        debug!("Film noise disabled");
        return;
    }

    let size = Extent3d {
        width: NOISE_TEXTURE_SIZE,
        height: NOISE_TEXTURE_SIZE,
        depth_or_array_layers: 1,
    };
    let mut rng = match scene.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut image = Image::new_fill(
        size,
        TextureDimension::D2,
        &[0, 0, 0, u8::MAX],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    if let Some(data) = image.data.as_mut() {
        fill_noise(&mut rng, data);
    }
    let handle = images.add(image);

    commands.spawn((
        ImageNode::new(handle.clone()).with_color(Color::srgba(1.0, 1.0, 1.0, opacity)),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        ZIndex(-1),
        Pickable::IGNORE,
        Name::new("Film noise"),
    ));
    commands.insert_resource(FilmNoise { image: handle, rng });
}

/// Re-randomize the noise texture every frame.
pub fn refresh_film_noise(noise: Option<ResMut<FilmNoise>>, mut images: ResMut<Assets<Image>>) {
    let Some(mut noise) = noise else { return };
    let FilmNoise { image, rng } = &mut *noise;
    let Some(image) = images.get_mut(&*image) else {
        return;
    };
    if let Some(data) = image.data.as_mut() {
        fill_noise(rng, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_noise_is_gray_and_opaque() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut data = vec![0u8; 64 * 4];
        fill_noise(&mut rng, &mut data);

        for texel in data.chunks_exact(4) {
            assert_eq!(texel[0], texel[1]);
            assert_eq!(texel[1], texel[2]);
            assert_eq!(texel[3], u8::MAX);
        }
        assert!(data.chunks_exact(4).any(|t| t[0] != data[0]));
    }

    #[test]
    fn test_bloom_follows_config() {
        let scene = SceneConfig::default();
        let bloom = bloom_settings(&scene);
        assert_eq!(bloom.prefilter.threshold, 0.0);
        assert_eq!(bloom.prefilter.threshold_softness, 0.9);

        let loud = SceneConfig {
            bloom_threshold: -3.0,
            bloom_smoothing: 4.0,
            ..default()
        };
        let bloom = bloom_settings(&loud);
        assert_eq!(bloom.prefilter.threshold, 0.0);
        assert_eq!(bloom.prefilter.threshold_softness, 1.0);
    }
}
