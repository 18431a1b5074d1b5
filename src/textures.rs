use std::collections::HashMap;

use macroquad::prelude::*;
use nightcity_layout::TextureSlot;
use tracing::{info, warn};

use crate::config::TextureSettings;

/// Loaded textures by slot. Missing slots render as flat colour.
#[derive(Default)]
pub struct TextureSet {
    textures: HashMap<TextureSlot, Texture2D>,
}

impl TextureSet {
    pub fn get(&self, slot: TextureSlot) -> Option<&Texture2D> {
        self.textures.get(&slot)
    }

    pub fn contains(&self, slot: TextureSlot) -> bool {
        self.textures.contains_key(&slot)
    }
}

/// Lends the office facade to skyscrapers when their own image is missing.
fn apply_skyscraper_fallback<T: Clone>(textures: &mut HashMap<TextureSlot, T>) -> bool {
    if textures.contains_key(&TextureSlot::Skyscraper) {
        return false;
    }
    match textures.get(&TextureSlot::Building).cloned() {
        Some(building) => {
            textures.insert(TextureSlot::Skyscraper, building);
            true
        }
        None => false,
    }
}

/// Loads every slot's image. Failures are logged and leave the slot empty.
pub async fn load_textures(settings: &TextureSettings) -> TextureSet {
    let mut textures = HashMap::new();
    for slot in TextureSlot::ALL {
        let path = settings.path(slot);
        match load_texture(path).await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Linear);
                info!(?slot, path, "Texture loaded");
                textures.insert(slot, texture);
            }
            Err(e) => {
                warn!(?slot, path, error = %e, "Texture not found - using flat colours");
            }
        }
    }

    if apply_skyscraper_fallback(&mut textures) {
        info!("Skyscraper texture failed, using building texture instead");
    }
    TextureSet { textures }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skyscraper_borrows_building() {
        let mut textures = HashMap::from([(TextureSlot::Building, "building")]);
        assert!(apply_skyscraper_fallback(&mut textures));
        assert_eq!(textures.get(&TextureSlot::Skyscraper), Some(&"building"));
    }

    #[test]
    fn test_fallback_keeps_own_texture() {
        let mut textures = HashMap::from([
            (TextureSlot::Building, "building"),
            (TextureSlot::Skyscraper, "glass"),
        ]);
        assert!(!apply_skyscraper_fallback(&mut textures));
        assert_eq!(textures.get(&TextureSlot::Skyscraper), Some(&"glass"));
    }

    #[test]
    fn test_no_fallback_without_building() {
        let mut textures: HashMap<TextureSlot, &str> = HashMap::new();
        assert!(!apply_skyscraper_fallback(&mut textures));
        assert!(textures.is_empty());
    }
}
