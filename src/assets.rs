// Resolves logical image names (header photo, ingredient thumbnails) to
// egui textures loaded from the assets directory.

use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Logical name -> displayable image.
pub trait AssetResolver {
    fn resolve(&mut self, ctx: &egui::Context, name: &str) -> Option<egui::TextureHandle>;
}

/// Decode encoded image bytes (png/jpeg) into an egui image.
pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage, AssetError> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        rgba.as_raw(),
    ))
}

fn read_image(path: &Path) -> Result<egui::ColorImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(&bytes)
}

/// Loads `<dir>/<name>.png` once per name. Misses are cached too, so a missing
/// file is reported once and then painted as a placeholder.
pub struct TextureCache {
    dir: PathBuf,
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl TextureCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            textures: HashMap::new(),
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }

    pub fn cached_len(&self) -> usize {
        self.textures.len()
    }
}

impl AssetResolver for TextureCache {
    fn resolve(&mut self, ctx: &egui::Context, name: &str) -> Option<egui::TextureHandle> {
        if let Some(entry) = self.textures.get(name) {
            return entry.clone();
        }
        let path = self.path_for(name);
        let entry = match read_image(&path) {
            Ok(img) => {
                log::debug!("asset loaded: {} ({}x{})", name, img.size[0], img.size[1]);
                Some(ctx.load_texture(name, img, egui::TextureOptions::LINEAR))
            }
            Err(e) => {
                log::warn!("asset '{}' unavailable, using placeholder: {}", name, e);
                None
            }
        };
        self.textures.insert(name.to_string(), entry.clone());
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([242, 96, 113, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn temp_assets_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&p).unwrap();
        p
    }

    #[test]
    fn decodes_png() {
        let img = decode_image(&png_bytes(3, 2)).unwrap();
        assert_eq!(img.size, [3, 2]);
        assert_eq!(img.pixels[0], egui::Color32::from_rgb(242, 96, 113));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_image(b"not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode(_)));
    }

    #[test]
    fn missing_asset_resolves_to_none_and_is_cached() {
        let ctx = egui::Context::default();
        let mut cache = TextureCache::new(temp_assets_dir("recipe_assets_missing"));
        assert!(cache.resolve(&ctx, "no_such_image").is_none());
        assert!(cache.resolve(&ctx, "no_such_image").is_none());
        assert_eq!(cache.cached_len(), 1);
    }

    #[test]
    fn present_asset_becomes_texture() {
        let dir = temp_assets_dir("recipe_assets_present");
        std::fs::write(dir.join("flour.png"), png_bytes(4, 4)).unwrap();
        let ctx = egui::Context::default();
        let mut cache = TextureCache::new(&dir);
        let tex = cache.resolve(&ctx, "flour").expect("texture");
        assert_eq!(tex.size(), [4, 4]);
        let _ = std::fs::remove_dir_all(dir);
    }
}
