/// Bot avatar loading
use anyhow::{Context, Result};
use eframe::egui;
use std::path::Path;

/// Decodes image bytes into an egui image.
pub fn decode_avatar(bytes: &[u8]) -> Result<egui::ColorImage> {
    let img = image::load_from_memory(bytes).context("Failed to decode avatar image")?;
    let size = [img.width() as usize, img.height() as usize];
    let pixels = img.to_rgba8().into_raw();
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
}

/// Loads the avatar file and uploads it as a texture.
pub fn load_avatar(ctx: &egui::Context, path: &Path) -> Result<egui::TextureHandle> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read avatar {}", path.display()))?;
    let color_image = decode_avatar(&bytes)?;

    Ok(ctx.load_texture("bot_avatar", color_image, egui::TextureOptions::LINEAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_decode_png() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_avatar(bytes.get_ref()).unwrap();
        assert_eq!(decoded.size, [3, 2]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_avatar(b"not an image").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let ctx = egui::Context::default();
        let Err(err) = load_avatar(&ctx, Path::new("does/not/exist.png")) else {
            panic!("expected missing-file error");
        };
        assert!(err.to_string().contains("does/not/exist.png"));
    }
}
