//! Label font loading.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily};

use crate::error::{AppError, AppResult};

/// Name the scene font is registered under.
pub const LABEL_FONT: &str = "scene-label";

/// Family used for shape labels and the config dump.
pub fn label_family() -> FontFamily {
    FontFamily::Name(LABEL_FONT.into())
}

/// Read a font file from disk and check that it parses as TrueType/OpenType.
pub fn read_font(path: &Path) -> AppResult<Vec<u8>> {
    let bytes = fs::read(path).map_err(|source| AppError::FontLoad {
        path: path.to_path_buf(),
        source,
    })?;
    ab_glyph::FontRef::try_from_slice(&bytes).map_err(|source| AppError::InvalidFont {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded font {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

/// Font definitions with `bytes` registered as [`label_family`], keeping the
/// default families for the property panel.
pub fn label_font_definitions(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(LABEL_FONT.to_owned(), Arc::new(FontData::from_owned(bytes)));
    fonts.families.insert(label_family(), vec![LABEL_FONT.to_owned()]);
    fonts
}

/// Register the label font with egui.
pub fn install_label_font(ctx: &egui::Context, bytes: Vec<u8>) {
    ctx.set_fonts(label_font_definitions(bytes));
}
