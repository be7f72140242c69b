//! fontdb-backed [`FontSource`] over the operating system's fonts.

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use fontdb::{Database, FaceInfo, Style, Weight};
use parking_lot::Mutex;

use crate::{FontError, FontName, FontSource};

/// The system font catalog.
///
/// Faces are discovered once at construction (system fonts plus any extra
/// directories) and exposed as (family, style) pairs. Loading a font
/// resolves it back to a face and touches its data; loaded fonts are
/// remembered so repeated loads are no-ops.
pub struct SystemFonts {
    db: Database,
    loaded: Mutex<HashSet<FontName>>,
}

impl SystemFonts {
    /// Build the catalog.
    ///
    /// # Arguments
    /// * `load_system` - Include fonts installed on the operating system.
    /// * `font_dirs` - Extra directories scanned recursively for font files.
    pub fn new(load_system: bool, font_dirs: &[PathBuf]) -> Self {
        let mut db = Database::new();
        if load_system {
            db.load_system_fonts();
            log::info!("Loaded {} system font faces", db.len());
        }
        for dir in font_dirs {
            let before = db.len();
            db.load_fonts_dir(dir);
            log::info!(
                "Loaded {} font faces from {}",
                db.len() - before,
                dir.display()
            );
        }
        Self {
            db,
            loaded: Mutex::new(HashSet::new()),
        }
    }

    /// The (family, style) name a face is listed under.
    ///
    /// Uses the face's first family name; faces without one are skipped.
    fn face_font_name(face: &FaceInfo) -> Option<FontName> {
        let family = face.families.first().map(|(name, _)| name.clone())?;
        Some(FontName {
            family,
            style: style_name(face.weight, face.style),
        })
    }

    fn find_face(&self, font: &FontName) -> Option<fontdb::ID> {
        self.db
            .faces()
            .find(|face| Self::face_font_name(face).is_some_and(|name| name == *font))
            .map(|face| face.id)
    }
}

impl FontSource for SystemFonts {
    async fn available_fonts(&self) -> Result<Vec<FontName>, FontError> {
        let mut names: BTreeSet<FontName> = BTreeSet::new();
        for face in self.db.faces() {
            if let Some(name) = Self::face_font_name(face) {
                names.insert(name);
            }
        }
        Ok(names.into_iter().collect())
    }

    async fn load_font(&self, font: &FontName) -> Result<(), FontError> {
        if self.loaded.lock().contains(font) {
            return Ok(());
        }
        let id = self
            .find_face(font)
            .ok_or_else(|| FontError::LoadFailed(font.clone()))?;
        // Touch the face data so lazily mapped sources are actually read.
        let bytes = self
            .db
            .with_face_data(id, |data, _| data.len())
            .ok_or_else(|| FontError::LoadFailed(font.clone()))?;
        log::debug!("Loaded font {font} ({bytes} bytes)");
        self.loaded.lock().insert(font.clone());
        Ok(())
    }
}

/// Human style name for a weight/slant pair, e.g. `"Regular"`, `"Bold"`,
/// `"SemiBold Italic"`.
///
/// Listing and loading both go through this mapping, so any font the
/// catalog reports can be loaded back by its reported (family, style).
pub fn style_name(weight: Weight, slant: Style) -> String {
    let weight_label = weight_label(weight);
    match slant {
        Style::Normal => weight_label.to_string(),
        Style::Italic if weight == Weight::NORMAL => "Italic".to_string(),
        Style::Italic => format!("{weight_label} Italic"),
        Style::Oblique if weight == Weight::NORMAL => "Oblique".to_string(),
        Style::Oblique => format!("{weight_label} Oblique"),
    }
}

fn weight_label(weight: Weight) -> &'static str {
    match weight {
        Weight::THIN => "Thin",
        Weight::EXTRA_LIGHT => "ExtraLight",
        Weight::LIGHT => "Light",
        Weight::NORMAL => "Regular",
        Weight::MEDIUM => "Medium",
        Weight::SEMIBOLD => "SemiBold",
        Weight::BOLD => "Bold",
        Weight::EXTRA_BOLD => "ExtraBold",
        Weight::BLACK => "Black",
        // Non-standard weights bucket to the nearest common label.
        Weight(w) if w < 400 => "Light",
        Weight(w) if w < 600 => "Regular",
        Weight(w) if w < 800 => "Bold",
        Weight(_) => "Black",
    }
}
