use ahash::AHashSet;

use crate::font::FontName;
use crate::scene::HostError;

/// Fonts known to the in-memory host.
///
/// An open book treats every requested font as installed; a closed one only
/// the fonts it was built with.
pub struct FontBook {
    available: Option<AHashSet<FontName>>,
    loaded: AHashSet<FontName>,
}

impl FontBook {
    pub fn open() -> Self {
        Self {
            available: None,
            loaded: AHashSet::new(),
        }
    }

    pub fn with_fonts(fonts: impl IntoIterator<Item = FontName>) -> Self {
        Self {
            available: Some(fonts.into_iter().collect()),
            loaded: AHashSet::new(),
        }
    }

    pub fn is_available(&self, font: &FontName) -> bool {
        self.available
            .as_ref()
            .map_or(true, |available| available.contains(font))
    }

    pub fn is_loaded(&self, font: &FontName) -> bool {
        self.loaded.contains(font)
    }

    /// Loading the same font again is a no-op.
    pub fn load(&mut self, font: &FontName) -> Result<(), HostError> {
        if self.loaded.contains(font) {
            return Ok(());
        }

        if !self.is_available(font) {
            return Err(HostError::FontUnavailable(font.clone()));
        }

        self.loaded.insert(font.clone());

        Ok(())
    }

    pub fn loaded_len(&self) -> usize {
        self.loaded.len()
    }
}

impl Default for FontBook {
    fn default() -> Self {
        Self::open()
    }
}
