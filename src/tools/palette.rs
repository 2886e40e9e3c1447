use crate::config::StickerSpec;

/// The selectable sticker tools, in button order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickerPalette {
    stickers: Vec<StickerSpec>,
}

impl StickerPalette {
    pub fn new(stickers: Vec<StickerSpec>) -> Self {
        Self { stickers }
    }

    pub fn stickers(&self) -> &[StickerSpec] {
        &self.stickers
    }

    pub fn get(&self, index: usize) -> Option<&StickerSpec> {
        self.stickers.get(index)
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }

    /// Add a user-entered sticker. Custom stickers never rotate.
    ///
    /// Any non-empty text is taken as is. Empty input (a cancelled prompt)
    /// is ignored. Returns the index of the new sticker.
    pub fn register_custom(&mut self, glyph: &str) -> Option<usize> {
        if glyph.is_empty() {
            log::debug!("Ignoring empty custom sticker");
            return None;
        }
        log::info!("Registered custom sticker {:?}", glyph);
        self.stickers.push(StickerSpec::new(glyph, false));
        Some(self.stickers.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_glyph_is_stored_verbatim() {
        let mut palette = StickerPalette::default();
        assert_eq!(palette.register_custom(""), None);
        assert!(palette.is_empty());

        assert_eq!(palette.register_custom(" ★ "), Some(0));
        assert_eq!(palette.register_custom("  "), Some(1));
        assert_eq!(palette.get(0), Some(&StickerSpec::new(" ★ ", false)));
        assert_eq!(palette.get(1).map(|s| s.glyph.as_str()), Some("  "));
    }
}
