use serde::{Deserialize, Serialize};

/// One selectable sticker in the palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerDef {
    pub symbol: String,
}

impl StickerDef {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

pub fn starter_stickers() -> Vec<StickerDef> {
    ["🌸", "🌿", "🌈"].into_iter().map(StickerDef::new).collect()
}

/// Ordered, growable list of stickers.
///
/// Symbols are taken as given: empty, long and duplicate symbols are all kept.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPalette {
    stickers: Vec<StickerDef>,
}

impl Default for StickerPalette {
    fn default() -> Self {
        Self::new(starter_stickers())
    }
}

impl StickerPalette {
    pub fn new(stickers: Vec<StickerDef>) -> Self {
        Self { stickers }
    }

    /// Append a sticker and return its index
    pub fn add(&mut self, symbol: impl Into<String>) -> usize {
        self.stickers.push(StickerDef::new(symbol));
        self.stickers.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&StickerDef> {
        self.stickers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StickerDef> + '_ {
        self.stickers.iter()
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_palette() {
        let palette = StickerPalette::default();
        let symbols: Vec<_> = palette.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["🌸", "🌿", "🌈"]);
    }

    #[test]
    fn test_add_accepts_anything() {
        let mut palette = StickerPalette::default();
        assert_eq!(palette.add("🍊"), 3);
        assert_eq!(palette.add(""), 4);
        assert_eq!(palette.add("🍊"), 5);
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.get(4).map(|s| s.symbol.as_str()), Some(""));
    }
}
