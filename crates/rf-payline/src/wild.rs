//! Wild symbol detection

/// Reel icon identifier
pub type SymbolId = u32;

/// Mark which positions of a line hold a wild symbol.
///
/// The mask is positionally aligned with `line`. An empty `wild_ids`
/// yields an all-`false` mask.
pub fn mark_wilds(line: &[SymbolId], wild_ids: &[SymbolId]) -> Vec<bool> {
    line.iter().map(|symbol| wild_ids.contains(symbol)).collect()
}

/// Check if any symbol in the line is wild
pub fn has_any_wild(line: &[SymbolId], wild_ids: &[SymbolId]) -> bool {
    line.iter().any(|symbol| wild_ids.contains(symbol))
}

/// Integer form of [`has_any_wild`] as written into result codes (`1` / `0`)
pub fn wild_flag(line: &[SymbolId], wild_ids: &[SymbolId]) -> u8 {
    u8::from(has_any_wild(line, wild_ids))
}
