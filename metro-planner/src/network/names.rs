//! Stop name normalization and lookup.

use crate::domain::{Stop, StopId};

/// Normalize a stop name for searching.
///
/// Folds accented Latin letters to their base letter, drops everything that
/// is not an ASCII letter or digit, and lowercases the rest, so
/// `"Châtelet - Les Halles"` becomes `"chateletleshalles"`.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.chars() {
        match fold_accent(c) {
            Some(folded) => out.push_str(folded),
            None if c.is_ascii_alphanumeric() => out.push(c.to_ascii_lowercase()),
            None => {}
        }
    }

    out
}

/// Base letters for the accented characters found in French stop names.
fn fold_accent(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'ç' | 'Ç' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ñ' | 'Ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' | 'Ÿ' => "y",
        'œ' | 'Œ' => "oe",
        'æ' | 'Æ' => "ae",
        _ => return None,
    };
    Some(folded)
}

/// Find stops whose normalized name contains the normalized query.
///
/// Results keep the order of `stops`. A query that normalizes to nothing
/// (e.g. only punctuation) matches every stop.
pub fn search(stops: &[Stop], query: &str) -> Vec<StopId> {
    let needle = normalize(query);
    stops
        .iter()
        .filter(|stop| stop.plain_name.contains(needle.as_str()))
        .map(|stop| stop.id)
        .collect()
}
