//! Text length as the page measures it

/// Length in UTF-16 code units, the unit a browser reports for an input's
/// value. Characters outside the Basic Multilingual Plane count twice.
pub fn text_length(s: &str) -> usize {
    s.encode_utf16().count()
}
