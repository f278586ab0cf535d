/// Normalize an id for matching: trimmed, lowercase, with spaces and
/// underscores folded to hyphens and runs of hyphens collapsed.
pub fn normalize_id(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.trim().chars() {
        let c = match c {
            ' ' | '_' | '\t' => '-',
            c => c.to_ascii_lowercase(),
        };
        if c == '-' && (out.is_empty() || out.ends_with('-')) { continue }
        out.push(c);
    }
    while out.ends_with('-') { out.pop(); }
    out
}

/// Turn a display name into an id slug: lowercase ASCII alphanumerics
/// separated by single hyphens ("Ikeja G.R.A." -> "ikeja-g-r-a").
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') { out.pop(); }
    out
}

/// Display name for a raw id: hyphens become spaces, each word title-cased
/// ("eti-osa" -> "Eti Osa"). Only ever called on raw ids.
pub fn format_name(raw_id: &str) -> String {
    raw_id
        .split(|c: char| c == '-' || c == '_' || c == ' ')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_hyphenated() {
        assert_eq!(format_name("eti-osa"), "Eti Osa");
        assert_eq!(format_name("federal-capital-territory"), "Federal Capital Territory");
        assert_eq!(format_name("ikeja"), "Ikeja");
        assert_eq!(format_name(""), "");
    }

    #[test]
    fn format_is_stable_on_its_output() {
        for id in ["lagos", "ajeromi-ifelodun", "oke-ira"] {
            let once = format_name(id);
            assert_eq!(format_name(&once), once);
        }
    }

    #[test]
    fn normalize_matches_loose_input() {
        assert_eq!(normalize_id("  Eti Osa "), "eti-osa");
        assert_eq!(normalize_id("ETI_OSA"), "eti-osa");
        assert_eq!(normalize_id("eti--osa-"), "eti-osa");
    }

    #[test]
    fn slug_from_display_name() {
        assert_eq!(slugify("Ikeja G.R.A."), "ikeja-g-r-a");
        assert_eq!(slugify("Port Harcourt"), "port-harcourt");
        assert_eq!(slugify("  "), "");
    }
}
