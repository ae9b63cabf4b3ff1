//! Icon name and class-list helpers

/// `AlarmClock` -> `alarm-clock`
///
/// A hyphen goes between a lowercase letter or digit and the uppercase letter
/// that follows it; everything is lowercased.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if let Some(p) = prev {
                if p.is_ascii_lowercase() || p.is_ascii_digit() {
                    out.push('-');
                }
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
        prev = Some(c);
    }

    out
}

/// `alarm-clock` -> `AlarmClock`
///
/// Separators (`-`, `_`, whitespace) are dropped and the next character is
/// uppercased. Lossy: `arrow-up-1-0` becomes `ArrowUp10`.
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;

    for c in name.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Join class lists, trimming entries and dropping empties and duplicates
///
/// Each input may itself hold several space-separated classes. The first
/// occurrence of a class wins.
pub fn merge_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for list in classes {
        for class in list.split_whitespace() {
            if !seen.contains(&class) {
                seen.push(class);
            }
        }
    }
    seen.join(" ")
}
