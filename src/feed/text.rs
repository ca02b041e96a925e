//! Headline cleanup: markup tags and the HTML entities the upstream emits.

/// Entities observed in Naver search titles. Decoded after tag stripping.
const ENTITIES: &[(&str, &str)] = &[
    ("&quot;", "\""),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&nbsp;", " "),
];

/// Strip `<b>`-style tags, decode the known entity set, and trim.
/// An unterminated `<` is left in place rather than swallowing the tail.
pub(crate) fn clean_title(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);

    for (entity, plain) in ENTITIES {
        if out.contains(*entity) {
            out = out.replace(*entity, *plain);
        }
    }
    out.trim().to_string()
}
