/// Placeholder the report template expects the JSON table under.
pub const TABLE_JSON_PLACEHOLDER: &str = "table_json";

/// Substitute `$table_json` / `${table_json}` in `template` with `table_json`.
///
/// Lenient in the way the report templates rely on: `$$` collapses to `$`,
/// any other `$name`, `${...}` or lone `$` passes through unchanged.
pub fn render_template(template: &str, table_json: &str) -> String {
    substitute(template, TABLE_JSON_PLACEHOLDER, table_json)
}

pub fn substitute(template: &str, key: &str, value: &str) -> String {
    let mut out = String::with_capacity(template.len() + value.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('$') {
            out.push('$');
            rest = after;
            continue;
        }

        if let Some(braced) = tail.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                if &braced[..end] == key {
                    out.push_str(value);
                    rest = &braced[end + 1..];
                    continue;
                }
            }
            out.push('$');
            rest = tail;
            continue;
        }

        let ident_len = identifier_len(tail);
        if ident_len > 0 && &tail[..ident_len] == key {
            out.push_str(value);
        } else {
            out.push('$');
            out.push_str(&tail[..ident_len]);
        }
        rest = &tail[ident_len..];
    }

    out.push_str(rest);
    out
}

fn identifier_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return 0,
    }
    chars
        .find(|(_, c)| !(*c == '_' || c.is_ascii_alphanumeric()))
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
