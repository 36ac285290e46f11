//! Positional `{n}` substitution.

/// Replace `{0}`, `{1}`, ... tokens with the matching parameter.
///
/// Single left-to-right pass. Tokens with no matching parameter, unclosed
/// braces, and non-numeric tokens are copied through untouched — a malformed
/// template degrades to a literal, it never fails. Single quotes are
/// ordinary characters here, not escape markers as in MessageFormat-style
/// engines; translators should not need escaping rules.
pub fn substitute(template: &str, params: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            out.push(ch);
            continue;
        }

        let mut digits = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                chars.next();
            } else {
                break;
            }
        }

        let closed = chars.peek() == Some(&'}');
        match digits.parse::<usize>() {
            Ok(index) if closed && index < params.len() => {
                chars.next();
                out.push_str(&params[index]);
            }
            _ => {
                // Not a resolvable token; emit what was scanned untouched.
                // The '}' (if any) is copied by the outer loop.
                out.push('{');
                out.push_str(&digits);
            }
        }
    }

    out
}
