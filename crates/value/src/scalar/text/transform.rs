//! String transforms shared by [`Text`](super::Text) and
//! [`Symbol`](crate::Symbol)

/// First character upper-cased, the rest lower-cased
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub(crate) fn swapcase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Capitalize each whitespace-separated word and join with single spaces
pub(crate) fn title_words(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-case everything, then upper-case every letter that follows a
/// non-word character (anything but a letter, digit or `_`)
pub(crate) fn title_boundaries(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for c in s.chars() {
        if at_boundary {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_boundary = !(c.is_alphanumeric() || c == '_');
    }
    out
}

/// Reverse by character
pub(crate) fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// An empty separator splits into characters
pub(crate) fn split<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        s.char_indices()
            .map(|(i, c)| &s[i..i + c.len_utf8()])
            .collect()
    } else {
        s.split(sep).collect()
    }
}

/// `"\n"`-separated, keeping empty lines; `""` is one empty line
pub(crate) fn lines(s: &str) -> Vec<&str> {
    s.split('\n').collect()
}

pub(crate) fn words(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

pub(crate) fn chars(s: &str) -> Vec<&str> {
    split(s, "")
}

/// Replace every occurrence; an empty receiver with an empty pattern stays empty
pub(crate) fn gsub(s: &str, pattern: &str, replacement: &str) -> String {
    if s.is_empty() && pattern.is_empty() {
        return String::new();
    }
    s.replace(pattern, replacement)
}

/// Replace the first occurrence; an empty receiver with an empty pattern stays empty
pub(crate) fn sub(s: &str, pattern: &str, replacement: &str) -> String {
    if s.is_empty() && pattern.is_empty() {
        return String::new();
    }
    s.replacen(pattern, replacement, 1)
}

/// Parse the leading decimal integer (after optional whitespace and sign);
/// `None` if there is none or it overflows
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Parse the leading decimal float: sign, digits, optional fraction and
/// exponent. `None` if no mantissa digit is present.
pub(crate) fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(s.starts_with(['+', '-']));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hELLO wORLD"), "Hello world");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn test_swapcase() {
        assert_eq!(swapcase("Hello World 42"), "hELLO wORLD 42");
    }

    #[test]
    fn test_titles() {
        assert_eq!(title_words("  hello   wORLD  "), "Hello World");
        assert_eq!(title_boundaries("hello-world foo_bar"), "Hello-World Foo_bar");
        assert_eq!(title_boundaries("HELLO"), "Hello");
    }

    #[test]
    fn test_split_variants() {
        assert_eq!(split("a,b,,c", ","), vec!["a", "b", "", "c"]);
        assert_eq!(split("", ","), vec![""]);
        assert_eq!(split("añb", ""), vec!["a", "ñ", "b"]);
        assert!(split("", "").is_empty());
        assert_eq!(lines(""), vec![""]);
        assert_eq!(lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(words("  a \t b\nc "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_gsub_sub() {
        assert_eq!(gsub("banana", "a", "o"), "bonono");
        assert_eq!(sub("banana", "a", "o"), "bonana");
        assert_eq!(gsub("", "", "x"), "");
        assert_eq!(sub("", "", "x"), "");
        assert_eq!(gsub("ab", "", "-"), "-a-b-");
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("42"), Some(42));
        assert_eq!(leading_int("  -17abc"), Some(-17));
        assert_eq!(leading_int("+5"), Some(5));
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int("-"), None);
        assert_eq!(leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("3.25"), Some(3.25));
        assert_eq!(leading_float(" -2.5e3xyz"), Some(-2500.0));
        assert_eq!(leading_float("7."), Some(7.0));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("1e"), Some(1.0));
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float("abc"), None);
    }
}
