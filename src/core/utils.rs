//! String transformation utilities for code generation

/// Makes descriptive text safe to embed inside a double-quoted string literal.
///
/// Every line break becomes a single space and every double quote that is not
/// already escaped gets a backslash. A trailing unpaired backslash is doubled
/// so it cannot swallow the closing quote of the literal. Applying the
/// function twice gives the same result as applying it once.
///
/// # Examples
/// ```
/// use openapi_mcp_generator::core::utils::sanitize_description;
///
/// assert_eq!(sanitize_description("a\nb"), "a b");
/// assert_eq!(sanitize_description(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(sanitize_description(""), "");
/// ```
pub fn sanitize_description(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut backslashes = 0usize;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                // \r\n counts as one line break
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
                backslashes = 0;
            }
            '\n' => {
                out.push(' ');
                backslashes = 0;
            }
            '"' => {
                if backslashes % 2 == 0 {
                    out.push('\\');
                }
                out.push('"');
                backslashes = 0;
            }
            '\\' => {
                out.push('\\');
                backslashes += 1;
            }
            other => {
                out.push(other);
                backslashes = 0;
            }
        }
    }

    if backslashes % 2 == 1 {
        out.push('\\');
    }
    out
}

/// Lower-cases `title` and replaces each character outside `[a-z0-9]` with `-`.
///
/// # Examples
/// ```
/// use openapi_mcp_generator::core::utils::slugify;
///
/// assert_eq!(slugify("My Test API"), "my-test-api");
/// assert_eq!(slugify("ETAPI"), "etapi");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Turns an arbitrary name into a Python identifier fragment by replacing
/// every character outside `[A-Za-z0-9_]` with `_`.
pub fn to_python_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Escapes text for the body of a Python `"""` string literal so it reads
/// back unchanged: backslashes and double quotes get a backslash.
pub fn escape_python_literal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == '\\' || ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Doubles `{` and `}` so text is literal inside a Python f-string
pub fn escape_fstring_braces(input: &str) -> String {
    input.replace('{', "{{").replace('}', "}}")
}
