// src/core/js.rs
//
// Just enough JavaScript to read a `var data = { … };` declaration out of an
// inline script: a token scanner over the whole script source, then a
// recursive-descent walk of the literal subset (object / array / string /
// number / null). Anything outside that subset is rejected, not evaluated.

use indexmap::IndexMap;

use crate::error::ScrapeError;

/// Host-side rendition of a script literal. Objects keep source key order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Object(IndexMap<String, Value>),
    Array(Vec<Value>),
    Str(String),
    Int(i64),
    Float(f64),
    Null,
}

impl Value {
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Null => "null",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Str(String),   // quotes stripped, escapes resolved
    Num(String),   // raw text; converted during the literal walk
    Punct(char),
}

/// Scan the declaration list of a script body for `var|let|const <name> = …`
/// and convert the initializer literal. Returns `Ok(None)` when the script
/// declares no such variable; tokenizer failures are fatal for the body.
pub fn extract_var_literal(script: &str, name: &str) -> Result<Option<Value>, ScrapeError> {
    let toks = tokenize(script)?;

    let mut i = 0usize;
    while i + 2 < toks.len() {
        if let Token::Ident(kw) = &toks[i] {
            let is_decl = matches!(kw.as_str(), "var" | "let" | "const");
            if is_decl
                && matches!(&toks[i + 1], Token::Ident(id) if id == name)
                && toks[i + 2] == Token::Punct('=')
            {
                let mut walker = Walker { toks: &toks, pos: i + 3 };
                return walker.value().map(Some);
            }
        }
        i += 1;
    }
    Ok(None)
}

/* ---------- token scanner ---------- */

fn tokenize(src: &str) -> Result<Vec<Token>, ScrapeError> {
    let bytes = src.as_bytes();
    let n = bytes.len();
    let mut toks = Vec::new();
    let mut i = 0usize;

    while i < n {
        let c = bytes[i];
        match c {
            b' ' | b'\t' | b'\r' | b'\n' => i += 1,

            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < n && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let close = src[i + 2..]
                    .find("*/")
                    .ok_or_else(|| ScrapeError::ScriptParse(s!("unterminated block comment")))?;
                i += 2 + close + 2;
            }

            b'"' | b'\'' => {
                let (text, next) = scan_string(src, i, c)?;
                toks.push(Token::Str(text));
                i = next;
            }

            b'0'..=b'9' => {
                let start = i;
                i += 1;
                while i < n {
                    match bytes[i] {
                        b'0'..=b'9' | b'.' | b'a'..=b'z' | b'A'..=b'Z' => i += 1,
                        // exponent sign, only directly after e/E
                        b'+' | b'-' if matches!(bytes[i - 1], b'e' | b'E') => i += 1,
                        _ => break,
                    }
                }
                toks.push(Token::Num(s!(&src[start..i])));
            }

            _ if c == b'_' || c == b'$' || c.is_ascii_alphabetic() => {
                let start = i;
                i += 1;
                while i < n {
                    let c = bytes[i];
                    if c == b'_' || c == b'$' || c.is_ascii_alphanumeric() {
                        i += 1;
                    } else {
                        break;
                    }
                }
                toks.push(Token::Ident(s!(&src[start..i])));
            }

            _ => {
                // Punctuation and anything we don't recognize; the literal
                // walk rejects what it can't use.
                toks.push(Token::Punct(c as char));
                i += 1;
            }
        }
    }

    Ok(toks)
}

/// Scan a quoted string starting at `open`. Returns the unescaped content and
/// the index just past the closing quote.
fn scan_string(src: &str, open: usize, quote: u8) -> Result<(String, usize), ScrapeError> {
    let bytes = src.as_bytes();
    let n = bytes.len();
    let mut out = String::new();
    let mut i = open + 1;

    while i < n {
        match bytes[i] {
            b'\\' => {
                let esc = *bytes
                    .get(i + 1)
                    .ok_or_else(|| ScrapeError::ScriptParse(s!("unterminated string literal")))?;
                out.push(match esc {
                    b'n' => '\n',
                    b't' => '\t',
                    b'r' => '\r',
                    other => other as char,
                });
                i += 2;
            }
            c if c == quote => return Ok((out, i + 1)),
            b'\n' => {
                return Err(ScrapeError::ScriptParse(s!("unterminated string literal")));
            }
            _ => {
                // keep multi-byte chars intact
                let ch = src[i..].chars().next().unwrap_or('\u{FFFD}');
                out.push(ch);
                i += ch.len_utf8();
            }
        }
    }

    Err(ScrapeError::ScriptParse(s!("unterminated string literal")))
}

/* ---------- literal walk ---------- */

struct Walker<'a> {
    toks: &'a [Token],
    pos: usize,
}

impl<'a> Walker<'a> {
    fn next(&mut self) -> Result<&'a Token, ScrapeError> {
        let t = self
            .toks
            .get(self.pos)
            .ok_or_else(|| ScrapeError::MalformedLiteral(s!("unexpected end of script")))?;
        self.pos += 1;
        Ok(t)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.toks.get(self.pos)
    }

    fn value(&mut self) -> Result<Value, ScrapeError> {
        match self.next()? {
            Token::Punct('{') => self.object(),
            Token::Punct('[') => self.array(),
            Token::Str(text) => Ok(Value::Str(text.clone())),
            Token::Num(raw) => number(raw),
            Token::Ident(id) if id == "null" => Ok(Value::Null),
            other => Err(ScrapeError::MalformedLiteral(format!(
                "unsupported literal kind at {:?}",
                other
            ))),
        }
    }

    // '{' already consumed
    fn object(&mut self) -> Result<Value, ScrapeError> {
        let mut map = IndexMap::new();
        loop {
            if self.peek() == Some(&Token::Punct('}')) {
                self.pos += 1;
                return Ok(Value::Object(map));
            }

            // Keys should always be string literals
            let key = match self.next()? {
                Token::Str(text) => text.clone(),
                other => {
                    return Err(ScrapeError::MalformedLiteral(format!(
                        "object key must be a string literal, got {:?}",
                        other
                    )));
                }
            };
            match self.next()? {
                Token::Punct(':') => {}
                other => {
                    return Err(ScrapeError::MalformedLiteral(format!(
                        "expected `:` after object key, got {:?}",
                        other
                    )));
                }
            }
            let val = self.value()?;
            map.insert(key, val);

            match self.next()? {
                Token::Punct(',') => {} // allows a trailing comma before '}'
                Token::Punct('}') => return Ok(Value::Object(map)),
                other => {
                    return Err(ScrapeError::MalformedLiteral(format!(
                        "expected `,` or `}}` in object, got {:?}",
                        other
                    )));
                }
            }
        }
    }

    // '[' already consumed. Every element must itself be an object literal;
    // the occupancy payload never nests anything else in arrays.
    fn array(&mut self) -> Result<Value, ScrapeError> {
        let mut items = Vec::new();
        loop {
            if self.peek() == Some(&Token::Punct(']')) {
                self.pos += 1;
                return Ok(Value::Array(items));
            }

            let item = self.value()?;
            if !matches!(item, Value::Object(_)) {
                return Err(ScrapeError::MalformedLiteral(format!(
                    "array element must be an object literal, got {}",
                    item.type_name()
                )));
            }
            items.push(item);

            match self.next()? {
                Token::Punct(',') => {}
                Token::Punct(']') => return Ok(Value::Array(items)),
                other => {
                    return Err(ScrapeError::MalformedLiteral(format!(
                        "expected `,` or `]` in array, got {:?}",
                        other
                    )));
                }
            }
        }
    }
}

/// Integer if the literal has no fractional/exponent form, float otherwise.
/// The literal's own text is truth; no unit or range coercion.
fn number(raw: &str) -> Result<Value, ScrapeError> {
    let is_float = raw.contains(['.', 'e', 'E']);
    let parsed = if is_float {
        raw.parse::<f64>().map(Value::Float).ok()
    } else {
        raw.parse::<i64>().map(Value::Int).ok()
    };
    parsed.ok_or_else(|| ScrapeError::MalformedLiteral(format!("invalid number literal `{raw}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(script: &str) -> Result<Option<Value>, ScrapeError> {
        extract_var_literal(script, "data")
    }

    #[test]
    fn extracts_flat_object() {
        let v = extract(r#"var data = {"a": 1, "b": "two", "c": null};"#)
            .unwrap()
            .unwrap();
        let map = v.as_object().unwrap();
        assert_eq!(map["a"], Value::Int(1));
        assert_eq!(map["b"], Value::Str(s!("two")));
        assert_eq!(map["c"], Value::Null);
    }

    #[test]
    fn preserves_key_order() {
        let v = extract(r#"var data = {"z": 1, "a": 2, "m": 3};"#).unwrap().unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn nested_objects_and_floats() {
        let v = extract(r#"var data = {"AAA": {"capacity": 120, "ratio": 49.5}};"#)
            .unwrap()
            .unwrap();
        let inner = v.as_object().unwrap()["AAA"].as_object().unwrap();
        assert_eq!(inner["capacity"], Value::Int(120));
        assert_eq!(inner["ratio"], Value::Float(49.5));
    }

    #[test]
    fn single_quoted_strings_and_comments() {
        let script = "
            // counter state
            var data = {'name': 'The Reach', /* note */ 'n': 2};
        ";
        let v = extract(script).unwrap().unwrap();
        let map = v.as_object().unwrap();
        assert_eq!(map["name"], Value::Str(s!("The Reach")));
        assert_eq!(map["n"], Value::Int(2));
    }

    #[test]
    fn array_of_objects_ok() {
        let v = extract(r#"var data = {"rooms": [{"a": 1}, {"b": 2}]};"#).unwrap().unwrap();
        match &v.as_object().unwrap()["rooms"] {
            Value::Array(items) => assert_eq!(items.len(), 2),
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn array_of_scalars_rejected() {
        let err = extract(r#"var data = {"xs": [1, 2]};"#).unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedLiteral(_)), "{err}");
    }

    #[test]
    fn identifier_key_rejected() {
        let err = extract(r#"var data = {bare: 1};"#).unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedLiteral(_)), "{err}");
    }

    #[test]
    fn boolean_literal_rejected() {
        let err = extract(r#"var data = {"open": true};"#).unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedLiteral(_)), "{err}");
    }

    #[test]
    fn missing_declaration_is_none() {
        assert_eq!(extract("var other = {};").unwrap(), None);
        assert_eq!(extract("$(function() {});").unwrap(), None);
    }

    #[test]
    fn let_and_const_also_match() {
        assert!(extract(r#"let data = {"a": 1};"#).unwrap().is_some());
        assert!(extract(r#"const data = {"a": 1};"#).unwrap().is_some());
    }

    #[test]
    fn unterminated_string_is_parse_error() {
        let err = extract("var data = {\"a\": \"oops};").unwrap_err();
        assert!(matches!(err, ScrapeError::ScriptParse(_)), "{err}");
    }

    #[test]
    fn string_escapes_resolved() {
        let v = extract(r#"var data = {"a": "line\none \"q\""};"#).unwrap().unwrap();
        assert_eq!(v.as_object().unwrap()["a"], Value::Str(s!("line\none \"q\"")));
    }

    #[test]
    fn surrounding_script_noise_ignored() {
        let script = r#"
            window.onload = doThings;
            var data = {"A": {"n": 1}};
            refreshCounter(data);
        "#;
        let v = extract(script).unwrap().unwrap();
        assert!(v.as_object().unwrap().contains_key("A"));
    }
}
