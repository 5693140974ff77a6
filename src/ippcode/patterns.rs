//! Lexical grammar of IPPcode23 operands.
//!
//! Every pattern is anchored, so a match always covers the whole token.
use once_cell::sync::Lazy;
use regex::Regex;

/// The marker that must open every source file (compared case-insensitively).
pub const HEADER: &str = ".IPPcode23";

/// Value of the `language` attribute on the output root.
pub const LANGUAGE: &str = "IPPcode23";

const IDENT: &str = r"[A-Za-z_$&%*!?\-][A-Za-z0-9_$&%*!?\-]*";

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)\.IPPcode23$").unwrap());

static LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^{}$", IDENT)).unwrap());

static VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:GF|LF|TF)@{}$", IDENT)).unwrap());

static STRING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^string@(?P<payload>.*)$").unwrap());

// Non-string literals, tried in this order: int, nil, bool.
static INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^int@(?P<value>[+-]?(?:[0-9]+|(?i:0x[0-9a-f]+)))$").unwrap());
static NIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^nil@(?P<value>nil)$").unwrap());
static BOOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^bool@(?P<value>true|false)$").unwrap());

static TYPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:int|string|bool)$").unwrap());

static BACKSLASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\").unwrap());
static ESCAPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\[0-9]{3}").unwrap());

/// The literal tag of a non-string constant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Literal {
    Int,
    Nil,
    Bool,
}

pub fn is_header(line: &str) -> bool {
    HEADER_RE.is_match(line)
}

/// `true` for a bare identifier, i.e. a label or the name part of a variable.
pub fn is_identifier(token: &str) -> bool {
    LABEL_RE.is_match(token)
}

/// `true` for a frame-qualified variable such as `GF@counter`.
pub fn is_var(token: &str) -> bool {
    VAR_RE.is_match(token)
}

pub fn is_type_keyword(token: &str) -> bool {
    TYPE_RE.is_match(token)
}

/// Returns the raw payload of a `string@...` token.
pub fn string_payload(token: &str) -> Option<&str> {
    STRING_RE
        .captures(token)
        .and_then(|caps| caps.name("payload"))
        .map(|m| m.as_str())
}

/// Matches an int, nil or bool literal and returns its tag and value text.
pub fn literal(token: &str) -> Option<(Literal, &str)> {
    let table: [(&Regex, Literal); 3] = [
        (&INT_RE, Literal::Int),
        (&NIL_RE, Literal::Nil),
        (&BOOL_RE, Literal::Bool),
    ];

    table.iter().find_map(|(re, tag)| {
        re.captures(token)
            .and_then(|caps| caps.name("value"))
            .map(|m| (*tag, m.as_str()))
    })
}

/// A string payload is legal when every backslash starts a `\ddd` escape.
pub fn has_legal_escapes(payload: &str) -> bool {
    BACKSLASH_RE.find_iter(payload).count() == ESCAPE_RE.find_iter(payload).count()
}
