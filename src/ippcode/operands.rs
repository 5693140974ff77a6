//! Operand classifiers.
//!
//! Each classifier takes one raw token (empty when the line ran out of
//! words) and either produces a typed [`Operand`] or rejects the token.
use super::ast::{ArgType, Operand};
use super::opcodes::{OperandKind, Slot};
use super::patterns::{self, Literal};

/// Why a token was refused by its classifier.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Rejection {
    /// The line has fewer words than the opcode needs.
    Missing,
    /// The token does not fit the operand's grammar.
    Malformed,
    /// A string literal contains a backslash that is not a `\ddd` escape.
    IllegalEscape,
}

/// Classifies `token` for the given slot.
///
/// An empty token in an optional slot yields `Ok(None)`: the operand is
/// absent and nothing is emitted for it.
pub fn classify(slot: Slot, token: &str) -> Result<Option<Operand>, Rejection> {
    if token.is_empty() {
        return match slot {
            Slot::Optional(_) => Ok(None),
            Slot::Required(_) => Err(Rejection::Missing),
        };
    }

    let operand = match slot.kind() {
        OperandKind::Var => var(token)?,
        OperandKind::Symb => symb(token)?,
        OperandKind::Label => label(token)?,
        OperandKind::Type => type_keyword(token)?,
    };
    Ok(Some(operand))
}

pub fn var(token: &str) -> Result<Operand, Rejection> {
    if patterns::is_var(token) {
        Ok(Operand::new(ArgType::Var, escape(token)))
    } else {
        Err(Rejection::Malformed)
    }
}

/// A variable or a constant of any type.
pub fn symb(token: &str) -> Result<Operand, Rejection> {
    if let Ok(operand) = var(token) {
        return Ok(operand);
    }

    if let Some(payload) = patterns::string_payload(token) {
        if !patterns::has_legal_escapes(payload) {
            return Err(Rejection::IllegalEscape);
        }
        return Ok(Operand::new(ArgType::String, escape(payload)));
    }

    match patterns::literal(token) {
        Some((Literal::Int, value)) => Ok(Operand::new(ArgType::Int, value)),
        Some((Literal::Nil, value)) => Ok(Operand::new(ArgType::Nil, value)),
        Some((Literal::Bool, value)) => Ok(Operand::new(ArgType::Bool, value)),
        None => Err(Rejection::Malformed),
    }
}

pub fn label(token: &str) -> Result<Operand, Rejection> {
    if patterns::is_identifier(token) {
        Ok(Operand::new(ArgType::Label, escape(token)))
    } else {
        Err(Rejection::Malformed)
    }
}

pub fn type_keyword(token: &str) -> Result<Operand, Rejection> {
    if patterns::is_type_keyword(token) {
        Ok(Operand::new(ArgType::Type, token))
    } else {
        Err(Rejection::Malformed)
    }
}

/// Replaces the characters XML reserves with their entities.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(kind: ArgType, value: &str) -> Result<Operand, Rejection> {
        Ok(Operand::new(kind, value))
    }

    #[test]
    fn test_var() {
        for frame in &["GF", "LF", "TF"] {
            let token = format!("{}@counter", frame);
            assert_eq!(var(&token), ok(ArgType::Var, &token));
        }
        assert_eq!(var("GF@a&b"), ok(ArgType::Var, "GF@a&amp;b"));

        for token in &["gf@x", "XF@x", "GF@", "GF@9x", "@x", "x", "int@1", "GF@x y"] {
            assert_eq!(var(token), Err(Rejection::Malformed), "{}", token);
        }
    }

    #[test]
    fn test_symb_variable_first() {
        assert_eq!(symb("LF@string"), ok(ArgType::Var, "LF@string"));
    }

    #[test]
    fn test_symb_literals() {
        assert_eq!(symb("int@42"), ok(ArgType::Int, "42"));
        assert_eq!(symb("int@-0x1A"), ok(ArgType::Int, "-0x1A"));
        assert_eq!(symb("nil@nil"), ok(ArgType::Nil, "nil"));
        assert_eq!(symb("bool@false"), ok(ArgType::Bool, "false"));
        assert_eq!(symb("string@"), ok(ArgType::String, ""));
        assert_eq!(symb("string@hello"), ok(ArgType::String, "hello"));
    }

    #[test]
    fn test_symb_string_escapes() {
        assert_eq!(symb(r"string@a\065b"), ok(ArgType::String, r"a\065b"));
        assert_eq!(symb(r"string@x\032y\010"), ok(ArgType::String, r"x\032y\010"));
        assert_eq!(symb(r"string@a\6b"), Err(Rejection::IllegalEscape));
        assert_eq!(symb(r"string@trailing\"), Err(Rejection::IllegalEscape));
        assert_eq!(symb(r"string@\\065"), Err(Rejection::IllegalEscape));
    }

    #[test]
    fn test_symb_string_output_escaping() {
        assert_eq!(symb("string@a<b>&\"c'"), ok(ArgType::String, "a&lt;b&gt;&amp;&quot;c&apos;"));
        // The entity text introduced by escaping never counts as an escape sequence.
        assert_eq!(symb(r"string@&\038"), ok(ArgType::String, r"&amp;\038"));
    }

    #[test]
    fn test_symb_rejects() {
        let tokens = [
            "int@", "int@x", "bool@yes", "nil@0", "float@1.0", "5", "GF", "label", "String@x",
        ];
        for token in tokens.iter() {
            assert_eq!(symb(token), Err(Rejection::Malformed), "{}", token);
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(label("loop"), ok(ArgType::Label, "loop"));
        assert_eq!(label("&end"), ok(ArgType::Label, "&amp;end"));
        assert_eq!(label("GF@loop"), Err(Rejection::Malformed));
        assert_eq!(label("1st"), Err(Rejection::Malformed));
    }

    #[test]
    fn test_type_keyword() {
        for t in &["int", "string", "bool"] {
            assert_eq!(type_keyword(t), ok(ArgType::Type, t));
        }
        assert_eq!(type_keyword("nil"), Err(Rejection::Malformed));
        assert_eq!(type_keyword("INT"), Err(Rejection::Malformed));
    }

    #[test]
    fn test_classify_missing_and_optional() {
        use OperandKind::*;

        for kind in &[Var, Symb, Label, Type] {
            assert_eq!(classify(Slot::Required(*kind), ""), Err(Rejection::Missing));
        }
        assert_eq!(classify(Slot::Optional(Symb), ""), Ok(None));
    }

    #[test]
    fn test_classify_optional_behaves_like_symb() {
        let tokens = ["int@1", "GF@x", "string@a\\065", "string@\\6", "bool@nope", "nil@nil"];
        for token in tokens.iter() {
            assert_eq!(
                classify(Slot::Optional(OperandKind::Symb), token),
                classify(Slot::Required(OperandKind::Symb), token),
                "{}",
                token
            );
        }
    }

    #[test]
    fn test_classify_dispatches_on_kind() {
        assert_eq!(
            classify(Slot::Required(OperandKind::Type), "bool"),
            Ok(Some(Operand::new(ArgType::Type, "bool")))
        );
        assert_eq!(classify(Slot::Required(OperandKind::Var), "int@1"), Err(Rejection::Malformed));
        assert_eq!(
            classify(Slot::Required(OperandKind::Label), "int"),
            Ok(Some(Operand::new(ArgType::Label, "int")))
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("<&>"), "&lt;&amp;&gt;");
        assert_eq!(escape(""), "");
    }
}
