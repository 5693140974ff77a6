//! The IPPcode23 instruction set: which operands each opcode takes.
//!
//! ```text
//! CREATEFRAME PUSHFRAME POPFRAME RETURN BREAK        ; no operands
//! DEFVAR POPS                                        ; <var>
//! CALL LABEL JUMP                                    ; <label>
//! PUSHS WRITE EXIT DPRINT                            ; <symb>
//! MOVE STRLEN TYPE INT2CHAR                          ; <var> <symb>
//! READ                                               ; <var> <type>
//! ADD SUB MUL IDIV LT GT EQ AND OR                   ; <var> <symb> <symb>
//! CONCAT STRI2INT GETCHAR SETCHAR                    ; <var> <symb> <symb>
//! NOT                                                ; <var> <symb> [<symb>]
//! JUMPIFEQ JUMPIFNEQ                                 ; <label> <symb> <symb>
//! ```
use std::fmt;

/// The grammatical role of an operand.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OperandKind {
    Var,
    Symb,
    Label,
    Type,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OperandKind::Var => write!(f, "<var>"),
            OperandKind::Symb => write!(f, "<symb>"),
            OperandKind::Label => write!(f, "<label>"),
            OperandKind::Type => write!(f, "<type>"),
        }
    }
}

/// One operand position of an opcode.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Slot {
    Required(OperandKind),
    /// May be left out entirely, in which case nothing is emitted for it.
    Optional(OperandKind),
}

impl Slot {
    pub fn kind(&self) -> OperandKind {
        match self {
            Slot::Required(kind) | Slot::Optional(kind) => *kind,
        }
    }
}

use OperandKind::*;
use Slot::*;

const NONE: &[Slot] = &[];
const VAR: &[Slot] = &[Required(Var)];
const LABEL: &[Slot] = &[Required(Label)];
const SYMB: &[Slot] = &[Required(Symb)];
const VAR_SYMB: &[Slot] = &[Required(Var), Required(Symb)];
const VAR_TYPE: &[Slot] = &[Required(Var), Required(Type)];
const VAR_SYMB_SYMB: &[Slot] = &[Required(Var), Required(Symb), Required(Symb)];
const VAR_SYMB_OPT: &[Slot] = &[Required(Var), Required(Symb), Optional(Symb)];
const LABEL_SYMB_SYMB: &[Slot] = &[Required(Label), Required(Symb), Required(Symb)];

/// Looks up the operand layout of an opcode. The name must already be uppercase.
pub fn lookup(opcode: &str) -> Option<&'static [Slot]> {
    let slots = match opcode {
        "CREATEFRAME" | "PUSHFRAME" | "POPFRAME" |
        "RETURN" | "BREAK"                          => NONE,

        "DEFVAR" | "POPS"                           => VAR,

        "CALL" | "LABEL" | "JUMP"                   => LABEL,

        "PUSHS" | "WRITE" | "EXIT" | "DPRINT"       => SYMB,

        "MOVE" | "STRLEN" | "TYPE" | "INT2CHAR"     => VAR_SYMB,

        "READ"                                      => VAR_TYPE,

        "ADD" | "SUB" | "MUL" | "IDIV" |
        "LT"  | "GT"  | "EQ"  | "AND"  | "OR" |
        "CONCAT" | "STRI2INT" |
        "GETCHAR" | "SETCHAR"                       => VAR_SYMB_SYMB,

        "NOT"                                       => VAR_SYMB_OPT,

        "JUMPIFEQ" | "JUMPIFNEQ"                    => LABEL_SYMB_SYMB,

        _ => return None,
    };
    Some(slots)
}
