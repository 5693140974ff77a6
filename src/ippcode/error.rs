use std::fmt;
use std::io;

use super::opcodes::OperandKind;
use super::operands::Rejection;
use super::patterns;

/// Broad classes of failure, each with its own process exit code.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    Input,
    Header,
    Opcode,
    Syntax,
}

impl Category {
    pub fn exit_code(&self) -> i32 {
        match self {
            Category::Input => 11,
            Category::Header => 21,
            Category::Opcode => 22,
            Category::Syntax => 23,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    /// Reading the source failed.
    Io(io::Error),
    /// The first significant line is not the header, or there is none.
    /// `line` is `None` when the input ended first.
    Header { line: Option<usize>, found: String },
    UnknownOpcode { line: usize, opcode: String },
    InvalidArgument {
        line: usize,
        opcode: String,
        role: OperandKind,
        token: String,
        reason: Rejection,
    },
    ExtraOperand { line: usize, opcode: String, token: String },
}

impl Error {
    pub fn category(&self) -> Category {
        match self {
            Error::Io(_) => Category::Input,
            Error::Header { .. } => Category::Header,
            Error::UnknownOpcode { .. } => Category::Opcode,
            Error::InvalidArgument { .. } | Error::ExtraOperand { .. } => Category::Syntax,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "unable to read input: {}", err),
            Error::Header { line: None, .. } => {
                write!(f, "missing header: input ended before `{}`", patterns::HEADER)
            }
            Error::Header { line: Some(line), found } => write!(
                f,
                "invalid header on line {}: expected `{}`, found `{}`",
                line,
                patterns::HEADER,
                found
            ),
            Error::UnknownOpcode { line, opcode } => {
                write!(f, "unknown opcode `{}` on line {}", opcode, line)
            }
            Error::InvalidArgument { line, opcode, role, token, reason } => match reason {
                Rejection::Missing => {
                    write!(f, "missing {} operand for {} on line {}", role, opcode, line)
                }
                Rejection::Malformed => write!(
                    f,
                    "invalid {} operand `{}` for {} on line {}",
                    role, token, opcode, line
                ),
                Rejection::IllegalEscape => write!(
                    f,
                    "invalid escape sequence in string literal `{}` on line {}",
                    token, line
                ),
            },
            Error::ExtraOperand { line, opcode, token } => write!(
                f,
                "unexpected extra operand `{}` for {} on line {}",
                token, opcode, line
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
