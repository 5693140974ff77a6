//! The IPPcode23 front-end checks that a source file is lexically and
//! syntactically well formed and turns it into a program tree for the
//! XML writer.
//!
//! It reads the source one line at a time, splits each line into an opcode
//! and its operand words, and checks the words against the operand layout
//! of the opcode. No semantic checks are made.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod opcodes;
pub mod operands;
pub mod parser;
pub mod patterns;
pub mod xml;
