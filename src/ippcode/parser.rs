//! The Parser module reads IPPcode23 source line by line, checks the
//! header and every instruction, and builds the program tree.
//!
//! Parsing stops at the first error; nothing is returned for a partially
//! valid file.
use std::io::{BufRead, Lines};
use std::iter::Enumerate;

use super::ast::{Builder, Program};
use super::error::Error;
use super::lexer::{self, Line};
use super::opcodes;
use super::operands;
use super::patterns;

pub struct Parser<R: BufRead> {
    lines: Enumerate<Lines<R>>,
    builder: Builder,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Parser { lines: reader.lines().enumerate(), builder: Builder::new() }
    }

    /// Run the parser, consuming itself and returning the program.
    pub fn run(mut self) -> Result<Program, Error> {
        self.header()?;

        while let Some((line_num, text)) = self.consume()? {
            if let Some(line) = lexer::tokenize_line(&text) {
                self.instruction(line, line_num)?;
            }
        }

        let program = self.builder.finish();
        info!("parsed {} instruction(s)", program.len());
        Ok(program)
    }

    /// Skips blank lines up to the first significant one, which must be the header.
    fn header(&mut self) -> Result<(), Error> {
        while let Some((line_num, text)) = self.consume()? {
            let line = lexer::strip_comment(&text);
            if line.is_empty() {
                continue;
            }

            if patterns::is_header(line) {
                debug!("found header on line {}", line_num);
                return Ok(());
            }
            return Err(Error::Header { line: Some(line_num), found: line.to_owned() });
        }

        Err(Error::Header { line: None, found: String::new() })
    }

    /// Checks one tokenized line against the opcode table and appends it.
    fn instruction(&mut self, mut line: Line, line_num: usize) -> Result<(), Error> {
        // Only ASCII letters fold; `ı` must not turn into `I`.
        let opcode = line.opcode.to_ascii_uppercase();
        let slots = match opcodes::lookup(&opcode) {
            Some(slots) => slots,
            None => return Err(Error::UnknownOpcode { line: line_num, opcode }),
        };
        debug!("line {}: {} expects {} operand(s)", line_num, opcode, slots.len());

        let mut ins = self.builder.start(&opcode);
        for slot in slots {
            let token = line.next_operand().unwrap_or_default();
            match operands::classify(*slot, &token) {
                Ok(Some(operand)) => {
                    trace!("line {}: {} `{}` -> {}", line_num, slot.kind(), token, operand.kind);
                    ins.add(operand);
                }
                Ok(None) => trace!("line {}: optional {} omitted", line_num, slot.kind()),
                Err(reason) => {
                    return Err(Error::InvalidArgument {
                        line: line_num,
                        opcode,
                        role: slot.kind(),
                        token,
                        reason,
                    })
                }
            }
        }

        if let Some(token) = line.next_operand() {
            return Err(Error::ExtraOperand { line: line_num, opcode, token });
        }

        ins.commit();
        Ok(())
    }

    /// Pulls the next source line along with its 1-based line number.
    /// Returns `Ok(None)` at end of input.
    fn consume(&mut self) -> Result<Option<(usize, String)>, Error> {
        match self.lines.next() {
            Some((idx, Ok(text))) => Ok(Some((idx + 1, text))),
            Some((_, Err(err))) => Err(Error::from(err)),
            None => Ok(None),
        }
    }
}

/// Parses a whole IPPcode23 source.
pub fn parse<R: BufRead>(reader: R) -> Result<Program, Error> {
    Parser::new(reader).run()
}
