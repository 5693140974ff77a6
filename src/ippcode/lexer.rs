//! Splits IPPcode23 source lines into an opcode and its operand tokens.
use std::collections::VecDeque;

/// A non-blank source line: the opcode word and the words that follow it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Line {
    pub opcode: String,
    operands: VecDeque<String>,
}

impl Line {
    /// Pops the next operand token, or `None` when the line is used up.
    pub fn next_operand(&mut self) -> Option<String> {
        self.operands.pop_front()
    }
}

/// Cuts off everything from the first `#` and trims surrounding whitespace.
pub fn strip_comment(line: &str) -> &str {
    let code = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };
    code.trim()
}

/// Tokenizes a raw line. Returns `None` for blank and comment-only lines.
pub fn tokenize_line(line: &str) -> Option<Line> {
    let mut words = strip_comment(line).split_whitespace();

    let opcode = words.next()?.to_owned();
    let operands = words.map(str::to_owned).collect();

    Some(Line { opcode, operands })
}
