//! The validated program tree handed to the XML writer.
//!
//! A [`Program`] can only be produced through a [`Builder`], which hands out
//! order indices and argument positions, so both are always 1-based and
//! gapless.
use std::fmt;

/// The `type` attribute of an argument.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ArgType {
    Var,
    String,
    Int,
    Bool,
    Nil,
    Label,
    Type,
}

impl ArgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgType::Var => "var",
            ArgType::String => "string",
            ArgType::Int => "int",
            ArgType::Bool => "bool",
            ArgType::Nil => "nil",
            ArgType::Label => "label",
            ArgType::Type => "type",
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified operand that has not been placed in an instruction yet.
/// `value` is already escaped for output.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Operand {
    pub kind: ArgType,
    pub value: String,
}

impl Operand {
    pub fn new(kind: ArgType, value: impl Into<String>) -> Self {
        Operand { kind, value: value.into() }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Argument {
    pub position: usize,
    pub kind: ArgType,
    pub value: String,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.value)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Instruction {
    pub order: usize,
    pub opcode: String,
    pub args: Vec<Argument>,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

/// Accumulates instructions in source order.
///
/// `Builder::new` opens the program, [`Builder::start`] opens one instruction
/// and [`Builder::finish`] closes the program. Arguments can only be added
/// through the [`InstructionBuilder`] returned by `start`.
#[derive(Debug, Default)]
pub struct Builder {
    program: Program,
}

impl Builder {
    pub fn new() -> Self {
        Builder::default()
    }

    /// Opens the next instruction. It is appended to the program when the
    /// returned handle is committed.
    pub fn start(&mut self, opcode: &str) -> InstructionBuilder<'_> {
        let order = self.program.instructions.len() + 1;
        InstructionBuilder {
            program: &mut self.program,
            instruction: Instruction {
                order,
                opcode: opcode.to_owned(),
                args: Vec::with_capacity(3),
            },
        }
    }

    pub fn finish(self) -> Program {
        self.program
    }
}

/// An instruction that is still receiving arguments.
pub struct InstructionBuilder<'a> {
    program: &'a mut Program,
    instruction: Instruction,
}

impl<'a> InstructionBuilder<'a> {
    pub fn add(&mut self, operand: Operand) {
        let position = self.instruction.args.len() + 1;
        self.instruction.args.push(Argument {
            position,
            kind: operand.kind,
            value: operand.value,
        });
    }

    pub fn commit(self) {
        self.program.instructions.push(self.instruction);
    }
}
