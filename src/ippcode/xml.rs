//! XML serialization of a parsed program.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <program language="IPPcode23">
//!   <instruction order="1" opcode="DEFVAR">
//!     <arg1 type="var">GF@x</arg1>
//!   </instruction>
//!   <instruction order="2" opcode="BREAK"/>
//! </program>
//! ```
//!
//! Argument values are escaped by the classifiers, so they are written as is.
use super::ast::{Argument, Instruction, Program};
use super::patterns;

/// Serialize a program to an XML document.
pub fn serialize_program(program: &Program) -> String {
    let mut result = String::new();
    result.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    if program.is_empty() {
        result.push_str(&format!("<program language=\"{}\"/>\n", patterns::LANGUAGE));
        return result;
    }

    result.push_str(&format!("<program language=\"{}\">\n", patterns::LANGUAGE));
    for ins in program.iter() {
        serialize_instruction(ins, &mut result);
    }
    result.push_str("</program>\n");
    result
}

fn serialize_instruction(ins: &Instruction, output: &mut String) {
    let open = format!("  <instruction order=\"{}\" opcode=\"{}\"", ins.order, ins.opcode);

    if ins.args.is_empty() {
        output.push_str(&open);
        output.push_str("/>\n");
        return;
    }

    output.push_str(&open);
    output.push_str(">\n");
    for arg in &ins.args {
        serialize_argument(arg, output);
    }
    output.push_str("  </instruction>\n");
}

fn serialize_argument(arg: &Argument, output: &mut String) {
    output.push_str(&format!(
        "    <arg{pos} type=\"{kind}\">{value}</arg{pos}>\n",
        pos = arg.position,
        kind = arg.kind,
        value = arg.value
    ));
}
