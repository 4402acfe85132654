use std::collections::HashMap;
use std::num::ParseIntError;

use once_cell::sync::Lazy;

use crate::op::{Format, OpKind};

// ----------------------------------------------------------------------------
// Instruction Descriptor

pub struct InstDef {
    pub format: Format,
    pub opcode: &'static str,
    pub funct: &'static str,
}

const fn def(format: Format, opcode: &'static str, funct: &'static str) -> InstDef {
    InstDef {
        format,
        opcode,
        funct,
    }
}

pub static ISA: Lazy<HashMap<OpKind, InstDef>> = Lazy::new(|| {
    let mut map: HashMap<OpKind, InstDef> = HashMap::new();
    map.insert(OpKind::ADD, def(Format::R, "000000", "100000"));
    map.insert(OpKind::ADDU, def(Format::R, "000000", "100001"));
    map.insert(OpKind::SUB, def(Format::R, "000000", "100010"));
    map.insert(OpKind::SUBU, def(Format::R, "000000", "100011"));
    map.insert(OpKind::AND, def(Format::R, "000000", "100100"));
    map.insert(OpKind::OR, def(Format::R, "000000", "100101"));
    map.insert(OpKind::XOR, def(Format::R, "000000", "100110"));
    map.insert(OpKind::NOR, def(Format::R, "000000", "100111"));
    map.insert(OpKind::SLT, def(Format::R, "000000", "101010"));
    map.insert(OpKind::SLTU, def(Format::R, "000000", "101011"));
    map.insert(OpKind::SLLV, def(Format::R, "000000", "000100"));
    map.insert(OpKind::SRLV, def(Format::R, "000000", "000110"));
    map.insert(OpKind::SLL, def(Format::R, "000000", "000000"));
    map.insert(OpKind::SRL, def(Format::R, "000000", "000010"));
    map.insert(OpKind::MULT, def(Format::R, "000000", "011000"));
    map.insert(OpKind::MULTU, def(Format::R, "000000", "011001"));
    map.insert(OpKind::MFHI, def(Format::R, "000000", "010000"));
    map.insert(OpKind::MFLO, def(Format::R, "000000", "010010"));
    map.insert(OpKind::JR, def(Format::R, "000000", "001000"));
    map.insert(OpKind::NOOP, def(Format::Special, "000000", "000000"));
    map.insert(OpKind::ADDI, def(Format::I, "001000", ""));
    map.insert(OpKind::ADDIU, def(Format::I, "001001", ""));
    map.insert(OpKind::SLTI, def(Format::I, "001010", ""));
    map.insert(OpKind::ANDI, def(Format::I, "001100", ""));
    map.insert(OpKind::ORI, def(Format::I, "001101", ""));
    map.insert(OpKind::XORI, def(Format::I, "001110", ""));
    map.insert(OpKind::LW, def(Format::I, "100011", ""));
    map.insert(OpKind::SW, def(Format::I, "101011", ""));
    map.insert(OpKind::BEQ, def(Format::I, "000100", ""));
    map.insert(OpKind::BNE, def(Format::I, "000101", ""));
    map.insert(OpKind::J, def(Format::J, "000010", ""));
    map.insert(OpKind::JAL, def(Format::J, "000011", ""));
    map
});

// ----------------------------------------------------------------------------
// Field Encoding

/// Resolved operand fields of one instruction. Unset fields stay zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    pub rs: String,
    pub rt: String,
    pub rd: String,
    pub shamt: String,
    pub imm: String,
    pub target: String,
}

impl Default for Fields {
    fn default() -> Self {
        Fields {
            rs: "00000".to_string(),
            rt: "00000".to_string(),
            rd: "00000".to_string(),
            shamt: "00000".to_string(),
            imm: "0".repeat(16),
            target: "0".repeat(26),
        }
    }
}

/// Signed two's-complement rendering of `value` at `width` bits.
/// Accepts the full signed and unsigned range of the field.
pub fn bin_field(value: i64, width: u32) -> Result<String, String> {
    let lo = -(1i64 << (width - 1));
    let hi = (1i64 << width) - 1;
    if value < lo || value > hi {
        return Err(format!("Cannot encode `{value}` in {width} bits"));
    }
    let mask = (1u64 << width) - 1;
    Ok(format!(
        "{:0width$b}",
        (value as u64) & mask,
        width = width as usize
    ))
}

pub fn layout(def: &InstDef, f: &Fields) -> String {
    match def.format {
        Format::R => format!(
            "{}{}{}{}{}{}",
            def.opcode, f.rs, f.rt, f.rd, f.shamt, def.funct
        ),
        Format::I => format!("{}{}{}{}", def.opcode, f.rs, f.rt, f.imm),
        Format::J => format!("{}{}", def.opcode, f.target),
        Format::Special => "0".repeat(32),
    }
}

/// Renders a 32-bit binary string as 8 lower-case hex digits.
pub fn to_hex(bin: &str) -> Result<String, String> {
    match u32::from_str_radix(bin, 2) {
        Ok(word) => Ok(format!("{word:08x}")),
        Err(_) => Err(format!("Not a 32-bit binary word: `{bin}`")),
    }
}

pub fn parse_int(s: &str) -> Result<i64, ParseIntError> {
    let (neg, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let value = if let Some(num) = body.strip_prefix("0x") {
        i64::from_str_radix(num, 16)?
    } else if let Some(num) = body.strip_prefix("0o") {
        i64::from_str_radix(num, 8)?
    } else if let Some(num) = body.strip_prefix("0b") {
        i64::from_str_radix(num, 2)?
    } else {
        body.parse::<i64>()?
    };
    Ok(if neg { -value } else { value })
}

// ----------------------------------------------------------------------------
