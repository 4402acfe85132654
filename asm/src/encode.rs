use arch::isa::{self, Fields, ISA};
use arch::op::{Arg, Format, OpKind};

use crate::error::AsmError;
use crate::label::Labels;
use crate::resolve::{Operand, Resolved};

/// One encoded machine word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub bin: String,
    pub hex: String,
}

/// Encodes one fully-resolved line. Pure: the word depends only on the
/// line, its position in the final instruction sequence, the label table
/// and the program base address.
pub fn encode(line: &Resolved, idx: usize, labels: &Labels, base: u32) -> Result<Word, AsmError> {
    let kind =
        OpKind::parse(&line.op).map_err(|_| AsmError::UnknownOperation(line.op.clone()))?;
    let def = ISA
        .get(&kind)
        .ok_or_else(|| AsmError::UnknownOperation(line.op.clone()))?;

    let mut fields = Fields::default();
    for (slot, arg) in kind.arg_field().iter().enumerate() {
        let operand = &line.args[slot];
        match arg {
            Arg::RD => fields.rd = expect_reg(operand)?,
            Arg::RS => fields.rs = expect_reg(operand)?,
            Arg::RT => fields.rt = expect_reg(operand)?,
            Arg::SHAMT => {
                let value = expect_int(operand)?;
                fields.shamt = isa::bin_field(value, 5).map_err(AsmError::FieldRange)?;
            }
            Arg::IMM => {
                let value = expect_int(operand)?;
                fields.imm = isa::bin_field(value, 16).map_err(AsmError::FieldRange)?;
            }
            Arg::MEM => match operand {
                Operand::Mem(offset, base_reg) => {
                    fields.imm = offset.clone();
                    fields.rs = base_reg.clone();
                }
                _ => {
                    return Err(AsmError::ParseArgument(
                        operand_text(operand),
                        "memory operand".to_string(),
                    ))
                }
            },
            Arg::TARGET => {
                let tok = expect_token(operand)?;
                match def.format {
                    // Absolute: word-aligned address in the low 26 bits.
                    Format::J => {
                        let address = match isa::parse_int(tok) {
                            Ok(v) => v,
                            Err(_) => match labels.get(tok) {
                                Some(l) => base as i64 + 4 * l as i64,
                                None => return Err(AsmError::UndefinedLabel(tok.to_string())),
                            },
                        };
                        fields.target = isa::bin_field((address >> 2) & 0x03FF_FFFF, 26)
                            .map_err(AsmError::FieldRange)?;
                    }
                    // Relative: signed distance from the next instruction.
                    _ => {
                        let offset = match isa::parse_int(tok) {
                            Ok(v) => v,
                            Err(_) => match labels.get(tok) {
                                Some(l) => l as i64 - idx as i64 - 1,
                                None => return Err(AsmError::UndefinedLabel(tok.to_string())),
                            },
                        };
                        fields.imm = isa::bin_field(offset, 16).map_err(AsmError::FieldRange)?;
                    }
                }
            }
        }
    }

    let bin = isa::layout(def, &fields);
    let hex = isa::to_hex(&bin).map_err(AsmError::FieldRange)?;
    Ok(Word { bin, hex })
}

fn operand_text(operand: &Operand) -> String {
    match operand {
        Operand::Reg(code) => code.clone(),
        Operand::Mem(offset, base) => format!("{offset}({base})"),
        Operand::Token(tok) => tok.clone(),
        Operand::Absent => "".to_string(),
    }
}

fn expect_reg(operand: &Operand) -> Result<String, AsmError> {
    match operand {
        Operand::Reg(code) => Ok(code.clone()),
        Operand::Absent => Err(AsmError::MissingArgument),
        other => Err(AsmError::ParseArgument(
            operand_text(other),
            "Reg".to_string(),
        )),
    }
}

fn expect_int(operand: &Operand) -> Result<i64, AsmError> {
    let tok = expect_token(operand)?;
    isa::parse_int(tok).map_err(|_| AsmError::ParseArgument(tok.to_string(), "integer".to_string()))
}

fn expect_token(operand: &Operand) -> Result<&str, AsmError> {
    match operand {
        Operand::Token(tok) => Ok(tok),
        Operand::Absent => Err(AsmError::MissingArgument),
        other => Err(AsmError::ParseArgument(
            operand_text(other),
            "operand".to_string(),
        )),
    }
}
