use arch::isa;
use arch::reg::Reg;

use crate::error::AsmError;

/// One resolved operand slot. Immediates and label references stay as
/// `Token` and are classified at encode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Reg(String),
    Mem(String, String),
    Token(String),
    Absent,
}

/// A line after operand resolution: mnemonic plus exactly three slots, so
/// the encoder can address operands by fixed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub op: String,
    pub args: [Operand; 3],
}

pub fn resolve(tokens: &[String]) -> Result<Resolved, AsmError> {
    let (op, rest) = tokens.split_first().ok_or(AsmError::MissingArgument)?;

    let mut slots = Vec::with_capacity(3);
    for tok in rest.iter().take(3) {
        slots.push(resolve_token(tok.trim_end_matches(','))?);
    }
    while slots.len() < 3 {
        slots.push(Operand::Absent);
    }
    let mut it = slots.into_iter();
    let args = [
        it.next().unwrap_or(Operand::Absent),
        it.next().unwrap_or(Operand::Absent),
        it.next().unwrap_or(Operand::Absent),
    ];

    let mut line = Resolved {
        op: op.trim_end_matches(',').to_string(),
        args,
    };

    // The single pseudo-op: `move rd, rs` is an add with the zero register.
    if line.op == "move" {
        line.op = "add".to_string();
        line.args[2] = Operand::Reg(Reg::ZERO.code());
    }

    Ok(line)
}

fn resolve_token(tok: &str) -> Result<Operand, AsmError> {
    if let Some((offset, base)) = split_mem(tok) {
        let value = isa::parse_int(offset)
            .map_err(|_| AsmError::ParseArgument(offset.to_string(), "offset".to_string()))?;
        let offset = isa::bin_field(value, 16).map_err(AsmError::FieldRange)?;
        let base = Reg::parse(base)
            .map_err(|_| AsmError::ParseArgument(base.to_string(), "Reg".to_string()))?;
        return Ok(Operand::Mem(offset, base.code()));
    }
    if tok.starts_with('$') {
        if let Ok(reg) = Reg::parse(tok) {
            return Ok(Operand::Reg(reg.code()));
        }
    }
    Ok(Operand::Token(tok.to_string()))
}

fn split_mem(tok: &str) -> Option<(&str, &str)> {
    let (offset, rest) = tok.split_once('(')?;
    let base = rest.strip_suffix(')')?;
    Some((offset, base))
}
