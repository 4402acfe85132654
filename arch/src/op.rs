use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum OpKind {
    ADD,
    ADDU,
    SUB,
    SUBU,
    AND,
    OR,
    XOR,
    NOR,
    SLT,
    SLTU,
    SLLV,
    SRLV,
    SLL,
    SRL,
    MULT,
    MULTU,
    MFHI,
    MFLO,
    JR,
    #[default]
    NOOP,
    ADDI,
    ADDIU,
    SLTI,
    ANDI,
    ORI,
    XORI,
    LW,
    SW,
    BEQ,
    BNE,
    J,
    JAL,
}

impl OpKind {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }
}

/// Structural category of an instruction's bit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    R,
    I,
    J,
    Special,
}

/// Operand slot interpretation, in source-syntax order.
pub enum Arg {
    RD,
    RS,
    RT,
    SHAMT,
    IMM,
    MEM,
    TARGET,
}

impl OpKind {
    pub fn arg_field(&self) -> Vec<Arg> {
        use OpKind::*;
        match self {
            ADD => vec![Arg::RD, Arg::RS, Arg::RT],
            ADDU => vec![Arg::RD, Arg::RS, Arg::RT],
            SUB => vec![Arg::RD, Arg::RS, Arg::RT],
            SUBU => vec![Arg::RD, Arg::RS, Arg::RT],
            AND => vec![Arg::RD, Arg::RS, Arg::RT],
            OR => vec![Arg::RD, Arg::RS, Arg::RT],
            XOR => vec![Arg::RD, Arg::RS, Arg::RT],
            NOR => vec![Arg::RD, Arg::RS, Arg::RT],
            SLT => vec![Arg::RD, Arg::RS, Arg::RT],
            SLTU => vec![Arg::RD, Arg::RS, Arg::RT],
            SLLV => vec![Arg::RD, Arg::RS, Arg::RT],
            SRLV => vec![Arg::RD, Arg::RS, Arg::RT],
            SLL => vec![Arg::RD, Arg::RT, Arg::SHAMT],
            SRL => vec![Arg::RD, Arg::RT, Arg::SHAMT],
            MULT => vec![Arg::RS, Arg::RT],
            MULTU => vec![Arg::RS, Arg::RT],
            MFHI => vec![Arg::RD],
            MFLO => vec![Arg::RD],
            JR => vec![Arg::RS],
            NOOP => vec![],
            ADDI => vec![Arg::RT, Arg::RS, Arg::IMM],
            ADDIU => vec![Arg::RT, Arg::RS, Arg::IMM],
            SLTI => vec![Arg::RT, Arg::RS, Arg::IMM],
            ANDI => vec![Arg::RT, Arg::RS, Arg::IMM],
            ORI => vec![Arg::RT, Arg::RS, Arg::IMM],
            XORI => vec![Arg::RT, Arg::RS, Arg::IMM],
            LW => vec![Arg::RT, Arg::MEM],
            SW => vec![Arg::RT, Arg::MEM],
            BEQ => vec![Arg::RS, Arg::RT, Arg::TARGET],
            BNE => vec![Arg::RS, Arg::RT, Arg::TARGET],
            J => vec![Arg::TARGET],
            JAL => vec![Arg::TARGET],
        }
    }
}
