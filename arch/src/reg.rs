use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
    Eq,
)]
#[repr(u8)]
pub enum Reg {
    #[default]
    ZERO,
    AT,
    V0,
    V1,
    A0,
    A1,
    A2,
    A3,
    T0,
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    T8,
    T9,
    K0,
    K1,
    GP,
    SP,
    FP,
    RA,
}

impl Reg {
    pub fn parse(s: &str) -> Result<Self, String> {
        let name = s.strip_prefix('$').unwrap_or(s);
        match name.to_ascii_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Unknown reg name: {s}")),
        }
    }

    /// Five-bit register field, e.g. `$t0` -> `01000`.
    pub fn code(self) -> String {
        format!("{:05b}", u8::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Reg::parse("$t0"), Ok(Reg::T0));
        assert_eq!(Reg::parse("sp"), Ok(Reg::SP));
        assert_eq!(Reg::parse("$ZERO"), Ok(Reg::ZERO));
        assert!(Reg::parse("$x9").is_err());
        assert!(Reg::parse("hoge").is_err());
    }

    #[test]
    fn test_code() {
        assert_eq!(Reg::ZERO.code(), "00000");
        assert_eq!(Reg::T0.code(), "01000");
        assert_eq!(Reg::T1.code(), "01001");
        assert_eq!(Reg::T2.code(), "01010");
        assert_eq!(Reg::SP.code(), "11101");
        assert_eq!(Reg::RA.code(), "11111");
    }
}
