//! NameWrapper fuses.
//!
//! Fuses are permission bits burned into a wrapped name. The low 16 bits are
//! owner (child) controlled; the high 16 bits are parent controlled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CHILD_CONTROLLED_FUSES, PARENT_CONTROLLED_FUSES};
use crate::error::{EnsError, Result};

/// A NameWrapper fuse bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fuses(pub u32);

impl Fuses {
    /// No fuses burned.
    pub const CAN_DO_EVERYTHING: Fuses = Fuses(0);
    /// The name cannot be unwrapped.
    pub const CANNOT_UNWRAP: Fuses = Fuses(1);
    /// No further fuses can be burned.
    pub const CANNOT_BURN_FUSES: Fuses = Fuses(1 << 1);
    /// The name cannot be transferred.
    pub const CANNOT_TRANSFER: Fuses = Fuses(1 << 2);
    /// The resolver cannot be changed.
    pub const CANNOT_SET_RESOLVER: Fuses = Fuses(1 << 3);
    /// The TTL cannot be changed.
    pub const CANNOT_SET_TTL: Fuses = Fuses(1 << 4);
    /// No new subnames can be created.
    pub const CANNOT_CREATE_SUBDOMAIN: Fuses = Fuses(1 << 5);
    /// No approved operator can be set.
    pub const CANNOT_APPROVE: Fuses = Fuses(1 << 6);
    /// The parent has given up control (the name is emancipated).
    pub const PARENT_CANNOT_CONTROL: Fuses = Fuses(1 << 16);
    /// Set by the NameWrapper on wrapped `.eth` second-level names.
    pub const IS_DOT_ETH: Fuses = Fuses(1 << 17);
    /// The owner may extend the expiry.
    pub const CAN_EXTEND_EXPIRY: Fuses = Fuses(1 << 18);

    /// Bits a parent may burn on a subname it creates.
    pub const SUBNAME_SETTABLE: u32 =
        CHILD_CONTROLLED_FUSES | Fuses::PARENT_CANNOT_CONTROL.0 | Fuses::CAN_EXTEND_EXPIRY.0;

    /// Every named fuse with its lowerCamelCase key.
    pub const NAMED: [(&'static str, Fuses); 10] = [
        ("cannotUnwrap", Fuses::CANNOT_UNWRAP),
        ("cannotBurnFuses", Fuses::CANNOT_BURN_FUSES),
        ("cannotTransfer", Fuses::CANNOT_TRANSFER),
        ("cannotSetResolver", Fuses::CANNOT_SET_RESOLVER),
        ("cannotSetTtl", Fuses::CANNOT_SET_TTL),
        ("cannotCreateSubdomain", Fuses::CANNOT_CREATE_SUBDOMAIN),
        ("cannotApprove", Fuses::CANNOT_APPROVE),
        ("parentCannotControl", Fuses::PARENT_CANNOT_CONTROL),
        ("isDotEth", Fuses::IS_DOT_ETH),
        ("canExtendExpiry", Fuses::CAN_EXTEND_EXPIRY),
    ];

    /// Raw bitmask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set.
    pub const fn contains(self, other: Fuses) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// True when no fuse is burned.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the fuses as an owner-controlled (uint16) value.
    ///
    /// Fails if any parent-controlled bit is set.
    pub fn encode_child(self) -> Result<u16> {
        if self.0 & PARENT_CONTROLLED_FUSES != 0 {
            return Err(EnsError::FusesOutOfRange {
                fuses: self.0,
                max: CHILD_CONTROLLED_FUSES,
            });
        }
        Ok(self.0 as u16)
    }

    /// Returns the fuses as the uint32 a parent passes when creating a subname.
    ///
    /// Owner-controlled bits plus `PARENT_CANNOT_CONTROL` and
    /// `CAN_EXTEND_EXPIRY` are accepted. `IS_DOT_ETH` and unnamed parent bits
    /// are rejected.
    pub fn encode_subname(self) -> Result<u32> {
        if self.0 & !Self::SUBNAME_SETTABLE != 0 {
            return Err(EnsError::FusesOutOfRange {
                fuses: self.0,
                max: Self::SUBNAME_SETTABLE,
            });
        }
        Ok(self.0)
    }

    /// Named fuses that are burned, in bit order.
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, f)| self.contains(*f))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl std::ops::BitOr for Fuses {
    type Output = Fuses;

    fn bitor(self, rhs: Fuses) -> Fuses {
        Fuses(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Fuses {
    fn bitor_assign(&mut self, rhs: Fuses) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Fuses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("canDoEverything");
        }
        write!(f, "{}", self.names().join("|"))
    }
}

impl FromStr for Fuses {
    type Err = EnsError;

    /// Accepts a number (decimal or `0x` hex) or a `|`/`,` separated list of
    /// fuse names in camelCase or SCREAMING_SNAKE_CASE.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Fuses::CAN_DO_EVERYTHING);
        }
        if let Some(hex) = s.strip_prefix("0x") {
            return u32::from_str_radix(hex, 16)
                .map(Fuses)
                .map_err(|e| EnsError::InvalidFuses(format!("'{s}': {e}")));
        }
        if let Ok(n) = s.parse::<u32>() {
            return Ok(Fuses(n));
        }

        let mut fuses = Fuses::CAN_DO_EVERYTHING;
        for part in s.split(['|', ',']).map(str::trim).filter(|p| !p.is_empty()) {
            let key = part.replace('_', "").to_lowercase();
            let (_, fuse) = Self::NAMED
                .iter()
                .find(|(name, _)| name.to_lowercase() == key)
                .ok_or_else(|| EnsError::InvalidFuses(format!("unknown fuse '{part}'")))?;
            fuses |= *fuse;
        }
        Ok(fuses)
    }
}

/// Why a wrapped name is not safe, as reported by the NameWrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Vulnerability {
    /// Nothing above the name can take it back.
    Safe,
    /// A registrant above the name can reclaim it.
    Registrant,
    /// A controller above the name can change its owner.
    Controller,
    /// An ancestor lacks the fuses needed to lock this name.
    Fuses,
    /// An ancestor has expired.
    Expired,
}

impl TryFrom<u8> for Vulnerability {
    type Error = EnsError;

    fn try_from(value: u8) -> Result<Self> {
        Ok(match value {
            0 => Vulnerability::Safe,
            1 => Vulnerability::Registrant,
            2 => Vulnerability::Controller,
            3 => Vulnerability::Fuses,
            4 => Vulnerability::Expired,
            other => {
                return Err(EnsError::AbiEncodingError(format!(
                    "unknown vulnerability value {other}"
                )))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_fuses_are_single_bits() {
        for (name, fuse) in Fuses::NAMED {
            assert_eq!(fuse.bits().count_ones(), 1, "{name}");
        }
    }

    #[test]
    fn test_contains() {
        let f = Fuses::CANNOT_UNWRAP | Fuses::CANNOT_TRANSFER;
        assert!(f.contains(Fuses::CANNOT_UNWRAP));
        assert!(f.contains(Fuses::CANNOT_TRANSFER));
        assert!(!f.contains(Fuses::CANNOT_SET_TTL));
        assert!(!f.contains(Fuses::CAN_DO_EVERYTHING));
    }

    #[test]
    fn test_encode_child() {
        let f = Fuses::CANNOT_UNWRAP | Fuses::CANNOT_APPROVE;
        assert_eq!(f.encode_child().unwrap(), 65);

        let err = (f | Fuses::PARENT_CANNOT_CONTROL).encode_child().unwrap_err();
        assert!(matches!(err, EnsError::FusesOutOfRange { .. }));
    }

    #[test]
    fn test_encode_subname() {
        let emancipated = Fuses::PARENT_CANNOT_CONTROL | Fuses::CANNOT_UNWRAP;
        assert_eq!(emancipated.encode_subname().unwrap(), 0x10001);

        let extendable = Fuses::CAN_EXTEND_EXPIRY | Fuses::CANNOT_TRANSFER;
        assert_eq!(extendable.encode_subname().unwrap(), 0x40004);

        assert!(matches!(
            Fuses::IS_DOT_ETH.encode_subname(),
            Err(EnsError::FusesOutOfRange { .. })
        ));
        assert!(Fuses(1 << 20).encode_subname().is_err());
    }

    #[test]
    fn test_parse_names() {
        let f: Fuses = "CANNOT_UNWRAP | cannotSetTtl".parse().unwrap();
        assert_eq!(f, Fuses::CANNOT_UNWRAP | Fuses::CANNOT_SET_TTL);
        assert_eq!(f.to_string(), "cannotUnwrap|cannotSetTtl");
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!("5".parse::<Fuses>().unwrap(), Fuses(5));
        assert_eq!("0x10000".parse::<Fuses>().unwrap(), Fuses::PARENT_CANNOT_CONTROL);
        assert_eq!("".parse::<Fuses>().unwrap(), Fuses::CAN_DO_EVERYTHING);
        assert!(matches!(
            "cannotFly".parse::<Fuses>(),
            Err(EnsError::InvalidFuses(_))
        ));
        assert!(matches!("0xzz".parse::<Fuses>(), Err(EnsError::InvalidFuses(_))));
    }

    #[test]
    fn test_vulnerability_from_u8() {
        assert_eq!(Vulnerability::try_from(0).unwrap(), Vulnerability::Safe);
        assert_eq!(Vulnerability::try_from(4).unwrap(), Vulnerability::Expired);
        assert!(Vulnerability::try_from(5).is_err());
    }
}
