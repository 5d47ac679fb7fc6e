//! Faraid (Islamic inheritance) estate model.
//!
//! Older documents store the beneficiary list as a JSON-encoded string;
//! it is decoded into typed [`Beneficiary`] rows once, at deserialization.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::HouseholdId;
use crate::validate::ValidationError;

/// A fractional inheritance share such as `1/8` or `7/12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Share {
    /// Numerator of the fraction.
    numerator: u32,
    /// Denominator of the fraction (never zero).
    denominator: u32,
}

impl Share {
    /// Creates a share, rejecting a zero denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidShare`] if `denominator` is zero.
    #[inline]
    pub fn new(numerator: u32, denominator: u32) -> Result<Self, ValidationError> {
        if denominator == 0 {
            return Err(ValidationError::InvalidShare {
                share: format!("{numerator}/{denominator}"),
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates a share from a denominator known to be non-zero.
    pub(crate) const fn new_unchecked(numerator: u32, denominator: u32) -> Self {
        debug_assert!(denominator != 0, "share denominator must be non-zero");
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[inline]
    #[must_use]
    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Returns the denominator.
    #[inline]
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// The share as a fraction of the estate.
    #[inline]
    #[must_use]
    pub fn fraction(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl fmt::Display for Share {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Share {
    type Err = ValidationError;

    #[inline]
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidShare {
            share: raw.to_owned(),
        };
        let (num, den) = raw.split_once('/').ok_or_else(invalid)?;
        let numerator = num.trim().parse::<u32>().map_err(|_err| invalid())?;
        let denominator = den.trim().parse::<u32>().map_err(|_err| invalid())?;
        if denominator == 0 {
            return Err(invalid());
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }
}

impl TryFrom<String> for Share {
    type Error = ValidationError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Share> for String {
    #[inline]
    fn from(share: Share) -> Self {
        share.to_string()
    }
}

/// One heir and their portion of the estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    /// Relation to the deceased (e.g. "Isteri", "Anak Lelaki").
    pub relation: String,
    /// Fractional share.
    pub share: Share,
    /// Amount recorded for this heir.
    pub amount: f64,
}

impl Beneficiary {
    /// Amount this heir's share yields from `total_assets`.
    #[inline]
    #[must_use]
    pub fn entitlement(&self, total_assets: f64) -> f64 {
        total_assets * self.share.fraction()
    }
}

/// A household's estate plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faraid {
    /// Owning household (one estate per household).
    pub household_id: HouseholdId,
    /// Estate value.
    #[serde(default)]
    pub total_assets: f64,
    /// Whether a will (wasiat) has been written.
    #[serde(default)]
    pub has_wasiat: bool,
    /// Notes about the will.
    #[serde(default)]
    pub wasiat_notes: Option<String>,
    /// Heirs and their shares.
    #[serde(default, deserialize_with = "deserialize_beneficiaries")]
    pub beneficiaries: Vec<Beneficiary>,
}

impl Faraid {
    /// Sum of the amounts recorded for every heir.
    #[inline]
    #[must_use]
    pub fn allocated(&self) -> f64 {
        self.beneficiaries.iter().map(|heir| heir.amount).sum()
    }

    /// Estate value not yet assigned to an heir.
    #[inline]
    #[must_use]
    pub fn unallocated(&self) -> f64 {
        self.total_assets - self.allocated()
    }

    /// Sum of all share fractions; 1.0 when the estate is fully divided.
    #[inline]
    #[must_use]
    pub fn share_total(&self) -> f64 {
        self.beneficiaries
            .iter()
            .map(|heir| heir.share.fraction())
            .sum()
    }
}

/// Wire forms accepted for [`Faraid::beneficiaries`].
#[derive(Deserialize)]
#[serde(untagged)]
enum BeneficiaryList {
    /// Native JSON array.
    List(Vec<Beneficiary>),
    /// Legacy JSON-encoded string.
    Encoded(String),
}

/// Decodes the beneficiary list from either wire form.
fn deserialize_beneficiaries<'de, D>(deserializer: D) -> Result<Vec<Beneficiary>, D::Error>
where
    D: Deserializer<'de>,
{
    match BeneficiaryList::deserialize(deserializer)? {
        BeneficiaryList::List(list) => Ok(list),
        BeneficiaryList::Encoded(raw) if raw.trim().is_empty() => Ok(Vec::new()),
        BeneficiaryList::Encoded(raw) => {
            serde_json::from_str(&raw).map_err(serde::de::Error::custom)
        }
    }
}
