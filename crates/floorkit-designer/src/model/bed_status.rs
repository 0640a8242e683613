use serde::{Deserialize, Serialize};
use std::fmt;

use super::PlacedObject;

/// Occupancy status of a bed.
///
/// Any free-form label is mapped onto this closed set with
/// [`BedStatus::canonicalize`]; unrecognized labels become [`BedStatus::Vacant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BedStatus {
    #[default]
    Vacant,
    #[serde(rename = "Payment Due")]
    PaymentDue,
    Occupied,
    Maintenance,
    #[serde(rename = "Notice Period")]
    NoticePeriod,
}

/// Known aliases, keyed by the trimmed lowercase label.
const ALIASES: &[(&str, BedStatus)] = &[
    ("available", BedStatus::Vacant),
    ("vacant", BedStatus::Vacant),
    ("ready", BedStatus::Vacant),
    ("shifted (moved to another bed)", BedStatus::Vacant),
    ("payment due", BedStatus::PaymentDue),
    ("payment-due", BedStatus::PaymentDue),
    ("no show", BedStatus::PaymentDue),
    ("occupied", BedStatus::Occupied),
    ("reserved", BedStatus::Occupied),
    ("checked-in today", BedStatus::Occupied),
    ("extended stay", BedStatus::Occupied),
    ("temporary occupied (short stay)", BedStatus::Occupied),
    ("vacating today", BedStatus::NoticePeriod),
    ("notice period", BedStatus::NoticePeriod),
    ("maintenance", BedStatus::Maintenance),
    ("maintanance", BedStatus::Maintenance),
    ("cleaning", BedStatus::Maintenance),
    ("inspection pending", BedStatus::Maintenance),
    ("hold / blocked", BedStatus::Maintenance),
];

impl BedStatus {
    /// Every status, in display order.
    pub const ALL: [BedStatus; 5] = [
        BedStatus::Vacant,
        BedStatus::PaymentDue,
        BedStatus::Occupied,
        BedStatus::Maintenance,
        BedStatus::NoticePeriod,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BedStatus::Vacant => "Vacant",
            BedStatus::PaymentDue => "Payment Due",
            BedStatus::Occupied => "Occupied",
            BedStatus::Maintenance => "Maintenance",
            BedStatus::NoticePeriod => "Notice Period",
        }
    }

    /// Maps an arbitrary status label onto the canonical set.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Empty or unknown labels yield [`BedStatus::Vacant`].
    pub fn canonicalize(raw: &str) -> BedStatus {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return BedStatus::Vacant;
        }
        if let Some((_, status)) = ALIASES.iter().find(|(alias, _)| *alias == normalized) {
            return *status;
        }
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().to_lowercase() == normalized)
            .unwrap_or_default()
    }
}

impl fmt::Display for BedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for BedStatus {
    fn from(raw: &str) -> Self {
        BedStatus::canonicalize(raw)
    }
}

/// Counts bed objects per canonical status, in [`BedStatus::ALL`] order.
pub fn status_counts<'a>(
    objects: impl IntoIterator<Item = &'a PlacedObject>,
) -> [(BedStatus, usize); 5] {
    let mut counts = BedStatus::ALL.map(|status| (status, 0usize));
    for status in objects
        .into_iter()
        .filter(|o| o.is_bed())
        .map(|o| o.bed_status.unwrap_or_default())
    {
        if let Some(entry) = counts.iter_mut().find(|(s, _)| *s == status) {
            entry.1 += 1;
        }
    }
    counts
}

/// Serde adapter for the `bedStatus` field.
///
/// Objects that are not beds carry no status and serialize it as `""`.
/// Deserialization canonicalizes whatever label it finds.
pub mod bed_status_field {
    use super::BedStatus;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(status: &Option<BedStatus>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(status.map(BedStatus::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BedStatus>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(BedStatus::canonicalize(&raw)))
        }
    }
}
