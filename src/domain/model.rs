use crate::utils::error::{MarinaError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Longest boat name kept, in characters.
pub const MAX_NAME_LENGTH: usize = 127;
/// Longest trailer tag kept, in characters.
pub const MAX_TRAILER_TAG_LENGTH: usize = 9;
/// Bay letter used when a land record has no bay field.
pub const UNKNOWN_BAY: char = '?';

/// Where a boat is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementType {
    Slip,
    Land,
    Trailor,
    Storage,
    /// Unrecognised placement text. Never produced by a well-formed record.
    NoPlace,
}

impl PlacementType {
    /// Case-insensitive lookup. Anything unrecognised maps to [`PlacementType::NoPlace`].
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.eq_ignore_ascii_case("slip") {
            PlacementType::Slip
        } else if text.eq_ignore_ascii_case("land") {
            PlacementType::Land
        } else if text.eq_ignore_ascii_case("trailor") {
            PlacementType::Trailor
        } else if text.eq_ignore_ascii_case("storage") {
            PlacementType::Storage
        } else {
            PlacementType::NoPlace
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementType::Slip => "slip",
            PlacementType::Land => "land",
            PlacementType::Trailor => "trailor",
            PlacementType::Storage => "storage",
            PlacementType::NoPlace => "no_place",
        }
    }
}

impl fmt::Display for PlacementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Placement together with its placement-specific identifier.
///
/// The variant is the placement, so a record can never carry a bay letter
/// while claiming to sit in a slip.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementPayload {
    Slip { number: i32 },
    Land { bay: char },
    Trailor { tag: String },
    Storage { space: i32 },
    NoPlace,
}

impl PlacementPayload {
    /// Builds the payload for `placement` from its raw auxiliary field.
    ///
    /// Numbers parse leniently (no digits reads as 0), land keeps the first
    /// character (or [`UNKNOWN_BAY`] when empty) and trailer tags are cut to
    /// [`MAX_TRAILER_TAG_LENGTH`] characters.
    pub fn parse(placement: PlacementType, raw: &str) -> Self {
        let raw = raw.trim();
        match placement {
            PlacementType::Slip => PlacementPayload::Slip {
                number: crate::utils::lenient::lenient_i32(raw),
            },
            PlacementType::Land => PlacementPayload::Land {
                bay: raw.chars().next().unwrap_or(UNKNOWN_BAY),
            },
            PlacementType::Trailor => PlacementPayload::Trailor {
                tag: truncate_chars(raw, MAX_TRAILER_TAG_LENGTH),
            },
            PlacementType::Storage => PlacementPayload::Storage {
                space: crate::utils::lenient::lenient_i32(raw),
            },
            PlacementType::NoPlace => PlacementPayload::NoPlace,
        }
    }

    pub fn placement(&self) -> PlacementType {
        match self {
            PlacementPayload::Slip { .. } => PlacementType::Slip,
            PlacementPayload::Land { .. } => PlacementType::Land,
            PlacementPayload::Trailor { .. } => PlacementType::Trailor,
            PlacementPayload::Storage { .. } => PlacementType::Storage,
            PlacementPayload::NoPlace => PlacementType::NoPlace,
        }
    }

    /// Text written to the auxiliary field; `N/A` when there is no placement.
    pub fn format(&self) -> String {
        match self {
            PlacementPayload::Slip { number } => number.to_string(),
            PlacementPayload::Land { bay } => bay.to_string(),
            PlacementPayload::Trailor { tag } => tag.clone(),
            PlacementPayload::Storage { space } => space.to_string(),
            PlacementPayload::NoPlace => "N/A".to_string(),
        }
    }

    /// A land payload whose bay survives the record file unchanged.
    pub fn land(bay: char) -> Result<Self> {
        let payload = PlacementPayload::Land { bay };
        payload.validate()?;
        Ok(payload)
    }

    /// A trailer payload whose tag survives the record file unchanged.
    pub fn trailor(tag: &str) -> Result<Self> {
        let payload = PlacementPayload::Trailor {
            tag: tag.to_string(),
        };
        payload.validate()?;
        Ok(payload)
    }

    /// Checks that [`format`](Self::format) output decodes back to this payload.
    pub fn validate(&self) -> Result<()> {
        match self {
            PlacementPayload::Land { bay } => {
                if *bay == ',' || bay.is_whitespace() || bay.is_control() {
                    return Err(invalid_field(
                        "bay",
                        &bay.to_string(),
                        "bay must be a visible character other than a comma",
                    ));
                }
            }
            PlacementPayload::Trailor { tag } => {
                if tag.chars().count() > MAX_TRAILER_TAG_LENGTH {
                    return Err(invalid_field(
                        "trailer tag",
                        tag,
                        &format!("tag is longer than {} characters", MAX_TRAILER_TAG_LENGTH),
                    ));
                }
                check_storable_text("trailer tag", tag)?;
            }
            PlacementPayload::Slip { .. }
            | PlacementPayload::Storage { .. }
            | PlacementPayload::NoPlace => {}
        }
        Ok(())
    }
}

/// One boat's complete stored state.
#[derive(Debug, Clone, PartialEq)]
pub struct BoatRecord {
    name: String,
    pub(crate) length: f64,
    pub(crate) payload: PlacementPayload,
    pub(crate) amount_owed: f64,
}

impl BoatRecord {
    /// Creates a record, trimming the name and cutting it to [`MAX_NAME_LENGTH`].
    ///
    /// Only values that survive a save and reload unchanged are accepted: the
    /// name must be non-empty with no comma or control character, the payload
    /// must pass [`PlacementPayload::validate`], and length and balance must be
    /// finite and not negative. A zero length is allowed since an unreadable
    /// length field decodes as 0.
    pub fn new(
        name: &str,
        length: f64,
        payload: PlacementPayload,
        amount_owed: f64,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid_field("name", name, "boat name is empty"));
        }
        check_storable_text("name", name)?;
        if !length.is_finite() || length < 0.0 {
            return Err(invalid_field(
                "length",
                &length.to_string(),
                "length cannot be negative",
            ));
        }
        if !amount_owed.is_finite() || amount_owed < 0.0 {
            return Err(invalid_field(
                "amount owed",
                &amount_owed.to_string(),
                "amount owed cannot be negative",
            ));
        }
        payload.validate()?;

        Ok(Self {
            // Cutting can expose trailing spaces, which decoding would trim away.
            name: truncate_chars(name, MAX_NAME_LENGTH).trim_end().to_string(),
            length,
            payload,
            amount_owed,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn payload(&self) -> &PlacementPayload {
        &self.payload
    }

    pub fn amount_owed(&self) -> f64 {
        self.amount_owed
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn placement(&self) -> PlacementType {
        self.payload.placement()
    }

    /// Case-insensitive identity check used by every name-keyed operation.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Case-insensitive ordering by name.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn invalid_field(field: &str, value: &str, reason: &str) -> MarinaError {
    MarinaError::InvalidField {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Rejects text that would split or merge fields or lines in the record file.
fn check_storable_text(field: &str, text: &str) -> Result<()> {
    if text.contains(',') {
        return Err(invalid_field(field, text, "cannot contain a comma"));
    }
    if text.chars().any(char::is_control) {
        return Err(invalid_field(field, text, "cannot contain control characters"));
    }
    if text.trim() != text {
        return Err(invalid_field(
            field,
            text,
            "cannot start or end with whitespace",
        ));
    }
    Ok(())
}
