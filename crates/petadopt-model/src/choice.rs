//! Closed option sets used by select inputs.
//!
//! Every dropdown in the marketplace (pet type, age group, condition, ...)
//! is backed by an enum implementing [`Choice`], so a selected value is
//! always a member of the fixed set.

use crate::error::ModelError;

/// A fixed, ordered set of selectable values.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Name of the option set, used in parse errors.
    const KIND: &'static str;

    /// All options in display order.
    fn all() -> &'static [Self];

    /// Stable machine value (as submitted by the form).
    fn value(&self) -> &'static str;

    /// Human-readable label shown in the dropdown.
    fn label(&self) -> &'static str;

    /// Parse a machine value (case-insensitive, surrounding whitespace ignored).
    fn parse_value(raw: &str) -> Result<Self, ModelError> {
        let needle = raw.trim();
        Self::all()
            .iter()
            .copied()
            .find(|option| option.value().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ModelError::UnknownChoice {
                kind: Self::KIND,
                value: raw.to_string(),
            })
    }
}
