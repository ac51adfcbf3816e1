//! Input resolution: system default, then entity baseline, then explicit overrides.

use super::inputs::{InputField, InputVector, PartialInputs};

/// Merges the three precedence levels field by field.
///
/// Lowest to highest: [`InputVector::DEFAULT`], the entity `baseline` (when one
/// was found), then `overrides`. A missing baseline is not an error; resolution
/// falls through to the system default for every field the caller did not set.
pub fn resolve_inputs(overrides: &PartialInputs, baseline: Option<&InputVector>) -> InputVector {
    let fallback = baseline.copied().unwrap_or(InputVector::DEFAULT);

    InputField::ALL
        .iter()
        .fold(fallback, |resolved, field| match overrides.get(*field) {
            Some(value) => resolved.with(*field, value),
            None => resolved,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> InputVector {
        InputVector::new(10.0, 1.5, 39.0, 320.0)
    }

    #[test]
    fn override_beats_baseline() {
        let overrides = PartialInputs::default().with(InputField::CoilOffset, 15.0);
        let resolved = resolve_inputs(&overrides, Some(&baseline()));
        assert_eq!(resolved.coil_offset_deg, 15.0);
    }

    #[test]
    fn baseline_used_without_override() {
        let resolved = resolve_inputs(&PartialInputs::default(), Some(&baseline()));
        assert_eq!(resolved.coil_offset_deg, 10.0);
        assert_eq!(resolved, baseline());
    }

    #[test]
    fn system_default_used_without_baseline_or_override() {
        let resolved = resolve_inputs(&PartialInputs::default(), None);
        assert_eq!(resolved.coil_offset_deg, 5.0);
        assert_eq!(resolved, InputVector::DEFAULT);
    }

    #[test]
    fn fields_resolve_independently() {
        let overrides = PartialInputs::default().with(InputField::Temperature, 44.0);
        let resolved = resolve_inputs(&overrides, Some(&baseline()));
        assert_eq!(resolved, InputVector::new(10.0, 1.5, 44.0, 320.0));
    }

    #[test]
    fn overrides_fill_over_system_default() {
        let overrides = PartialInputs::default()
            .with(InputField::ChargeRate, 0.5)
            .with(InputField::Load, 0.0);
        let resolved = resolve_inputs(&overrides, None);
        assert_eq!(resolved, InputVector::new(5.0, 0.5, 37.0, 0.0));
    }
}
