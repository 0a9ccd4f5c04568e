//! Input validation functions
//!
//! Every validator rejects with a [`ValidationError`] naming the field and the
//! violated constraint, so callers can report it before any computation or
//! persistence happens.

use crate::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use validator::ValidateLength;

/// Inclusive age bounds (years)
pub const MIN_AGE: i32 = 10;
pub const MAX_AGE: i32 = 100;

/// Inclusive height bounds (cm)
pub const MIN_HEIGHT_CM: f64 = 50.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Inclusive weight bounds (kg)
pub const MIN_WEIGHT_KG: f64 = 20.0;
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Maximum profile name length
pub const MAX_NAME_LEN: u64 = 100;

/// Maximum weight note length
pub const MAX_NOTES_LEN: u64 = 500;

static DATE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is a valid regex")
});

/// Validate profile name (non-blank, bounded length)
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name", "Name is required"));
    }
    if !name.validate_length(Some(1), Some(MAX_NAME_LEN), None) {
        return Err(ValidationError::new(
            "name",
            format!("Name must be at most {} characters", MAX_NAME_LEN),
        ));
    }
    Ok(())
}

/// Validate age (years)
pub fn validate_age(age: i32) -> Result<(), ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::new(
            "age",
            format!("Age must be between {} and {}", MIN_AGE, MAX_AGE),
        ));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), ValidationError> {
    validate_measurement("height", "Height", "cm", height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), ValidationError> {
    validate_measurement("weight", "Weight", "kg", weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
}

/// Bounds must stay inside the range the storage columns accept
fn validate_measurement(
    field: &'static str,
    label: &str,
    unit: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::new(
            field,
            format!("{} must be a valid number", label),
        ));
    }
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("{} must be between {} and {} {}", label, min, max, unit),
        ));
    }
    Ok(())
}

/// Validate and parse a `YYYY-MM-DD` date
pub fn validate_recorded_date(value: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_FORMAT.is_match(value) {
        return Err(ValidationError::new(
            "recorded_date",
            "Date must be in YYYY-MM-DD format",
        ));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::new("recorded_date", "Date is not a valid calendar date"))
}

/// Validate optional free-text notes
pub fn validate_notes(notes: Option<&str>) -> Result<(), ValidationError> {
    match notes {
        Some(text) if !text.validate_length(None, Some(MAX_NOTES_LEN), None) => Err(
            ValidationError::new(
                "notes",
                format!("Notes must be at most {} characters", MAX_NOTES_LEN),
            ),
        ),
        _ => Ok(()),
    }
}

/// Validate an exercise index against the plan's exercise count
pub fn validate_exercise_index(index: i64, exercise_count: usize) -> Result<usize, ValidationError> {
    if index < 0 {
        return Err(ValidationError::new(
            "exercise_index",
            "exerciseIndex must be a non-negative integer",
        ));
    }
    let index = index as usize;
    if index >= exercise_count {
        return Err(ValidationError::new(
            "exercise_index",
            format!(
                "exerciseIndex {} is out of range for a plan with {} exercises",
                index, exercise_count
            ),
        ));
    }
    Ok(index)
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "age" => "Age",
        "gender" => "Gender",
        "height" | "height_cm" => "Height",
        "weight" | "weight_kg" => "Weight",
        "goal" => "Goal",
        "day" => "Day",
        "meal_type" => "Meal Type",
        "exercise_index" => "Exercise",
        "recorded_date" => "Recorded Date",
        "notes" => "Notes",
        "limit" => "Limit",
        _ => field_name,
    }
}

impl ValidationError {
    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", get_field_display_label(self.field), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ada").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"a".repeat(101)).is_err());
    }

    #[rstest]
    #[case(10, true)]
    #[case(100, true)]
    #[case(45, true)]
    #[case(9, false)]
    #[case(101, false)]
    #[case(-1, false)]
    fn test_validate_age(#[case] age: i32, #[case] valid: bool) {
        assert_eq!(validate_age(age).is_ok(), valid);
    }

    #[rstest]
    #[case(170.0, true)]
    #[case(165.25, true)]
    #[case(50.0, true)]
    #[case(300.0, true)]
    #[case(49.9, false)]
    #[case(300.1, false)]
    #[case(0.0, false)]
    #[case(12000.0, false)]
    #[case(f64::NAN, false)]
    fn test_validate_height_cm(#[case] height: f64, #[case] valid: bool) {
        assert_eq!(validate_height_cm(height).is_ok(), valid);
    }

    #[rstest]
    #[case(65.55, true)]
    #[case(20.0, true)]
    #[case(500.0, true)]
    #[case(19.9, false)]
    #[case(500.1, false)]
    #[case(0.04, false)]
    #[case(-1.0, false)]
    #[case(f64::INFINITY, false)]
    fn test_validate_weight_kg(#[case] weight: f64, #[case] valid: bool) {
        assert_eq!(validate_weight_kg(weight).is_ok(), valid);
    }

    #[test]
    fn test_measurement_errors_name_field_and_range() {
        let err = validate_weight_kg(600.0).unwrap_err();
        assert_eq!(err.field, "weight");
        assert_eq!(err.message, "Weight must be between 20 and 500 kg");
        assert_eq!(validate_height_cm(10.0).unwrap_err().field, "height");
    }

    #[test]
    fn test_validate_recorded_date() {
        assert_eq!(
            validate_recorded_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(validate_recorded_date("2024-3-15").is_err());
        assert!(validate_recorded_date("15/03/2024").is_err());
        assert!(validate_recorded_date("2024-02-30").is_err());
    }

    #[test]
    fn test_validate_notes() {
        assert!(validate_notes(None).is_ok());
        assert!(validate_notes(Some("felt good")).is_ok());
        assert!(validate_notes(Some(&"x".repeat(501))).is_err());
    }

    #[test]
    fn test_validate_exercise_index() {
        assert_eq!(validate_exercise_index(2, 5).unwrap(), 2);
        assert!(validate_exercise_index(5, 5).is_err());
        assert!(validate_exercise_index(-1, 5).is_err());
        assert!(validate_exercise_index(0, 0).is_err());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("height_cm"), "Height");
        assert_eq!(get_field_display_label("meal_type"), "Meal Type");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    #[test]
    fn test_user_message() {
        let err = ValidationError::new("age", "Age must be between 10 and 100");
        assert_eq!(err.user_message(), "Age: Age must be between 10 and 100");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_age_range(age in MIN_AGE..=MAX_AGE) {
            prop_assert!(validate_age(age).is_ok());
        }

        #[test]
        fn prop_measurements_in_range_accepted(
            height in MIN_HEIGHT_CM..=MAX_HEIGHT_CM,
            weight in MIN_WEIGHT_KG..=MAX_WEIGHT_KG,
        ) {
            prop_assert!(validate_height_cm(height).is_ok());
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_index_in_range_accepted(count in 1usize..20, offset in 0usize..20) {
            let index = offset % count;
            prop_assert_eq!(validate_exercise_index(index as i64, count).unwrap(), index);
        }
    }
}
