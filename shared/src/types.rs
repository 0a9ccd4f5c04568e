//! API request and response types

use crate::health_metrics::{
    calculate_bmi, calculate_daily_calories, calculate_protein_target_g, round_one_decimal,
    CalorieProfile, MealCalorieSplit,
};
use crate::models::{CompletedStatus, Day, Gender, Goal, Profile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Profile Types
// ============================================================================

/// Profile creation request
///
/// Goal and gender arrive as raw tokens so that unknown values are reported
/// as field validation errors rather than body rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub age: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(alias = "height")]
    pub height_cm: f64,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    pub goal: String,
}

/// Partial profile update; absent fields keep their stored values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, alias = "height", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(default, alias = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// Profile lookup; the latest-created profile is used when no id is given
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// Profile with derived targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: Goal,
    pub daily_calorie_target: i32,
    pub meal_split: MealCalorieSplit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    pub protein_target_g: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        let daily_calorie_target = calculate_daily_calories(&CalorieProfile::from(profile));
        Self {
            id: profile.id.to_string(),
            name: profile.name.clone(),
            age: profile.age,
            gender: profile.gender,
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            goal: profile.goal,
            daily_calorie_target,
            meal_split: MealCalorieSplit::from_target(daily_calorie_target),
            bmi: calculate_bmi(profile.weight_kg, profile.height_cm).map(round_one_decimal),
            protein_target_g: calculate_protein_target_g(profile.weight_kg),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

// ============================================================================
// Plan Types
// ============================================================================

/// Outcome of writing one day during generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDay {
    pub day: Day,
    pub id: String,
    /// True when an existing plan row was overwritten
    pub updated: bool,
    /// True when the overwritten row kept non-empty completion marks
    pub completion_preserved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanResponse {
    pub user_id: String,
    pub goal: Goal,
    pub daily_calorie_target: i32,
    pub days: Vec<GeneratedDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCompletionRequest {
    #[serde(alias = "exerciseIndex")]
    pub exercise_index: i64,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCompletionRequest {
    #[serde(alias = "mealType")]
    pub meal_type: String,
    pub completed: bool,
}

/// Completion state after a toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub plan_id: String,
    pub day: Day,
    pub completed_status: CompletedStatus,
    /// False when the toggle was already in the requested state
    pub changed: bool,
}

// ============================================================================
// Weight Types
// ============================================================================

/// Weight log request; one entry per date, later logs overwrite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWeightRequest {
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    /// `YYYY-MM-DD`; defaults to today (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightHistoryQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

// ============================================================================
// Progress Types
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressQuery {
    /// Day name or index 0-6; defaults to the current UTC weekday
    #[serde(default)]
    pub today: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_response_derives_targets() {
        let now = Utc::now();
        let profile = Profile {
            id: Uuid::new_v4(),
            name: "Dana".to_string(),
            age: 30,
            gender: Some(Gender::Female),
            height_cm: 165.0,
            weight_kg: 65.0,
            goal: Goal::WeightLoss,
            created_at: now,
            updated_at: now,
        };

        let response = ProfileResponse::from(&profile);
        assert_eq!(response.daily_calorie_target, 1555);
        assert_eq!(response.protein_target_g, 130);
        assert_eq!(response.bmi, Some(23.9));
        assert_eq!(response.meal_split.snacks, 156);
    }

    #[test]
    fn test_completion_requests_accept_camel_case() {
        let exercise: ExerciseCompletionRequest =
            serde_json::from_str(r#"{"exerciseIndex":2,"completed":true}"#).unwrap();
        assert_eq!(exercise.exercise_index, 2);

        let meal: MealCompletionRequest =
            serde_json::from_str(r#"{"mealType":"lunch","completed":false}"#).unwrap();
        assert_eq!(meal.meal_type, "lunch");
        assert!(!meal.completed);
    }

    #[test]
    fn test_create_profile_accepts_short_measurement_keys() {
        let request: CreateProfileRequest = serde_json::from_str(
            r#"{"name":"Sam","age":40,"height":180,"weight":82.5,"goal":"maintenance"}"#,
        )
        .unwrap();
        assert_eq!(request.height_cm, 180.0);
        assert_eq!(request.weight_kg, 82.5);
        assert!(request.gender.is_none());
    }

    #[test]
    fn test_error_detail_omits_empty_fields() {
        let body = ErrorResponse {
            error: ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: "Profile not found".to_string(),
                field: None,
                details: None,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["error"].get("field").is_none());
        assert!(json["error"].get("details").is_none());
    }
}
