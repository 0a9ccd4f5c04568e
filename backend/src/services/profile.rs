//! Profile service - business logic for user profile management

use crate::error::ApiError;
use crate::repositories::{CreateProfile, ProfileRecord, ProfileRepository, UpdateProfile};
use anyhow::Context;
use fitness_planner_shared::models::{Gender, Goal, Profile};
use fitness_planner_shared::types::{CreateProfileRequest, UpdateProfileRequest};
use fitness_planner_shared::validation::{
    validate_age, validate_height_cm, validate_name, validate_weight_kg,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Profile service for user profile operations
pub struct ProfileService;

impl ProfileService {
    /// Validate and store a new profile
    pub async fn create_profile(
        db: &PgPool,
        req: CreateProfileRequest,
    ) -> Result<Profile, ApiError> {
        let input = Self::validate_create(req)?;

        let record = ProfileRepository::create(db, input)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %record.id, goal = %record.goal, "Profile created");
        to_profile(record)
    }

    /// Fetch a profile by id, or the latest-created one when no id is given
    pub async fn get_profile(db: &PgPool, user_id: Option<Uuid>) -> Result<Profile, ApiError> {
        let record = match user_id {
            Some(id) => ProfileRepository::find_by_id(db, id).await,
            None => ProfileRepository::find_latest(db).await,
        }
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

        to_profile(record)
    }

    /// Apply a partial update with validation
    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> Result<Profile, ApiError> {
        let updates = Self::validate_update(req)?;

        let record = ProfileRepository::update(db, user_id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

        info!(user_id = %user_id, "Profile updated");
        to_profile(record)
    }

    /// NotFound unless the profile exists
    pub async fn ensure_exists(db: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
        let exists = ProfileRepository::exists(db, user_id)
            .await
            .map_err(ApiError::Internal)?;
        if !exists {
            return Err(ApiError::NotFound("Profile not found".to_string()));
        }
        Ok(())
    }

    /// Reject out-of-range or unrecognized values before anything is stored
    pub fn validate_create(req: CreateProfileRequest) -> Result<CreateProfile, ApiError> {
        validate_name(&req.name)?;
        validate_age(req.age)?;
        validate_height_cm(req.height_cm)?;
        validate_weight_kg(req.weight_kg)?;
        let goal: Goal = req.goal.parse()?;
        let gender = parse_gender(req.gender.as_deref())?;

        Ok(CreateProfile {
            name: req.name.trim().to_string(),
            age: req.age,
            gender: gender.map(|g| g.as_str().to_string()),
            height_cm: req.height_cm,
            weight_kg: req.weight_kg,
            goal: goal.as_str().to_string(),
        })
    }

    pub fn validate_update(req: UpdateProfileRequest) -> Result<UpdateProfile, ApiError> {
        if let Some(ref name) = req.name {
            validate_name(name)?;
        }
        if let Some(age) = req.age {
            validate_age(age)?;
        }
        if let Some(height) = req.height_cm {
            validate_height_cm(height)?;
        }
        if let Some(weight) = req.weight_kg {
            validate_weight_kg(weight)?;
        }
        let goal = req.goal.as_deref().map(str::parse::<Goal>).transpose()?;
        let gender = parse_gender(req.gender.as_deref())?;

        Ok(UpdateProfile {
            name: req.name.map(|n| n.trim().to_string()),
            age: req.age,
            gender: gender.map(|g| g.as_str().to_string()),
            height_cm: req.height_cm,
            weight_kg: req.weight_kg,
            goal: goal.map(|g| g.as_str().to_string()),
        })
    }
}

/// Empty strings count as "not specified"
fn parse_gender(value: Option<&str>) -> Result<Option<Gender>, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(token) => Ok(Some(token.parse()?)),
    }
}

pub(crate) fn to_profile(record: ProfileRecord) -> Result<Profile, ApiError> {
    let goal: Goal = record
        .goal
        .parse()
        .with_context(|| format!("profile {} has unknown goal", record.id))?;
    let gender = match record.gender.as_deref() {
        Some(g) => Some(
            g.parse::<Gender>()
                .with_context(|| format!("profile {} has unknown gender", record.id))?,
        ),
        None => None,
    };

    Ok(Profile {
        id: record.id,
        name: record.name,
        age: record.age,
        gender,
        height_cm: decimal_to_f64(&record.height_cm),
        weight_kg: decimal_to_f64(&record.weight_kg),
        goal,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

pub(crate) fn decimal_to_f64(d: &Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request() -> CreateProfileRequest {
        CreateProfileRequest {
            name: "  Jordan ".to_string(),
            age: 30,
            gender: Some("Female".to_string()),
            height_cm: 165.0,
            weight_kg: 65.0,
            goal: "weight_loss".to_string(),
        }
    }

    #[test]
    fn test_valid_create_is_normalized() {
        let input = ProfileService::validate_create(request()).unwrap();
        assert_eq!(input.name, "Jordan");
        assert_eq!(input.gender.as_deref(), Some("female"));
        assert_eq!(input.goal, "weight_loss");
    }

    #[rstest]
    #[case::age_too_low(|r: &mut CreateProfileRequest| r.age = 9, "age")]
    #[case::age_too_high(|r: &mut CreateProfileRequest| r.age = 101, "age")]
    #[case::zero_height(|r: &mut CreateProfileRequest| r.height_cm = 0.0, "height")]
    #[case::negative_weight(|r: &mut CreateProfileRequest| r.weight_kg = -3.0, "weight")]
    #[case::height_too_tall(|r: &mut CreateProfileRequest| r.height_cm = 12000.0, "height")]
    #[case::weight_rounds_to_zero(|r: &mut CreateProfileRequest| r.weight_kg = 0.04, "weight")]
    #[case::unknown_goal(|r: &mut CreateProfileRequest| r.goal = "bulk".to_string(), "goal")]
    #[case::unknown_gender(|r: &mut CreateProfileRequest| r.gender = Some("x".to_string()), "gender")]
    #[case::blank_name(|r: &mut CreateProfileRequest| r.name = " ".to_string(), "name")]
    fn test_invalid_create_names_field(
        #[case] mutate: fn(&mut CreateProfileRequest),
        #[case] field: &str,
    ) {
        let mut req = request();
        mutate(&mut req);
        match ProfileService::validate_create(req) {
            Err(ApiError::Validation(err)) => assert_eq!(err.field, field),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_gender_is_unspecified() {
        let mut req = request();
        req.gender = Some(String::new());
        assert!(ProfileService::validate_create(req).unwrap().gender.is_none());
    }

    #[test]
    fn test_update_validates_only_present_fields() {
        let updates = ProfileService::validate_update(UpdateProfileRequest {
            goal: Some("muscle_gain".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(updates.goal.as_deref(), Some("muscle_gain"));
        assert!(updates.age.is_none());

        let err = ProfileService::validate_update(UpdateProfileRequest {
            age: Some(200),
            ..Default::default()
        });
        assert!(matches!(err, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_record_conversion() {
        let now = chrono::Utc::now();
        let profile = to_profile(ProfileRecord {
            id: Uuid::new_v4(),
            name: "Jordan".to_string(),
            age: 30,
            gender: None,
            height_cm: Decimal::new(1655, 1),
            weight_kg: Decimal::new(650, 1),
            goal: "maintenance".to_string(),
            created_at: now,
            updated_at: now,
        })
        .unwrap();
        assert_eq!(profile.height_cm, 165.5);
        assert_eq!(profile.goal, Goal::Maintenance);
        assert!(profile.gender.is_none());
    }
}
