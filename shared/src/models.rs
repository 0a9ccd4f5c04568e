//! Data models for the Smart Fitness Planner

use crate::errors::ParseError;
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Training goal; selects which catalog and calorie adjustment apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight_loss" => Ok(Goal::WeightLoss),
            "muscle_gain" => Ok(Goal::MuscleGain),
            "maintenance" => Ok(Goal::Maintenance),
            other => Err(ParseError::UnknownGoal(other.to_string())),
        }
    }
}

/// Self-reported gender; only `female` changes the BMR constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ParseError::UnknownGender(s.to_string())),
        }
    }
}

/// Named weekday of a plan. Names are exact capitalized English strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Monday first
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// 0-based position, Monday = 0
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Day> {
        Day::ALL.get(index).copied()
    }

    /// The day before, wrapping Monday back to Sunday
    pub fn previous(&self) -> Day {
        Day::ALL[(self.index() + 6) % 7]
    }

    pub fn from_weekday(weekday: Weekday) -> Day {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }

    /// Accepts either an exact day name or a 0-based index ("0" = Monday)
    pub fn parse_ref(value: &str) -> Result<Day, ParseError> {
        if let Ok(index) = value.parse::<usize>() {
            return Day::from_index(index).ok_or_else(|| ParseError::UnknownDay(value.to_string()));
        }
        value.parse()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .iter()
            .find(|d| d.as_str() == s)
            .copied()
            .ok_or_else(|| ParseError::UnknownDay(s.to_string()))
    }
}

/// Meal slot of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealType::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| ParseError::UnknownMealType(s.to_string()))
    }
}

/// User profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: Option<Gender>,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    pub goal: Goal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Catalog exercise, embedded by value in a day's plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub instructions: String,
    #[serde(default, alias = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

/// Catalog meal, embedded by value in a day's meal set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealOption {
    pub name: String,
    pub calories: u32,
    pub description: String,
}

/// One day of meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMealSet {
    pub breakfast: MealOption,
    pub lunch: MealOption,
    pub dinner: MealOption,
    /// One or two items
    pub snacks: Vec<MealOption>,
    /// Sum of the selected items' catalog calories
    #[serde(alias = "totalCalories")]
    pub total_calories: u32,
}

impl DailyMealSet {
    pub fn new(
        breakfast: MealOption,
        lunch: MealOption,
        dinner: MealOption,
        snacks: Vec<MealOption>,
    ) -> Self {
        let snack_calories: u32 = snacks.iter().map(|s| s.calories).sum();
        let total_calories = breakfast.calories + lunch.calories + dinner.calories + snack_calories;
        Self {
            breakfast,
            lunch,
            dinner,
            snacks,
            total_calories,
        }
    }

    /// Calories of a single slot; the snacks slot covers every snack item
    pub fn slot_calories(&self, meal: MealType) -> u32 {
        match meal {
            MealType::Breakfast => self.breakfast.calories,
            MealType::Lunch => self.lunch.calories,
            MealType::Dinner => self.dinner.calories,
            MealType::Snacks => self.snacks.iter().map(|s| s.calories).sum(),
        }
    }
}

/// Which exercise indices and meal slots have been marked done
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedStatus {
    #[serde(default)]
    pub exercises: BTreeSet<usize>,
    #[serde(default)]
    pub meals: BTreeSet<MealType>,
}

impl CompletedStatus {
    /// Add or remove an exercise index. Returns whether the set changed.
    pub fn set_exercise(&mut self, index: usize, completed: bool) -> bool {
        if completed {
            self.exercises.insert(index)
        } else {
            self.exercises.remove(&index)
        }
    }

    /// Add or remove a meal slot. Returns whether the set changed.
    pub fn set_meal(&mut self, meal: MealType, completed: bool) -> bool {
        if completed {
            self.meals.insert(meal)
        } else {
            self.meals.remove(&meal)
        }
    }

    pub fn is_exercise_completed(&self, index: usize) -> bool {
        self.exercises.contains(&index)
    }

    pub fn is_meal_completed(&self, meal: MealType) -> bool {
        self.meals.contains(&meal)
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty() && self.meals.is_empty()
    }
}

/// One day's plan for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlanEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub day: Day,
    pub exercises: Vec<Exercise>,
    /// Absent only when the stored value could not be decoded
    pub meals: Option<DailyMealSet>,
    pub completed_status: CompletedStatus,
}

/// Body weight recorded for one date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub weight_kg: f64,
    pub recorded_date: NaiveDate,
    pub notes: Option<String>,
}
