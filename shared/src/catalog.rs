//! Goal-keyed exercise and meal catalogs
//!
//! The tables are compiled in as `&'static` data. [`Catalog::builtin`] turns
//! them into owned entries once at startup; selectors borrow the result.

use crate::models::{Exercise, Goal, MealOption, MealType};

struct ExerciseTemplate {
    name: &'static str,
    sets: u32,
    reps: u32,
    instructions: &'static str,
    duration_minutes: Option<u32>,
}

struct MealTemplate {
    name: &'static str,
    calories: u32,
    description: &'static str,
}

const fn ex(name: &'static str, sets: u32, reps: u32, instructions: &'static str) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        sets,
        reps,
        instructions,
        duration_minutes: None,
    }
}

const fn timed(
    name: &'static str,
    sets: u32,
    instructions: &'static str,
    duration_minutes: u32,
) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        sets,
        reps: 1,
        instructions,
        duration_minutes: Some(duration_minutes),
    }
}

const fn meal(name: &'static str, calories: u32, description: &'static str) -> MealTemplate {
    MealTemplate {
        name,
        calories,
        description,
    }
}

// ============================================================================
// Exercises
// ============================================================================

const WEIGHT_LOSS_EXERCISES: &[ExerciseTemplate] = &[
    timed("Cardio: Running", 1, "Run at moderate pace for 30 minutes", 30),
    ex("Jumping Jacks", 3, 20, "Perform jumping jacks with full arm extension"),
    ex("Burpees", 3, 10, "Full burpee with push-up and jump"),
    ex("Mountain Climbers", 3, 20, "Alternate legs quickly in plank position"),
    ex("High Knees", 3, 30, "Run in place bringing knees to chest"),
    timed("Plank", 3, "Hold plank position for 60 seconds", 60),
    ex("Squats", 3, 15, "Bodyweight squats with proper form"),
    ex("Lunges", 3, 12, "Alternating forward lunges"),
];

const MUSCLE_GAIN_EXERCISES: &[ExerciseTemplate] = &[
    ex("Push-ups", 4, 12, "Standard push-ups, full range of motion"),
    ex("Pull-ups", 4, 8, "If unavailable, use resistance bands or lat pulldowns"),
    ex("Squats", 4, 12, "Bodyweight or weighted squats"),
    ex("Deadlifts", 3, 10, "Use proper form, start with bodyweight or light weights"),
    ex("Bench Press", 4, 10, "Use dumbbells or barbell if available"),
    ex("Shoulder Press", 3, 12, "Overhead press with dumbbells or resistance bands"),
    ex("Bicep Curls", 3, 12, "Dumbbell or resistance band curls"),
    ex("Tricep Dips", 3, 12, "Use chair or bench for support"),
    timed("Plank", 3, "Hold for 45 seconds", 45),
    ex("Leg Raises", 3, 15, "Lying leg raises for core strength"),
];

const MAINTENANCE_EXERCISES: &[ExerciseTemplate] = &[
    timed("Cardio: Brisk Walk", 1, "Walk at brisk pace for 30 minutes", 30),
    ex("Push-ups", 3, 10, "Standard push-ups"),
    ex("Squats", 3, 12, "Bodyweight squats"),
    timed("Plank", 3, "Hold for 45 seconds", 45),
    timed("Yoga Flow", 1, "20-minute yoga session focusing on flexibility", 20),
    ex("Lunges", 3, 10, "Alternating lunges"),
    timed("Stretching", 1, "Full body stretching routine for 15 minutes", 15),
];

// ============================================================================
// Meals
// ============================================================================

const WEIGHT_LOSS_BREAKFAST: &[MealTemplate] = &[
    meal("Greek Yogurt with Berries", 250, "1 cup Greek yogurt, 1/2 cup mixed berries, 1 tbsp honey"),
    meal("Oatmeal with Fruits", 280, "1 cup cooked oatmeal, 1/2 banana, 1/4 cup blueberries, 1 tbsp almond butter"),
    meal("Scrambled Eggs with Vegetables", 270, "2 eggs, spinach, tomatoes, mushrooms, whole grain toast"),
    meal("Smoothie Bowl", 260, "Blended fruits, Greek yogurt, granola, chia seeds"),
];

const MUSCLE_GAIN_BREAKFAST: &[MealTemplate] = &[
    meal("Protein Pancakes", 450, "Protein powder pancakes with banana and berries, 2 eggs"),
    meal("Egg Scramble with Toast", 480, "3 eggs, whole grain toast, avocado, turkey bacon"),
    meal("Oatmeal with Protein", 470, "Oatmeal, protein powder, nuts, fruits"),
    meal("Breakfast Burrito", 460, "Whole grain tortilla, eggs, black beans, cheese, vegetables"),
];

const MAINTENANCE_BREAKFAST: &[MealTemplate] = &[
    meal("Avocado Toast with Eggs", 350, "Whole grain toast, avocado, 2 poached eggs"),
    meal("Yogurt Parfait", 340, "Greek yogurt, granola, mixed fruits, nuts"),
    meal("Breakfast Bowl", 360, "Quinoa, eggs, vegetables, feta cheese"),
    meal("French Toast", 350, "Whole grain bread, eggs, berries, maple syrup"),
];

const WEIGHT_LOSS_LUNCH: &[MealTemplate] = &[
    meal("Grilled Chicken Salad", 350, "Grilled chicken breast, mixed greens, vegetables, light dressing"),
    meal("Quinoa Bowl", 380, "Quinoa, roasted vegetables, chickpeas, tahini dressing"),
    meal("Turkey Wrap", 340, "Whole grain wrap, turkey, vegetables, hummus"),
    meal("Vegetable Soup with Protein", 360, "Lentil soup, grilled chicken, whole grain bread"),
];

const MUSCLE_GAIN_LUNCH: &[MealTemplate] = &[
    meal("Chicken and Rice Bowl", 550, "Grilled chicken, brown rice, vegetables, sauce"),
    meal("Beef Stir Fry", 580, "Lean beef, vegetables, brown rice or noodles"),
    meal("Salmon with Sweet Potato", 560, "Grilled salmon, roasted sweet potato, vegetables"),
    meal("Turkey and Quinoa", 540, "Ground turkey, quinoa, vegetables, cheese"),
];

const MAINTENANCE_LUNCH: &[MealTemplate] = &[
    meal("Mediterranean Bowl", 450, "Quinoa, grilled chicken, vegetables, feta, olives"),
    meal("Pasta with Protein", 440, "Whole grain pasta, lean protein, vegetables, light sauce"),
    meal("Sandwich and Salad", 460, "Whole grain sandwich, side salad, protein"),
    meal("Buddha Bowl", 450, "Grains, protein, vegetables, healthy fats"),
];

const WEIGHT_LOSS_DINNER: &[MealTemplate] = &[
    meal("Baked Fish with Vegetables", 320, "White fish, roasted vegetables, quinoa"),
    meal("Turkey Meatballs with Zoodles", 340, "Lean turkey meatballs, zucchini noodles, marinara"),
    meal("Chicken and Vegetable Skewers", 330, "Grilled chicken, bell peppers, onions, side salad"),
    meal("Lentil Curry", 310, "Lentil curry, brown rice, vegetables"),
];

const MUSCLE_GAIN_DINNER: &[MealTemplate] = &[
    meal("Steak with Potatoes", 520, "Lean steak, roasted potatoes, vegetables"),
    meal("Chicken Pasta", 540, "Grilled chicken, whole grain pasta, vegetables, sauce"),
    meal("Salmon with Rice", 510, "Grilled salmon, brown rice, vegetables, avocado"),
    meal("Pork Tenderloin", 530, "Pork tenderloin, sweet potato, vegetables"),
];

const MAINTENANCE_DINNER: &[MealTemplate] = &[
    meal("Grilled Chicken with Sides", 420, "Grilled chicken, roasted vegetables, whole grain"),
    meal("Fish Tacos", 410, "Grilled fish, whole grain tortillas, vegetables, salsa"),
    meal("Stir Fry", 430, "Protein, vegetables, brown rice or noodles"),
    meal("Pizza Night", 420, "Thin crust pizza, vegetables, lean protein"),
];

const WEIGHT_LOSS_SNACKS: &[MealTemplate] = &[
    meal("Apple with Almond Butter", 150, "1 medium apple, 1 tbsp almond butter"),
    meal("Greek Yogurt", 120, "1 cup Greek yogurt with berries"),
    meal("Vegetable Sticks with Hummus", 130, "Carrots, celery, bell peppers with hummus"),
    meal("Protein Smoothie", 140, "Protein powder, almond milk, berries"),
];

const MUSCLE_GAIN_SNACKS: &[MealTemplate] = &[
    meal("Protein Shake", 200, "Protein powder, banana, milk, peanut butter"),
    meal("Trail Mix", 180, "Nuts, seeds, dried fruits"),
    meal("Greek Yogurt with Granola", 190, "Greek yogurt, granola, fruits"),
    meal("Protein Bar", 200, "High protein bar with nuts"),
];

const MAINTENANCE_SNACKS: &[MealTemplate] = &[
    meal("Mixed Nuts", 160, "Almonds, walnuts, cashews"),
    meal("Fruit and Cheese", 150, "Apple slices with cheese"),
    meal("Rice Cakes with Toppings", 140, "Rice cakes, avocado, or nut butter"),
    meal("Smoothie", 150, "Fruits, yogurt, milk"),
];

fn exercise_table(goal: Goal) -> &'static [ExerciseTemplate] {
    match goal {
        Goal::WeightLoss => WEIGHT_LOSS_EXERCISES,
        Goal::MuscleGain => MUSCLE_GAIN_EXERCISES,
        Goal::Maintenance => MAINTENANCE_EXERCISES,
    }
}

fn meal_table(goal: Goal, slot: MealType) -> &'static [MealTemplate] {
    match (goal, slot) {
        (Goal::WeightLoss, MealType::Breakfast) => WEIGHT_LOSS_BREAKFAST,
        (Goal::WeightLoss, MealType::Lunch) => WEIGHT_LOSS_LUNCH,
        (Goal::WeightLoss, MealType::Dinner) => WEIGHT_LOSS_DINNER,
        (Goal::WeightLoss, MealType::Snacks) => WEIGHT_LOSS_SNACKS,
        (Goal::MuscleGain, MealType::Breakfast) => MUSCLE_GAIN_BREAKFAST,
        (Goal::MuscleGain, MealType::Lunch) => MUSCLE_GAIN_LUNCH,
        (Goal::MuscleGain, MealType::Dinner) => MUSCLE_GAIN_DINNER,
        (Goal::MuscleGain, MealType::Snacks) => MUSCLE_GAIN_SNACKS,
        (Goal::Maintenance, MealType::Breakfast) => MAINTENANCE_BREAKFAST,
        (Goal::Maintenance, MealType::Lunch) => MAINTENANCE_LUNCH,
        (Goal::Maintenance, MealType::Dinner) => MAINTENANCE_DINNER,
        (Goal::Maintenance, MealType::Snacks) => MAINTENANCE_SNACKS,
    }
}

/// Meal options of one goal, per slot
#[derive(Debug, Clone)]
pub struct MealCatalog {
    pub breakfast: Vec<MealOption>,
    pub lunch: Vec<MealOption>,
    pub dinner: Vec<MealOption>,
    pub snacks: Vec<MealOption>,
}

impl MealCatalog {
    pub fn slot(&self, slot: MealType) -> &[MealOption] {
        match slot {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snacks => &self.snacks,
        }
    }
}

/// Catalog entries of one goal
#[derive(Debug, Clone)]
pub struct GoalCatalog {
    pub exercises: Vec<Exercise>,
    pub meals: MealCatalog,
}

/// Read-only lookup of catalog entries keyed by goal
#[derive(Debug, Clone)]
pub struct Catalog {
    weight_loss: GoalCatalog,
    muscle_gain: GoalCatalog,
    maintenance: GoalCatalog,
}

impl Catalog {
    /// Build the compiled-in catalog
    pub fn builtin() -> Self {
        Self {
            weight_loss: build_goal(Goal::WeightLoss),
            muscle_gain: build_goal(Goal::MuscleGain),
            maintenance: build_goal(Goal::Maintenance),
        }
    }

    pub fn for_goal(&self, goal: Goal) -> &GoalCatalog {
        match goal {
            Goal::WeightLoss => &self.weight_loss,
            Goal::MuscleGain => &self.muscle_gain,
            Goal::Maintenance => &self.maintenance,
        }
    }

    pub fn exercises(&self, goal: Goal) -> &[Exercise] {
        &self.for_goal(goal).exercises
    }

    pub fn meals(&self, goal: Goal, slot: MealType) -> &[MealOption] {
        self.for_goal(goal).meals.slot(slot)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn build_goal(goal: Goal) -> GoalCatalog {
    let meals = |slot: MealType| -> Vec<MealOption> {
        meal_table(goal, slot).iter().map(to_meal).collect()
    };
    GoalCatalog {
        exercises: exercise_table(goal).iter().map(to_exercise).collect(),
        meals: MealCatalog {
            breakfast: meals(MealType::Breakfast),
            lunch: meals(MealType::Lunch),
            dinner: meals(MealType::Dinner),
            snacks: meals(MealType::Snacks),
        },
    }
}

fn to_exercise(t: &ExerciseTemplate) -> Exercise {
    Exercise {
        name: t.name.to_string(),
        sets: t.sets,
        reps: t.reps,
        instructions: t.instructions.to_string(),
        duration_minutes: t.duration_minutes,
    }
}

fn to_meal(t: &MealTemplate) -> MealOption {
    MealOption {
        name: t.name.to_string(),
        calories: t.calories,
        description: t.description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exercise_catalog_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.exercises(Goal::WeightLoss).len(), 8);
        assert_eq!(catalog.exercises(Goal::MuscleGain).len(), 10);
        assert_eq!(catalog.exercises(Goal::Maintenance).len(), 7);
    }

    #[test]
    fn test_exercise_names_unique_within_goal() {
        let catalog = Catalog::builtin();
        for goal in Goal::ALL {
            let names: HashSet<_> = catalog.exercises(goal).iter().map(|e| &e.name).collect();
            assert_eq!(names.len(), catalog.exercises(goal).len(), "{goal}");
        }
    }

    #[test]
    fn test_every_meal_slot_populated() {
        let catalog = Catalog::builtin();
        for goal in Goal::ALL {
            for slot in MealType::ALL {
                assert!(!catalog.meals(goal, slot).is_empty(), "{goal} {slot}");
            }
        }
    }

    #[test]
    fn test_timed_entries_carry_duration() {
        let catalog = Catalog::builtin();
        let walk = &catalog.exercises(Goal::Maintenance)[0];
        assert_eq!(walk.name, "Cardio: Brisk Walk");
        assert_eq!(walk.duration_minutes, Some(30));
        assert_eq!(walk.reps, 1);
    }
}
