use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    GainWeight,
    Recomp,
    Maintain,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProfileParams {
    #[validate(range(exclusive_min = 0.0, message = "weight_kg must be positive"))]
    pub weight_kg: f64,
    #[validate(range(exclusive_min = 0.0, message = "height_cm must be positive"))]
    pub height_cm: f64,
    #[validate(range(min = 1, max = 130, message = "age must be between 1 and 130"))]
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct EnergyGoals {
    pub bmr: i64,
    pub tdee: i64,
    pub calorie_goal: i64,
}

/// Mifflin-St Jeor equation, in kcal per day.
fn basal_metabolic_rate(params: &ProfileParams) -> f64 {
    let base = 10.0 * params.weight_kg + 6.25 * params.height_cm - 5.0 * f64::from(params.age);
    match params.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

pub fn calculate(params: &ProfileParams) -> EnergyGoals {
    let bmr = basal_metabolic_rate(params);
    let tdee = bmr * params.activity_level.factor();

    let calorie_goal = match params.goal {
        Goal::LoseWeight => tdee - 500.0,
        Goal::GainWeight => tdee + 500.0,
        Goal::Recomp | Goal::Maintain => tdee,
    };

    EnergyGoals {
        bmr: bmr.round() as i64,
        tdee: tdee.round() as i64,
        calorie_goal: calorie_goal.round() as i64,
    }
}
