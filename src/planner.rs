use crate::config::PlannerParams;
use crate::metrics::BmiCategory;
use crate::units::KG_PER_LB;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Goal {
    Gain,
    Maintain,
    Lose,
}

impl Goal {
    fn verb(&self) -> &'static str {
        match self {
            Self::Gain => "gain",
            Self::Maintain => "maintain",
            Self::Lose => "lose",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    pub goal: Goal,
    /// Signed change to daily intake, kcal.
    pub calorie_delta: i64,
    /// Signed expected change per week, lb.
    pub weekly_delta_lb: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryPoint {
    pub week: u32,
    pub projected_weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightPlan {
    pub goal: Goal,
    pub weekly_delta_kg: f64,
    pub target_daily_calories: Option<i64>,
    pub trajectory: Vec<TrajectoryPoint>,
}

pub fn plan_goal(category: BmiCategory, params: &PlannerParams) -> GoalPlan {
    let (goal, calorie_delta) = match category {
        BmiCategory::Underweight => (Goal::Gain, params.calorie_adjustment),
        BmiCategory::Normal => (Goal::Maintain, 0),
        BmiCategory::Overweight
        | BmiCategory::ObeseI
        | BmiCategory::ObeseII
        | BmiCategory::ObeseIII => (Goal::Lose, params.calorie_adjustment.saturating_neg()),
    };

    GoalPlan {
        goal,
        calorie_delta,
        weekly_delta_lb: calorie_delta as f64 * 7.0 / params.kcal_per_lb,
    }
}

/// Week-by-week weight for `weeks` weeks, `weeks + 1` points including week 0.
/// Maintain produces no trajectory and no calorie target.
pub fn project_trajectory(
    start_weight_kg: f64,
    goal_plan: &GoalPlan,
    daily_calories: i64,
    weeks: u32,
) -> WeightPlan {
    let weekly_delta_kg = goal_plan.weekly_delta_lb * KG_PER_LB;

    if goal_plan.goal == Goal::Maintain {
        return WeightPlan {
            goal: Goal::Maintain,
            weekly_delta_kg,
            target_daily_calories: None,
            trajectory: Vec::new(),
        };
    }

    let trajectory = (0..=weeks)
        .map(|week| TrajectoryPoint {
            week,
            projected_weight_kg: start_weight_kg + week as f64 * weekly_delta_kg,
        })
        .collect();

    WeightPlan {
        goal: goal_plan.goal,
        weekly_delta_kg,
        target_daily_calories: Some(daily_calories.saturating_add(goal_plan.calorie_delta)),
        trajectory,
    }
}

impl WeightPlan {
    pub fn weeks(&self) -> u32 {
        self.trajectory.last().map(|p| p.week).unwrap_or(0)
    }

    /// `None` when there is nothing to chart.
    pub fn chart_title(&self) -> Option<String> {
        let kind = match self.goal {
            Goal::Gain => "Gain",
            Goal::Lose => "Loss",
            Goal::Maintain => return None,
        };
        Some(format!("{}-Week Weight {} Projection", self.weeks(), kind))
    }

    pub fn weekly_summary(&self) -> Option<String> {
        if self.goal == Goal::Maintain {
            return None;
        }
        let lb = self.weekly_delta_kg.abs() / KG_PER_LB;
        Some(format!(
            "This would result in approximately {:.1} lb ({:.1} kg) {} per week.",
            lb,
            self.weekly_delta_kg.abs(),
            self.goal.verb()
        ))
    }

    pub fn final_weight_kg(&self) -> Option<f64> {
        self.trajectory.last().map(|p| p.projected_weight_kg)
    }
}
