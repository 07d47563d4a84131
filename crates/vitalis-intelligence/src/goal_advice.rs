// ABOUTME: Static advice lookup keyed by health goal id
// ABOUTME: Unknown goal ids fall back to a generic suggestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vitalis_core::models::{AnswerOption, Goal};

/// Advice returned for goal ids without a dedicated entry
pub const GENERIC_GOAL_ADVICE: &str =
    "Set a specific, measurable target and review your progress every few weeks.";

const GOAL_ADVICE: &[(Goal, &str)] = &[
    (
        Goal::WeightLoss,
        "Aim for a moderate calorie deficit of about 20% and keep protein high to preserve muscle.",
    ),
    (
        Goal::MuscleGain,
        "Eat in a small calorie surplus, train each muscle group twice a week, and prioritize protein.",
    ),
    (
        Goal::OverallHealth,
        "Combine regular movement, whole-food meals, and consistent sleep for broad health benefits.",
    ),
    (
        Goal::Endurance,
        "Build aerobic volume gradually, keeping most sessions at an easy conversational pace.",
    ),
    (
        Goal::Flexibility,
        "Stretch or do mobility work most days, holding each position for 30 seconds or more.",
    ),
    (
        Goal::StressReduction,
        "Schedule daily downtime and try breathing exercises, meditation, or time outdoors.",
    ),
    (
        Goal::BetterSleep,
        "Keep a fixed sleep schedule, a dark cool bedroom, and avoid screens before bed.",
    ),
];

/// Advice for one goal id
#[must_use]
pub fn advice_for(goal_id: &str) -> &'static str {
    Goal::from_id(goal_id)
        .and_then(|goal| {
            GOAL_ADVICE
                .iter()
                .find(|(candidate, _)| *candidate == goal)
                .map(|(_, advice)| *advice)
        })
        .unwrap_or(GENERIC_GOAL_ADVICE)
}

/// Advice for each goal id, in the order given
#[must_use]
pub fn get_health_goal_advice<S: AsRef<str>>(goals: &[S]) -> Vec<String> {
    goals
        .iter()
        .map(|goal| advice_for(goal.as_ref()).to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_goal_has_dedicated_advice() {
        for goal in Goal::ALL {
            assert_ne!(advice_for(goal.id()), GENERIC_GOAL_ADVICE, "{goal}");
        }
    }
}
