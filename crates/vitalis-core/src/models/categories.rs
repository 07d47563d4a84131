// ABOUTME: Categorical answer vocabulary for every select-style question
// ABOUTME: Typed enums with stable option ids, display labels, and lookup by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Each select-style question has a closed option set. Option ids are the
//! wire values stored in answer records; labels are what the questionnaire
//! shows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed option set of a select-style question
pub trait AnswerOption: Copy + Sized + 'static {
    /// Every option in display order
    const ALL: &'static [Self];

    /// Wire id stored in answer records
    fn id(self) -> &'static str;

    /// Human-readable label
    fn label(self) -> &'static str;

    /// Look an option up by wire id
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.id() == id)
    }

    /// All wire ids in display order
    fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(|option| option.id()).collect()
    }
}

macro_rules! answer_options {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => ($id:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $id)]
                $variant,
            )+
        }

        impl AnswerOption for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

answer_options! {
    /// Biological sex for BMR and body-fat estimation
    Gender {
        /// Male
        Male => ("male", "Male"),
        /// Female
        Female => ("female", "Female"),
    }
}

answer_options! {
    /// Daily activity level
    ActivityLevel {
        /// Little or no exercise
        Sedentary => ("sedentary", "Sedentary (little or no exercise)"),
        /// Light exercise 1-3 days/week
        Light => ("light", "Lightly active (1-3 days/week)"),
        /// Moderate exercise 3-5 days/week
        Moderate => ("moderate", "Moderately active (3-5 days/week)"),
        /// Hard exercise 6-7 days/week
        Active => ("active", "Very active (6-7 days/week)"),
        /// Hard daily training or a physical job
        VeryActive => ("veryActive", "Extra active (athlete or physical job)"),
    }
}

answer_options! {
    /// Health goal
    Goal {
        /// Lose body weight
        WeightLoss => ("weight-loss", "Lose weight"),
        /// Build muscle
        MuscleGain => ("muscle-gain", "Build muscle"),
        /// General health
        OverallHealth => ("overall-health", "Improve overall health"),
        /// Aerobic endurance
        Endurance => ("endurance", "Improve endurance"),
        /// Mobility and flexibility
        Flexibility => ("flexibility", "Increase flexibility"),
        /// Lower stress
        StressReduction => ("stress-reduction", "Reduce stress"),
        /// Better sleep
        BetterSleep => ("better-sleep", "Sleep better"),
    }
}

answer_options! {
    /// Preferred share of calories from carbohydrates
    CarbPreference {
        /// About 20% of non-protein calories
        VeryLow => ("very-low", "Very low carb"),
        /// About 35%
        Low => ("low", "Low carb"),
        /// About 50%
        Moderate => ("moderate", "Moderate carb"),
        /// About 65%
        High => ("high", "High carb"),
        /// About 80%
        VeryHigh => ("very-high", "Very high carb"),
    }
}

answer_options! {
    /// Typical exercise intensity
    ExerciseIntensity {
        /// Easy effort
        Light => ("light", "Light"),
        /// Conversational effort
        Moderate => ("moderate", "Moderate"),
        /// Hard effort
        Vigorous => ("vigorous", "Vigorous"),
        /// Maximal effort most sessions
        VeryIntense => ("very-intense", "Very intense"),
    }
}

answer_options! {
    /// Typical session duration
    ExerciseDuration {
        /// Under 30 minutes
        Under30 => ("under-30", "Less than 30 minutes"),
        /// 30 to 45 minutes
        From30To45 => ("30-45", "30-45 minutes"),
        /// 45 to 60 minutes
        From45To60 => ("45-60", "45-60 minutes"),
        /// Over an hour
        Over60 => ("60-plus", "More than 60 minutes"),
    }
}

answer_options! {
    /// Kind of exercise practiced
    ExerciseType {
        /// Running, cycling, swimming
        Cardio => ("cardio", "Cardio"),
        /// Resistance training
        Strength => ("strength", "Strength training"),
        /// Yoga, stretching, mobility
        Flexibility => ("flexibility", "Flexibility / yoga"),
        /// Team or racket sports
        Sports => ("sports", "Sports"),
        /// High-intensity intervals
        Hiit => ("hiit", "HIIT"),
    }
}

answer_options! {
    /// Self-rated diet quality
    DietQuality {
        /// Mostly processed food
        Unhealthy => ("unhealthy", "Mostly processed food"),
        /// Mixed
        Average => ("average", "Average"),
        /// Mostly whole foods
        Healthy => ("healthy", "Mostly whole foods"),
        /// Consistently balanced whole-food diet
        VeryHealthy => ("very-healthy", "Very healthy"),
    }
}

answer_options! {
    /// Meals per day
    MealFrequency {
        /// One or two meals
        OneToTwo => ("1-2", "1-2 meals"),
        /// Three or four meals
        ThreeToFour => ("3-4", "3-4 meals"),
        /// Five or more meals
        FivePlus => ("5-plus", "5 or more meals"),
    }
}

answer_options! {
    /// Timing of the last meal of the day
    LastMealTiming {
        /// Before 8pm
        Before8pm => ("before-8pm", "Before 8pm"),
        /// Between 8pm and 10pm
        From8To10pm => ("8-10pm", "Between 8pm and 10pm"),
        /// After 10pm
        After10pm => ("after-10pm", "After 10pm"),
    }
}

answer_options! {
    /// Nightly sleep duration
    SleepDuration {
        /// Under 5 hours
        Under5 => ("under-5", "Less than 5 hours"),
        /// 5 to 7 hours
        From5To7 => ("5-7", "5-7 hours"),
        /// 7 to 9 hours
        From7To9 => ("7-9", "7-9 hours"),
        /// Over 9 hours
        Over9 => ("over-9", "More than 9 hours"),
    }
}

answer_options! {
    /// Four-step self rating shared by sleep quality and recovery
    QualityRating {
        /// Poor
        Poor => ("poor", "Poor"),
        /// Fair
        Fair => ("fair", "Fair"),
        /// Good
        Good => ("good", "Good"),
        /// Excellent
        Excellent => ("excellent", "Excellent"),
    }
}

answer_options! {
    /// How often the user feels anxious, low, or overwhelmed
    DistressFrequency {
        /// Often
        Often => ("often", "Often"),
        /// Sometimes
        Sometimes => ("sometimes", "Sometimes"),
        /// Rarely
        Rarely => ("rarely", "Rarely"),
        /// Never
        Never => ("never", "Never"),
    }
}

answer_options! {
    /// How often the user spends time with others
    SocialFrequency {
        /// Rarely
        Rarely => ("rarely", "Rarely"),
        /// Occasionally
        Occasionally => ("occasionally", "Occasionally"),
        /// Regularly
        Regularly => ("regularly", "Regularly"),
        /// Frequently
        Frequently => ("frequently", "Frequently"),
    }
}

answer_options! {
    /// Perceived stress level
    StressLevel {
        /// Very high
        VeryHigh => ("very-high", "Very high"),
        /// High
        High => ("high", "High"),
        /// Moderate
        Moderate => ("moderate", "Moderate"),
        /// Low
        Low => ("low", "Low"),
    }
}
