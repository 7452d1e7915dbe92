use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five essay sections the workflow can draft.
///
/// The declaration order is the display and export order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Motivation,
    Academic,
    Internship,
    WhySchool,
    CareerGoal,
}

impl Module {
    /// Fixed display order, independent of selection or generation order.
    pub const ALL: [Module; 5] = [
        Module::Motivation,
        Module::Academic,
        Module::Internship,
        Module::WhySchool,
        Module::CareerGoal,
    ];

    /// Stable wire identifier used in routes and multipart fields.
    pub fn id(self) -> &'static str {
        match self {
            Module::Motivation => "motivation",
            Module::Academic => "academic",
            Module::Internship => "internship",
            Module::WhySchool => "why_school",
            Module::CareerGoal => "career_goal",
        }
    }

    /// Label shown to the advisor and used as the export block heading.
    pub fn label(self) -> &'static str {
        match self {
            Module::Motivation => "申请动机",
            Module::Academic => "本科学习经历",
            Module::Internship => "实习/工作经历",
            Module::WhySchool => "Why School",
            Module::CareerGoal => "职业规划",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown module '{0}' (expected one of motivation, academic, internship, why_school, career_goal)")]
pub struct UnknownModule(pub String);

impl FromStr for Module {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Module::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownModule(s.to_string()))
    }
}
