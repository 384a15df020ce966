//! Overtime policies. The timesheet only depends on the trait, so other
//! labor regimes can plug in their own split.

use crate::models::period::Period;
use serde::Serialize;

pub const DEFAULT_WEEKLY_STANDARD_HOURS: i64 = 40;

#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OvertimeSplit {
    pub regular: i64,
    pub overtime: i64,
}

pub trait OvertimePolicy {
    fn compute_overtime(&self, worked_minutes: i64, period: &Period) -> OvertimeSplit;
}

/// Flat weekly allowance: `weekly_hours × started weeks`, everything above is overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearWeeklyOvertime {
    pub weekly_minutes: i64,
}

impl Default for LinearWeeklyOvertime {
    fn default() -> Self {
        Self::from_hours(DEFAULT_WEEKLY_STANDARD_HOURS)
    }
}

impl LinearWeeklyOvertime {
    pub fn from_hours(hours: i64) -> Self {
        Self {
            weekly_minutes: hours * 60,
        }
    }

    pub fn allowance_minutes(&self, period: &Period) -> i64 {
        self.weekly_minutes * period.length_weeks()
    }
}

impl OvertimePolicy for LinearWeeklyOvertime {
    fn compute_overtime(&self, worked_minutes: i64, period: &Period) -> OvertimeSplit {
        let allowance = self.allowance_minutes(period);
        let overtime = (worked_minutes - allowance).max(0);
        OvertimeSplit {
            regular: worked_minutes - overtime,
            overtime,
        }
    }
}
