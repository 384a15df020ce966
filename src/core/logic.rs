use crate::config::Config;
use crate::core::calculator::daily_hours::{self, DailyHoursReport, OpenPunchPolicy};
use crate::core::calculator::overtime::LinearWeeklyOvertime;
use crate::core::calculator::timesheet;
use crate::core::compliance::{self, Subject};
use crate::core::tz::Normalizer;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::models::compliance::{ComplianceRule, ComplianceViolation};
use crate::models::period::Period;
use crate::models::shift::Shift;
use crate::models::timesheet::TimesheetTotals;

/// Engine knobs resolved from the configuration file.
#[derive(Debug, Clone, Copy)]
pub struct EngineSettings {
    pub normalizer: Normalizer,
    pub overtime: LinearWeeklyOvertime,
    pub open_punch: OpenPunchPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            normalizer: Normalizer::default(),
            overtime: LinearWeeklyOvertime::default(),
            open_punch: OpenPunchPolicy::Drop,
        }
    }
}

impl EngineSettings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            normalizer: Normalizer::from_name(&cfg.timezone)?,
            overtime: LinearWeeklyOvertime::from_hours(cfg.weekly_standard_hours),
            open_punch: if cfg.clip_open_daily_punches {
                OpenPunchPolicy::ClipToPeriodEnd
            } else {
                OpenPunchPolicy::Drop
            },
        })
    }
}

pub struct Core;

impl Core {
    pub fn build_daily_report(
        settings: &EngineSettings,
        events: &[ClockEvent],
        shifts: &[Shift],
        period: &Period,
    ) -> DailyHoursReport {
        daily_hours::aggregate_with_report(
            events,
            shifts,
            period,
            &settings.normalizer,
            settings.open_punch,
        )
    }

    pub fn build_timesheet(
        settings: &EngineSettings,
        events: &[ClockEvent],
        shifts: &[Shift],
        period: &Period,
    ) -> TimesheetTotals {
        timesheet::calculate_timesheet(
            events,
            shifts,
            period,
            &settings.normalizer,
            &settings.overtime,
        )
    }

    /// Aggregate the period, then evaluate every active rule against it.
    pub fn check_compliance(
        settings: &EngineSettings,
        subject: &Subject<'_>,
        rules: &[ComplianceRule],
        events: &[ClockEvent],
        shifts: &[Shift],
        period: &Period,
    ) -> Vec<ComplianceViolation> {
        let report = Self::build_daily_report(settings, events, shifts, period);
        compliance::evaluate(subject, rules, shifts, &report.days, &settings.normalizer)
    }
}
