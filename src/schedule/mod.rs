use crate::config::ScheduleConfig;
use anyhow::{Result, bail};

/// The active workout split. Persisted as its day count (4 or 6).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    FourDay,
    SixDay,
}

impl Mode {
    pub fn days(self) -> u64 {
        match self {
            Mode::FourDay => 4,
            Mode::SixDay => 6,
        }
    }

    pub fn from_days(days: u64) -> Option<Self> {
        match days {
            4 => Some(Mode::FourDay),
            6 => Some(Mode::SixDay),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Workout(String),
    Rest,
}

/// A per-mode mapping from weekday (0 = Monday .. 6 = Sunday) to a workout
/// label or rest. Total: every weekday has exactly one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    slots: [Option<String>; 7],
}

impl DayPlan {
    fn from_active_days(days: &[(usize, &str)]) -> Self {
        let mut slots: [Option<String>; 7] = Default::default();
        for (weekday, label) in days {
            slots[*weekday] = Some((*label).to_string());
        }
        Self { slots }
    }

    fn from_slots(slots: Vec<Option<String>>) -> Result<Self> {
        let len = slots.len();
        let slots: [Option<String>; 7] = slots
            .try_into()
            .map_err(|_| anyhow::anyhow!("day plan must have 7 entries, got {}", len))?;
        Ok(Self { slots })
    }

    /// The shipped 4-day default: alternating pattern over Tue, Thu, Sat
    /// and Mon, with Wed/Fri/Sun rest.
    pub fn four_day_split() -> Self {
        Self::from_active_days(&[
            (1, "Chest & Triceps"),
            (3, "Back & Biceps"),
            (5, "Shoulders & Abs"),
            (0, "Legs"),
        ])
    }

    /// Alternate 4-day preset: a plain Monday-start rotation, Fri–Sun rest.
    pub fn four_day_rotation() -> Self {
        Self::from_active_days(&[
            (0, "Chest & Triceps & Abs"),
            (1, "Back & Biceps"),
            (2, "Shoulders & Chest"),
            (3, "Legs & Arms"),
        ])
    }

    /// 6-day split: Monday through Saturday, Sunday rest.
    pub fn six_day_split() -> Self {
        Self::from_active_days(&[
            (0, "Chest"),
            (1, "Back"),
            (2, "Shoulders"),
            (3, "Arms"),
            (4, "Legs"),
            (5, "Abs & Cardio"),
        ])
    }

    pub fn resolve(&self, weekday: u32) -> Outcome {
        match self.slots.get(weekday as usize) {
            Some(Some(label)) => Outcome::Workout(label.clone()),
            _ => Outcome::Rest,
        }
    }

    pub fn workout_days(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// The authoritative day tables for both modes. Built from configuration so
/// tests and users can substitute their own tables instead of editing code.
#[derive(Debug, Clone)]
pub struct PlanTable {
    four_day: DayPlan,
    six_day: DayPlan,
}

impl Default for PlanTable {
    fn default() -> Self {
        Self {
            four_day: DayPlan::four_day_split(),
            six_day: DayPlan::six_day_split(),
        }
    }
}

impl PlanTable {
    pub fn from_config(config: &ScheduleConfig) -> Result<Self> {
        let four_day = if let Some(slots) = &config.four_day {
            DayPlan::from_slots(slots.clone())?
        } else {
            match config.four_day_preset.as_str() {
                "split" => DayPlan::four_day_split(),
                "rotation" => DayPlan::four_day_rotation(),
                other => bail!("unknown fourDayPreset: {} (expected split or rotation)", other),
            }
        };
        let six_day = if let Some(slots) = &config.six_day {
            DayPlan::from_slots(slots.clone())?
        } else {
            DayPlan::six_day_split()
        };
        Ok(Self { four_day, six_day })
    }

    pub fn plan(&self, mode: Mode) -> &DayPlan {
        match mode {
            Mode::FourDay => &self.four_day,
            Mode::SixDay => &self.six_day,
        }
    }

    /// Today's entry for the given mode. Pure and total: every
    /// (mode, weekday) pair yields exactly one outcome.
    pub fn resolve(&self, mode: Mode, weekday: u32) -> Outcome {
        self.plan(mode).resolve(weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_days() {
        assert_eq!(Mode::from_days(4), Some(Mode::FourDay));
        assert_eq!(Mode::from_days(6), Some(Mode::SixDay));
        assert_eq!(Mode::from_days(5), None);
        assert_eq!(Mode::FourDay.days(), 4);
        assert_eq!(Mode::SixDay.days(), 6);
    }

    #[test]
    fn default_mode_is_four_day() {
        assert_eq!(Mode::default(), Mode::FourDay);
    }

    #[test]
    fn resolve_is_total_and_deterministic() {
        let table = PlanTable::default();
        for mode in [Mode::FourDay, Mode::SixDay] {
            for weekday in 0..7 {
                let first = table.resolve(mode, weekday);
                let second = table.resolve(mode, weekday);
                assert_eq!(first, second, "mode={:?} weekday={}", mode, weekday);
            }
        }
    }

    #[test]
    fn six_day_rests_on_sunday_only() {
        let table = PlanTable::default();
        let mut labels = Vec::new();
        for weekday in 0..6 {
            match table.resolve(Mode::SixDay, weekday) {
                Outcome::Workout(label) => labels.push(label),
                Outcome::Rest => panic!("weekday {} should be a workout day", weekday),
            }
        }
        // Six distinct labels in a fixed order
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), 6);
        assert_eq!(labels[0], "Chest");
        assert_eq!(labels[5], "Abs & Cardio");
        assert_eq!(table.resolve(Mode::SixDay, 6), Outcome::Rest);
    }

    #[test]
    fn four_day_split_has_exactly_four_workout_days() {
        let plan = DayPlan::four_day_split();
        assert_eq!(plan.workout_days(), 4);
        // Active days: Mon, Tue, Thu, Sat
        assert_eq!(plan.resolve(0), Outcome::Workout("Legs".into()));
        assert_eq!(plan.resolve(1), Outcome::Workout("Chest & Triceps".into()));
        assert_eq!(plan.resolve(2), Outcome::Rest);
        assert_eq!(plan.resolve(3), Outcome::Workout("Back & Biceps".into()));
        assert_eq!(plan.resolve(4), Outcome::Rest);
        assert_eq!(plan.resolve(5), Outcome::Workout("Shoulders & Abs".into()));
        assert_eq!(plan.resolve(6), Outcome::Rest);
    }

    #[test]
    fn four_day_rotation_preset_runs_monday_to_thursday() {
        let plan = DayPlan::four_day_rotation();
        assert_eq!(plan.workout_days(), 4);
        assert_eq!(
            plan.resolve(0),
            Outcome::Workout("Chest & Triceps & Abs".into())
        );
        assert_eq!(plan.resolve(3), Outcome::Workout("Legs & Arms".into()));
        for weekday in 4..7 {
            assert_eq!(plan.resolve(weekday), Outcome::Rest);
        }
    }

    #[test]
    fn plan_table_from_config_selects_preset() {
        let config = ScheduleConfig {
            four_day_preset: "rotation".to_string(),
            ..Default::default()
        };
        let table = PlanTable::from_config(&config).unwrap();
        assert_eq!(
            table.resolve(Mode::FourDay, 0),
            Outcome::Workout("Chest & Triceps & Abs".into())
        );
    }

    #[test]
    fn plan_table_from_config_rejects_unknown_preset() {
        let config = ScheduleConfig {
            four_day_preset: "fivebyfive".to_string(),
            ..Default::default()
        };
        assert!(PlanTable::from_config(&config).is_err());
    }

    #[test]
    fn plan_table_from_config_accepts_explicit_table() {
        let config = ScheduleConfig {
            four_day: Some(vec![
                Some("Push".into()),
                None,
                Some("Pull".into()),
                None,
                Some("Legs".into()),
                None,
                Some("Core".into()),
            ]),
            ..Default::default()
        };
        let table = PlanTable::from_config(&config).unwrap();
        assert_eq!(table.resolve(Mode::FourDay, 0), Outcome::Workout("Push".into()));
        assert_eq!(table.resolve(Mode::FourDay, 1), Outcome::Rest);
        assert_eq!(table.resolve(Mode::FourDay, 6), Outcome::Workout("Core".into()));
    }

    #[test]
    fn plan_table_from_config_rejects_short_table() {
        let config = ScheduleConfig {
            six_day: Some(vec![Some("Chest".into()), None]),
            ..Default::default()
        };
        assert!(PlanTable::from_config(&config).is_err());
    }

    #[test]
    fn out_of_range_weekday_is_rest() {
        let table = PlanTable::default();
        assert_eq!(table.resolve(Mode::SixDay, 7), Outcome::Rest);
    }
}
