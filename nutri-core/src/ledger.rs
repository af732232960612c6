//! Food, water and workout entries and the per-day progress derived from them.
//!
//! [`DailyProgress`] is never stored: it is recomputed from the entry
//! collections on every read, so removing an entry is all it takes to take
//! it out of the totals.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::metrics::{finite_or, percentage};
use crate::models::{FoodItem, MacroTargets, Macros, MealType, WaterLog, WorkoutLog};

/// Calendar day of a timestamp in the local timezone.
pub fn local_date(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub calories_consumed: u32,
    pub calories_burned: u32,
    pub macros: Macros,
    /// Liters
    pub water_consumed: f64,
    pub workouts_completed: usize,
}

/// Share of each macro target reached, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroPercents {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl DailyProgress {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            calories_consumed: 0,
            calories_burned: 0,
            macros: Macros::default(),
            water_consumed: 0.0,
            workouts_completed: 0,
        }
    }

    /// Consumed minus burned.
    pub fn net_calories(&self) -> i64 {
        i64::from(self.calories_consumed) - i64::from(self.calories_burned)
    }

    /// Net calories as a percentage of the daily target, capped at 100.
    pub fn calories_percent(&self, daily_calories: i32) -> f64 {
        percentage(self.net_calories() as f64, f64::from(daily_calories))
    }

    pub fn water_percent(&self, daily_water_goal: f64) -> f64 {
        percentage(self.water_consumed, daily_water_goal)
    }

    pub fn macro_percents(&self, targets: MacroTargets) -> MacroPercents {
        MacroPercents {
            protein: percentage(self.macros.protein, f64::from(targets.protein)),
            carbs: percentage(self.macros.carbs, f64::from(targets.carbs)),
            fat: percentage(self.macros.fat, f64::from(targets.fat)),
        }
    }
}

/// Sums the entries that fall on `date`.
///
/// Pure: same inputs, same output. Non-finite amounts in an entry count as
/// zero so a single bad record cannot turn the totals into NaN.
pub fn compute_daily_progress(
    date: NaiveDate,
    foods: &[FoodItem],
    water: &[WaterLog],
    workouts: &[WorkoutLog],
) -> DailyProgress {
    let mut progress = DailyProgress::empty(date);

    for food in foods.iter().filter(|f| local_date(f.timestamp) == date) {
        progress.calories_consumed = progress.calories_consumed.saturating_add(food.calories);
        progress.macros = progress.macros
            + Macros::new(
                finite_or(food.macros.carbs, 0.0),
                finite_or(food.macros.protein, 0.0),
                finite_or(food.macros.fat, 0.0),
            );
    }

    progress.water_consumed = water
        .iter()
        .filter(|w| local_date(w.timestamp) == date)
        .map(|w| finite_or(w.amount, 0.0))
        .sum();

    for workout in workouts.iter().filter(|w| local_date(w.date) == date) {
        progress.calories_burned = progress
            .calories_burned
            .saturating_add(workout.calories_burned);
        progress.workouts_completed += 1;
    }

    progress
}

/// The logged entries of the session, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyLedger {
    foods: Vec<FoodItem>,
    water: Vec<WaterLog>,
    workouts: Vec<WorkoutLog>,
}

impl DailyLedger {
    pub fn new(foods: Vec<FoodItem>, water: Vec<WaterLog>, workouts: Vec<WorkoutLog>) -> Self {
        Self {
            foods,
            water,
            workouts,
        }
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn water(&self) -> &[WaterLog] {
        &self.water
    }

    pub fn workouts(&self) -> &[WorkoutLog] {
        &self.workouts
    }

    pub fn add_food(&mut self, food: FoodItem) {
        self.foods.push(food);
    }

    pub fn add_water(&mut self, log: WaterLog) {
        self.water.push(log);
    }

    pub fn add_workout(&mut self, log: WorkoutLog) {
        self.workouts.push(log);
    }

    /// Removes a food by id. Unknown ids are ignored.
    pub fn remove_food(&mut self, id: Uuid) -> Option<FoodItem> {
        let index = self.foods.iter().position(|f| f.id == id)?;
        Some(self.foods.remove(index))
    }

    /// Removes a water entry by id. Unknown ids are ignored.
    pub fn remove_water(&mut self, id: Uuid) -> Option<WaterLog> {
        let index = self.water.iter().position(|w| w.id == id)?;
        Some(self.water.remove(index))
    }

    /// Removes a workout by id. Unknown ids are ignored.
    pub fn remove_workout(&mut self, id: Uuid) -> Option<WorkoutLog> {
        let index = self.workouts.iter().position(|w| w.id == id)?;
        Some(self.workouts.remove(index))
    }

    /// Foods of one meal on `date`, in the order they were logged.
    pub fn foods_by_meal(&self, meal_type: MealType, date: NaiveDate) -> Vec<&FoodItem> {
        self.foods
            .iter()
            .filter(|f| f.meal_type == meal_type && local_date(f.timestamp) == date)
            .collect()
    }

    pub fn progress_on(&self, date: NaiveDate) -> DailyProgress {
        compute_daily_progress(date, &self.foods, &self.water, &self.workouts)
    }

    /// Seven days of progress ending at `end`, oldest first.
    ///
    /// Days before the earliest representable date are left out.
    pub fn week_progress(&self, end: NaiveDate) -> Vec<DailyProgress> {
        (0..7)
            .rev()
            .filter_map(|offset| end.checked_sub_signed(Duration::days(offset)))
            .map(|date| self.progress_on(date))
            .collect()
    }

    /// Whether a catalogue exercise was logged on `date`.
    pub fn is_exercise_completed_on(&self, exercise_id: &str, date: NaiveDate) -> bool {
        self.workouts.iter().any(|w| {
            w.exercise_id.as_deref() == Some(exercise_id) && local_date(w.date) == date
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
        Local
            .from_local_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn food(name: &str, calories: u32, meal: MealType, date: NaiveDate) -> FoodItem {
        FoodItem::new(name, calories, Macros::new(10.0, 5.0, 2.0), meal).with_timestamp(at(date, 12))
    }

    fn sample_ledger() -> DailyLedger {
        let mut ledger = DailyLedger::default();
        ledger.add_food(food("Eggs", 150, MealType::Breakfast, day(10)));
        ledger.add_food(food("Rice", 200, MealType::Lunch, day(10)));
        ledger.add_food(food("Toast", 90, MealType::Breakfast, day(10)));
        ledger.add_food(food("Pizza", 800, MealType::Dinner, day(9)));
        ledger.add_water(WaterLog::new(0.5).with_timestamp(at(day(10), 9)));
        ledger.add_water(WaterLog::new(0.25).with_timestamp(at(day(10), 15)));
        ledger.add_water(WaterLog::new(2.0).with_timestamp(at(day(9), 15)));
        ledger.add_workout(WorkoutLog::new("Burpee", 100).with_date(at(day(10), 18)));
        ledger.add_workout(WorkoutLog::new("Run", 300).with_date(at(day(11), 7)));
        ledger
    }

    #[test]
    fn test_progress_filters_by_day() {
        let progress = sample_ledger().progress_on(day(10));
        assert_eq!(progress.date, day(10));
        assert_eq!(progress.calories_consumed, 440);
        assert_eq!(progress.calories_burned, 100);
        assert_eq!(progress.macros, Macros::new(30.0, 15.0, 6.0));
        assert_eq!(progress.water_consumed, 0.75);
        assert_eq!(progress.workouts_completed, 1);
        assert_eq!(progress.net_calories(), 340);
    }

    #[test]
    fn test_progress_is_idempotent() {
        let ledger = sample_ledger();
        let first = compute_daily_progress(day(10), ledger.foods(), ledger.water(), ledger.workouts());
        let second = compute_daily_progress(day(10), ledger.foods(), ledger.water(), ledger.workouts());
        assert_eq!(first, second);
    }

    #[test]
    fn test_progress_empty_day() {
        let progress = sample_ledger().progress_on(day(20));
        assert_eq!(progress, DailyProgress::empty(day(20)));
    }

    #[test]
    fn test_progress_ignores_non_finite_amounts() {
        let mut ledger = DailyLedger::default();
        ledger.add_water(WaterLog::new(f64::NAN).with_timestamp(at(day(10), 9)));
        ledger.add_water(WaterLog::new(0.5).with_timestamp(at(day(10), 10)));
        let mut bad = food("Bad", 10, MealType::Snack, day(10));
        bad.macros.fat = f64::INFINITY;
        ledger.add_food(bad);

        let progress = ledger.progress_on(day(10));
        assert_eq!(progress.water_consumed, 0.5);
        assert_eq!(progress.macros.fat, 0.0);
        assert_eq!(progress.macros.carbs, 10.0);
    }

    #[test]
    fn test_percentages_guard_zero_targets() {
        let progress = sample_ledger().progress_on(day(10));
        assert_eq!(progress.calories_percent(0), 0.0);
        assert_eq!(progress.water_percent(0.0), 0.0);
        assert_eq!(progress.water_percent(1.5), 50.0);
        assert_eq!(progress.calories_percent(340), 100.0);

        let percents = progress.macro_percents(MacroTargets {
            protein: 30,
            carbs: 0,
            fat: 12,
        });
        assert_eq!(percents.protein, 50.0);
        assert_eq!(percents.carbs, 0.0);
        assert_eq!(percents.fat, 50.0);
    }

    #[test]
    fn test_foods_by_meal_keeps_insertion_order() {
        let ledger = sample_ledger();
        let breakfast: Vec<&str> = ledger
            .foods_by_meal(MealType::Breakfast, day(10))
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(breakfast, vec!["Eggs", "Toast"]);
        assert!(ledger.foods_by_meal(MealType::Dinner, day(10)).is_empty());
        assert_eq!(ledger.foods_by_meal(MealType::Dinner, day(9)).len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = sample_ledger();
        let before = ledger.clone();
        assert!(ledger.remove_food(Uuid::new_v4()).is_none());
        assert!(ledger.remove_water(Uuid::new_v4()).is_none());
        assert!(ledger.remove_workout(Uuid::new_v4()).is_none());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_remove_food_by_id() {
        let mut ledger = sample_ledger();
        let id = ledger.foods()[1].id;
        let removed = ledger.remove_food(id).unwrap();
        assert_eq!(removed.name, "Rice");
        assert_eq!(ledger.foods().len(), 3);
        assert_eq!(ledger.progress_on(day(10)).calories_consumed, 240);
    }

    #[test]
    fn test_week_progress() {
        let week = sample_ledger().week_progress(day(11));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, day(5));
        assert_eq!(week[6].date, day(11));
        assert_eq!(week[4].calories_consumed, 800);
        assert_eq!(week[5].calories_consumed, 440);
        assert_eq!(week[6].calories_burned, 300);
    }

    #[test]
    fn test_week_progress_at_earliest_date() {
        let ledger = sample_ledger();
        let week = ledger.week_progress(NaiveDate::MIN);
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].date, NaiveDate::MIN);

        let end = NaiveDate::MIN.checked_add_signed(Duration::days(2)).unwrap();
        let week = ledger.week_progress(end);
        assert_eq!(week.len(), 3);
        assert_eq!(week[0].date, NaiveDate::MIN);
        assert_eq!(week[2].date, end);
    }

    #[test]
    fn test_is_exercise_completed_on() {
        let mut ledger = DailyLedger::default();
        ledger.add_workout(
            WorkoutLog::new("Squat", 80)
                .with_exercise_id("h2")
                .with_date(at(day(10), 8)),
        );
        assert!(ledger.is_exercise_completed_on("h2", day(10)));
        assert!(!ledger.is_exercise_completed_on("h2", day(11)));
        assert!(!ledger.is_exercise_completed_on("h1", day(10)));
    }
}
