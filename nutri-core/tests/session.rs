use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;
use tempfile::TempDir;

use nutri_core::{
    local_date, ActivityLevel, BiologicalSex, Error, FileStore, FoodItem, Goal, KeyValueStore,
    Macros, MealType, PortionUnit, ProfileInput, ProfileUpdate, ReferenceNutrition, Session,
    StoreError, StoreKey, ValidationError, WaterAmount,
};

/// File store whose writes can be switched off from the outside.
struct Unplugged {
    inner: FileStore,
    broken: Rc<Cell<bool>>,
}

impl KeyValueStore for Unplugged {
    fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn put(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        if self.broken.get() {
            return Err(StoreError::Rejected {
                key,
                reason: "disk full".to_string(),
            });
        }
        self.inner.put(key, value)
    }
}

fn onboarding() -> ProfileInput {
    ProfileInput {
        name: Some("Marta".to_string()),
        age: Some(34),
        biological_sex: BiologicalSex::Female,
        weight: Some(82.0),
        height: Some(168.0),
        goal: Goal::Lose,
        activity_level: ActivityLevel::Light,
        target_weight: Some(74.0),
        weight_loss_weeks: Some(16),
        ..ProfileInput::default()
    }
}

#[test]
fn test_day_of_logging_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let today = local_date(Utc::now());

    {
        let mut session = Session::open(FileStore::new(temp_dir.path().to_path_buf())).unwrap();
        let profile = session.create_profile(onboarding()).unwrap();
        assert!(profile.daily_calories() >= 1200);

        let rice = FoodItem::from_reference(
            "Rice",
            ReferenceNutrition {
                calories: 130.0,
                macros: Macros::new(28.0, 2.7, 0.3),
            },
            2.0,
            PortionUnit::Unit,
            MealType::Lunch,
        );
        session.add_food(rice).unwrap();
        session.add_water(WaterAmount::Milliliters(500.0), None).unwrap();
        session.log_catalog_workout("h2").unwrap();
    }

    let session = Session::open(FileStore::new(temp_dir.path().to_path_buf())).unwrap();
    let progress = session.progress_on(today);
    assert_eq!(progress.calories_consumed, 260);
    assert_eq!(progress.calories_burned, 80);
    assert_eq!(progress.net_calories(), 180);
    assert!((progress.water_consumed - 0.5).abs() < 1e-9);
    assert_eq!(session.foods_by_meal(MealType::Lunch, today).len(), 1);
    assert_eq!(session.recent_actions(10).len(), 3);

    assert!(!temp_dir.path().join(StoreKey::WeightHistory.filename()).exists());
    assert!(temp_dir.path().join(StoreKey::ActionJournal.filename()).exists());
}

#[test]
fn test_undo_most_recent_action() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::open(FileStore::new(temp_dir.path().to_path_buf())).unwrap();

    session.add_water(WaterAmount::Liters(0.3), None).unwrap();
    let before = session.today_progress();
    session.log_workout("Cycling", Some("Evening ride"), 240).unwrap();

    let latest = session.recent_actions(1)[0].id;
    assert!(session.undo(latest).unwrap());
    assert_eq!(session.today_progress(), before);

    let reopened = Session::open(FileStore::new(temp_dir.path().to_path_buf())).unwrap();
    assert_eq!(reopened.today_progress(), before);
    assert_eq!(reopened.actions().len(), 1);
}

#[test]
fn test_failed_write_leaves_memory_and_disk_in_step() {
    let temp_dir = TempDir::new().unwrap();
    let broken = Rc::new(Cell::new(false));
    let store = Unplugged {
        inner: FileStore::new(temp_dir.path().to_path_buf()),
        broken: Rc::clone(&broken),
    };
    let mut session = Session::open(store).unwrap();
    session.add_water(WaterAmount::Liters(1.0), None).unwrap();

    broken.set(true);
    let err = session.add_water(WaterAmount::Liters(1.0), None).unwrap_err();
    assert!(matches!(err, Error::Store(StoreError::Rejected { .. })));
    assert_eq!(session.ledger().water().len(), 1);
    assert_eq!(session.actions().len(), 1);

    broken.set(false);
    let reopened = Session::open(FileStore::new(temp_dir.path().to_path_buf())).unwrap();
    assert_eq!(reopened.state(), session.state());
}

#[test]
fn test_pace_rejection_reaches_caller() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::open(FileStore::new(temp_dir.path().to_path_buf())).unwrap();

    let err = session
        .create_profile(ProfileInput {
            weight_loss_weeks: Some(4),
            ..onboarding()
        })
        .unwrap_err();
    match err {
        Error::Validation(ValidationError::Pace { adjusted_weeks, .. }) => {
            assert_eq!(adjusted_weeks, 7)
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(session.profile().is_none());
    assert!(!temp_dir.path().join(StoreKey::UserProfile.filename()).exists());
}

#[test]
fn test_goal_change_recomputes_targets() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::open(FileStore::new(temp_dir.path().to_path_buf())).unwrap();
    let created = session.create_profile(onboarding()).unwrap();

    let renamed = session
        .update_profile(ProfileUpdate {
            name: Some("Marta S.".to_string()),
            ..ProfileUpdate::default()
        })
        .unwrap();
    assert_eq!(renamed.daily_calories(), created.daily_calories());

    let gaining = session
        .update_profile(ProfileUpdate {
            goal: Some(Goal::Gain),
            ..ProfileUpdate::default()
        })
        .unwrap();
    assert!(gaining.daily_calories() > created.daily_calories());
}

#[test]
fn test_rejected_plan_update_keeps_stored_profile() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = Session::open(FileStore::new(temp_dir.path().to_path_buf())).unwrap();
    let created = session.create_profile(onboarding()).unwrap();

    let err = session
        .update_profile(ProfileUpdate {
            target_weight: Some(74.0),
            weight_loss_weeks: Some(2),
            ..ProfileUpdate::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::Pace { adjusted_weeks: 7, .. })
    ));
    assert_eq!(session.profile(), Some(&created));

    let reopened = Session::open(FileStore::new(temp_dir.path().to_path_buf())).unwrap();
    assert_eq!(reopened.profile().map(|p| p.weight_loss_weeks()), Some(Some(16)));
}
