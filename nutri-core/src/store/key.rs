use std::fmt;

/// The keys of the local store, one per persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    UserProfile,
    TodayFoods,
    TodayWater,
    WeightHistory,
    FavoriteRecipes,
    WorkoutLogs,
    ActionJournal,
}

impl StoreKey {
    pub const ALL: [StoreKey; 7] = [
        StoreKey::UserProfile,
        StoreKey::TodayFoods,
        StoreKey::TodayWater,
        StoreKey::WeightHistory,
        StoreKey::FavoriteRecipes,
        StoreKey::WorkoutLogs,
        StoreKey::ActionJournal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::UserProfile => "user-profile",
            StoreKey::TodayFoods => "today-foods",
            StoreKey::TodayWater => "today-water",
            StoreKey::WeightHistory => "weight-history",
            StoreKey::FavoriteRecipes => "favorite-recipes",
            StoreKey::WorkoutLogs => "workout-logs",
            StoreKey::ActionJournal => "action-journal",
        }
    }

    /// File name used by [`super::FileStore`].
    pub fn filename(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
