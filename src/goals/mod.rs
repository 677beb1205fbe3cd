//! Financial goal tracking with pluggable persistence

mod store;

pub use store::{GoalStore, JsonGoalStore, MemoryGoalStore, StoreError};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Icon choices offered when creating a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalIcon {
    Savings,
    Home,
    Car,
    Vacation,
    Education,
    Gift,
    Health,
    Retirement,
}

impl GoalIcon {
    /// All icons, in display order
    pub const ALL: [GoalIcon; 8] = [
        GoalIcon::Savings,
        GoalIcon::Home,
        GoalIcon::Car,
        GoalIcon::Vacation,
        GoalIcon::Education,
        GoalIcon::Gift,
        GoalIcon::Health,
        GoalIcon::Retirement,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            GoalIcon::Savings => "\u{1F4B0}",
            GoalIcon::Home => "\u{1F3E0}",
            GoalIcon::Car => "\u{1F697}",
            GoalIcon::Vacation => "\u{2708}\u{FE0F}",
            GoalIcon::Education => "\u{1F393}",
            GoalIcon::Gift => "\u{1F381}",
            GoalIcon::Health => "\u{2695}\u{FE0F}",
            GoalIcon::Retirement => "\u{1F334}",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalIcon::Savings => "Savings",
            GoalIcon::Home => "Home",
            GoalIcon::Car => "Car",
            GoalIcon::Vacation => "Vacation",
            GoalIcon::Education => "Education",
            GoalIcon::Gift => "Gift",
            GoalIcon::Health => "Health",
            GoalIcon::Retirement => "Retirement",
        }
    }

    /// Parse a label or lowercase id back into an icon
    pub fn parse(s: &str) -> Option<Self> {
        GoalIcon::ALL
            .iter()
            .copied()
            .find(|icon| icon.label().eq_ignore_ascii_case(s))
    }
}

/// A savings goal with a target amount and optional deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique goal identifier
    pub id: Uuid,

    /// User-facing goal name
    pub name: String,

    /// Amount the goal aims for
    pub target_amount: f64,

    /// Amount saved toward the goal so far
    pub current_amount: f64,

    /// Optional deadline
    #[serde(default)]
    pub target_date: Option<NaiveDate>,

    /// Optional display icon
    #[serde(default)]
    pub icon: Option<GoalIcon>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target_amount: f64, current_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount,
            target_date: None,
            icon: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    pub fn with_icon(mut self, icon: GoalIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Progress toward the target as a percentage, capped at 100
    pub fn progress_pct(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount * 100.0).min(100.0)
    }

    pub fn is_complete(&self) -> bool {
        self.progress_pct() >= 100.0
    }

    /// Days remaining until the target date, negative once past it.
    /// `None` when the goal has no deadline.
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.target_date.map(|date| (date - today).num_days())
    }
}

/// A user's goal list, kept in sync with its store on every mutation
pub struct GoalBook<S: GoalStore> {
    goals: Vec<Goal>,
    store: S,
}

impl<S: GoalStore> GoalBook<S> {
    /// Load the goal list from the store
    pub fn open(store: S) -> Result<Self, StoreError> {
        let goals = store.load()?;
        Ok(Self { goals, store })
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Add a goal and flush the list
    pub fn add(&mut self, goal: Goal) -> Result<&Goal, StoreError> {
        self.goals.push(goal);
        self.store.save(&self.goals)?;
        let idx = self.goals.len() - 1;
        Ok(&self.goals[idx])
    }

    /// Replace a goal in place and flush. Returns false when no goal with
    /// that id exists.
    pub fn update(&mut self, goal: Goal) -> Result<bool, StoreError> {
        match self.goals.iter_mut().find(|existing| existing.id == goal.id) {
            Some(slot) => {
                *slot = goal;
                self.store.save(&self.goals)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a goal by id and flush. Returns false when absent.
    pub fn remove(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);
        if self.goals.len() == before {
            return Ok(false);
        }
        self.store.save(&self.goals)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_progress_capped_at_100() {
        let mut goal = Goal::new("Emergency Fund", 10_000.0, 2_500.0);
        assert_eq!(goal.progress_pct(), 25.0);
        assert!(!goal.is_complete());

        goal.current_amount = 15_000.0;
        assert_eq!(goal.progress_pct(), 100.0);
        assert!(goal.is_complete());
    }

    #[test]
    fn test_zero_target_is_not_nan() {
        let goal = Goal::new("Empty", 0.0, 0.0);
        assert_eq!(goal.progress_pct(), 0.0);
        assert!(!goal.is_complete());
    }

    #[test]
    fn test_days_left() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let goal = Goal::new("Vacation", 3_000.0, 0.0)
            .with_target_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());

        assert_eq!(goal.days_left(today), Some(29));
        assert_eq!(Goal::new("No deadline", 100.0, 0.0).days_left(today), None);
    }

    #[test]
    fn test_icon_parse_round_trip() {
        for icon in GoalIcon::ALL {
            assert_eq!(GoalIcon::parse(icon.label()), Some(icon));
        }
        assert_eq!(GoalIcon::parse("vacation"), Some(GoalIcon::Vacation));
        assert_eq!(GoalIcon::parse("yacht"), None);
    }

    #[test]
    fn test_book_mutations_persist() {
        let store = MemoryGoalStore::default();
        let mut book = GoalBook::open(store.clone()).unwrap();

        let goal = Goal::new("Car", 20_000.0, 5_000.0).with_icon(GoalIcon::Car);
        let id = goal.id;
        book.add(goal).unwrap();
        assert_eq!(book.goals().len(), 1);

        let mut updated = book.get(id).unwrap().clone();
        updated.current_amount = 7_500.0;
        assert!(book.update(updated).unwrap());

        // A fresh book over the same store sees every mutation
        let reopened = GoalBook::open(store.clone()).unwrap();
        assert_eq!(reopened.get(id).unwrap().current_amount, 7_500.0);

        assert!(book.remove(id).unwrap());
        assert!(!book.remove(id).unwrap());
        assert!(GoalBook::open(store).unwrap().goals().is_empty());
    }
}
