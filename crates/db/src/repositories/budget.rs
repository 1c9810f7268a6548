//! Budget repository for budget storage operations.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use fedha_core::budget::{Budget, BudgetError, Category, PeriodKind, normalize_anchor};
use fedha_shared::types::{BudgetId, UserId};
use rust_decimal::Decimal;

use crate::error::StoreError;

/// Storage operations the budget store relies on.
///
/// `list_for` must return every budget of the owner and category; conflict
/// checks trust it to be complete.
#[async_trait]
pub trait BudgetRepository: Send + Sync {
    /// All budgets for an owner and category, oldest first.
    async fn list_for(
        &self,
        owner: UserId,
        category: &Category,
    ) -> Result<Vec<Budget>, StoreError>;

    /// Looks up a budget by ID.
    async fn find(&self, id: BudgetId) -> Result<Option<Budget>, StoreError>;

    /// Stores a new budget, assigning an ID if it has none.
    ///
    /// Fails with `StoreError::Duplicate` if a budget with the same owner,
    /// category, period kind and normalised anchor exists.
    async fn insert(&self, budget: Budget) -> Result<Budget, StoreError>;

    /// Replaces a stored budget.
    async fn update(&self, budget: Budget) -> Result<Budget, StoreError>;

    /// Removes a budget, returning it.
    async fn delete(&self, id: BudgetId) -> Result<Budget, StoreError>;

    /// Adds `amount` to a budget's spent amount.
    ///
    /// Fails without writing if the sum cannot be represented.
    async fn add_spent(&self, id: BudgetId, amount: Decimal) -> Result<Budget, StoreError>;
}

/// Uniqueness key mirroring the unique constraint of a relational backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BudgetKey {
    owner: UserId,
    category: Category,
    period_kind: PeriodKind,
    anchor: NaiveDate,
}

impl BudgetKey {
    fn of(budget: &Budget) -> Self {
        Self {
            owner: budget.owner,
            category: budget.category.clone(),
            period_kind: budget.period_kind,
            anchor: normalize_anchor(budget.period_kind, budget.anchor_date),
        }
    }
}

#[derive(Debug, Clone)]
struct Row {
    seq: u64,
    budget: Budget,
}

/// Budget repository held in memory.
#[derive(Debug, Default)]
pub struct InMemoryBudgetRepository {
    rows: DashMap<BudgetId, Row>,
    keys: DashMap<BudgetKey, BudgetId>,
    next_seq: AtomicU64,
}

impl InMemoryBudgetRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored budgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl BudgetRepository for InMemoryBudgetRepository {
    async fn list_for(
        &self,
        owner: UserId,
        category: &Category,
    ) -> Result<Vec<Budget>, StoreError> {
        let mut rows: Vec<Row> = self
            .rows
            .iter()
            .filter(|row| row.budget.owner == owner && row.budget.category == *category)
            .map(|row| row.value().clone())
            .collect();
        rows.sort_by_key(|row| row.seq);

        Ok(rows.into_iter().map(|row| row.budget).collect())
    }

    async fn find(&self, id: BudgetId) -> Result<Option<Budget>, StoreError> {
        Ok(self.rows.get(&id).map(|row| row.budget.clone()))
    }

    async fn insert(&self, budget: Budget) -> Result<Budget, StoreError> {
        let id = budget.id.unwrap_or_default();
        let budget = budget.with_id(id);

        if self.rows.contains_key(&id) {
            return Err(StoreError::Duplicate);
        }

        match self.keys.entry(BudgetKey::of(&budget)) {
            Entry::Occupied(_) => return Err(StoreError::Duplicate),
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.rows.insert(
            id,
            Row {
                seq,
                budget: budget.clone(),
            },
        );

        Ok(budget)
    }

    async fn update(&self, budget: Budget) -> Result<Budget, StoreError> {
        let id = budget.id.ok_or(StoreError::MissingId)?;
        let previous_key = match self.rows.get(&id) {
            Some(row) => BudgetKey::of(&row.budget),
            None => return Err(StoreError::NotFound(id)),
        };

        let key = BudgetKey::of(&budget);
        if key != previous_key {
            match self.keys.entry(key) {
                Entry::Occupied(_) => return Err(StoreError::Duplicate),
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }
            self.keys.remove(&previous_key);
        }

        match self.rows.get_mut(&id) {
            Some(mut row) => {
                row.budget = budget.clone();
                Ok(budget)
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn delete(&self, id: BudgetId) -> Result<Budget, StoreError> {
        let (_, row) = self.rows.remove(&id).ok_or(StoreError::NotFound(id))?;
        self.keys.remove(&BudgetKey::of(&row.budget));
        Ok(row.budget)
    }

    async fn add_spent(&self, id: BudgetId, amount: Decimal) -> Result<Budget, StoreError> {
        let mut row = self.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        row.budget.spent_amount = row
            .budget
            .spent_amount
            .checked_add(amount)
            .ok_or(BudgetError::AmountOverflow {
                field: "spent_amount",
            })?;
        Ok(row.budget.clone())
    }
}
