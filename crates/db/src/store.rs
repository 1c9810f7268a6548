//! Budget commit gate.
//!
//! Validation and commit of a budget happen while holding a lock scoped to
//! the budget's owner and category. Two writers in the same scope therefore
//! observe each other's commits, so the no-overlap rule holds under
//! concurrent requests served by one `BudgetStore`.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use fedha_core::budget::{
    Budget, BudgetAlert, BudgetError, BudgetService, BudgetUsage, Category, UsageThresholds,
};
use fedha_shared::config::BudgetConfig;
use fedha_shared::types::{BudgetId, UserId};
use rust_decimal::Decimal;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::repositories::BudgetRepository;

type Scope = (UserId, Category);

/// Effect of one expense on a budget covering its date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseImpact {
    /// Budget after the expense was applied.
    pub budget: Budget,
    /// Resulting usage.
    pub usage: BudgetUsage,
    /// Alert to surface, if any.
    pub alert: Option<BudgetAlert>,
}

/// Validates and commits budgets through a [`BudgetRepository`].
pub struct BudgetStore {
    repo: Arc<dyn BudgetRepository>,
    locks: DashMap<Scope, Arc<Mutex<()>>>,
    config: BudgetConfig,
    thresholds: UsageThresholds,
}

impl BudgetStore {
    /// Creates a store over `repo` using the given budget configuration.
    #[must_use]
    pub fn new(repo: Arc<dyn BudgetRepository>, config: BudgetConfig) -> Self {
        let thresholds = UsageThresholds::from(&config);
        Self {
            repo,
            locks: DashMap::new(),
            config,
            thresholds,
        }
    }

    /// Creates a budget after checking it against the owner's budgets in the
    /// same category.
    ///
    /// The anchor is normalised before storage. On any error nothing is written.
    pub async fn create(&self, candidate: Budget) -> Result<Budget, StoreError> {
        let candidate = candidate.normalized();
        self.ensure_known_category(&candidate.category)?;

        let _guard = self.lock_scope(scope_of(&candidate)).await;

        let existing = self
            .repo
            .list_for(candidate.owner, &candidate.category)
            .await?;
        Self::admit(&candidate, &existing, None)?;

        let stored = self.repo.insert(candidate).await?;
        info!(
            budget_id = ?stored.id,
            owner = %stored.owner,
            category = %stored.category,
            period = %stored.period_kind,
            anchor = %stored.anchor_date,
            "Budget created"
        );

        Ok(stored)
    }

    /// Replaces a stored budget, checking the new values against every other
    /// budget in the target scope.
    ///
    /// Moving a budget to another category validates it in that category.
    /// The spent amount is owned by expense recording and is kept from the
    /// stored row.
    pub async fn update(&self, budget: Budget) -> Result<Budget, StoreError> {
        let id = budget.id.ok_or(StoreError::MissingId)?;
        let mut budget = budget.normalized();
        self.ensure_known_category(&budget.category)?;

        let target = scope_of(&budget);
        let (current, _guards) = self.lock_stored(id, Some(&target)).await?;
        budget.spent_amount = current.spent_amount;

        let existing = self.repo.list_for(budget.owner, &budget.category).await?;
        Self::admit(&budget, &existing, Some(id))?;

        let stored = self.repo.update(budget).await?;
        info!(
            budget_id = %id,
            owner = %stored.owner,
            category = %stored.category,
            "Budget updated"
        );

        Ok(stored)
    }

    /// Deletes a budget.
    pub async fn delete(&self, id: BudgetId) -> Result<Budget, StoreError> {
        let (_, _guards) = self.lock_stored(id, None).await?;

        let removed = self.repo.delete(id).await?;
        info!(budget_id = %id, category = %removed.category, "Budget deleted");

        Ok(removed)
    }

    /// Adds an expense to every budget of the owner and category whose active
    /// range contains `date`.
    ///
    /// Returns the updated budgets with their usage, in storage order. If any
    /// covering budget cannot absorb the amount, nothing is written.
    pub async fn record_expense(
        &self,
        owner: UserId,
        category: &Category,
        date: NaiveDate,
        amount: Decimal,
    ) -> Result<Vec<ExpenseImpact>, StoreError> {
        if amount < Decimal::ZERO {
            return Err(BudgetError::NegativeAmount { field: "amount" }.into());
        }
        self.ensure_known_category(category)?;

        let _guard = self.lock_scope((owner, category.clone())).await;

        let covering: Vec<Budget> = self
            .repo
            .list_for(owner, category)
            .await?
            .into_iter()
            .filter(|budget| budget.active_range().contains(date))
            .collect();

        if covering
            .iter()
            .any(|budget| budget.spent_amount.checked_add(amount).is_none())
        {
            return Err(BudgetError::AmountOverflow {
                field: "spent_amount",
            }
            .into());
        }

        let mut impacts = Vec::with_capacity(covering.len());
        for id in covering.into_iter().filter_map(|budget| budget.id) {
            let budget = self.repo.add_spent(id, amount).await?;
            let usage = BudgetService::usage(&budget, &self.thresholds);
            let alert = usage.alert(self.config.currency);

            if let Some(alert) = &alert {
                warn!(
                    budget_id = %id,
                    category = %budget.category,
                    status = ?alert.status,
                    "{}",
                    alert.message
                );
            }

            impacts.push(ExpenseImpact {
                budget,
                usage,
                alert,
            });
        }

        debug!(
            owner = %owner,
            category = %category,
            %date,
            budgets = impacts.len(),
            "Expense applied to budgets"
        );

        Ok(impacts)
    }

    fn ensure_known_category(&self, category: &Category) -> Result<(), StoreError> {
        if self.config.is_known_category(category.as_str()) {
            Ok(())
        } else {
            Err(StoreError::UnknownCategory(category.clone()))
        }
    }

    fn admit(
        candidate: &Budget,
        existing: &[Budget],
        exclude_id: Option<BudgetId>,
    ) -> Result<(), StoreError> {
        let result = BudgetService::admit(candidate, existing, exclude_id)?;
        if !result.has_conflict {
            return Ok(());
        }

        let message = BudgetService::conflict_message(candidate, &result).unwrap_or_default();
        warn!(
            owner = %candidate.owner,
            category = %candidate.category,
            conflicts = result.conflicts.len(),
            "Budget rejected: {message}"
        );

        Err(StoreError::Conflict {
            message,
            conflicts: result.conflicts,
        })
    }

    /// Locks the scope a stored budget lives in, plus `target` if given, and
    /// returns the row as read under those locks.
    ///
    /// The row is read once to learn its scope and again after locking. If a
    /// concurrent update moved it in between, the locks are released and the
    /// sequence starts over.
    async fn lock_stored(
        &self,
        id: BudgetId,
        target: Option<&Scope>,
    ) -> Result<(Budget, Vec<OwnedMutexGuard<()>>), StoreError> {
        loop {
            let seen = self.repo.find(id).await?.ok_or(StoreError::NotFound(id))?;
            let source = scope_of(&seen);

            let guards = match target {
                Some(target) => self.lock_scopes(source.clone(), target.clone()).await,
                None => vec![self.lock_scope(source.clone()).await],
            };

            let current = self.repo.find(id).await?.ok_or(StoreError::NotFound(id))?;
            if scope_of(&current) == source {
                return Ok((current, guards));
            }

            debug!(budget_id = %id, "Budget moved while locking, retrying");
        }
    }

    async fn lock_scope(&self, scope: Scope) -> OwnedMutexGuard<()> {
        let lock = self.locks.entry(scope).or_default().clone();
        lock.lock_owned().await
    }

    /// Locks one or two scopes, always in key order.
    async fn lock_scopes(&self, a: Scope, b: Scope) -> Vec<OwnedMutexGuard<()>> {
        if a == b {
            return vec![self.lock_scope(a).await];
        }

        let (first, second) = if a < b { (a, b) } else { (b, a) };
        let first = self.lock_scope(first).await;
        let second = self.lock_scope(second).await;
        vec![first, second]
    }
}

fn scope_of(budget: &Budget) -> Scope {
    (budget.owner, budget.category.clone())
}
