//! Pure aggregation over ledger snapshots: balances, category and debt
//! breakdowns, the daily series, and the movement feed.
//!
//! Every function is stateless and side-effect free; given the same snapshot
//! and parameters it returns identical output.

use std::collections::BTreeSet;

use caja_domain::{
    CategoryTotal, DailyPoint, DateRange, Dated, DebtSummary, ExpenseEntry, IncomeEntry,
    LedgerBook, Movement, MovementKind, PersonDebt, UNNAMED_PERSON_LABEL,
};

/// Aggregates snapshot data for the reporting views.
pub struct SummaryService;

impl SummaryService {
    /// Entries whose date falls inside the inclusive range. `None` means no
    /// filter is active and everything is returned.
    pub fn filter_by_range<T>(entries: &[T], range: Option<DateRange>) -> Vec<T>
    where
        T: Dated + Clone,
    {
        match range {
            None => entries.to_vec(),
            Some(range) => entries
                .iter()
                .filter(|entry| range.contains(entry.date()))
                .cloned()
                .collect(),
        }
    }

    /// Realized income: confirmed entries only, with till-float bookings
    /// counted negatively.
    pub fn confirmed_income_total(incomes: &[IncomeEntry]) -> f64 {
        incomes
            .iter()
            .filter(|entry| entry.confirmed)
            .map(IncomeEntry::realized_amount)
            .sum()
    }

    /// Income including provisional entries; same float rule, `confirmed`
    /// ignored.
    pub fn projected_income_total(incomes: &[IncomeEntry]) -> f64 {
        incomes.iter().map(IncomeEntry::realized_amount).sum()
    }

    /// Total spend across all settlement statuses.
    pub fn expense_total(expenses: &[ExpenseEntry]) -> f64 {
        expenses.iter().map(|entry| entry.amount).sum()
    }

    /// Realized income minus total spend over the filtered window.
    pub fn net_balance(book: &LedgerBook, range: Option<DateRange>) -> f64 {
        let incomes = Self::filter_by_range(&book.incomes, range);
        let expenses = Self::filter_by_range(&book.expenses, range);
        Self::confirmed_income_total(&incomes) - Self::expense_total(&expenses)
    }

    /// Spend grouped by category in first-occurrence order, with each
    /// category's share of the grand total. Shares are zero when nothing was
    /// spent.
    pub fn expenses_by_category(expenses: &[ExpenseEntry]) -> Vec<CategoryTotal> {
        let mut buckets: Vec<(String, f64)> = Vec::new();
        for entry in expenses {
            match buckets.iter_mut().find(|(category, _)| *category == entry.category) {
                Some((_, total)) => *total += entry.amount,
                None => buckets.push((entry.category.clone(), entry.amount)),
            }
        }
        let grand_total: f64 = buckets.iter().map(|(_, total)| total).sum();
        buckets
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category,
                share: if grand_total == 0.0 { 0.0 } else { total / grand_total },
                total,
            })
            .collect()
    }

    /// Outstanding reimbursement debt per member: reimbursement category,
    /// pending status only. Unnamed entries fall under a fixed label.
    pub fn debts_by_person(expenses: &[ExpenseEntry]) -> DebtSummary {
        let mut per_person: Vec<PersonDebt> = Vec::new();
        let mut total = 0.0;
        for entry in expenses {
            if !entry.is_reimbursement() || !entry.is_pending() {
                continue;
            }
            let person = entry
                .person
                .clone()
                .unwrap_or_else(|| UNNAMED_PERSON_LABEL.to_string());
            match per_person.iter_mut().find(|debt| debt.person == person) {
                Some(debt) => debt.total += entry.amount,
                None => per_person.push(PersonDebt {
                    person,
                    total: entry.amount,
                }),
            }
            total += entry.amount;
        }
        DebtSummary { per_person, total }
    }

    /// The unsettled-exposure rows behind the "things to pay" list:
    /// pending reimbursement expenses in insertion order.
    pub fn pending_reimbursements(expenses: &[ExpenseEntry]) -> Vec<ExpenseEntry> {
        expenses
            .iter()
            .filter(|entry| entry.is_reimbursement() && entry.is_pending())
            .cloned()
            .collect()
    }

    /// One point per distinct date in either collection, ascending. Income
    /// follows the confirmed+float rule; expenses count pending entries only,
    /// tracking unsettled cash exposure rather than total historical spend.
    pub fn daily_series(incomes: &[IncomeEntry], expenses: &[ExpenseEntry]) -> Vec<DailyPoint> {
        let dates: BTreeSet<_> = incomes
            .iter()
            .map(|entry| entry.date)
            .chain(expenses.iter().map(|entry| entry.date))
            .collect();
        dates
            .into_iter()
            .map(|date| DailyPoint {
                date,
                income: incomes
                    .iter()
                    .filter(|entry| entry.date == date && entry.confirmed)
                    .map(|entry| entry.realized_amount())
                    .sum(),
                expenses: expenses
                    .iter()
                    .filter(|entry| entry.date == date && entry.is_pending())
                    .map(|entry| entry.amount)
                    .sum(),
            })
            .collect()
    }

    /// Confirmed income (float-adjusted) merged with all expenses, tagged by
    /// kind and sorted by date descending. Equal dates keep the most recently
    /// inserted row first. `limit` truncates the feed; `None` returns the
    /// full list for an expandable view.
    pub fn recent_movements(
        incomes: &[IncomeEntry],
        expenses: &[ExpenseEntry],
        limit: Option<usize>,
    ) -> Vec<Movement> {
        let mut movements: Vec<Movement> = Vec::new();
        for entry in incomes.iter().filter(|entry| entry.confirmed) {
            movements.push(Movement {
                id: entry.id,
                date: entry.date,
                amount: entry.realized_amount(),
                kind: MovementKind::Income,
                description: describe(&entry.comment, &entry.category),
            });
        }
        for entry in expenses {
            movements.push(Movement {
                id: entry.id,
                date: entry.date,
                amount: entry.amount,
                kind: MovementKind::Expense,
                description: describe(&entry.description, &entry.category),
            });
        }
        // Stable sort over the reversed list leaves later insertions first
        // within each date.
        movements.reverse();
        movements.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(limit) = limit {
            movements.truncate(limit);
        }
        movements
    }
}

fn describe(text: &str, category: &str) -> String {
    if text.trim().is_empty() {
        category.to_string()
    } else {
        text.to_string()
    }
}
