//! Persisted application state and the session that mutates it.
//!
//! Only domain inputs are trusted from storage: expenses, budget, persona,
//! chart preference and the last tax income. Category totals, the tax
//! estimate and chart primitives are always recomputed.

use crate::core::{
    aggregate, estimate_tax_lossy, render_chart, BudgetSummary, CanvasSize, Category,
    CategoryTotals, ChartType, DrawPrimitive, ExpenseRecord, Persona, Suggestion, TaxEstimate,
    Theme,
};
use crate::storage::{Storage, StorageError};
use chrono::{DateTime, Local};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Storage key of the state blob
pub const DATA_KEY: &str = "smartPocketData";
/// Storage key of the theme preference
pub const THEME_KEY: &str = "smartpocket-theme";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Selected persona; empty or unknown values mean none
    #[serde(
        default,
        serialize_with = "serialize_persona",
        deserialize_with = "deserialize_persona"
    )]
    #[schemars(with = "String")]
    pub age_group: Option<Persona>,
    #[serde(default, with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub monthly_budget: Decimal,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub chart_type: ChartType,
    /// Written with the derived estimate alongside; only `income` is read back
    #[serde(default, serialize_with = "serialize_tax")]
    #[schemars(with = "TaxEstimate")]
    pub tax: TaxInput,
}

/// Last income entered for the tax estimate, as stored
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TaxInput {
    #[serde(default)]
    pub income: f64,
}

fn serialize_persona<S>(persona: &Option<Persona>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match persona {
        Some(persona) => persona.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_persona<'de, D>(deserializer: D) -> Result<Option<Persona>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(match value.as_deref() {
        None | Some("") => None,
        Some(s) => {
            let persona: Option<Persona> =
                serde_json::from_value(Value::String(s.to_string())).ok();
            if persona.is_none() {
                log::warn!("Ignoring unknown age group '{}'", s);
            }
            persona
        }
    })
}

fn serialize_tax<S>(tax: &TaxInput, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    estimate_tax_lossy(tax.income).serialize(serializer)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter a valid budget amount (got {0})")]
    InvalidBudget(Decimal),
    #[error("please enter a valid expense amount (got {0})")]
    InvalidAmount(Decimal),
    #[error("please enter a valid income (got {0})")]
    InvalidIncome(Decimal),
    #[error("no expense with id {0}")]
    ExpenseNotFound(i64),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load the state blob, merging saved fields over defaults.
/// Unreadable or unparseable data falls back to the default state.
pub fn load_state<S: Storage>(storage: &S) -> AppState {
    match storage.get_item(DATA_KEY) {
        Ok(Some(raw)) => match merge_over_defaults(&raw) {
            Ok(state) => {
                log::debug!("Loaded state with {} expenses", state.expenses.len());
                state
            }
            Err(e) => {
                log::warn!("Stored state is corrupt, using defaults: {}", e);
                AppState::default()
            }
        },
        Ok(None) => AppState::default(),
        Err(e) => {
            log::warn!("Failed to read stored state, using defaults: {}", e);
            AppState::default()
        }
    }
}

/// Shallow merge: each known top level key present in the saved object
/// replaces the default value. Null, unknown and invalid values keep the
/// default, and invalid expense records are dropped one by one.
fn merge_over_defaults(raw: &str) -> serde_json::Result<AppState> {
    let saved: Map<String, Value> = serde_json::from_str(raw)?;
    let mut state = AppState::default();
    for (key, value) in saved {
        if value.is_null() {
            continue;
        }
        let merged = match key.as_str() {
            "ageGroup" => deserialize_persona(value).map(|v| state.age_group = v),
            "monthlyBudget" => {
                rust_decimal::serde::float::deserialize(value).map(|v| state.monthly_budget = v)
            }
            "expenses" => Vec::<Value>::deserialize(value).map(|records| {
                state.expenses = records.into_iter().filter_map(expense_from_value).collect()
            }),
            "chartType" => ChartType::deserialize(value).map(|v| state.chart_type = v),
            "tax" => TaxInput::deserialize(value).map(|v| state.tax = v),
            _ => {
                log::debug!("Ignoring unknown stored key '{}'", key);
                Ok(())
            }
        };
        if let Err(e) = merged {
            log::warn!("Ignoring invalid stored '{}', keeping default: {}", key, e);
        }
    }
    Ok(state)
}

fn expense_from_value(value: Value) -> Option<ExpenseRecord> {
    match ExpenseRecord::deserialize(value) {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!("Dropping invalid stored expense: {}", e);
            None
        }
    }
}

/// Rewrite the whole blob
pub fn save_state<S: Storage>(storage: &mut S, state: &AppState) -> Result<(), SessionError> {
    let json = serde_json::to_string(state)?;
    storage.set_item(DATA_KEY, &json)?;
    Ok(())
}

/// Reads the bare `light`/`dark` literal, or the same value as a JSON string
fn load_theme<S: Storage>(storage: &S) -> Option<Theme> {
    let raw = match storage.get_item(THEME_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("Failed to read theme preference: {}", e);
            return None;
        }
    };
    let raw = raw.trim();
    raw.parse::<Theme>()
        .ok()
        .or_else(|| serde_json::from_str::<Theme>(raw).ok())
}

/// Single writer over the application state
#[derive(Debug)]
pub struct Session<S: Storage> {
    storage: S,
    state: AppState,
    theme: Theme,
}

impl<S: Storage> Session<S> {
    pub fn open(storage: S, prefers_dark: bool) -> Self {
        let state = load_state(&storage);
        let theme = Theme::resolve(load_theme(&storage), prefers_dark);
        Session {
            storage,
            state,
            theme,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Persist `next`, and only then make it the current state
    fn commit(&mut self, next: AppState) -> Result<(), SessionError> {
        save_state(&mut self.storage, &next)?;
        self.state = next;
        Ok(())
    }

    pub fn select_persona(&mut self, persona: Persona) -> Result<(), SessionError> {
        let mut next = self.state.clone();
        next.age_group = Some(persona);
        self.commit(next)?;
        log::info!("Selected persona {}", persona.label());
        Ok(())
    }

    pub fn set_budget(&mut self, amount: Decimal) -> Result<(), SessionError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidBudget(amount).into());
        }
        let mut next = self.state.clone();
        next.monthly_budget = amount;
        self.commit(next)?;
        log::info!("Budget set to {}", amount);
        Ok(())
    }

    pub fn add_expense(
        &mut self,
        category: Category,
        amount: Decimal,
        note: &str,
    ) -> Result<ExpenseRecord, SessionError> {
        self.add_expense_at(category, amount, note, Local::now())
    }

    /// Add an expense stamped with the given clock reading
    pub fn add_expense_at(
        &mut self,
        category: Category,
        amount: Decimal,
        note: &str,
        now: DateTime<Local>,
    ) -> Result<ExpenseRecord, SessionError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount(amount).into());
        }
        let note = note.trim();
        let record = ExpenseRecord {
            id: self.next_id(now.timestamp_millis()),
            category,
            amount,
            note: if note.is_empty() {
                category.default_note()
            } else {
                note.to_string()
            },
            date: now.format("%-m/%-d/%Y").to_string(),
        };
        let mut next = self.state.clone();
        next.expenses.push(record.clone());
        self.commit(next)?;
        log::info!("Added {} ({})", amount, category);
        Ok(record)
    }

    /// Ids follow the clock but never repeat or go backwards
    fn next_id(&self, now_ms: i64) -> i64 {
        let last = self.state.expenses.iter().map(|e| e.id).max();
        match last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        }
    }

    pub fn delete_expense(&mut self, id: i64) -> Result<ExpenseRecord, SessionError> {
        let index = self
            .state
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(ValidationError::ExpenseNotFound(id))?;
        let mut next = self.state.clone();
        let removed = next.expenses.remove(index);
        self.commit(next)?;
        log::info!("Removed expense {}", id);
        Ok(removed)
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) -> Result<(), SessionError> {
        let mut next = self.state.clone();
        next.chart_type = chart_type;
        self.commit(next)
    }

    pub fn set_tax_income(&mut self, income: Decimal) -> Result<TaxEstimate, SessionError> {
        let stored = income.to_f64().filter(|v| v.is_finite() && *v > 0.0);
        let Some(stored) = stored else {
            return Err(ValidationError::InvalidIncome(income).into());
        };
        let mut next = self.state.clone();
        next.tax.income = stored;
        self.commit(next)?;
        Ok(self.tax_estimate())
    }

    /// Stores the bare `light`/`dark` literal
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), SessionError> {
        self.storage.set_item(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        log::info!("Switched to {} mode", theme);
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, SessionError> {
        let next = self.theme.toggle();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn totals(&self) -> CategoryTotals {
        aggregate(&self.state.expenses)
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_state(self.state.monthly_budget, &self.state.expenses)
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        crate::core::suggest(&self.totals(), self.state.monthly_budget)
    }

    pub fn chart(&self, canvas: CanvasSize) -> Vec<DrawPrimitive> {
        render_chart(
            &self.totals(),
            self.state.chart_type,
            canvas,
            &self.theme.tokens(),
        )
    }

    /// Recomputed from the stored income; malformed values estimate as zero
    pub fn tax_estimate(&self) -> TaxEstimate {
        estimate_tax_lossy(self.state.tax.income)
    }
}
