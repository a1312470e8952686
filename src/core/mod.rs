pub mod aggregate;
pub mod budget;
pub mod chart;
pub mod expense;
pub mod money;
pub mod persona;
pub mod suggestions;
pub mod tax;
pub mod theme;

// Flat public surface for domain types and functions.
pub use aggregate::{aggregate, CategoryTotals};
pub use budget::{recent_expenses, BudgetStatus, BudgetSummary};
pub use chart::{render_chart, CanvasSize, ChartType, DrawPrimitive};
pub use expense::{Category, ExpenseRecord};
pub use money::display_amount;
pub use persona::{tips_for, Persona};
pub use suggestions::{suggest, Suggestion};
pub use tax::{estimate_tax_lossy, TaxEstimate};
pub use theme::{Theme, ThemeTokens};
