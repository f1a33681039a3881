//! Per-page state and the events that drive it.
//!
//! A [`PageState`] bundles the access gate with the calculator inputs. It is
//! created when a page view starts, mutated by input events, and dropped when
//! the view ends. Calculator events are refused while the gate is locked.

use serde::Serialize;

use crate::calculator::{CalculatorState, SavingsReport};
use crate::category::ExpenseCategory;
use crate::error::PageError;
use crate::gate::{AccessGate, AccessSecret, AuthOutcome};
use crate::problems;

/// State of one page view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageState {
    gate: AccessGate,
    calculator: CalculatorState,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub unlocked: bool,
    pub auth_error: bool,
    pub active_category: Option<&'static ExpenseCategory>,
    pub problems: &'static [&'static str],
    pub report: Option<SavingsReport>,
}

impl PageState {
    /// Fresh page: gate locked, calculator at its defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a page from inputs carried across a reload. The carried
    /// access value goes through a fresh gate, so a wrong value yields a
    /// locked page with the error flag set. A missing value yields a clean
    /// locked page.
    #[must_use]
    pub fn resume(secret: &AccessSecret, access: &str, calculator: CalculatorState) -> Self {
        let mut gate = AccessGate::new();
        if !access.is_empty() {
            gate.submit(secret, access);
        }
        Self { gate, calculator }
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn submit_password(&mut self, secret: &AccessSecret, input: &str) -> AuthOutcome {
        self.gate.submit(secret, input)
    }

    /// # Errors
    ///
    /// [`PageError::Locked`] before unlock, [`PageError::Calc`] out of domain.
    pub fn set_revenue(&mut self, revenue: f64) -> Result<(), PageError> {
        self.ensure_unlocked()?;
        Ok(self.calculator.set_revenue(revenue)?)
    }

    /// # Errors
    ///
    /// [`PageError::Locked`] before unlock, [`PageError::Calc`] out of domain.
    pub fn set_op_ex_percent(&mut self, op_ex_percent: f64) -> Result<(), PageError> {
        self.ensure_unlocked()?;
        Ok(self.calculator.set_op_ex_percent(op_ex_percent)?)
    }

    /// Returns whether the selection changed.
    ///
    /// # Errors
    ///
    /// [`PageError::Locked`] before unlock, [`PageError::Calc`] for an
    /// unknown index.
    pub fn select_category(&mut self, index: usize) -> Result<bool, PageError> {
        self.ensure_unlocked()?;
        Ok(self.calculator.select_category(index)?)
    }

    /// Recompute every derived figure for the current state.
    ///
    /// # Errors
    ///
    /// Propagates [`PageError::Calc`] from the calculator.
    pub fn view(&self) -> Result<PageView, PageError> {
        if !self.gate.is_unlocked() {
            return Ok(PageView {
                unlocked: false,
                auth_error: self.gate.has_error(),
                active_category: None,
                problems: &[],
                report: None,
            });
        }

        let active = self.calculator.active_category();
        Ok(PageView {
            unlocked: true,
            auth_error: false,
            active_category: Some(active),
            problems: problems::lookup(active.id),
            report: Some(self.calculator.report()?),
        })
    }

    fn ensure_unlocked(&self) -> Result<(), PageError> {
        if self.gate.is_unlocked() {
            Ok(())
        } else {
            Err(PageError::Locked)
        }
    }
}
