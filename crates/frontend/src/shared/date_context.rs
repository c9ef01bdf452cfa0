//! Reporting-period selection state shared by the actuals and targets
//! screens.
//!
//! The store owns the three selects' values and an explicit listener
//! registry: every constituent change notifies all registered listeners
//! synchronously, in registration order, with the full context snapshot.
//! Registration hands back a subscription that can be used to
//! unregister.

use std::rc::Rc;

use chrono::Utc;
use leptos::prelude::*;

use contracts::periods::{
    generate_financial_years, generate_periods, resolve_current_period, DateContext,
    FinancialYear, PeriodType,
};

/// How many financial years to offer before/after the current one.
const YEARS_BEFORE: u32 = 2;
const YEARS_AFTER: u32 = 1;

/// Capability to unregister a context listener.
pub struct ContextSubscription(u64);

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(u64, Rc<dyn Fn(&DateContext)>)>,
}

#[derive(Clone, Copy)]
pub struct DateContextStore {
    pub financial_year: RwSignal<String>,
    pub period_type: RwSignal<String>,
    pub period_identifier: RwSignal<String>,
    listeners: StoredValue<ListenerRegistry, LocalStorage>,
}

impl DateContextStore {
    /// A store preselected to the financial year containing today,
    /// monthly granularity, current month.
    pub fn new() -> Self {
        let today = Utc::now().date_naive();
        let initial = DateContext::default_for(today);
        Self {
            financial_year: RwSignal::new(initial.financial_year),
            period_type: RwSignal::new(initial.period_type),
            period_identifier: RwSignal::new(initial.period_identifier),
            listeners: StoredValue::new_local(ListenerRegistry::default()),
        }
    }

    /// Selectable financial years, ascending.
    pub fn financial_year_options(&self) -> Vec<(String, String)> {
        let today = Utc::now().date_naive();
        generate_financial_years(today, YEARS_BEFORE, YEARS_AFTER)
            .into_iter()
            .map(|fy| {
                let value = fy.to_string();
                (value.clone(), value)
            })
            .collect()
    }

    pub fn period_type_options(&self) -> Vec<(String, String)> {
        PeriodType::ALL
            .iter()
            .map(|pt| (pt.as_str().to_string(), pt.as_str().to_string()))
            .collect()
    }

    /// Period identifiers for the selected year and type. Reactive:
    /// tracks both signals. Empty while either part is unselected.
    pub fn period_identifier_options(&self) -> Vec<(String, String)> {
        let year: FinancialYear = match self.financial_year.get().parse() {
            Ok(year) => year,
            Err(_) => return Vec::new(),
        };
        let period_type: PeriodType = match self.period_type.get().parse() {
            Ok(pt) => pt,
            Err(_) => return Vec::new(),
        };
        generate_periods(year, period_type)
            .into_iter()
            .map(|p| (p.value, p.label))
            .collect()
    }

    /// Untracked snapshot, for event handlers and listeners.
    pub fn snapshot(&self) -> DateContext {
        DateContext {
            financial_year: self.financial_year.get_untracked(),
            period_type: self.period_type.get_untracked(),
            period_identifier: self.period_identifier.get_untracked(),
        }
    }

    /// Reactive view of the context, for derived UI.
    pub fn context(&self) -> DateContext {
        DateContext {
            financial_year: self.financial_year.get(),
            period_type: self.period_type.get(),
            period_identifier: self.period_identifier.get(),
        }
    }

    pub fn set_financial_year(&self, value: String) {
        self.financial_year.set(value);
        self.reset_period_identifier();
        self.notify();
    }

    pub fn set_period_type(&self, value: String) {
        self.period_type.set(value);
        self.reset_period_identifier();
        self.notify();
    }

    pub fn set_period_identifier(&self, value: String) {
        self.period_identifier.set(value);
        self.notify();
    }

    // The option list just changed shape; preselect the period containing
    // today, or clear the selection when today is not among the options.
    fn reset_period_identifier(&self) {
        let today = Utc::now().date_naive();
        let resolved = self
            .financial_year
            .get_untracked()
            .parse::<FinancialYear>()
            .ok()
            .zip(self.period_type.get_untracked().parse::<PeriodType>().ok())
            .and_then(|(year, period_type)| resolve_current_period(year, period_type, today));
        self.period_identifier.set(resolved.unwrap_or_default());
    }

    /// Register a listener called on every context change.
    pub fn subscribe(&self, listener: impl Fn(&DateContext) + 'static) -> ContextSubscription {
        let mut id = 0;
        self.listeners.update_value(|registry| {
            registry.next_id += 1;
            id = registry.next_id;
            registry.entries.push((id, Rc::new(listener)));
        });
        ContextSubscription(id)
    }

    pub fn unsubscribe(&self, subscription: ContextSubscription) {
        self.listeners
            .update_value(|registry| registry.entries.retain(|(id, _)| *id != subscription.0));
    }

    fn notify(&self) {
        let context = self.snapshot();
        // Invoke over a copy of the list so a listener registering another
        // listener cannot invalidate the iteration.
        let entries: Vec<Rc<dyn Fn(&DateContext)>> = self
            .listeners
            .with_value(|registry| registry.entries.iter().map(|(_, f)| f.clone()).collect());
        for listener in entries {
            listener(&context);
        }
    }
}

impl Default for DateContextStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn listeners_run_in_registration_order_with_the_full_context() {
        let store = DateContextStore::new();
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        store.subscribe(move |ctx| first.borrow_mut().push(format!("a:{}", ctx.period_type)));
        let second = Rc::clone(&seen);
        store.subscribe(move |ctx| second.borrow_mut().push(format!("b:{}", ctx.period_type)));

        store.set_period_type("Yearly".to_string());
        assert_eq!(*seen.borrow(), vec!["a:Yearly", "b:Yearly"]);
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let store = DateContextStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.set_period_identifier("1".to_string());
        store.unsubscribe(subscription);
        store.set_period_identifier("2".to_string());
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn changing_the_period_type_reshapes_the_identifier_options() {
        let store = DateContextStore::new();
        store.set_period_type("Quarterly".to_string());
        let options = store.period_identifier_options();
        assert_eq!(options.len(), 4);
        // Today always falls in some quarter of the current year.
        let selected = store.period_identifier.get_untracked();
        assert!(options.iter().any(|(value, _)| *value == selected));
    }

    #[test]
    fn clearing_the_year_invalidates_the_context() {
        let store = DateContextStore::new();
        assert!(store.snapshot().is_valid());
        store.set_financial_year(String::new());
        let context = store.snapshot();
        assert!(!context.is_valid());
        assert!(context.period_identifier.is_empty());
        assert!(store.period_identifier_options().is_empty());
    }
}
