use sakage_core::Money;
use thiserror::Error;

/// Errors from the suggestion engine.
///
/// Both variants are user-facing: the server relays the message text
/// verbatim, so it names concrete dollar amounts.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("budget must be at least {min}; got {given}")]
    BudgetBelowMinimum { min: Money, given: Money },

    #[error("nothing on the menu fits within {0}; try raising the budget or browse the full menu")]
    BudgetShortfall(Money),
}
