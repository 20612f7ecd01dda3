use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No plan priced at the base tier ({expected_price} XOF) in the catalog")]
    MissingBasePlan { expected_price: i64 },

    #[error("Plan catalog is empty")]
    EmptyCatalog,

    #[error("Subscription references plan {plan_id}, which is not in the catalog")]
    UnknownPlan { plan_id: i64 },

    #[error("{kind} payment of {actual} XOF does not match the expected {expected} XOF")]
    PaymentAmountMismatch {
        kind: String,
        expected: i64,
        actual: i64,
    },

    #[error(
        "Subscription spans {actual_days} days but a {duration_months}-month renewal \
         should span {expected_days} days"
    )]
    SubscriptionDurationMismatch {
        duration_months: u32,
        expected_days: i64,
        actual_days: i64,
    },

    #[error(
        "Installation window violation: {label} is {actual} business days away, \
         expected {min}..={max}"
    )]
    InstallationWindow {
        label: &'static str,
        min: u32,
        max: u32,
        actual: u32,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;
