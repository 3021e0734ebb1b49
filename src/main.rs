use lending_desk::{
    adapters::mock::{
        authorization_service::AuthorizationService as MockAuthorizationService,
        book_store::BookStore as MockBookStore,
    },
    application::loan::{ServiceDependencies, request_loan},
    domain::commands::RequestLoan,
    domain::value_objects::{BookId, UserId},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lending_desk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Demo input (defaults: user=1, book=2)
    let user_id = env_i64("DEMO_USER_ID", 1);
    let book_id = env_i64("DEMO_BOOK_ID", 2);

    // Initialize adapters
    let authorization_service = Arc::new(MockAuthorizationService::new());
    let book_store = Arc::new(MockBookStore::new());

    // Create service dependencies
    let deps = ServiceDependencies {
        authorization_service,
        book_store: book_store.clone(),
    };

    let cmd = RequestLoan {
        user_id: UserId::new(user_id),
        book_id: BookId::new(book_id),
    };

    tracing::info!("Requesting loan: user={}, book={}", user_id, book_id);

    let outcome = request_loan(&deps, cmd).await.expect("Loan failed");

    tracing::info!("Outcome: {}", outcome.as_str());
    tracing::info!("Ledger entries: {}", book_store.recorded_loans().len());
}

fn env_i64(key: &str, default: i64) -> i64 {
    match std::env::var(key) {
        Ok(v) => v.parse().unwrap_or(default),
        Err(_) => default,
    }
}
