//! Login, restore, and browse the employee directory.
//!
//! Expects the EMS backend on localhost:8080:
//! ```bash
//! cargo run --example workflow
//! ```

use std::sync::Arc;

use ems_client::{
    AccessRole, ClientConfig, EntityStore, HttpClient, LoginRequest, ResourceClient,
    RouteGuard, RouteRequirement, SessionStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ems_client=debug".into()),
        )
        .init();

    let config = ClientConfig::new("http://localhost:8080/api").with_data_dir("./data");
    let http = HttpClient::new(&config)?;
    let api = ResourceClient::new(http);
    let session = Arc::new(SessionStore::new(api.clone(), &config.data_dir));
    let store = EntityStore::new(api, session.clone());

    // Reuse a persisted session when one exists.
    if session.restore()?.is_none() {
        let logged_in = session
            .login(&LoginRequest::new("admin", "admin123"))
            .await?;
        println!("logged in as {} ({})", logged_in.username, logged_in.role);
    } else {
        println!("restored persisted session");
    }

    let guard = RouteGuard::new(session.clone());
    let decision = guard.evaluate(
        "/employees",
        &RouteRequirement::AtLeast(AccessRole::Manager),
    );
    println!("/employees -> {decision:?}");

    store.fetch_employees().await?;
    let view = store.employees_view().await;
    println!("{} employees:", view.items.len());
    for employee in &view.items {
        let department = employee
            .department
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("-");
        println!("  #{} {} <{}> [{}]", employee.id, employee.name, employee.email, department);
    }

    session.logout();
    Ok(())
}
