use tracing::{error, info, warn, Instrument};
use user_registry::{setup_tracing, RegistrySystem, Role, UserInput};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting user registry");

    let system = RegistrySystem::new();
    let client = system.user_client.clone();

    let span = tracing::info_span!("registration");
    let ana = async {
        info!("Registering first user");
        let input = UserInput::new("Ana", "ana@example.com", "Abcdef1!", "111.444.777-35", Role::Customer);
        client.create_user(input).await
    }
    .instrument(span)
    .await?;

    info!(user_id = %ana.id, employee_code = %ana.employee_code, "User registered");

    let duplicate = UserInput::new("Bo", "ana@example.com", "Qwerty7?", "123.456.789-09", Role::Manager);
    match client.create_user(duplicate).await {
        Ok(user) => error!(user_id = %user.id, "Duplicate email was accepted"),
        Err(e) => warn!(error = %e, "Duplicate registration rejected"),
    }

    let promoted = UserInput::new("Ana", "ana@example.com", "Abcdef1!", "111.444.777-35", Role::Manager)
        .with_super_password("Zyxwvu9$");
    let ana = client.update_user(ana.id.clone(), promoted).await?;
    info!(user_id = %ana.id, role = %ana.role, "User updated");

    let bo = UserInput::new("Bo", "bo@example.com", "Qwerty7?", "123.456.789-09", Role::Admin);
    let bo = client.create_user(bo).await?;
    info!(user_id = %bo.id, employee_code = %bo.employee_code, "User registered");

    client.delete_user(ana.id.clone()).await?;
    client.delete_user(ana.id).await?;

    for user in client.list_users().await? {
        info!(user_id = %user.id, email = %user.email, role = %user.role, "Stored user");
    }

    drop(client);
    system.shutdown().await?;

    info!("Registry stopped");
    Ok(())
}
