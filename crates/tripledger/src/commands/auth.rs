//! The `login`, `register`, `logout` and `whoami` subcommands.

use tripledger_core::{AuthClient, BackendConfig, Credentials, SessionMirror};

use crate::cli::CredentialArgs;

pub async fn login(args: CredentialArgs) -> anyhow::Result<()> {
    let client = AuthClient::new(BackendConfig::from_env());
    let user = client
        .login(&Credentials {
            email: args.email,
            password: args.password,
        })
        .await?;

    let mut session = SessionMirror::open_default()?;
    session.login(user)?;
    println!("Logged in as {}", session_email(&session));
    Ok(())
}

pub async fn register(args: CredentialArgs) -> anyhow::Result<()> {
    let client = AuthClient::new(BackendConfig::from_env());
    let user = client
        .register(&Credentials {
            email: args.email,
            password: args.password,
        })
        .await?;

    let mut session = SessionMirror::open_default()?;
    session.login(user)?;
    println!("Registered and logged in as {}", session_email(&session));
    Ok(())
}

pub fn logout() -> anyhow::Result<()> {
    let mut session = SessionMirror::open_default()?;
    session.logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami() -> anyhow::Result<()> {
    let session = SessionMirror::open_default()?;
    match session.current() {
        Some(user) => println!("{}", user.email),
        None => println!("Not logged in"),
    }
    Ok(())
}

fn session_email(session: &SessionMirror) -> &str {
    session.current().map_or("<unknown>", |user| &user.email)
}
