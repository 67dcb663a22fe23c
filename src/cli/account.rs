//! Account commands.

use anyhow::Result;

use lingoquest::profile::Registration;

use super::Context;

pub fn register(
    ctx: &mut Context,
    email: String,
    password: String,
    name: String,
    username: String,
    avatar: Option<String>,
) -> Result<()> {
    let profile = ctx.store.register(Registration {
        email,
        password,
        name,
        username,
        avatar,
    })?;

    println!(
        "Account created for {}. Your progress in {} language(s) was kept.",
        profile.email.as_deref().unwrap_or_default(),
        profile.progress.len()
    );
    Ok(())
}

pub fn login(ctx: &mut Context, email: &str, password: &str) -> Result<()> {
    let profile = ctx.store.login(email, password)?;
    println!("Welcome back, {} {}!", profile.avatar, profile.name);
    Ok(())
}

pub fn logout(ctx: &mut Context) -> Result<()> {
    ctx.store.logout()?;
    println!("Signed out.");
    Ok(())
}
