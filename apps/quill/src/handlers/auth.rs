//! Session handlers: login, register, logout.

use std::convert::Infallible;
use std::future::Future;

use quill_core::SessionState;
use quill_core::domain::User;
use quill_shared::{LoginForm, RegisterForm, SessionView};

use crate::error::AppResult;
use crate::state::AppState;

pub async fn login(state: &AppState, form: LoginForm) -> AppResult<User> {
    form.validate()?;
    let user = with_progress(state, state.session.login(form.email.trim(), &form.password)).await?;
    Ok(user)
}

pub async fn register(state: &AppState, form: RegisterForm) -> AppResult<User> {
    form.validate()?;
    let user = with_progress(
        state,
        state
            .session
            .register(form.name.trim(), form.email.trim(), &form.password),
    )
    .await?;
    Ok(user)
}

pub async fn logout(state: &AppState) -> AppResult<()> {
    state.session.logout().await?;
    Ok(())
}

pub fn whoami(state: &AppState) -> SessionState {
    state.session.state()
}

/// Drive `action`, announcing once when the session turns pending.
async fn with_progress<T>(state: &AppState, action: impl Future<Output = T>) -> T {
    let mut changes = state.session.subscribe();
    let progress = async move {
        while changes.changed().await.is_ok() {
            if changes.borrow_and_update().state() == SessionState::Pending {
                println!("{}", SessionView::Pending.label());
                break;
            }
        }
        std::future::pending::<Infallible>().await
    };

    tokio::select! {
        out = action => out,
        never = progress => match never {},
    }
}
