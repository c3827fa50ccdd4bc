// Copyright 2025 Cowboy AI, LLC.

//! Async functions and fire-and-forget tasks
//!
//! [`fetch_user_id`] yields once before answering, [`fetch_username`] awaits
//! it, and [`launch`] starts [`connect_user`] on the runtime without waiting.

use crate::console::Console;
use crate::errors::{TourError, TourResult};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// Server that answers with the registered user id
pub const PRIMARY_SERVER: &str = "primary";

/// User id returned by the primary server
pub const PRIMARY_USER_ID: u32 = 97;

/// User id returned by every other server
pub const GUEST_USER_ID: u32 = 501;

/// Fetch the user id from `server`
pub async fn fetch_user_id(server: &str) -> u32 {
    tokio::task::yield_now().await;
    let user_id = if server == PRIMARY_SERVER {
        PRIMARY_USER_ID
    } else {
        GUEST_USER_ID
    };
    debug!(server, user_id, "Fetched user id");
    user_id
}

/// Fetch the user name registered on `server`
pub async fn fetch_username(server: &str) -> String {
    let user_id = fetch_user_id(server).await;
    if user_id == GUEST_USER_ID {
        "Guest".to_string()
    } else {
        "John Appleseed".to_string()
    }
}

/// Fetch id and name, then build the greeting
pub async fn connect_user(server: &str) -> String {
    let user_id = fetch_user_id(server).await;
    let username = fetch_username(server).await;
    format!("Hello {username}, user ID {user_id}")
}

/// Start [`connect_user`] in the background; the greeting goes to `console`
///
/// The caller is not blocked and gets no ordering guarantee relative to its
/// own output. Fails when called outside a Tokio runtime.
pub fn launch(console: Console, server: impl Into<String>) -> TourResult<JoinHandle<()>> {
    let runtime = Handle::try_current()
        .map_err(|err| TourError::BackgroundTask(format!("cannot launch: {err}")))?;
    let server = server.into();
    debug!(server = %server, "Launching connect_user");
    Ok(runtime.spawn(async move {
        let greeting = connect_user(&server).await;
        console.line(greeting);
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_user_id_blocking() {
        assert_eq!(tokio_test::block_on(fetch_user_id("primary")), 97);
        assert_eq!(tokio_test::block_on(fetch_user_id("secondary")), 501);
    }

    #[tokio::test]
    async fn test_fetch_username() {
        assert_eq!(fetch_username("primary").await, "John Appleseed");
        assert_eq!(fetch_username("backup").await, "Guest");
        assert_eq!(fetch_username("").await, "Guest");
    }

    #[tokio::test]
    async fn test_connect_user() {
        assert_eq!(
            connect_user("primary").await,
            "Hello John Appleseed, user ID 97"
        );
        assert_eq!(connect_user("mirror").await, "Hello Guest, user ID 501");
    }

    #[tokio::test]
    async fn test_launch_writes_when_done() {
        let console = Console::captured();
        let handle = launch(console.clone(), PRIMARY_SERVER).unwrap();
        handle.await.unwrap();
        assert_eq!(console.lines(), vec!["Hello John Appleseed, user ID 97"]);
    }

    #[test]
    fn test_launch_outside_runtime_fails() {
        let result = launch(Console::captured(), PRIMARY_SERVER);
        assert!(matches!(result, Err(TourError::BackgroundTask(_))));
    }
}
