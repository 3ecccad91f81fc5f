//! Session bootstrap
//!
//! Before anything is rendered the client needs to know who it is and which
//! room it is in. Both lookups run concurrently and both must succeed.

use parley_core::Session;
use tracing::info;

use crate::api::ApiClient;
use crate::error::Result;

/// Identity and room for one connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    pub session: Session,
    pub room_code: String,
}

/// Fetch the user identity and active room code
pub async fn fetch_session(api: &ApiClient) -> Result<Bootstrap> {
    let (session, room_code) = tokio::try_join!(api.get_user(), api.get_room_code())?;
    info!(
        user_id = session.user_id,
        username = %session.username,
        room_code = %room_code,
        "Session bootstrapped"
    );
    Ok(Bootstrap { session, room_code })
}

/// Same as [`fetch_session`] for servers that only expose the username
pub async fn fetch_legacy_session(api: &ApiClient) -> Result<Bootstrap> {
    let (username, room_code) = tokio::try_join!(api.get_username(), api.get_room_code())?;
    info!(username = %username, room_code = %room_code, "Session bootstrapped (legacy)");
    Ok(Bootstrap {
        session: Session::from_username(username),
        room_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::fake_api;
    use crate::error::Error;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_fetch_session() {
        let api = fake_api(Arc::new(Mutex::new("ABCD".into())), false).await;
        let boot = fetch_session(&api).await.unwrap();
        assert_eq!(boot.session.username, "alice");
        assert_eq!(boot.room_code, "ABCD");
    }

    #[tokio::test]
    async fn test_legacy_session_has_no_id() {
        let api = fake_api(Arc::new(Mutex::new("GLOBAL".into())), false).await;
        let boot = fetch_legacy_session(&api).await.unwrap();
        assert_eq!(boot.session.user_id, 0);
        assert_eq!(boot.session.username, "alice");
    }

    #[tokio::test]
    async fn test_either_failure_fails_bootstrap() {
        let api = fake_api(Arc::new(Mutex::new("GLOBAL".into())), true).await;
        assert!(matches!(
            fetch_session(&api).await,
            Err(Error::Status { status: 500, .. })
        ));
    }
}
