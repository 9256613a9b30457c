use tracing::{info, instrument};

use super::{empty, json, Client};
use crate::{
    error::{Error, Result},
    types::{
        AuthToken, Credentials, Page, PageRequest, RefreshRequest, RegisterResponse, User,
        UserCreate, UserUpdate,
    },
    Session,
};

impl Client {
    /// Exchanges credentials for a token pair, stores it in the session and returns
    /// the signed-in user.
    ///
    /// The credentials go out as form fields, not JSON.
    #[instrument(skip_all, fields(username = %credentials.username))]
    pub async fn login(&self, session: &mut Session, credentials: &Credentials) -> Result<User> {
        let req = self.http.post(self.url(&["auth", "token"])?).form(credentials);
        let token: AuthToken = json(req).await?;
        session.set_token(&token).await;
        info!("logged in");

        self.current_user(session).await
    }

    /// Trades the session's refresh token for a new pair and stores it.
    ///
    /// Nothing refreshes automatically; callers decide when to call this.
    #[instrument(skip_all)]
    pub async fn refresh(&self, session: &mut Session) -> Result<AuthToken> {
        let refresh_token = session
            .refresh_token()
            .ok_or_else(|| Error::new("no refresh token in session"))?;
        let req = self
            .post(session, &["auth", "refresh"])?
            .json(&RefreshRequest { refresh_token });
        let token: AuthToken = json(req).await?;
        session.set_token(&token).await;

        Ok(token)
    }

    /// Forgets the session's tokens. No request is made.
    pub async fn logout(&self, session: &mut Session) {
        session.clear().await;
        info!("logged out");
    }

    /// Creates an account that waits for admin approval.
    #[instrument(skip_all, fields(username = %user.username))]
    pub async fn register(&self, user: &UserCreate) -> Result<RegisterResponse> {
        json(self.http.post(self.url(&["auth", "register"])?).json(user)).await
    }

    #[instrument(skip_all)]
    pub async fn current_user(&self, session: &Session) -> Result<User> {
        json(self.get(session, &["users", "me"])?).await
    }

    /// Admin only.
    #[instrument(skip_all)]
    pub async fn list_users(&self, session: &Session, page: PageRequest) -> Result<Page<User>> {
        json(self.get(session, &["users"])?.query(&page)).await
    }

    /// Admin only.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn get_user(&self, session: &Session, id: &str) -> Result<User> {
        json(self.get(session, &["users", id])?).await
    }

    /// Admin only.
    #[instrument(skip_all, fields(username = %user.username))]
    pub async fn create_user(&self, session: &Session, user: &UserCreate) -> Result<User> {
        json(self.post(session, &["users"])?.json(user)).await
    }

    /// Admin only.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn update_user(
        &self,
        session: &Session,
        id: &str,
        update: &UserUpdate,
    ) -> Result<User> {
        json(self.put(session, &["users", id])?.json(update)).await
    }

    /// Admin only.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete_user(&self, session: &Session, id: &str) -> Result<()> {
        empty(self.delete(session, &["users", id])?).await
    }
}
