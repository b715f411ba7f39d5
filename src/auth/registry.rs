//! Account credentials and issued bearer tokens
//!
//! The registry owns both halves of authentication: checking a
//! username/password pair when a token is requested, and resolving a
//! presented token back into a [`Principal`]. Handlers call
//! [`TokenRegistry::authenticate_request`] before touching any store,
//! so the authorization policy only ever sees verified principals.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use axum::http::{HeaderMap, header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::token::{self, TokenSecret};
use crate::core::auth::Principal;
use crate::core::error::{AuthenticationError, StorefrontResult};

/// A configured account that may sign in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub password: String,
    /// Administrators may write; everyone else only reads
    #[serde(default)]
    pub admin: bool,
}

/// An account with its process-lifetime principal id
#[derive(Debug, Clone)]
struct RegisteredAccount {
    id: Uuid,
    account: UserAccount,
}

/// One issued token: the secret that proves it and who it belongs to
#[derive(Debug, Clone)]
struct IssuedToken {
    secret: TokenSecret,
    principal: Principal,
}

/// In-memory registry of accounts and the tokens issued to them
///
/// Tokens are opaque handles into this registry; they carry no claims
/// and stay valid for the lifetime of the process.
#[derive(Clone)]
pub struct TokenRegistry {
    accounts: Arc<Vec<RegisteredAccount>>,
    tokens: Arc<RwLock<HashMap<Uuid, IssuedToken>>>,
}

impl TokenRegistry {
    /// Build a registry over the configured accounts
    pub fn new(accounts: Vec<UserAccount>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| RegisteredAccount {
                id: Uuid::new_v4(),
                account,
            })
            .collect();

        Self {
            accounts: Arc::new(accounts),
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Check credentials and mint a new bearer token
    pub fn issue(&self, username: &str, password: &str) -> StorefrontResult<String> {
        let entry = self
            .accounts
            .iter()
            .find(|entry| entry.account.username == username && entry.account.password == password)
            .ok_or(AuthenticationError::BadCredentials)?;

        let token_id = Uuid::new_v4();
        let secret = token::generate_secret();
        let principal = Principal {
            id: entry.id,
            username: entry.account.username.clone(),
            is_admin: entry.account.admin,
        };

        let mut tokens = self
            .tokens
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        tokens.insert(
            token_id,
            IssuedToken {
                secret: secret.clone(),
                principal,
            },
        );

        Ok(token::format_token(token_id, &secret))
    }

    /// Resolve a raw bearer token into the principal it was issued to
    pub fn verify(&self, raw: &str) -> StorefrontResult<Principal> {
        let parsed = token::parse_token(raw).map_err(|_| AuthenticationError::InvalidToken)?;

        let tokens = self
            .tokens
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let issued = tokens
            .get(&parsed.token_id)
            .ok_or(AuthenticationError::InvalidToken)?;

        if issued.secret != parsed.secret {
            return Err(AuthenticationError::InvalidToken.into());
        }

        Ok(issued.principal.clone())
    }

    /// Authenticate a request from its `Authorization: Bearer` header
    pub fn authenticate_request(&self, headers: &HeaderMap) -> StorefrontResult<Principal> {
        let raw = bearer_token(headers)?;
        self.verify(raw)
    }
}

/// Pull the bearer token out of the `Authorization` header
///
/// Anything other than a well-formed `Bearer` header counts as no
/// credentials at all, the same as an anonymous request.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthenticationError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthenticationError::MissingCredentials)?;

    let text = value
        .to_str()
        .map_err(|_| AuthenticationError::MissingCredentials)?;

    text.strip_prefix("Bearer ")
        .ok_or(AuthenticationError::MissingCredentials)
}
