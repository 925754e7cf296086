//! [`Command`] for creating an admin [`Session`].

use std::time::Duration;

use common::DateTime;
use derive_more::{Display, Error, From};
use secrecy::{ExposeSecret as _, SecretString};
use tracerr::Traced;

use crate::{
    domain::{session, Session},
    Service,
};

use super::Command;

/// [`Command`] for creating an admin [`Session`] out of the shared password.
///
/// The password is compared verbatim against the configured one. Hardening
/// the scheme (hashing, per-user accounts) is deliberately out of scope.
#[derive(Debug)]
pub struct CreateAdminSession {
    /// Password to authenticate with.
    pub password: SecretString,
}

impl CreateAdminSession {
    /// [`Duration`] of [`Session`] expiration.
    const EXPIRATION_DURATION: Duration = Duration::from_secs(30 * 60);
}

/// Output of [`CreateAdminSession`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`session::Token`] of the created [`Session`].
    pub token: session::Token,

    /// [`DateTime`] when the [`Session`] expires.
    ///
    /// [`DateTime`]: common::DateTime
    pub expires_at: session::ExpirationDateTime,
}

impl<Db, Nf> Command<CreateAdminSession> for Service<Db, Nf> {
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateAdminSession,
    ) -> Result<Self::Ok, Self::Err> {
        use CreateAdminSession as Cmd;
        use ExecutionError as E;

        let CreateAdminSession { password } = cmd;

        if password.expose_secret()
            != self.config().admin_password.expose_secret()
        {
            return Err(tracerr::new!(E::WrongPassword));
        }

        let expires_at = (DateTime::now() + Cmd::EXPIRATION_DURATION).coerce();
        let token = jsonwebtoken::encode::<Session>(
            &jsonwebtoken::Header::default(),
            &Session { expires_at },
            &self.config().jwt_encoding_key,
        )
        .map_err(tracerr::from_and_wrap!(=> E))?;

        // SAFETY: `jsonwebtoken::encode` always returns a valid
        //         `session::Token`.
        #[expect(unsafe_code, reason = "invariant upheld by `jsonwebtoken`")]
        let token = unsafe { session::Token::new_unchecked(token) };

        Ok(Output { token, expires_at })
    }
}

/// Error of [`CreateAdminSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`jsonwebtoken`] encoding error.
    #[display("Failed to encode a JSON Web Token: {_0}")]
    JsonWebTokenEncodeError(jsonwebtoken::errors::Error),

    /// Provided password does not match the configured one.
    #[display("Wrong admin password")]
    WrongPassword,
}

#[cfg(test)]
mod spec {
    use secrecy::SecretString;

    use crate::{command::CreateAdminSession, fixture, Command as _};

    use super::ExecutionError;

    #[tokio::test]
    async fn issues_token_for_correct_password() {
        let service = fixture::service();

        let output = service
            .execute(CreateAdminSession {
                password: SecretString::from("수수께끼".to_owned()),
            })
            .await
            .unwrap();
        assert!(!output.token.as_ref().is_empty());
    }

    #[tokio::test]
    async fn rejects_wrong_password() {
        let service = fixture::service();

        let err = service
            .execute(CreateAdminSession {
                password: SecretString::from("틀린 비밀번호".to_owned()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::WrongPassword));
    }
}
