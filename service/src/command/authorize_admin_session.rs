//! [`Command`] for authorizing an admin [`Session`].

use derive_more::{Display, Error, From};
use jsonwebtoken::Validation;
use tracerr::Traced;

use crate::{
    domain::{session, Session},
    Service,
};

use super::Command;

/// [`Command`] for authorizing an admin [`Session`] by its token.
///
/// Expired or malformed tokens are rejected by the [JWT] validation.
///
/// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
#[derive(Clone, Debug, From)]
pub struct AuthorizeAdminSession {
    /// [`session::Token`] to authorize.
    pub token: session::Token,
}

impl<Db, Nf> Command<AuthorizeAdminSession> for Service<Db, Nf> {
    type Ok = Session;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AuthorizeAdminSession,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AuthorizeAdminSession { token } = cmd;

        let session = jsonwebtoken::decode::<Session>(
            token.as_ref(),
            &self.config().jwt_decoding_key,
            &Validation::default(),
        )
        .map_err(tracerr::from_and_wrap!(=> E))?
        .claims;

        Ok(session)
    }
}

/// Error of [`AuthorizeAdminSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`jsonwebtoken`] decoding error.
    #[display("Failed to decode a JSON Web Token: {_0}")]
    JsonWebTokenDecodeError(jsonwebtoken::errors::Error),
}

#[cfg(test)]
mod spec {
    use secrecy::SecretString;

    use crate::{
        command::{AuthorizeAdminSession, CreateAdminSession},
        domain::session,
        fixture, Command as _,
    };

    #[tokio::test]
    async fn authorizes_issued_token() {
        let service = fixture::service();
        let output = service
            .execute(CreateAdminSession {
                password: SecretString::from("수수께끼".to_owned()),
            })
            .await
            .unwrap();

        let session = service
            .execute(AuthorizeAdminSession {
                token: output.token,
            })
            .await
            .unwrap();
        assert_eq!(
            session.expires_at.unix_timestamp(),
            output.expires_at.unix_timestamp(),
        );
    }

    #[tokio::test]
    async fn rejects_garbage_token() {
        let service = fixture::service();

        let result = service
            .execute(AuthorizeAdminSession {
                token: "말도 안 되는 토큰".parse::<session::Token>().unwrap(),
            })
            .await;
        assert!(result.is_err());
    }
}
