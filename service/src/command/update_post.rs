//! [`Command`] for editing a [`Post`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{post, Post},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for editing an existing blog [`Post`].
#[derive(Clone, Debug)]
pub struct UpdatePost {
    /// ID of the [`Post`] to edit.
    pub id: post::Id,

    /// New [`post::Title`].
    pub title: post::Title,

    /// New [`post::Content`].
    pub content: post::Content,

    /// New [`post::Excerpt`].
    ///
    /// When absent, re-derived from the new content.
    pub excerpt: Option<post::Excerpt>,
}

impl<Db, Nf> Command<UpdatePost> for Service<Db, Nf>
where
    Db: Storage<
            Select<By<Option<Post>, post::Id>>,
            Ok = Option<Post>,
            Err = Traced<storage::Error>,
        > + Storage<Update<Post>, Err = Traced<storage::Error>>,
{
    type Ok = Post;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdatePost) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdatePost {
            id,
            title,
            content,
            excerpt,
        } = cmd;

        let stored = self
            .storage()
            .execute(Select(By::<Option<Post>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PostNotExists(id))
            .map_err(tracerr::wrap!())?;

        let post = Post {
            id,
            excerpt: excerpt
                .unwrap_or_else(|| post::Excerpt::derived(&content)),
            title,
            content,
            created_at: stored.created_at,
        };

        self.storage()
            .execute(Update(post.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(post)
    }
}

/// Error of [`UpdatePost`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    ///
    /// [`Storage`]: crate::infra::Storage
    #[display("`Storage` operation failed: {_0}")]
    #[from]
    Db(storage::Error),

    /// [`Post`] with the provided ID does not exist.
    #[display("`Post(id: {_0})` does not exist")]
    PostNotExists(#[error(not(source))] post::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{CreatePost, UpdatePost},
        fixture, Command as _,
    };

    use super::ExecutionError;

    #[tokio::test]
    async fn edits_content_and_rederives_excerpt() {
        let service = fixture::service();
        let created = service
            .execute(CreatePost {
                title: "공장 부지 고르는 법".parse().unwrap(),
                content: "입지가 절반이다".parse().unwrap(),
                excerpt: None,
            })
            .await
            .unwrap();

        let updated = service
            .execute(UpdatePost {
                id: created.id,
                title: created.title.clone(),
                content: "도로 폭이 절반이다".parse().unwrap(),
                excerpt: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.excerpt.as_ref(), "도로 폭이 절반이다…");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn reports_unknown_post() {
        let service = fixture::service();

        let err = service
            .execute(UpdatePost {
                id: crate::domain::post::Id::new(),
                title: "제목".parse().unwrap(),
                content: "내용".parse().unwrap(),
                excerpt: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::PostNotExists(_)));
    }
}
