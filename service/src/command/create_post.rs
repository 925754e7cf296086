//! [`Command`] for publishing a new [`Post`].

use common::{operations::Insert, DateTime};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{post, Post},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for publishing a new blog [`Post`].
#[derive(Clone, Debug)]
pub struct CreatePost {
    /// [`post::Title`] of the new [`Post`].
    pub title: post::Title,

    /// [`post::Content`] of the new [`Post`].
    pub content: post::Content,

    /// [`post::Excerpt`] of the new [`Post`].
    ///
    /// When absent, derived from the content.
    pub excerpt: Option<post::Excerpt>,
}

impl<Db, Nf> Command<CreatePost> for Service<Db, Nf>
where
    Db: Storage<Insert<Post>, Err = Traced<storage::Error>>,
{
    type Ok = Post;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreatePost) -> Result<Self::Ok, Self::Err> {
        let CreatePost {
            title,
            content,
            excerpt,
        } = cmd;

        let post = Post {
            id: post::Id::new(),
            excerpt: excerpt
                .unwrap_or_else(|| post::Excerpt::derived(&content)),
            title,
            content,
            created_at: DateTime::now().coerce(),
        };

        self.storage()
            .execute(Insert(post.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
            .map(drop)?;

        Ok(post)
    }
}

/// Error of [`CreatePost`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    ///
    /// [`Storage`]: crate::infra::Storage
    #[display("`Storage` operation failed: {_0}")]
    Db(storage::Error),
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{command::CreatePost, domain::Post, fixture, Command as _};

    #[tokio::test]
    async fn derives_excerpt_and_prepends() {
        let service = fixture::service();

        let first = service
            .execute(CreatePost {
                title: "공장 부지 고르는 법".parse().unwrap(),
                content: "입지가 절반이다".parse().unwrap(),
                excerpt: None,
            })
            .await
            .unwrap();
        assert_eq!(first.excerpt.as_ref(), "입지가 절반이다…");

        let second = service
            .execute(CreatePost {
                title: "창고 임대 체크리스트".parse().unwrap(),
                content: "층고와 진입로를 확인한다".parse().unwrap(),
                excerpt: Some("요약".parse().unwrap()),
            })
            .await
            .unwrap();
        assert_eq!(second.excerpt.as_ref(), "요약");

        let stored: Vec<Post> = service
            .storage()
            .execute(Select(By::<Vec<Post>, _>::new(())))
            .await
            .unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, second.id);
    }
}
