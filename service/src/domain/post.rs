//! [`Post`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_text, unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog article authored by the brokerage.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Post {
    /// ID of this [`Post`].
    pub id: Id,

    /// [`Title`] of this [`Post`].
    pub title: Title,

    /// [`Content`] of this [`Post`].
    pub content: Content,

    /// [`Excerpt`] of this [`Post`] shown in list views.
    pub excerpt: Excerpt,

    /// [`DateTime`] when this [`Post`] was created.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,
}

/// ID of a [`Post`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_text! {
    #[doc = "Title of a [`Post`]."]
    Title, max = 256
}

define_text! {
    #[doc = "Content of a [`Post`]."]
    Content, max = 65536
}

define_text! {
    #[doc = "Excerpt of a [`Post`] shown in list views."]
    Excerpt, max = 512
}

impl Excerpt {
    /// Derives an [`Excerpt`] out of the given [`Content`]: its first 100
    /// characters followed by an ellipsis.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn derived(content: &Content) -> Self {
        let mut text: String = content.as_ref().chars().take(100).collect();
        text.push('…');
        Self::new(text.trim().to_owned())
            .expect("derived excerpt is non-empty and bounded")
    }
}

/// [`DateTime`] when a [`Post`] was created.
pub type CreationDateTime = DateTimeOf<(Post, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{Content, Excerpt};

    #[test]
    fn derives_excerpt_from_content() {
        let short = Content::new("공장 부지 고르는 법").unwrap();
        assert_eq!(Excerpt::derived(&short).as_ref(), "공장 부지 고르는 법…");

        let long = Content::new("가".repeat(300)).unwrap();
        let excerpt = Excerpt::derived(&long);
        assert_eq!(excerpt.as_ref().chars().count(), 101);
        assert!(excerpt.as_ref().ends_with('…'));
    }
}
