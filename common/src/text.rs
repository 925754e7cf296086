//! Macros for defining validated text newtypes.

/// Macro for defining a validated text newtype.
///
/// The generated type holds a non-empty, trimmed [`String`] of at most the
/// given number of characters, constructed through `new` (checked),
/// `new_unchecked` (bypass) or [`FromStr`].
///
/// # Example
///
/// ```ignore
/// define_text! {
///     #[doc = "Name of a wizard."]
///     WizardName, max = 64
/// }
/// ```
///
/// [`FromStr`]: std::str::FromStr
#[macro_export]
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        $name:ident, max = $max:literal
    ) => {
        #[doc = $doc]
        #[derive(
            Clone,
            Debug,
            Eq,
            Hash,
            PartialEq,
            $crate::private::serde::Deserialize,
            $crate::private::serde::Serialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new value without performing any validation.
            ///
            /// # Safety
            ///
            /// The caller must ensure that the given `value` matches the
            /// format.
            #[expect(unsafe_code, reason = "bypass")]
            #[must_use]
            pub unsafe fn new_unchecked(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Creates a new value if the given `value` is valid.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                Self::check(&value).then_some(Self(value))
            }

            /// Checks whether the given `value` is valid.
            fn check(value: impl AsRef<str>) -> bool {
                let value = value.as_ref();
                value.trim() == value
                    && !value.is_empty()
                    && value.chars().count() <= $max
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut ::core::fmt::Formatter<'_>,
            ) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(::core::concat!(
                    "invalid `",
                    ::core::stringify!($name),
                    "`",
                ))
            }
        }
    };
}
