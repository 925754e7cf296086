//! [`Listing`] definitions.

use std::{fmt::Write as _, sync::LazyLock};

#[cfg(doc)]
use common::DateTime;
use common::{
    define_kind, define_text, unit, DateTimeOf, Price, Pyeong, SquareMeters,
};
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Phone;

/// Industrial property offered for sale or lease.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// [`Kind`] of this [`Listing`].
    pub kind: Kind,

    /// [`Deal`] this [`Listing`] is offered under.
    pub deal: Deal,

    /// Publication [`Status`] of this [`Listing`].
    #[serde(default)]
    pub status: Status,

    /// Total [`Price`] of this [`Listing`] (deposit for leases).
    pub price: Price,

    /// Monthly rent of this [`Listing`], if leased.
    pub monthly_rent: Option<Price>,

    /// Land area of this [`Listing`].
    pub area: SquareMeters,

    /// Building footprint area of this [`Listing`], if any.
    pub building_area: Option<SquareMeters>,

    /// Total floor area of this [`Listing`], if any.
    pub total_floor_area: Option<SquareMeters>,

    /// Number of floors above ground, if known.
    pub ground_floors: Option<u16>,

    /// Number of floors below ground, if known.
    pub underground_floors: Option<u16>,

    /// [`StructureName`] of the building, if any.
    pub structure: Option<StructureName>,

    /// Use-approval date of the building, verbatim from the registry.
    pub use_approval_date: Option<UseApprovalDate>,

    /// Full lot-number [`Address`] of this [`Listing`].
    ///
    /// Internal use only; public paths render [`Listing::masked_address`].
    pub address: Address,

    /// [`MaskedAddress`] of this [`Listing`], derived from its [`Address`].
    pub masked_address: MaskedAddress,

    /// [`Region`] this [`Listing`] is located in.
    pub region: Region,

    /// Cadastral [`LandCategory`] of this [`Listing`].
    pub land_category: LandCategory,

    /// [`Zoning`] designation of this [`Listing`].
    pub zoning: Zoning,

    /// [`RoadFrontage`] description of this [`Listing`], if any.
    pub road_frontage: Option<RoadFrontage>,

    /// Lot [`Shape`] of this [`Listing`], if any.
    pub shape: Option<Shape>,

    /// [`Terrain`] of this [`Listing`], if any.
    pub terrain: Option<Terrain>,

    /// Indicator whether the building is registered as illegal.
    #[serde(default)]
    pub illegal_building: bool,

    /// [`Description`] of this [`Listing`].
    pub description: Description,

    /// Long-form [`Article`] about this [`Listing`], if any.
    pub article: Option<Article>,

    /// Image references of this [`Listing`].
    #[serde(default)]
    pub images: Vec<ImageUrl>,

    /// Video URL of this [`Listing`], if any.
    pub video_url: Option<VideoUrl>,

    /// Internal [`Memo`] about this [`Listing`].
    ///
    /// Internal use only; never exposed on public paths.
    pub memo: Option<Memo>,

    /// [`Phone`] of the property owner.
    ///
    /// Internal use only; never exposed on public paths.
    pub owner_phone: Option<Phone>,

    /// Brokerage [`Disclosure`] fields of this [`Listing`].
    #[serde(default)]
    pub disclosure: Disclosure,

    /// [`DateTime`] when this [`Listing`] was created.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Listing`] was last updated, if it was.
    #[serde(default, with = "common::datetime::serde::rfc3339::option")]
    pub updated_at: Option<ModificationDateTime>,
}

impl Listing {
    /// Returns the land area of this [`Listing`] in [`Pyeong`].
    #[must_use]
    pub fn pyeong(&self) -> Pyeong {
        self.area.to_pyeong()
    }

    /// Returns the [`Price`] per [`Pyeong`] of this [`Listing`].
    #[must_use]
    pub fn price_per_pyeong(&self) -> Price {
        self.price.per_pyeong(self.area)
    }

    /// Indicates whether this [`Listing`] may be served on public detail
    /// paths.
    ///
    /// [`Status::Sold`] listings stay individually viewable, while
    /// [`Status::Hidden`] ones are reported as absent.
    #[must_use]
    pub fn is_published(&self) -> bool {
        !matches!(self.status, Status::Hidden)
    }

    /// Composes a deterministic [`Description`] of this [`Listing`] out of
    /// its fields.
    ///
    /// Used as the fallback when no description is authored. Renders the
    /// [`MaskedAddress`], never the full [`Address`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn describe(&self) -> Description {
        let mut text = format!(
            "{} {}에 위치한 {} {}입니다. 면적 {}㎡({}평), {} 지목. ",
            self.region,
            self.masked_address,
            self.zoning,
            self.kind.label(),
            self.area.as_decimal(),
            self.pyeong().as_decimal(),
            self.land_category,
        );
        if let Some(road) = &self.road_frontage {
            _ = write!(text, "{road}. ");
        }
        match self.deal {
            Deal::Sale => {
                _ = write!(text, "매매가 {}", self.price.formatted());
            }
            Deal::Lease => {
                _ = write!(
                    text,
                    "보증금 {}, 월세 {}",
                    self.price.formatted(),
                    self.monthly_rent.unwrap_or(Price::ZERO).formatted(),
                );
            }
        }
        _ = write!(text, ", 평당 {}.", self.price_per_pyeong().formatted());
        if let Some(shape) = &self.shape {
            _ = write!(text, " {shape} 형상,");
        }
        if let Some(terrain) = &self.terrain {
            _ = write!(text, " {terrain} 지형.");
        }

        Description::new(text.trim_end_matches([' ', ',']).to_owned())
            .expect("template output is non-empty and bounded")
    }
}

/// ID of a [`Listing`].
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

define_kind! {
    #[doc = "Kind of a [`Listing`]."]
    enum Kind {
        #[doc = "A parcel of land."]
        Land = 1,

        #[doc = "A factory building."]
        Factory = 2,

        #[doc = "A warehouse building."]
        Warehouse = 3,

        #[doc = "Any other kind of property."]
        Other = 4,
    }
}

impl Kind {
    /// Returns the customer-facing label of this [`Kind`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Land => "토지",
            Self::Factory => "공장",
            Self::Warehouse => "창고",
            Self::Other => "기타",
        }
    }
}

define_kind! {
    #[doc = "Deal a [`Listing`] is offered under."]
    enum Deal {
        #[doc = "An outright sale."]
        Sale = 1,

        #[doc = "A lease with a deposit and monthly rent."]
        Lease = 2,
    }
}

define_kind! {
    #[doc = "Publication status of a [`Listing`]."]
    enum Status {
        #[doc = "Visible in the public catalog."]
        Active = 1,

        #[doc = "Withheld from all public paths."]
        Hidden = 2,

        #[doc = "Deal closed; badged on detail, absent from the catalog."]
        Sold = 3,
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Active
    }
}

define_text! {
    #[doc = "Title of a [`Listing`]."]
    Title, max = 256
}

define_text! {
    #[doc = "Administrative region of a [`Listing`], e.g. `경기`."]
    Region, max = 64
}

define_text! {
    #[doc = "Cadastral land category of a [`Listing`], e.g. `공장용지`."]
    LandCategory, max = 64
}

define_text! {
    #[doc = "Zoning designation of a [`Listing`], e.g. `계획관리`."]
    Zoning, max = 128
}

define_text! {
    #[doc = "Road frontage description of a [`Listing`]."]
    RoadFrontage, max = 256
}

define_text! {
    #[doc = "Lot shape description of a [`Listing`], e.g. `정방형`."]
    Shape, max = 64
}

define_text! {
    #[doc = "Terrain description of a [`Listing`], e.g. `평지`."]
    Terrain, max = 64
}

define_text! {
    #[doc = "Structure name of a building, e.g. `철골조`."]
    StructureName, max = 128
}

define_text! {
    #[doc = "Use-approval date of a building, verbatim from the registry."]
    UseApprovalDate, max = 32
}

define_text! {
    #[doc = "Free-text description of a [`Listing`]."]
    Description, max = 8192
}

define_text! {
    #[doc = "Long-form article about a [`Listing`]."]
    Article, max = 65536
}

define_text! {
    #[doc = "Image reference of a [`Listing`]."]
    ImageUrl, max = 2048
}

define_text! {
    #[doc = "Video URL of a [`Listing`]."]
    VideoUrl, max = 2048
}

define_text! {
    #[doc = "Internal memo about a [`Listing`], e.g. negotiation notes."]
    Memo, max = 2048
}

/// Full lot-number address of a [`Listing`].
///
/// This is the real address, internal to the brokerage; public paths render
/// the [`MaskedAddress`] derived from it.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(transparent)]
#[as_ref(str)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty() && address.len() <= 512
    }

    /// Returns the [`MaskedAddress`] of this [`Address`].
    #[must_use]
    pub fn masked(&self) -> MaskedAddress {
        MaskedAddress(mask(&self.0))
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

/// Display address of a [`Listing`] with the lot number redacted:
/// `화성시 팔탄면 구장리 123-4` → `화성시 팔탄면 구장리 ***-*`.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(transparent)]
#[as_ref(str)]
pub struct MaskedAddress(String);

impl FromStr for MaskedAddress {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Re-masking keeps the redaction invariant regardless of the input.
        Ok(Self(mask(s)))
    }
}

/// Replaces each digit of a trailing lot-number token (`123` or `123-4`)
/// with `*`, keeping the administrative prefix and the separator intact.
///
/// Input without such a token (already-masked input included) is returned
/// unchanged, so the function is a fixpoint.
#[must_use]
pub fn mask(address: &str) -> String {
    /// Trailing lot-number token: digits, optionally dash-joined to a
    /// sub-lot number.
    static LOT_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(\d+)([-–]\d+)?$").expect("valid regex")
    });

    LOT_NUMBER
        .replace(address, |caps: &regex::Captures<'_>| {
            caps[0]
                .chars()
                .map(|c| if c.is_ascii_digit() { '*' } else { c })
                .collect::<String>()
        })
        .into_owned()
}

/// Statutorily required brokerage identification of a [`Listing`].
///
/// Each absent field falls back to the process-wide default at rendering
/// time.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Disclosure {
    /// Name of the brokerage agency.
    #[serde(default)]
    pub agency_name: Option<AgencyName>,

    /// Name of the registered agent.
    #[serde(default)]
    pub agent_name: Option<AgentName>,

    /// Brokerage registration number.
    #[serde(default)]
    pub registration_no: Option<RegistrationNo>,

    /// Address of the brokerage agency.
    #[serde(default)]
    pub agency_address: Option<AgencyAddress>,

    /// [`Phone`] of the brokerage agency.
    #[serde(default)]
    pub agency_phone: Option<Phone>,
}

impl Disclosure {
    /// Returns this [`Disclosure`] with its missing fields filled from the
    /// given `defaults`.
    #[must_use]
    pub fn merged_with(&self, defaults: &Self) -> Self {
        Self {
            agency_name: self
                .agency_name
                .clone()
                .or_else(|| defaults.agency_name.clone()),
            agent_name: self
                .agent_name
                .clone()
                .or_else(|| defaults.agent_name.clone()),
            registration_no: self
                .registration_no
                .clone()
                .or_else(|| defaults.registration_no.clone()),
            agency_address: self
                .agency_address
                .clone()
                .or_else(|| defaults.agency_address.clone()),
            agency_phone: self
                .agency_phone
                .clone()
                .or_else(|| defaults.agency_phone.clone()),
        }
    }
}

define_text! {
    #[doc = "Name of a brokerage agency."]
    AgencyName, max = 256
}

define_text! {
    #[doc = "Name of a registered agent."]
    AgentName, max = 128
}

define_text! {
    #[doc = "Brokerage registration number."]
    RegistrationNo, max = 64
}

define_text! {
    #[doc = "Address of a brokerage agency."]
    AgencyAddress, max = 512
}

/// [`DateTime`] when a [`Listing`] was created.
pub type CreationDateTime = DateTimeOf<(Listing, unit::Creation)>;

/// [`DateTime`] when a [`Listing`] was last updated.
pub type ModificationDateTime = DateTimeOf<(Listing, unit::Modification)>;

#[cfg(test)]
mod spec {
    use common::DateTime;

    use super::{
        mask, Address, Deal, Disclosure, Kind, Listing, Status,
    };

    #[test]
    fn masks_trailing_lot_number() {
        assert_eq!(
            mask("화성시 팔탄면 구장리 123-4"),
            "화성시 팔탄면 구장리 ***-*",
        );
        assert_eq!(mask("김포시 통진읍 서암리 512"), "김포시 통진읍 서암리 ***");
    }

    #[test]
    fn keeps_input_without_lot_number() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("화성시 팔탄면 구장리"), "화성시 팔탄면 구장리");
        assert_eq!(mask("제2공장 부지 안내"), "제2공장 부지 안내");
    }

    #[test]
    fn masking_is_a_fixpoint() {
        for address in
            ["화성시 팔탄면 구장리 123-4", "김포시 통진읍 서암리 512", ""]
        {
            assert_eq!(mask(&mask(address)), mask(address));
        }
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(Status::default(), Status::Active);
    }

    fn listing() -> Listing {
        let address = Address::new("화성시 팔탄면 구장리 123-4").unwrap();
        Listing {
            id: super::Id::new(),
            title: "화성시 팔탄면 토지 1,000평".parse().unwrap(),
            kind: Kind::Land,
            deal: Deal::Sale,
            status: Status::default(),
            price: 12_340.into(),
            monthly_rent: None,
            area: "3305.8".parse().unwrap(),
            building_area: None,
            total_floor_area: None,
            ground_floors: None,
            underground_floors: None,
            structure: None,
            use_approval_date: None,
            masked_address: address.masked(),
            address,
            region: "경기".parse().unwrap(),
            land_category: "전".parse().unwrap(),
            zoning: "계획관리".parse().unwrap(),
            road_frontage: None,
            shape: Some("정방형".parse().unwrap()),
            terrain: Some("평지".parse().unwrap()),
            illegal_building: false,
            description: "공장 적합 토지".parse().unwrap(),
            article: None,
            images: Vec::new(),
            video_url: None,
            memo: None,
            owner_phone: None,
            disclosure: Disclosure::default(),
            created_at: DateTime::now().coerce(),
            updated_at: None,
        }
    }

    #[test]
    fn derives_metrics() {
        let listing = listing();
        assert_eq!(
            listing.pyeong().as_decimal(),
            rust_decimal::Decimal::new(1_000_0, 1),
        );
        assert_eq!(listing.price_per_pyeong(), 12.into());
    }

    #[test]
    fn template_description_uses_masked_address() {
        let description = listing().describe();
        let text = description.as_ref();
        assert!(text.contains("***-*"));
        assert!(!text.contains("123-4"));
        assert!(text.contains("1억 2,340만"));
        assert!(text.contains("평당 12만"));
    }

    #[test]
    fn template_description_is_deterministic() {
        let listing = listing();
        assert_eq!(listing.describe(), listing.describe());
    }

    #[test]
    fn hidden_listing_is_not_published() {
        let mut listing = listing();
        assert!(listing.is_published());
        listing.status = Status::Hidden;
        assert!(!listing.is_published());
        listing.status = Status::Sold;
        assert!(listing.is_published());
    }
}
