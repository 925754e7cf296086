//! [`Listing`]-related definitions.

use common::{DateTime, Price, Pyeong, SquareMeters};
use derive_more::{AsRef, Display, From, Into};
use juniper::{
    graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLScalar,
};
use service::{command, domain, read};
use uuid::Uuid;

use crate::{api::scalar, define_error, Context, Error};

/// A property listing.
///
/// Public consumers see the masked address and the derived metrics; the
/// real address and the memo fields resolve only for an authenticated
/// admin.
#[derive(Clone, Debug, From)]
pub struct Listing(domain::Listing);

/// A property listing.
#[graphql_object(context = Context)]
impl Listing {
    /// Unique identifier of this `Listing`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Title of this `Listing`.
    #[must_use]
    pub fn title(&self) -> Title {
        self.0.title.clone().into()
    }

    /// Kind of this `Listing`.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.0.kind.into()
    }

    /// Deal this `Listing` is offered under.
    #[must_use]
    pub fn deal(&self) -> Deal {
        self.0.deal.into()
    }

    /// Publication status of this `Listing`.
    #[must_use]
    pub fn status(&self) -> Status {
        self.0.status.into()
    }

    /// Total price of this `Listing` (deposit for leases), in ten-thousand
    /// won units.
    #[must_use]
    pub fn price(&self) -> Price {
        self.0.price
    }

    /// Total price of this `Listing` in the customary `억`/`만` form.
    #[must_use]
    pub fn price_text(&self) -> String {
        self.0.price.formatted()
    }

    /// Monthly rent of this `Listing`, if leased.
    #[must_use]
    pub fn monthly_rent(&self) -> Option<Price> {
        self.0.monthly_rent
    }

    /// Monthly rent of this `Listing` in the customary `억`/`만` form.
    #[must_use]
    pub fn monthly_rent_text(&self) -> Option<String> {
        self.0.monthly_rent.map(Price::formatted)
    }

    /// Land area of this `Listing` in square meters.
    #[must_use]
    pub fn area_sqm(&self) -> SquareMeters {
        self.0.area
    }

    /// Land area of this `Listing` in pyeong.
    #[must_use]
    pub fn pyeong(&self) -> Pyeong {
        self.0.pyeong()
    }

    /// Price per pyeong of this `Listing`, in ten-thousand won units.
    #[must_use]
    pub fn price_per_pyeong(&self) -> Price {
        self.0.price_per_pyeong()
    }

    /// Price per pyeong of this `Listing` in the customary `억`/`만` form.
    #[must_use]
    pub fn price_per_pyeong_text(&self) -> String {
        self.0.price_per_pyeong().formatted()
    }

    /// Building footprint area of this `Listing`, if any.
    #[must_use]
    pub fn building_area_sqm(&self) -> Option<SquareMeters> {
        self.0.building_area
    }

    /// Total floor area of this `Listing`, if any.
    #[must_use]
    pub fn total_floor_area_sqm(&self) -> Option<SquareMeters> {
        self.0.total_floor_area
    }

    /// Number of floors above ground, if known.
    #[must_use]
    pub fn ground_floors(&self) -> Option<i32> {
        self.0.ground_floors.map(i32::from)
    }

    /// Number of floors below ground, if known.
    #[must_use]
    pub fn underground_floors(&self) -> Option<i32> {
        self.0.underground_floors.map(i32::from)
    }

    /// Structure name of the building, if any.
    #[must_use]
    pub fn structure(&self) -> Option<StructureName> {
        self.0.structure.clone().map(Into::into)
    }

    /// Use-approval date of the building, verbatim from the registry.
    #[must_use]
    pub fn use_approval_date(&self) -> Option<UseApprovalDate> {
        self.0.use_approval_date.clone().map(Into::into)
    }

    /// Display address of this `Listing` with the lot number redacted.
    #[must_use]
    pub fn masked_address(&self) -> MaskedAddress {
        self.0.masked_address.clone().into()
    }

    /// Full lot-number address of this `Listing`.
    ///
    /// Admin only.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Listing.address"),
    )]
    pub async fn address(&self, ctx: &Context) -> Result<Address, Error> {
        drop(ctx.current_session().await?);
        Ok(self.0.address.clone().into())
    }

    /// Region of this `Listing`.
    #[must_use]
    pub fn region(&self) -> Region {
        self.0.region.clone().into()
    }

    /// Cadastral land category of this `Listing`.
    #[must_use]
    pub fn land_category(&self) -> LandCategory {
        self.0.land_category.clone().into()
    }

    /// Zoning designation of this `Listing`.
    #[must_use]
    pub fn zoning(&self) -> Zoning {
        self.0.zoning.clone().into()
    }

    /// Road frontage description of this `Listing`, if any.
    #[must_use]
    pub fn road_frontage(&self) -> Option<RoadFrontage> {
        self.0.road_frontage.clone().map(Into::into)
    }

    /// Lot shape description of this `Listing`, if any.
    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        self.0.shape.clone().map(Into::into)
    }

    /// Terrain description of this `Listing`, if any.
    #[must_use]
    pub fn terrain(&self) -> Option<Terrain> {
        self.0.terrain.clone().map(Into::into)
    }

    /// Indicator whether the building is registered as illegal.
    #[must_use]
    pub fn illegal_building(&self) -> bool {
        self.0.illegal_building
    }

    /// Description of this `Listing`.
    #[must_use]
    pub fn description(&self) -> Description {
        self.0.description.clone().into()
    }

    /// Long-form article about this `Listing`, if any.
    #[must_use]
    pub fn article(&self) -> Option<Article> {
        self.0.article.clone().map(Into::into)
    }

    /// Image references of this `Listing`.
    #[must_use]
    pub fn images(&self) -> Vec<ImageUrl> {
        self.0.images.iter().cloned().map(Into::into).collect()
    }

    /// Video URL of this `Listing`, if any.
    #[must_use]
    pub fn video_url(&self) -> Option<VideoUrl> {
        self.0.video_url.clone().map(Into::into)
    }

    /// Internal memo about this `Listing`.
    ///
    /// Admin only.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Listing.memo"),
    )]
    pub async fn memo(&self, ctx: &Context) -> Result<Option<Memo>, Error> {
        drop(ctx.current_session().await?);
        Ok(self.0.memo.clone().map(Into::into))
    }

    /// Phone of the property owner.
    ///
    /// Admin only.
    #[tracing::instrument(
        skip_all,
        fields(gql.name = "Listing.ownerPhone"),
    )]
    pub async fn owner_phone(
        &self,
        ctx: &Context,
    ) -> Result<Option<scalar::Phone>, Error> {
        drop(ctx.current_session().await?);
        Ok(self.0.owner_phone.clone().map(Into::into))
    }

    /// Brokerage disclosure fields of this `Listing`, with the configured
    /// process-wide defaults filling the gaps.
    #[must_use]
    pub fn disclosure(&self, ctx: &Context) -> Disclosure {
        Disclosure(
            self.0
                .disclosure
                .merged_with(&ctx.service().config().disclosure),
        )
    }

    /// `DateTime` when this `Listing` was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }

    /// `DateTime` when this `Listing` was last updated, if it was.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime> {
        self.0.updated_at.map(|dt| dt.coerce())
    }
}

/// Unique identifier of a `Listing`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::listing::Id)]
#[into(domain::listing::Id)]
#[graphql(name = "ListingId", transparent)]
pub struct Id(Uuid);

/// Title of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingTitle",
    with = scalar::Via::<domain::listing::Title>,
)]
pub struct Title(domain::listing::Title);

/// Full lot-number address of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingAddress",
    with = scalar::Via::<domain::listing::Address>,
)]
pub struct Address(domain::listing::Address);

/// Display address of a `Listing` with the lot number redacted.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingMaskedAddress",
    with = scalar::Via::<domain::listing::MaskedAddress>,
)]
pub struct MaskedAddress(domain::listing::MaskedAddress);

/// Administrative region of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingRegion",
    with = scalar::Via::<domain::listing::Region>,
)]
pub struct Region(domain::listing::Region);

/// Cadastral land category of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingLandCategory",
    with = scalar::Via::<domain::listing::LandCategory>,
)]
pub struct LandCategory(domain::listing::LandCategory);

/// Zoning designation of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingZoning",
    with = scalar::Via::<domain::listing::Zoning>,
)]
pub struct Zoning(domain::listing::Zoning);

/// Road frontage description of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingRoadFrontage",
    with = scalar::Via::<domain::listing::RoadFrontage>,
)]
pub struct RoadFrontage(domain::listing::RoadFrontage);

/// Lot shape description of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingShape",
    with = scalar::Via::<domain::listing::Shape>,
)]
pub struct Shape(domain::listing::Shape);

/// Terrain description of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingTerrain",
    with = scalar::Via::<domain::listing::Terrain>,
)]
pub struct Terrain(domain::listing::Terrain);

/// Structure name of a building.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingStructureName",
    with = scalar::Via::<domain::listing::StructureName>,
)]
pub struct StructureName(domain::listing::StructureName);

/// Use-approval date of a building.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingUseApprovalDate",
    with = scalar::Via::<domain::listing::UseApprovalDate>,
)]
pub struct UseApprovalDate(domain::listing::UseApprovalDate);

/// Free-text description of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingDescription",
    with = scalar::Via::<domain::listing::Description>,
)]
pub struct Description(domain::listing::Description);

/// Long-form article about a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingArticle",
    with = scalar::Via::<domain::listing::Article>,
)]
pub struct Article(domain::listing::Article);

/// Image reference of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingImageUrl",
    with = scalar::Via::<domain::listing::ImageUrl>,
)]
pub struct ImageUrl(domain::listing::ImageUrl);

/// Video URL of a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingVideoUrl",
    with = scalar::Via::<domain::listing::VideoUrl>,
)]
pub struct VideoUrl(domain::listing::VideoUrl);

/// Internal memo about a `Listing`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingMemo",
    with = scalar::Via::<domain::listing::Memo>,
)]
pub struct Memo(domain::listing::Memo);

/// Name of a brokerage agency.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "AgencyName",
    with = scalar::Via::<domain::listing::AgencyName>,
)]
pub struct AgencyName(domain::listing::AgencyName);

/// Name of a registered agent.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "AgentName",
    with = scalar::Via::<domain::listing::AgentName>,
)]
pub struct AgentName(domain::listing::AgentName);

/// Brokerage registration number.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "RegistrationNo",
    with = scalar::Via::<domain::listing::RegistrationNo>,
)]
pub struct RegistrationNo(domain::listing::RegistrationNo);

/// Address of a brokerage agency.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "AgencyAddress",
    with = scalar::Via::<domain::listing::AgencyAddress>,
)]
pub struct AgencyAddress(domain::listing::AgencyAddress);

/// Search keyword matched against listing titles and addresses.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ListingKeyword",
    with = scalar::Via::<read::listing::list::Keyword>,
)]
pub struct Keyword(read::listing::list::Keyword);

/// Kind of a `Listing`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "ListingKind")]
pub enum Kind {
    /// A parcel of land.
    Land,

    /// A factory building.
    Factory,

    /// A warehouse building.
    Warehouse,

    /// Any other kind of property.
    Other,
}

impl From<domain::listing::Kind> for Kind {
    fn from(kind: domain::listing::Kind) -> Self {
        use domain::listing::Kind as K;
        match kind {
            K::Land => Self::Land,
            K::Factory => Self::Factory,
            K::Warehouse => Self::Warehouse,
            K::Other => Self::Other,
        }
    }
}

impl From<Kind> for domain::listing::Kind {
    fn from(kind: Kind) -> Self {
        use Kind as K;
        match kind {
            K::Land => Self::Land,
            K::Factory => Self::Factory,
            K::Warehouse => Self::Warehouse,
            K::Other => Self::Other,
        }
    }
}

/// Deal a `Listing` is offered under.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "ListingDeal")]
pub enum Deal {
    /// An outright sale.
    Sale,

    /// A lease with a deposit and monthly rent.
    Lease,
}

impl From<domain::listing::Deal> for Deal {
    fn from(deal: domain::listing::Deal) -> Self {
        use domain::listing::Deal as D;
        match deal {
            D::Sale => Self::Sale,
            D::Lease => Self::Lease,
        }
    }
}

impl From<Deal> for domain::listing::Deal {
    fn from(deal: Deal) -> Self {
        use Deal as D;
        match deal {
            D::Sale => Self::Sale,
            D::Lease => Self::Lease,
        }
    }
}

/// Publication status of a `Listing`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "ListingStatus")]
pub enum Status {
    /// Visible in the public catalog.
    Active,

    /// Withheld from all public paths.
    Hidden,

    /// Deal closed.
    Sold,
}

impl From<domain::listing::Status> for Status {
    fn from(status: domain::listing::Status) -> Self {
        use domain::listing::Status as S;
        match status {
            S::Active => Self::Active,
            S::Hidden => Self::Hidden,
            S::Sold => Self::Sold,
        }
    }
}

impl From<Status> for domain::listing::Status {
    fn from(status: Status) -> Self {
        use Status as S;
        match status {
            S::Active => Self::Active,
            S::Hidden => Self::Hidden,
            S::Sold => Self::Sold,
        }
    }
}

/// Total price bracket of the catalog filter.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "ListingPriceRange")]
pub enum PriceRange {
    /// Up to 1억 inclusive.
    UpToOne,

    /// Over 1억, up to 3억.
    OneToThree,

    /// Over 3억, up to 5억.
    ThreeToFive,

    /// Over 5억, up to 10억.
    FiveToTen,

    /// Over 10억.
    OverTen,
}

impl From<PriceRange> for read::listing::list::PriceRange {
    fn from(range: PriceRange) -> Self {
        use PriceRange as R;
        match range {
            R::UpToOne => Self::UpToOne,
            R::OneToThree => Self::OneToThree,
            R::ThreeToFive => Self::ThreeToFive,
            R::FiveToTen => Self::FiveToTen,
            R::OverTen => Self::OverTen,
        }
    }
}

/// Land area bracket of the catalog filter, in pyeong.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "ListingAreaRange")]
pub enum AreaRange {
    /// Up to 500평 inclusive.
    UpToFiveHundred,

    /// Over 500평, up to 1,000평.
    FiveHundredToThousand,

    /// Over 1,000평, up to 2,000평.
    ThousandToTwoThousand,

    /// Over 2,000평.
    OverTwoThousand,
}

impl From<AreaRange> for read::listing::list::AreaRange {
    fn from(range: AreaRange) -> Self {
        use AreaRange as R;
        match range {
            R::UpToFiveHundred => Self::UpToFiveHundred,
            R::FiveHundredToThousand => Self::FiveHundredToThousand,
            R::ThousandToTwoThousand => Self::ThousandToTwoThousand,
            R::OverTwoThousand => Self::OverTwoThousand,
        }
    }
}

/// Per-status tally of `Listing`s for the admin dashboard cards.
#[derive(Clone, Copy, Debug, From)]
pub struct StatusCounts(read::listing::StatusCounts);

/// Per-status tally of `Listing`s.
#[graphql_object(name = "ListingStatusCounts", context = Context)]
impl StatusCounts {
    /// Total number of `Listing`s.
    #[expect(clippy::cast_possible_truncation, reason = "small collection")]
    #[expect(clippy::cast_possible_wrap, reason = "small collection")]
    #[must_use]
    pub fn total(&self) -> i32 {
        self.0.total as i32
    }

    /// Number of active `Listing`s.
    #[expect(clippy::cast_possible_truncation, reason = "small collection")]
    #[expect(clippy::cast_possible_wrap, reason = "small collection")]
    #[must_use]
    pub fn active(&self) -> i32 {
        self.0.active as i32
    }

    /// Number of hidden `Listing`s.
    #[expect(clippy::cast_possible_truncation, reason = "small collection")]
    #[expect(clippy::cast_possible_wrap, reason = "small collection")]
    #[must_use]
    pub fn hidden(&self) -> i32 {
        self.0.hidden as i32
    }

    /// Number of sold `Listing`s.
    #[expect(clippy::cast_possible_truncation, reason = "small collection")]
    #[expect(clippy::cast_possible_wrap, reason = "small collection")]
    #[must_use]
    pub fn sold(&self) -> i32 {
        self.0.sold as i32
    }
}

/// Brokerage disclosure fields of a `Listing`, merged with the configured
/// defaults.
#[derive(Clone, Debug)]
pub struct Disclosure(domain::listing::Disclosure);

/// Brokerage disclosure fields of a `Listing`.
#[graphql_object(name = "ListingDisclosure", context = Context)]
impl Disclosure {
    /// Name of the brokerage agency.
    #[must_use]
    pub fn agency_name(&self) -> Option<AgencyName> {
        self.0.agency_name.clone().map(Into::into)
    }

    /// Name of the registered agent.
    #[must_use]
    pub fn agent_name(&self) -> Option<AgentName> {
        self.0.agent_name.clone().map(Into::into)
    }

    /// Brokerage registration number.
    #[must_use]
    pub fn registration_no(&self) -> Option<RegistrationNo> {
        self.0.registration_no.clone().map(Into::into)
    }

    /// Address of the brokerage agency.
    #[must_use]
    pub fn agency_address(&self) -> Option<AgencyAddress> {
        self.0.agency_address.clone().map(Into::into)
    }

    /// Phone of the brokerage agency.
    #[must_use]
    pub fn agency_phone(&self) -> Option<scalar::Phone> {
        self.0.agency_phone.clone().map(Into::into)
    }
}

/// Brokerage disclosure input of a `Listing`.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "ListingDisclosureInput")]
pub struct DisclosureInput {
    /// Name of the brokerage agency.
    pub agency_name: Option<AgencyName>,

    /// Name of the registered agent.
    pub agent_name: Option<AgentName>,

    /// Brokerage registration number.
    pub registration_no: Option<RegistrationNo>,

    /// Address of the brokerage agency.
    pub agency_address: Option<AgencyAddress>,

    /// Phone of the brokerage agency.
    pub agency_phone: Option<scalar::Phone>,
}

impl From<DisclosureInput> for domain::listing::Disclosure {
    fn from(input: DisclosureInput) -> Self {
        Self {
            agency_name: input.agency_name.map(Into::into),
            agent_name: input.agent_name.map(Into::into),
            registration_no: input.registration_no.map(Into::into),
            agency_address: input.agency_address.map(Into::into),
            agency_phone: input.agency_phone.map(Into::into),
        }
    }
}

/// Input for registering or editing a `Listing`.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "ListingInput")]
pub struct Input {
    /// Title of the `Listing`.
    pub title: Title,

    /// Kind of the `Listing`.
    pub kind: Kind,

    /// Deal the `Listing` is offered under.
    pub deal: Deal,

    /// Total price (deposit for leases), in ten-thousand won units.
    pub price: Price,

    /// Monthly rent, if leased.
    pub monthly_rent: Option<Price>,

    /// Land area in square meters.
    pub area_sqm: SquareMeters,

    /// Building footprint area, if any.
    pub building_area_sqm: Option<SquareMeters>,

    /// Total floor area, if any.
    pub total_floor_area_sqm: Option<SquareMeters>,

    /// Number of floors above ground, if known.
    pub ground_floors: Option<i32>,

    /// Number of floors below ground, if known.
    pub underground_floors: Option<i32>,

    /// Structure name of the building, if any.
    pub structure: Option<StructureName>,

    /// Use-approval date of the building, if known.
    pub use_approval_date: Option<UseApprovalDate>,

    /// Full lot-number address.
    pub address: Address,

    /// Administrative region.
    pub region: Region,

    /// Cadastral land category.
    pub land_category: LandCategory,

    /// Zoning designation.
    pub zoning: Zoning,

    /// Road frontage description, if any.
    pub road_frontage: Option<RoadFrontage>,

    /// Lot shape description, if any.
    pub shape: Option<Shape>,

    /// Terrain description, if any.
    pub terrain: Option<Terrain>,

    /// Indicator whether the building is registered as illegal.
    pub illegal_building: Option<bool>,

    /// Description; composed out of the other fields when absent.
    pub description: Option<Description>,

    /// Long-form article, if any.
    pub article: Option<Article>,

    /// Image references.
    pub images: Option<Vec<ImageUrl>>,

    /// Video URL, if any.
    pub video_url: Option<VideoUrl>,

    /// Brokerage disclosure fields.
    pub disclosure: Option<DisclosureInput>,
}

impl TryFrom<Input> for command::CreateListing {
    type Error = Error;

    fn try_from(input: Input) -> Result<Self, Self::Error> {
        Ok(Self {
            title: input.title.into(),
            kind: input.kind.into(),
            deal: input.deal.into(),
            price: input.price,
            monthly_rent: input.monthly_rent,
            area: input.area_sqm,
            building_area: input.building_area_sqm,
            total_floor_area: input.total_floor_area_sqm,
            ground_floors: floor_count(input.ground_floors)?,
            underground_floors: floor_count(input.underground_floors)?,
            structure: input.structure.map(Into::into),
            use_approval_date: input.use_approval_date.map(Into::into),
            address: input.address.into(),
            region: input.region.into(),
            land_category: input.land_category.into(),
            zoning: input.zoning.into(),
            road_frontage: input.road_frontage.map(Into::into),
            shape: input.shape.map(Into::into),
            terrain: input.terrain.map(Into::into),
            illegal_building: input.illegal_building.unwrap_or_default(),
            description: input.description.map(Into::into),
            article: input.article.map(Into::into),
            images: input
                .images
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            video_url: input.video_url.map(Into::into),
            disclosure: input.disclosure.map(Into::into).unwrap_or_default(),
        })
    }
}

/// Converts an optional floor count into the domain representation.
///
/// # Errors
///
/// Errors if the count is negative or does not fit.
fn floor_count(value: Option<i32>) -> Result<Option<u16>, Error> {
    value
        .map(|v| u16::try_from(v).map_err(|_| InputError::FloorCount.into()))
        .transpose()
}

define_error! {
    enum InputError {
        #[code = "INVALID_FLOOR_COUNT"]
        #[status = BAD_REQUEST]
        #[message = "Floor count must be a non-negative 16-bit integer"]
        FloorCount,
    }
}
