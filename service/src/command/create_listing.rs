//! [`Command`] for registering a new [`Listing`].

use common::{
    operations::{By, Insert, Select},
    DateTime, Price, SquareMeters,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for registering a new [`Listing`].
///
/// Every field invariant is enforced by the domain newtypes at construction
/// time, so the command itself only assembles the record.
#[derive(Clone, Debug)]
pub struct CreateListing {
    /// [`listing::Title`] of the new [`Listing`].
    pub title: listing::Title,

    /// [`listing::Kind`] of the new [`Listing`].
    pub kind: listing::Kind,

    /// [`listing::Deal`] of the new [`Listing`].
    pub deal: listing::Deal,

    /// Total [`Price`] of the new [`Listing`].
    pub price: Price,

    /// Monthly rent of the new [`Listing`], if leased.
    pub monthly_rent: Option<Price>,

    /// Land area of the new [`Listing`].
    pub area: SquareMeters,

    /// Building footprint area of the new [`Listing`], if any.
    pub building_area: Option<SquareMeters>,

    /// Total floor area of the new [`Listing`], if any.
    pub total_floor_area: Option<SquareMeters>,

    /// Number of floors above ground, if known.
    pub ground_floors: Option<u16>,

    /// Number of floors below ground, if known.
    pub underground_floors: Option<u16>,

    /// [`listing::StructureName`] of the building, if any.
    pub structure: Option<listing::StructureName>,

    /// Use-approval date of the building, if known.
    pub use_approval_date: Option<listing::UseApprovalDate>,

    /// Full lot-number [`listing::Address`] of the new [`Listing`].
    pub address: listing::Address,

    /// [`listing::Region`] of the new [`Listing`].
    pub region: listing::Region,

    /// [`listing::LandCategory`] of the new [`Listing`].
    pub land_category: listing::LandCategory,

    /// [`listing::Zoning`] of the new [`Listing`].
    pub zoning: listing::Zoning,

    /// [`listing::RoadFrontage`] of the new [`Listing`], if any.
    pub road_frontage: Option<listing::RoadFrontage>,

    /// [`listing::Shape`] of the new [`Listing`], if any.
    pub shape: Option<listing::Shape>,

    /// [`listing::Terrain`] of the new [`Listing`], if any.
    pub terrain: Option<listing::Terrain>,

    /// Indicator whether the building is registered as illegal.
    pub illegal_building: bool,

    /// [`listing::Description`] of the new [`Listing`].
    ///
    /// When absent, the deterministic template composed out of the other
    /// fields is used instead.
    pub description: Option<listing::Description>,

    /// [`listing::Article`] about the new [`Listing`], if any.
    pub article: Option<listing::Article>,

    /// Image references of the new [`Listing`].
    pub images: Vec<listing::ImageUrl>,

    /// Video URL of the new [`Listing`], if any.
    pub video_url: Option<listing::VideoUrl>,

    /// Brokerage [`listing::Disclosure`] fields of the new [`Listing`].
    pub disclosure: listing::Disclosure,
}

impl<Db, Nf> Command<CreateListing> for Service<Db, Nf>
where
    Db: Storage<Insert<Listing>, Err = Traced<storage::Error>>
        + Storage<
            Select<By<Option<Listing>, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<storage::Error>,
        >,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateListing) -> Result<Self::Ok, Self::Err> {
        let CreateListing {
            title,
            kind,
            deal,
            price,
            monthly_rent,
            area,
            building_area,
            total_floor_area,
            ground_floors,
            underground_floors,
            structure,
            use_approval_date,
            address,
            region,
            land_category,
            zoning,
            road_frontage,
            shape,
            terrain,
            illegal_building,
            description,
            article,
            images,
            video_url,
            disclosure,
        } = cmd;

        let template_fallback = description.is_none();
        #[expect(unsafe_code, reason = "replaced with the template below")]
        let draft = unsafe { listing::Description::new_unchecked("") };

        let mut listing = Listing {
            id: listing::Id::new(),
            title,
            kind,
            deal,
            status: listing::Status::default(),
            price,
            monthly_rent,
            area,
            building_area,
            total_floor_area,
            ground_floors,
            underground_floors,
            structure,
            use_approval_date,
            masked_address: address.masked(),
            address,
            region,
            land_category,
            zoning,
            road_frontage,
            shape,
            terrain,
            illegal_building,
            description: description.unwrap_or(draft),
            article,
            images,
            video_url,
            memo: None,
            owner_phone: None,
            disclosure,
            created_at: DateTime::now().coerce(),
            updated_at: None,
        };
        if template_fallback {
            listing.description = listing.describe();
        }

        self.storage()
            .execute(Insert(listing.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
            .map(drop)?;

        Ok(listing)
    }
}

/// Error of [`CreateListing`] [`Command`] execution.
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

    use crate::{
        domain::{listing, Listing},
        fixture, Command as _,
    };

    #[tokio::test]
    async fn creates_an_active_listing_with_masked_address() {
        let service = fixture::service();

        let created = service
            .execute(fixture::create_listing(
                "화성 토지",
                "화성시 팔탄면 구장리 123-4",
            ))
            .await
            .unwrap();

        assert_eq!(created.status, listing::Status::Active);
        assert_eq!(
            created.masked_address.to_string(),
            "화성시 팔탄면 구장리 ***-*",
        );

        let stored: Option<Listing> = service
            .storage()
            .execute(Select(By::new(created.id)))
            .await
            .unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn falls_back_to_template_description() {
        let service = fixture::service();

        let mut cmd =
            fixture::create_listing("화성 토지", "화성시 팔탄면 구장리 123-4");
        cmd.description = None;

        let created = service.execute(cmd).await.unwrap();
        let text = created.description.as_ref();
        assert!(!text.is_empty());
        assert!(text.contains("***-*"));
        assert!(!text.contains("123-4"));
    }
}
