//! [`Command`] for editing an existing [`Listing`].

use common::{
    operations::{By, Select, Update},
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

/// [`Command`] for editing an existing [`Listing`].
///
/// Replaces the editable fields wholesale, the way the admin form submits
/// them. The publication status and the admin-private memo fields are not
/// touched; those have their own commands.
#[derive(Clone, Debug)]
pub struct UpdateListing {
    /// ID of the [`Listing`] to edit.
    pub id: listing::Id,

    /// New [`listing::Title`].
    pub title: listing::Title,

    /// New [`listing::Kind`].
    pub kind: listing::Kind,

    /// New [`listing::Deal`].
    pub deal: listing::Deal,

    /// New total [`Price`].
    pub price: Price,

    /// New monthly rent, if leased.
    pub monthly_rent: Option<Price>,

    /// New land area.
    pub area: SquareMeters,

    /// New building footprint area, if any.
    pub building_area: Option<SquareMeters>,

    /// New total floor area, if any.
    pub total_floor_area: Option<SquareMeters>,

    /// New number of floors above ground, if known.
    pub ground_floors: Option<u16>,

    /// New number of floors below ground, if known.
    pub underground_floors: Option<u16>,

    /// New [`listing::StructureName`], if any.
    pub structure: Option<listing::StructureName>,

    /// New use-approval date, if known.
    pub use_approval_date: Option<listing::UseApprovalDate>,

    /// New full lot-number [`listing::Address`].
    pub address: listing::Address,

    /// New [`listing::Region`].
    pub region: listing::Region,

    /// New [`listing::LandCategory`].
    pub land_category: listing::LandCategory,

    /// New [`listing::Zoning`].
    pub zoning: listing::Zoning,

    /// New [`listing::RoadFrontage`], if any.
    pub road_frontage: Option<listing::RoadFrontage>,

    /// New [`listing::Shape`], if any.
    pub shape: Option<listing::Shape>,

    /// New [`listing::Terrain`], if any.
    pub terrain: Option<listing::Terrain>,

    /// New illegal-building indicator.
    pub illegal_building: bool,

    /// New [`listing::Description`].
    ///
    /// When absent, the deterministic template composed out of the other
    /// fields is used instead.
    pub description: Option<listing::Description>,

    /// New [`listing::Article`], if any.
    pub article: Option<listing::Article>,

    /// New image references.
    pub images: Vec<listing::ImageUrl>,

    /// New video URL, if any.
    pub video_url: Option<listing::VideoUrl>,

    /// New brokerage [`listing::Disclosure`] fields.
    pub disclosure: listing::Disclosure,
}

impl<Db, Nf> Command<UpdateListing> for Service<Db, Nf>
where
    Db: Storage<
            Select<By<Option<Listing>, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<storage::Error>,
        > + Storage<Update<Listing>, Err = Traced<storage::Error>>,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateListing {
            id,
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

        let stored = self
            .storage()
            .execute(Select(By::<Option<Listing>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(id))
            .map_err(tracerr::wrap!())?;

        let template_fallback = description.is_none();
        #[expect(unsafe_code, reason = "replaced with the template below")]
        let draft = unsafe { listing::Description::new_unchecked("") };

        let mut listing = Listing {
            id,
            title,
            kind,
            deal,
            status: stored.status,
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
            memo: stored.memo,
            owner_phone: stored.owner_phone,
            disclosure,
            created_at: stored.created_at,
            updated_at: Some(DateTime::now().coerce()),
        };
        if template_fallback {
            listing.description = listing.describe();
        }

        self.storage()
            .execute(Update(listing.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(listing)
    }
}

/// Error of [`UpdateListing`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Storage`] error.
    ///
    /// [`Storage`]: crate::infra::Storage
    #[display("`Storage` operation failed: {_0}")]
    #[from]
    Db(storage::Error),

    /// [`Listing`] with the provided ID does not exist.
    #[display("`Listing(id: {_0})` does not exist")]
    ListingNotExists(#[error(not(source))] listing::Id),
}

#[cfg(test)]
mod spec {
    use crate::{command::UpdateListing, fixture, Command as _};

    use super::ExecutionError;

    #[tokio::test]
    async fn keeps_status_and_memo_and_stamps_updated_at() {
        let service = fixture::service();
        let created = service
            .execute(fixture::create_listing(
                "화성 토지",
                "화성시 팔탄면 구장리 123-4",
            ))
            .await
            .unwrap();

        let updated = service
            .execute(UpdateListing {
                id: created.id,
                title: "화성 토지 (가격 조정)".parse().unwrap(),
                kind: created.kind,
                deal: created.deal,
                price: 11_000.into(),
                monthly_rent: None,
                area: created.area,
                building_area: None,
                total_floor_area: None,
                ground_floors: None,
                underground_floors: None,
                structure: None,
                use_approval_date: None,
                address: "화성시 팔탄면 구장리 200-1".parse().unwrap(),
                region: created.region.clone(),
                land_category: created.land_category.clone(),
                zoning: created.zoning.clone(),
                road_frontage: None,
                shape: None,
                terrain: None,
                illegal_building: false,
                description: Some("조정된 매물".parse().unwrap()),
                article: None,
                images: Vec::new(),
                video_url: None,
                disclosure: created.disclosure.clone(),
            })
            .await
            .unwrap();

        assert_eq!(updated.status, created.status);
        assert_eq!(
            updated.masked_address.to_string(),
            "화성시 팔탄면 구장리 ***-*",
        );
        assert!(updated.updated_at.is_some());
        assert_eq!(updated.price, 11_000.into());
    }

    #[tokio::test]
    async fn reports_unknown_listing() {
        let service = fixture::service();
        let mut cmd = fixture::create_listing("x", "화성시 1");

        let err = service
            .execute(UpdateListing {
                id: crate::domain::listing::Id::new(),
                title: cmd.title.clone(),
                kind: cmd.kind,
                deal: cmd.deal,
                price: cmd.price,
                monthly_rent: cmd.monthly_rent,
                area: cmd.area,
                building_area: None,
                total_floor_area: None,
                ground_floors: None,
                underground_floors: None,
                structure: None,
                use_approval_date: None,
                address: cmd.address.clone(),
                region: cmd.region.clone(),
                land_category: cmd.land_category.clone(),
                zoning: cmd.zoning.clone(),
                road_frontage: None,
                shape: None,
                terrain: None,
                illegal_building: false,
                description: cmd.description.take(),
                article: None,
                images: Vec::new(),
                video_url: None,
                disclosure: cmd.disclosure.clone(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::ListingNotExists(_),
        ));
    }
}
