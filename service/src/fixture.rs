//! Test fixtures shared by command and query specs.

use secrecy::SecretString;

use crate::{
    command::CreateListing,
    domain::listing,
    infra::{JsonFile, Telegram},
    Config, Service,
};

/// Creates a [`Service`] over an in-memory storage with a disabled notifier.
pub(crate) fn service() -> Service<JsonFile, Telegram> {
    Service::new(config(), JsonFile::in_memory(), Telegram::new(None))
}

/// Creates a test [`Config`] with the admin password `수수께끼`.
pub(crate) fn config() -> Config {
    Config {
        jwt_encoding_key: jsonwebtoken::EncodingKey::from_secret(b"test"),
        jwt_decoding_key: jsonwebtoken::DecodingKey::from_secret(b"test"),
        admin_password: SecretString::from("수수께끼".to_owned()),
        disclosure: listing::Disclosure::default(),
    }
}

/// Creates a [`CreateListing`] command for a plain land listing.
pub(crate) fn create_listing(title: &str, address: &str) -> CreateListing {
    CreateListing {
        title: title.parse().unwrap(),
        kind: listing::Kind::Land,
        deal: listing::Deal::Sale,
        price: 12_340.into(),
        monthly_rent: None,
        area: "3305.8".parse().unwrap(),
        building_area: None,
        total_floor_area: None,
        ground_floors: None,
        underground_floors: None,
        structure: None,
        use_approval_date: None,
        address: address.parse().unwrap(),
        region: "경기".parse().unwrap(),
        land_category: "전".parse().unwrap(),
        zoning: "계획관리".parse().unwrap(),
        road_frontage: None,
        shape: None,
        terrain: None,
        illegal_building: false,
        description: Some("공장 적합 토지".parse().unwrap()),
        article: None,
        images: Vec::new(),
        video_url: None,
        disclosure: listing::Disclosure::default(),
    }
}
