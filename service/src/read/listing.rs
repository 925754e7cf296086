//! [`Listing`]-related read definitions.

#[cfg(doc)]
use crate::domain::Listing;

pub mod list {
    //! [`Listing`] list definitions.

    use common::{define_kind, define_text, Price, Pyeong};

    use crate::domain::{listing, Listing};

    /// Multi-criteria filter for selecting [`Listing`]s.
    ///
    /// Every absent field means "no constraint".
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`Keyword`] to search for in the title or address.
        pub keyword: Option<Keyword>,

        /// Exact [`listing::Kind`] to match.
        pub kind: Option<listing::Kind>,

        /// Exact [`listing::Deal`] to match.
        pub deal: Option<listing::Deal>,

        /// Exact [`listing::Region`] to match.
        pub region: Option<listing::Region>,

        /// [`PriceRange`] bracket to match.
        pub price: Option<PriceRange>,

        /// [`AreaRange`] bracket to match.
        pub area: Option<AreaRange>,

        /// Exact [`listing::Status`] to match.
        ///
        /// Only meaningful on admin paths; the public catalog applies its
        /// `Active`-only baseline regardless of this field.
        pub status: Option<listing::Status>,
    }

    impl Filter {
        /// Indicates whether the given [`Listing`] satisfies every present
        /// criterion of this [`Filter`].
        #[must_use]
        pub fn matches(&self, listing: &Listing) -> bool {
            if let Some(keyword) = &self.keyword {
                if !keyword.found_in(listing) {
                    return false;
                }
            }
            if let Some(kind) = self.kind {
                if listing.kind != kind {
                    return false;
                }
            }
            if let Some(deal) = self.deal {
                if listing.deal != deal {
                    return false;
                }
            }
            if let Some(region) = &self.region {
                if listing.region != *region {
                    return false;
                }
            }
            if let Some(price) = self.price {
                if !price.contains(listing.price) {
                    return false;
                }
            }
            if let Some(area) = self.area {
                if !area.contains(listing.pyeong()) {
                    return false;
                }
            }
            if let Some(status) = self.status {
                if listing.status != status {
                    return false;
                }
            }
            true
        }
    }

    define_text! {
        #[doc = "Search keyword matched against listing titles and \
                 addresses."]
        Keyword, max = 128
    }

    impl Keyword {
        /// Indicates whether this [`Keyword`] occurs in the title or the
        /// full address of the given [`Listing`].
        ///
        /// The match is a case-sensitive substring containment.
        #[must_use]
        pub fn found_in(&self, listing: &Listing) -> bool {
            listing.title.as_ref().contains(self.as_ref())
                || listing.address.as_ref().contains(self.as_ref())
        }
    }

    define_kind! {
        #[doc = "Total price bracket, in hundred-million-won (억) steps. \
                 Lower bounds are exclusive, upper bounds inclusive."]
        enum PriceRange {
            #[doc = "Up to 1억 inclusive."]
            UpToOne = 1,

            #[doc = "Over 1억, up to 3억."]
            OneToThree = 2,

            #[doc = "Over 3억, up to 5억."]
            ThreeToFive = 3,

            #[doc = "Over 5억, up to 10억."]
            FiveToTen = 4,

            #[doc = "Over 10억."]
            OverTen = 5,
        }
    }

    impl PriceRange {
        /// Indicates whether the given [`Price`] falls into this bracket.
        #[must_use]
        pub fn contains(self, price: Price) -> bool {
            /// One 억 in the ten-thousand-won denomination.
            const EOK: u64 = 10_000;

            match self {
                Self::UpToOne => price <= Price::new(EOK),
                Self::OneToThree => {
                    price > Price::new(EOK) && price <= Price::new(3 * EOK)
                }
                Self::ThreeToFive => {
                    price > Price::new(3 * EOK) && price <= Price::new(5 * EOK)
                }
                Self::FiveToTen => {
                    price > Price::new(5 * EOK) && price <= Price::new(10 * EOK)
                }
                Self::OverTen => price > Price::new(10 * EOK),
            }
        }
    }

    define_kind! {
        #[doc = "Land area bracket in pyeong, applied to the converted \
                 area. Lower bounds are exclusive, upper bounds inclusive."]
        enum AreaRange {
            #[doc = "Up to 500평 inclusive."]
            UpToFiveHundred = 1,

            #[doc = "Over 500평, up to 1,000평."]
            FiveHundredToThousand = 2,

            #[doc = "Over 1,000평, up to 2,000평."]
            ThousandToTwoThousand = 3,

            #[doc = "Over 2,000평."]
            OverTwoThousand = 4,
        }
    }

    impl AreaRange {
        /// Indicates whether the given area falls into this bracket.
        #[must_use]
        pub fn contains(self, area: Pyeong) -> bool {
            match self {
                Self::UpToFiveHundred => area <= 500.into(),
                Self::FiveHundredToThousand => {
                    area > 500.into() && area <= 1_000.into()
                }
                Self::ThousandToTwoThousand => {
                    area > 1_000.into() && area <= 2_000.into()
                }
                Self::OverTwoThousand => area > 2_000.into(),
            }
        }
    }
}

/// Per-status tally of [`Listing`]s for the admin dashboard cards.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StatusCounts {
    /// Total number of [`Listing`]s.
    pub total: usize,

    /// Number of [`listing::Status::Active`] [`Listing`]s.
    ///
    /// [`listing::Status::Active`]: crate::domain::listing::Status::Active
    pub active: usize,

    /// Number of [`listing::Status::Hidden`] [`Listing`]s.
    ///
    /// [`listing::Status::Hidden`]: crate::domain::listing::Status::Hidden
    pub hidden: usize,

    /// Number of [`listing::Status::Sold`] [`Listing`]s.
    ///
    /// [`listing::Status::Sold`]: crate::domain::listing::Status::Sold
    pub sold: usize,
}

impl StatusCounts {
    /// Tallies the given [`Listing`]s by their status.
    pub fn tally<'l>(
        listings: impl IntoIterator<Item = &'l crate::domain::Listing>,
    ) -> Self {
        use crate::domain::listing::Status;

        let mut counts = Self::default();
        for listing in listings {
            counts.total += 1;
            match listing.status {
                Status::Active => counts.active += 1,
                Status::Hidden => counts.hidden += 1,
                Status::Sold => counts.sold += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Price};

    use crate::domain::{listing, Listing};

    use super::{
        list::{AreaRange, Filter, PriceRange},
        StatusCounts,
    };

    fn listing(title: &str, address: &str) -> Listing {
        let address = listing::Address::new(address).unwrap();
        Listing {
            id: listing::Id::new(),
            title: title.parse().unwrap(),
            kind: listing::Kind::Factory,
            deal: listing::Deal::Sale,
            status: listing::Status::default(),
            price: 25_000.into(),
            monthly_rent: None,
            area: "1652.9".parse().unwrap(),
            building_area: None,
            total_floor_area: None,
            ground_floors: None,
            underground_floors: None,
            structure: None,
            use_approval_date: None,
            masked_address: address.masked(),
            address,
            region: "경기".parse().unwrap(),
            land_category: "공장용지".parse().unwrap(),
            zoning: "일반공업".parse().unwrap(),
            road_frontage: None,
            shape: None,
            terrain: None,
            illegal_building: false,
            description: "테스트 매물".parse().unwrap(),
            article: None,
            images: Vec::new(),
            video_url: None,
            memo: None,
            owner_phone: None,
            disclosure: listing::Disclosure::default(),
            created_at: DateTime::now().coerce(),
            updated_at: None,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = Filter::default();
        assert!(filter.matches(&listing("화성 공장", "화성시 팔탄면 123")));
    }

    #[test]
    fn keyword_matches_title_or_address() {
        let subject = listing("화성 공장 매매", "화성시 팔탄면 구장리 123-4");

        let by_title = Filter {
            keyword: Some("공장".parse().unwrap()),
            ..Filter::default()
        };
        assert!(by_title.matches(&subject));

        let by_address = Filter {
            keyword: Some("팔탄면".parse().unwrap()),
            ..Filter::default()
        };
        assert!(by_address.matches(&subject));

        let no_match = Filter {
            keyword: Some("창고".parse().unwrap()),
            ..Filter::default()
        };
        assert!(!no_match.matches(&subject));
    }

    #[test]
    fn price_bracket_bounds() {
        // Bottom bracket is inclusive at 1억.
        assert!(PriceRange::UpToOne.contains(Price::new(10_000)));
        assert!(!PriceRange::OneToThree.contains(Price::new(10_000)));

        // Lower bound exclusive, upper inclusive.
        assert!(PriceRange::OneToThree.contains(Price::new(10_001)));
        assert!(PriceRange::OneToThree.contains(Price::new(30_000)));
        assert!(!PriceRange::OneToThree.contains(Price::new(30_001)));

        // Top bracket is open-ended.
        assert!(!PriceRange::OverTen.contains(Price::new(100_000)));
        assert!(PriceRange::OverTen.contains(Price::new(100_001)));
    }

    #[test]
    fn area_bracket_bounds_apply_to_converted_area() {
        // 1652.9 ㎡ converts to exactly 500.0 평.
        let subject = listing("경계 매물", "화성시 팔탄면 1");

        let bottom = Filter {
            area: Some(AreaRange::UpToFiveHundred),
            ..Filter::default()
        };
        assert!(bottom.matches(&subject));

        let next = Filter {
            area: Some(AreaRange::FiveHundredToThousand),
            ..Filter::default()
        };
        assert!(!next.matches(&subject));
    }

    #[test]
    fn tallies_listings_by_status() {
        let mut hidden = listing("숨김", "화성시 1");
        hidden.status = listing::Status::Hidden;
        let mut sold = listing("완료", "화성시 2");
        sold.status = listing::Status::Sold;
        let active = listing("노출", "화성시 3");

        let counts = StatusCounts::tally([&hidden, &sold, &active]);
        assert_eq!(
            counts,
            StatusCounts {
                total: 3,
                active: 1,
                hidden: 1,
                sold: 1,
            },
        );
    }
}
