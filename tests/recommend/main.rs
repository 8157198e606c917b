//! Integration tests for the recommendation facade over the seeded catalog.

use car_advisor::{
    CatalogExt, CatalogStore, Criteria, InMemoryCatalogStore, PowerBand, PriceBand,
    RecommendationView, Recommender,
};

fn seeded_in_memory() -> Recommender<InMemoryCatalogStore> {
    let store = InMemoryCatalogStore::new();
    store.seed_if_empty().unwrap();
    Recommender::new(store)
}

fn assert_sorted_by_price(views: &[RecommendationView]) {
    assert!(
        views.windows(2).all(|pair| pair[0].price <= pair[1].price),
        "not sorted by price: {views:?}"
    );
}

fn models(views: &[RecommendationView]) -> Vec<&str> {
    views.iter().map(|view| view.model.as_str()).collect()
}

fn check_scenarios<S: CatalogStore>(recommender: &Recommender<S>) {
    // Budget ceiling keeps the Granta and nothing pricier.
    let cheap = recommender
        .recommend(&Criteria::new().with_max_price(700_000))
        .unwrap();
    assert!(cheap.iter().any(|v| v.brand == "Lada" && v.model == "Granta"));
    assert!(cheap.iter().all(|v| v.price <= 700_000));
    assert_sorted_by_price(&cheap);

    // BMW sedans, cheapest first.
    let bmw = recommender
        .recommend(&Criteria::new().with_brand("BMW").with_body_type("Седан"))
        .unwrap();
    assert_eq!(models(&bmw), vec!["3 Series", "5 Series", "7 Series"]);
    assert!(bmw.iter().all(|v| v.brand == "BMW" && v.body_type == "Седан"));

    // Power floor keeps the S-Class and drops the X5.
    let powerful = recommender
        .recommend(&Criteria::new().with_min_power(400))
        .unwrap();
    assert!(powerful.iter().all(|v| v.power >= 400));
    assert!(powerful.iter().any(|v| v.model == "S-Class" && v.power == 429));
    assert!(!powerful.iter().any(|v| v.model == "X5"));
    assert_sorted_by_price(&powerful);

    // Unknown brand is an empty answer, not an error.
    let none = recommender
        .recommend(&Criteria::new().with_brand("Nonexistent"))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn scenarios_in_memory() {
    check_scenarios(&seeded_in_memory());
}

#[cfg(feature = "sqlite")]
#[test]
fn scenarios_sqlite() {
    let store = car_advisor::SqliteCatalogStore::in_memory().unwrap();
    store.seed_if_empty().unwrap();
    let recommender = Recommender::new(store);
    check_scenarios(&recommender);
    recommender.into_store().close().unwrap();
}

#[test]
fn unfiltered_recommendation_covers_the_catalog() {
    let recommender = seeded_in_memory();
    let all = recommender.recommend(&Criteria::new()).unwrap();
    assert_eq!(all.len(), recommender.catalog_size().unwrap());
    assert_sorted_by_price(&all);
    assert_eq!(all.first().map(|v| v.model.as_str()), Some("Granta"));
    assert!(all.iter().all(|v| !v.description.is_empty()));
}

#[test]
fn every_price_band_respects_its_bounds() {
    let recommender = seeded_in_memory();
    for band in PriceBand::ALL {
        let (min, max) = band.bounds();
        let views = recommender
            .recommend(&Criteria::new().with_price_band(band))
            .unwrap();
        assert!(!views.is_empty(), "band {band} matched nothing");
        for view in &views {
            assert!(min.is_none_or(|min| view.price >= min));
            assert!(max.is_none_or(|max| view.price <= max));
        }
        assert_sorted_by_price(&views);
    }
}

#[test]
fn power_band_combines_with_body_type() {
    let recommender = seeded_in_memory();
    let views = recommender
        .recommend(
            &Criteria::new()
                .with_body_type("Хэтчбек")
                .with_power_band(PowerBand::From100To150),
        )
        .unwrap();

    assert!(!views.is_empty());
    assert!(views
        .iter()
        .all(|v| v.body_type == "Хэтчбек" && (100..=150).contains(&v.power)));
}

#[test]
fn inverted_range_yields_nothing() {
    let recommender = seeded_in_memory();
    let criteria = Criteria::new().with_price_range(Some(5_000_000), Some(1_000_000));
    assert!(criteria.validate().is_err());
    assert!(recommender.recommend(&criteria).unwrap().is_empty());
}

#[test]
fn criteria_from_pairs_drive_recommendations() {
    let recommender = seeded_in_memory();
    let criteria = Criteria::from_pairs([
        ("body_type", "Пикап"),
        ("max_price", "3000000"),
        ("ignored", "value"),
    ])
    .unwrap();

    let views = recommender.recommend(&criteria).unwrap();
    assert_eq!(models(&views), vec!["Frontier"]);
}

#[test]
fn views_serialize_to_json() {
    let recommender = seeded_in_memory();
    let views = recommender
        .recommend(&Criteria::new().with_brand("Lada").with_max_price(600_000))
        .unwrap();
    let json = serde_json::to_value(&views).unwrap();
    assert_eq!(json[0]["model"], "Granta");
    assert_eq!(json[0]["price"], 600_000);
    assert_eq!(json[0]["description"], "Бюджетный седан");
}
