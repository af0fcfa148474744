use webring_core::{Ring, RingError, SiteRecord};

fn three_site_ring() -> Ring {
    Ring::new(vec![
        SiteRecord::new("a", "A"),
        SiteRecord::new("b", "B"),
        SiteRecord::new("c", "C"),
    ])
}

#[test]
fn test_neighbors_of_middle_member() {
    let ring = three_site_ring();
    let neighbors = ring.neighbors_of("b").unwrap();

    assert_eq!(neighbors.previous.url, "A");
    assert_eq!(neighbors.next.url, "C");
}

#[test]
fn test_neighbors_wrap_at_front() {
    let ring = three_site_ring();
    let neighbors = ring.neighbors_of("a").unwrap();

    assert_eq!(neighbors.previous.url, "C");
    assert_eq!(neighbors.next.url, "B");
}

#[test]
fn test_neighbors_wrap_at_back() {
    let ring = three_site_ring();
    let neighbors = ring.neighbors_of("c").unwrap();

    assert_eq!(neighbors.previous.url, "B");
    assert_eq!(neighbors.next.url, "A");
}

#[test]
fn test_single_member_ring_links_to_itself() {
    let ring = Ring::new(vec![SiteRecord::new("solo", "S")]);
    let neighbors = ring.neighbors(0).unwrap();

    assert_eq!(neighbors.previous.url, "S");
    assert_eq!(neighbors.next.url, "S");
}

#[test]
fn test_empty_ring_is_an_error() {
    let ring = Ring::new(vec![]);
    assert_eq!(ring.neighbors(0), Err(RingError::EmptyRing));
}

#[test]
fn test_index_out_of_bounds() {
    let ring = three_site_ring();
    assert_eq!(ring.neighbors(3), Err(RingError::IndexOutOfBounds(3)));
}

#[test]
fn test_unknown_uuid_is_an_explicit_error() {
    let ring = three_site_ring();
    assert_eq!(
        ring.neighbors_of("nope"),
        Err(RingError::UnknownSite("nope".to_string()))
    );
}

#[test]
fn test_locate_returns_first_exact_match() {
    let ring = Ring::new(vec![
        SiteRecord::new("dup", "first"),
        SiteRecord::new("dup", "second"),
    ]);
    assert_eq!(ring.locate("dup"), Some(0));
    // Prefix of a UUID is not a match
    assert_eq!(ring.locate("du"), None);
}

#[test]
fn test_ring_symmetry_round_trip() {
    // Walking next then prev (and prev then next) from any member returns
    // to that member.
    let ring = three_site_ring();
    for site in ring.sites() {
        let forward = ring.neighbors_of(&site.website_uuid).unwrap();
        let back = ring.neighbors_of(&forward.next.website_uuid).unwrap();
        assert_eq!(back.previous.website_uuid, site.website_uuid);

        let ahead = ring.neighbors_of(&forward.previous.website_uuid).unwrap();
        assert_eq!(ahead.next.website_uuid, site.website_uuid);
    }
}

#[test]
fn test_minimal_record_parses_with_defaults() {
    let body = r#"[{"website_uuid": "a", "url": "https://a.example"}]"#;
    let sites: Vec<SiteRecord> = serde_json::from_str(body).unwrap();

    assert_eq!(sites[0].website_uuid, "a");
    assert_eq!(sites[0].website_id, 0);
    assert_eq!(sites[0].website_name, "");
    assert!(!sites[0].is_anonymous);
}

#[test]
fn test_full_record_parses_and_ignores_unknown_fields() {
    let body = r#"[{
        "website_id": 7,
        "website_uuid": "a",
        "website_name": "A Blog",
        "is_anonymous": true,
        "recurse_id": 1234,
        "url": "https://a.example"
    }]"#;
    let sites: Vec<SiteRecord> = serde_json::from_str(body).unwrap();

    assert_eq!(sites[0].website_id, 7);
    assert_eq!(sites[0].website_name, "A Blog");
    assert!(sites[0].is_anonymous);
}

#[test]
fn test_random_skips_the_hub() {
    let ring = three_site_ring();
    for _ in 0..50 {
        let site = ring.random().unwrap();
        assert_ne!(site.website_uuid, "a");
    }
}

#[test]
fn test_random_needs_a_member_besides_the_hub() {
    assert!(Ring::new(vec![]).random().is_none());
    assert!(Ring::new(vec![SiteRecord::new("hub", "H")]).random().is_none());
}
