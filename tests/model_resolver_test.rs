use adliye::application::services::resolve_candidates;

fn preference() -> Vec<String> {
    vec![
        "model-a".to_string(),
        "model-b".to_string(),
        "model-c".to_string(),
    ]
}

#[test]
fn given_no_live_listing_when_resolving_then_preference_unchanged() {
    let resolved = resolve_candidates(&preference(), None);

    assert_eq!(resolved, preference());
}

#[test]
fn given_partial_live_listing_when_resolving_then_filtered_in_preference_order() {
    let live = vec!["model-c".to_string(), "model-b".to_string()];

    let resolved = resolve_candidates(&preference(), Some(&live));

    assert_eq!(resolved, vec!["model-b".to_string(), "model-c".to_string()]);
}

#[test]
fn given_disjoint_live_listing_when_resolving_then_preference_unchanged() {
    let live = vec!["model-x".to_string(), "model-y".to_string()];

    let resolved = resolve_candidates(&preference(), Some(&live));

    assert_eq!(resolved, preference());
}

#[test]
fn given_empty_live_listing_when_resolving_then_preference_unchanged() {
    let live: Vec<String> = Vec::new();

    let resolved = resolve_candidates(&preference(), Some(&live));

    assert_eq!(resolved, preference());
}

#[test]
fn given_empty_preference_when_resolving_then_result_is_empty() {
    let live = vec!["model-a".to_string()];

    let resolved = resolve_candidates(&[], Some(&live));

    assert!(resolved.is_empty());
}
