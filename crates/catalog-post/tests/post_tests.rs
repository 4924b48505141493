use catalog_post::prelude::*;
use catalog_test_utils::{broken_input, remaining_lines, scripted, seeded_rng, InputError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_operators_chain_on_same_post() {
    let post = !!Post::new(100, 20, 50).with_incremented_views().with_incremented_views();

    assert_eq!(post.to_string(), "102, 20, 52");
    assert!(post != Post::new(100, 20, 50));
    assert!(post == Post::new(102, 20, 52));
}

#[test]
fn test_clamp_contrasts_with_plant_rejection() {
    let mut post = Post::new(100, 20, 50);
    post.set_num_views(-5);
    assert_eq!(post.num_views(), 0);

    // The previous value is not retained
    post.set_num_views(40);
    post.set_num_views(-1);
    assert_eq!(post.num_views(), 0);
}

#[test]
fn test_init_consumes_three_lines() {
    let mut input = scripted(&["150", "20", "50", "rest"]);
    let mut post = Post::default();
    post.init(&mut input).unwrap();

    assert_eq!(post, Post::new(150, 20, 50));
    assert_eq!(remaining_lines(&mut input), vec!["rest".to_string()]);
}

#[test]
fn test_init_read_failure_propagates() {
    let mut post = Post::new(1, 2, 3);
    let result = post.init(&mut broken_input());

    assert!(matches!(result, Err(InputError::Read(_))));
    assert_eq!(post, Post::new(1, 2, 3));
}

#[test]
fn test_random_posts_are_reproducible() {
    let first = Post::random(&mut seeded_rng(3));
    let second = Post::random(&mut seeded_rng(3));
    assert_eq!(first, second);
}

#[test]
fn test_empty_audience_is_an_error() {
    let post = Post::new(10, 0, 0);
    assert_eq!(
        Post::engagement_rate_of(&post, 0),
        Err(EngagementError::EmptyAudience)
    );
}

proptest! {
    #[test]
    fn prop_counters_never_negative(views in any::<i64>(), comments in any::<i64>(), reactions in any::<i64>()) {
        let post = Post::new(views, comments, reactions);
        prop_assert_eq!(post.num_views() == 0, views <= 0);
        prop_assert_eq!(post.num_comments() == 0, comments <= 0);
        prop_assert_eq!(post.num_reactions() == 0, reactions <= 0);
    }

    #[test]
    fn prop_engagement_rate_forms_agree(
        views in 0i64..1_000_000,
        comments in 0i64..1_000_000,
        reactions in 0i64..1_000_000,
        audience in 1u64..10_000_000,
    ) {
        let post = Post::new(views, comments, reactions);
        let expected = (views + comments + reactions) as f64 / audience as f64 * 100.0;
        prop_assert_eq!(post.engagement_rate(audience), Ok(expected));
        prop_assert_eq!(Post::engagement_rate_of(&post, audience), post.engagement_rate(audience));
    }

    #[test]
    fn prop_is_active_iff_any_nonzero(views in 0i64..3, comments in 0i64..3, reactions in 0i64..3) {
        let post = Post::new(views, comments, reactions);
        prop_assert_eq!(post.is_active(), views + comments + reactions > 0);
    }

    #[test]
    fn prop_coverage_within_half_tenth(views in 0u32..10_000_000) {
        let post = Post::new(i64::from(views), 0, 0);
        let exact = f64::from(views) / 1000.0;
        prop_assert!((post.coverage() - exact).abs() <= 0.05 + 1e-9);
    }

    #[test]
    fn prop_increment_advances_by_one(views in 0i64..1_000_000, reactions in 0i64..1_000_000) {
        let post = Post::new(views, 7, reactions).with_incremented_views();
        prop_assert_eq!(i64::from(post.num_views()), views + 1);
        let post = !post;
        prop_assert_eq!(i64::from(post.num_reactions()), reactions + 1);
        prop_assert_eq!(post.num_comments(), 7);
    }
}
