use commodity_hub::domain::navigation::{Route, signup_requested};
use strum::IntoEnumIterator;

#[test]
fn paths_resolve_back_to_routes() {
    for route in Route::iter() {
        assert_eq!(Route::from_path(&route.path()), Some(route), "{}", route.path());
    }
}

#[test]
fn trailing_slash_and_query_are_tolerated() {
    assert_eq!(Route::from_path("/dashboard/"), Some(Route::Dashboard));
    assert_eq!(Route::from_path("/trading?tab=bots"), Some(Route::Trading));
    assert_eq!(Route::from_path("/auth?signup=false"), Some(Route::Auth));
    assert_eq!(Route::from_path("/"), Some(Route::Home));
}

#[test]
fn unknown_paths_have_no_route() {
    assert_eq!(Route::from_path("/markets"), None);
    assert_eq!(Route::from_path(""), None);
}

#[test]
fn only_core_routes_render_pages() {
    let with_page: Vec<Route> = Route::iter().filter(Route::has_page).collect();
    assert_eq!(
        with_page,
        vec![Route::Home, Route::Dashboard, Route::Trading, Route::Auth, Route::Signup]
    );
    assert!(!Route::Careers.has_page());
}

#[test]
fn signup_flag_in_query() {
    assert!(signup_requested(Some("signup=true")));
    assert!(signup_requested(Some("?ref=nav&signup=true")));
    assert!(!signup_requested(Some("?signup=TRUE")));
    assert!(!signup_requested(Some("")));
    assert!(!signup_requested(None));
}
