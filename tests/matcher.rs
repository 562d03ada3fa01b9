use reactive_router::{match_path, ParamMap};

#[test]
fn match_path_common() {
    let cases: &[(&str, &str, &[(&str, &str)])] = &[
        ("users", "/users", &[]),
        ("/a/b/c", "a/b/c", &[]),
        ("//a//b/", "/a/b", &[]),
        (":id", "42", &[("id", "42")]),
        (
            "/user/:user_id/post/:post_id",
            "/user/asd/post/123",
            &[("post_id", "123"), ("user_id", "asd")],
        ),
        (":id?", "", &[]),
        (":id?", "5", &[("id", "5")]),
        ("/a/:id?", "/a", &[]),
        ("/a/:id?", "/a/5", &[("id", "5")]),
        ("a/*", "a/x", &[]),
        ("a/**", "a/b/c", &[("*", "b/c")]),
        ("a/**", "a", &[("*", "")]),
        ("**", "", &[("*", "")]),
        ("**", "/home/asd/.bashrc", &[("*", "home/asd/.bashrc")]),
        // a catch-all terminates the scan wherever it appears
        ("**/tail", "x/y", &[("*", "x/y")]),
    ];

    for &(pattern, pathname, params) in cases {
        let m = match_path(pattern, pathname)
            .unwrap_or_else(|| panic!("no match: pattern = {pattern:?}, pathname = {pathname:?}"));
        let expected: ParamMap = params.iter().copied().collect();
        assert_eq!(
            m.params, expected,
            "pattern = {pattern:?}, pathname = {pathname:?}"
        );
        assert_eq!(m.path, pattern);
    }
}

#[test]
fn match_path_misses() {
    let cases: &[(&str, &str)] = &[
        ("users", "posts"),
        ("a", "a/b"),
        ("a/b", "a"),
        (":id", ""),
        ("a/*", "a"),
        ("*", ""),
        ("/user/:user_id", "/user/asd/extra"),
        ("/a/:id?/b", "/a/b/c"),
    ];

    for &(pattern, pathname) in cases {
        assert!(
            match_path(pattern, pathname).is_none(),
            "unexpected match: pattern = {pattern:?}, pathname = {pathname:?}"
        );
    }
}

#[test]
fn match_path_literal_only_is_segment_equality() {
    assert!(match_path("/a/b", "a//b/").is_some());
    assert!(match_path("", "/").is_some());
    assert!(match_path("", "").is_some());
    assert!(match_path("/a/b", "/a/c").is_none());
}

#[test]
fn match_path_is_pure() {
    let first = match_path("/user/:id/**", "/user/7/a/b");
    let second = match_path("/user/:id/**", "/user/7/a/b");
    assert_eq!(first, second);

    let m = first.unwrap();
    assert_eq!(m.params.get("id"), Some("7"));
    assert_eq!(m.params.get("*"), Some("a/b"));
}

#[test]
fn match_path_repeated_name_last_wins() {
    let m = match_path(":x/:x", "a/b").unwrap();
    assert_eq!(m.params.len(), 1);
    assert_eq!(m.params.get("x"), Some("b"));
}
