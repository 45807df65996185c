use super::*;

#[test]
fn recording_navigator_keeps_every_redirect() {
    let nav = RecordingNavigator::new();
    assert!(nav.redirects().is_empty());
    nav.redirect("index.html");
    nav.clone().redirect("/login");
    assert_eq!(nav.redirects(), vec!["index.html".to_owned(), "/login".to_owned()]);
}

#[test]
fn router_navigator_forwards_path_with_default_options() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let nav = RouterNavigator::new(move |path: &str, options: NavigateOptions| {
        sink.borrow_mut().push((path.to_owned(), options.replace));
    });
    nav.redirect("index.html");
    assert_eq!(*seen.borrow(), vec![("index.html".to_owned(), false)]);
}
