use todoview::logging;

#[test]
fn test_init_reports_whether_the_file_subscriber_was_installed() {
    let dir = tempfile::tempdir().unwrap();

    // SAFETY: no other test in this binary reads or writes this variable.
    unsafe { std::env::set_var("TODOVIEW_LOG_DIR", dir.path()) };

    let path = logging::init().expect("first init installs the file subscriber");
    assert_eq!(path, dir.path().join("todoview.log"));
    assert!(path.exists());

    // A global subscriber is already in place, so the file would stay silent.
    assert!(logging::init().is_none());
}
