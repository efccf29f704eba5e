use briefbot::setup_logging;

#[test]
fn test_logging_setup() {
    // setup_logging is called at the top of every run; a second call must not panic
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}
