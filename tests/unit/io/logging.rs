//! Tests for verbosity mapping and logger installation

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use pixel_collapse::io::error::AlgorithmError;
    use pixel_collapse::io::logging::{init_logging, level_for};

    // Tests each -v count raises the level by one step
    // Verified by starting verbosity at Info
    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0, false), LevelFilter::Warn);
        assert_eq!(level_for(1, false), LevelFilter::Info);
        assert_eq!(level_for(2, false), LevelFilter::Debug);
        assert_eq!(level_for(3, false), LevelFilter::Trace);
        assert_eq!(level_for(9, false), LevelFilter::Trace);
    }

    // Tests quiet overrides any verbosity
    // Verified by checking verbosity before quiet
    #[test]
    fn test_quiet_wins() {
        assert_eq!(level_for(0, true), LevelFilter::Error);
        assert_eq!(level_for(3, true), LevelFilter::Error);
    }

    // Tests a second installation reports a logging error
    // Verified by ignoring the result of fern's apply
    #[test]
    fn test_second_install_fails() {
        let _ = init_logging(LevelFilter::Off);
        assert!(matches!(
            init_logging(LevelFilter::Off),
            Err(AlgorithmError::Logging { .. })
        ));
    }
}
