//! Tests for the sampling progress display

#[cfg(test)]
mod tests {
    use newsmosaic::io::progress::ProgressManager;

    // Tests the full lifecycle runs without an initialized bar
    // Verified by updating before initialization
    #[test]
    fn test_lifecycle_without_bar() {
        let pm = ProgressManager::new();
        pm.update();
        pm.finish();
    }

    // Tests the bar lifecycle over a known run count
    #[test]
    fn test_lifecycle_with_bar() {
        let mut pm = ProgressManager::new();
        pm.initialize(10);

        for _ in 0..10 {
            pm.update();
        }
        pm.finish();
    }

    // Tests the default construction matches new
    // Verified by diverging the default initial state
    #[test]
    fn test_default_matches_new() {
        let pm = ProgressManager::default();
        pm.update();
        pm.finish();
    }

    // Tests reinitialization replaces the previous bar
    #[test]
    fn test_reinitialize() {
        let mut pm = ProgressManager::new();
        pm.initialize(5);
        pm.update();

        pm.initialize(3);
        pm.update();
        pm.finish();
    }
}
