//! Tests for automaton progress display

#[cfg(test)]
mod tests {
    use tessella::io::progress::ProgressManager;

    // Tests a manager without a bar ignores updates
    // Verified by creating a bar on construction
    #[test]
    fn test_progress_manager_new() {
        let pm = ProgressManager::new();
        pm.update(3, 10);
        pm.finish();
        assert_eq!(pm.position(), 0);
    }

    // Tests default trait implementation
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let pm = ProgressManager::default();
        assert_eq!(pm.position(), ProgressManager::new().position());
    }

    // Tests updates move the bar to the reported generation
    // Verified by incrementing instead of setting the position
    #[test]
    fn test_update_sets_position() {
        let mut pm = ProgressManager::hidden();
        pm.initialize(10);
        pm.update(4, 2);
        assert_eq!(pm.position(), 4);
        pm.update(7, 1);
        assert_eq!(pm.position(), 7);
        pm.finish();
    }

    // Tests reinitializing resets the position
    // Verified by keeping the previous position
    #[test]
    fn test_reinitialize_resets() {
        let mut pm = ProgressManager::hidden();
        pm.initialize(5);
        pm.update(5, 0);
        pm.initialize(3);
        assert_eq!(pm.position(), 0);
    }
}
