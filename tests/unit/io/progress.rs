//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use stitchpattern::io::progress::{PHASES, ProgressManager};

    // Tests full pattern lifecycle without panicking
    // Verified by indexing pattern states without bounds checks
    #[test]
    fn test_pattern_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);
        manager.start_pattern(0, "pattern_1");
        for phase in PHASES {
            manager.enter_phase(0, phase);
        }
        manager.complete_pattern(0);
        manager.start_pattern(1, "pattern_2");
        manager.complete_pattern(1);
        assert!(!manager.is_finished());
        manager.finish();

        assert_eq!(manager.started(), 2);
        assert!(manager.is_finished());
    }

    // Large batches and out-of-order indices are tolerated
    // Verified by only resizing state when the index equals the length
    #[test]
    fn test_batch_mode_sparse_indices() {
        let mut manager = ProgressManager::default();
        manager.initialize(20);
        manager.start_pattern(12, "pattern_12");
        manager.enter_phase(3, "render");
        manager.complete_pattern(12);
        manager.finish();

        assert_eq!(manager.started(), 1);
    }

    // Phases cover generation through animation in order
    // Verified by reordering the phase list
    #[test]
    fn test_phase_order() {
        assert_eq!(PHASES, ["generate", "finalize", "render", "animate"]);
    }
}
