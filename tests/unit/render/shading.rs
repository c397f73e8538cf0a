//! Tests for hex formatting and thread gradient shading

#[cfg(test)]
mod tests {
    use stitchpattern::pattern::Color;
    use stitchpattern::render::shading::{shade, thread_gradient};

    // Hex output is lower case and zero padded
    // Verified by formatting channels without padding
    #[test]
    fn test_to_hex() {
        assert_eq!(Color::new(255, 0, 16, "x").to_hex(), "#ff0010");
        assert_eq!(Color::new(0, 0, 0, "x").to_hex(), "#000000");
    }

    // Shading adds 2.55 per percent and saturates at the channel limits
    // Verified by removing the clamp
    #[test]
    fn test_shade() {
        assert_eq!(shade([100, 100, 100], 60), [253, 253, 253]);
        assert_eq!(shade([200, 10, 100], 60), [255, 163, 253]);
        assert_eq!(shade([200, 10, 100], -60), [47, 0, 0]);
        assert_eq!(shade([12, 34, 56], 0), [12, 34, 56]);
    }

    // Gradient hits its stops exactly
    // Verified by swapping the highlight and edge shades
    #[test]
    fn test_thread_gradient_stops() {
        let base = [100, 120, 140];
        assert_eq!(thread_gradient(base, 0.0), shade(base, -60));
        assert_eq!(thread_gradient(base, 0.05), base);
        assert_eq!(thread_gradient(base, 0.5), shade(base, 60));
        assert_eq!(thread_gradient(base, 1.0), shade(base, -60));
    }

    // Positions outside [0, 1] clamp to the ends
    // Verified by removing the position clamp
    #[test]
    fn test_thread_gradient_clamps() {
        let base = [100, 120, 140];
        assert_eq!(thread_gradient(base, -1.0), thread_gradient(base, 0.0));
        assert_eq!(thread_gradient(base, 3.0), thread_gradient(base, 1.0));
    }

    // Between stops the shade is interpolated
    // Verified by returning the start shade for the whole interval
    #[test]
    fn test_thread_gradient_interpolates() {
        let base = [100, 100, 100];
        let [r, _, _] = thread_gradient(base, 0.275);
        assert!(r > 100 && r < 253, "expected a value between base and highlight, got {r}");
    }
}
