mod common;

#[cfg(test)]
pub mod effects_tests {
    use tourbook::frontend::effects::*;

    #[test]
    fn test_glow_gradient() {
        assert_eq!(
            glow_gradient(12.4, 80.6, 300.0, "rgba(56, 189, 248, 0.15)"),
            "radial-gradient(300px circle at 12px 81px, rgba(56, 189, 248, 0.15), transparent 80%)"
        );
    }

    #[test]
    fn test_wave_path_shape() {
        let wave = Wave {
            width: 100.0,
            height: 50.0,
            baseline: 25.0,
            amplitude: 10.0,
            frequency: 1.0,
            phase: 0.0,
            segments: 4,
        };

        let path = wave.path();

        assert!(path.starts_with("M0,25.0"));
        assert!(path.contains(" L25.0,35.0"));
        assert!(path.contains(" L75.0,15.0"));
        assert!(path.ends_with(" L100.0,50.0 L0,50.0 Z"));
        assert_eq!(path.matches(" L").count(), 4 + 2);
    }

    #[test]
    fn test_wave_zero_segments_still_closes() {
        let wave = Wave {
            segments: 0,
            ..Wave::default()
        };

        let path = wave.path();

        assert_eq!(path.matches(" L").count(), 1 + 2);
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_wave_degenerate_width() {
        let wave = Wave {
            width: 0.0,
            ..Wave::default()
        };
        assert_eq!(wave.y_at(10.0), wave.baseline);
    }

    #[test]
    fn test_particles_are_deterministic_and_in_bounds() {
        let first = particles(24);
        let second = particles(24);

        assert_eq!(first, second);
        assert_eq!(first.len(), 24);
        for p in &first {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((2.0..6.0).contains(&p.size));
            assert!((10.0..22.0).contains(&p.duration));
            assert!((0.2..0.7).contains(&p.opacity));
        }
        assert_ne!(first[0].left, first[1].left);
    }

    #[test]
    fn test_particle_style() {
        let style = particles(1)[0].style();

        assert!(style.starts_with("left: 13.00%;"));
        assert!(style.contains("animation-duration:"));
    }

    #[test]
    fn test_parallax_offset_clamps_depth() {
        assert_eq!(parallax_offset(200.0, 0.5), 100.0);
        assert_eq!(parallax_offset(200.0, 2.0), 200.0);
        assert_eq!(parallax_offset(200.0, -1.0), 0.0);
    }
}
