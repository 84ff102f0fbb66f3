use pretty_assertions::assert_eq;

use super::*;

#[test]
fn same_seed_same_colors() {
    let a = Palette::new(7);
    let b = Palette::new(7);
    for i in 0..16 {
        assert_eq!(a.color(i), b.color(i));
    }
}

#[test]
fn different_seeds_differ() {
    let a = Palette::new(1);
    let b = Palette::new(2);
    assert_ne!(a, b);
}

#[test]
fn seed_zero_is_usable() {
    let palette = Palette::new(0);
    let distinct: std::collections::HashSet<Rgb> = (0..8).map(|i| palette.color(i)).collect();
    assert!(distinct.len() > 1);
}

#[test]
fn colors_step_by_stride() {
    let palette = Palette::new(42);
    for c in 0..3 {
        let first = palette.offsets[c] % 256;
        let step = palette.strides[c] % 256;
        let channel = |rgb: Rgb| match c {
            0 => rgb.r,
            1 => rgb.g,
            _ => rgb.b,
        };
        assert_eq!(u64::from(channel(palette.color(0))), first);
        assert_eq!(u64::from(channel(palette.color(1))), (first + step) % 256);
    }
}

#[test]
fn hex_display() {
    let color = Rgb {
        r: 0xff,
        g: 0x08,
        b: 0x00,
    };
    assert_eq!(color.to_string(), "#ff0800");
}

#[test]
fn seed_zero_sequence_is_pinned() {
    let palette = Palette::new(0);
    assert_eq!(palette.color(0), Rgb { r: 54, g: 142, b: 193 });
    assert_eq!(palette.color(1), Rgb { r: 29, g: 110, b: 120 });
}
