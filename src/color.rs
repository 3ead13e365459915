//! Procedural channel functions driving `u_color1`.
//!
//! Each returns `192 ± 64`, floored. The result is not clamped, so `R` can
//! reach 256 exactly.

pub fn r(x: i32, y: i32, t: f64) -> i32 {
    let (x, y) = (f64::from(x), f64::from(y));
    (192.0 + 64.0 * ((x * x - y * y) / 300.0 + t).cos()).floor() as i32
}

pub fn g(x: i32, y: i32, t: f64) -> i32 {
    let (x, y) = (f64::from(x), f64::from(y));
    let a = (x * x * (t / 4.0).cos() + y * y * (t / 3.0).sin()) / 300.0;
    (192.0 + 64.0 * a.sin()).floor() as i32
}

pub fn b(x: i32, y: i32, t: f64) -> i32 {
    let (dx, dy) = (f64::from(x) - 100.0, f64::from(y) - 100.0);
    let a = 5.0 * (t / 9.0).sin() + (dx * dx + dy * dy) / 1100.0;
    (192.0 + 64.0 * a.sin()).floor() as i32
}

/// All three channels at once, as `[r, g, b]`.
pub fn rgb(x: i32, y: i32, t: f64) -> [i32; 3] {
    [r(x, y, t), g(x, y, t), b(x, y, t)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(r(0, 0, 0.0), 256);
        assert_eq!(g(0, 0, 0.0), 192);
        assert_eq!(b(100, 100, 0.0), 192);
    }

    #[test]
    fn deterministic() {
        for x in 0..=32 {
            for y in (0..=32).step_by(4) {
                let t = f64::from(x) * 0.37 + f64::from(y);
                assert_eq!(rgb(x, y, t), rgb(x, y, t));
            }
        }
    }

    #[test]
    fn stays_near_baseline() {
        for x in 0..=32 {
            for y in 0..=32 {
                for &t in &[0.0, 1.5, 12.25, 300.0] {
                    for c in rgb(x, y, t) {
                        assert!((128..=256).contains(&c), "{c} at ({x},{y},{t})");
                    }
                }
            }
        }
    }

    #[test]
    fn red_is_periodic_in_t() {
        let tau = std::f64::consts::TAU;
        assert_eq!(r(3, 7, 0.5), r(3, 7, 0.5 + tau));
    }
}
