use super::unit_to_byte;

/// Convert HSL to RGB bytes.
///
/// `hue` is in degrees and may be any value; it is wrapped into [0, 360)
/// first. `saturation` and `lightness` are unit fractions (0.0-1.0).
pub fn hsl_to_rgb(hue: i64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    if saturation == 0.0 {
        let v = unit_to_byte(lightness);
        return (v, v, v);
    }

    let t1 = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let t2 = 2.0 * lightness - t1;

    let hn = hue.rem_euclid(360) as f64 / 360.0;
    let channel = |offset: f64| unit_to_byte(hue_to_unit(t1, t2, wrap_unit(hn + offset)));

    (channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

/// Bring a hue fraction back into [0, 1) with a single add or subtract.
fn wrap_unit(t: f64) -> f64 {
    if t < 0.0 {
        t + 1.0
    } else if t >= 1.0 {
        t - 1.0
    } else {
        t
    }
}

fn hue_to_unit(t1: f64, t2: f64, tc: f64) -> f64 {
    if 6.0 * tc < 1.0 {
        t2 + (t1 - t2) * 6.0 * tc
    } else if 2.0 * tc < 1.0 {
        t1
    } else if 3.0 * tc < 2.0 {
        t2 + (t1 - t2) * (2.0 / 3.0 - tc) * 6.0
    } else {
        t2
    }
}
