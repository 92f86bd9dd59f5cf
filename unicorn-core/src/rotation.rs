//! Quarter-turn rotation
//!
//! Rotation is only ever stored as a count of quarter turns (0-3).
//! Converting from degrees snaps to the nearest multiple of 90°, with ties
//! going to the even quarter-turn count: 45° → 0°, 135° → 180°,
//! 225° → 180°, 315° → 0°.

/// Counter-clockwise rotation in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Rotation from a quarter-turn count; any integer is reduced modulo 4
    pub const fn from_steps(steps: i32) -> Self {
        match steps.rem_euclid(4) {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// Rotation from an angle in degrees, snapped to a quarter turn
    pub const fn from_degrees(degrees: i32) -> Self {
        let quarter = degrees.div_euclid(90);
        let rest = degrees.rem_euclid(90);
        let quarter = if rest * 2 > 90 || (rest * 2 == 90 && quarter % 2 != 0) {
            quarter + 1
        } else {
            quarter
        };
        Self::from_steps(quarter)
    }

    /// Rotation from a fractional angle in degrees
    ///
    /// Same snapping as [`Rotation::from_degrees`]: 44.9° → 0°, 45.1° → 90°,
    /// 135.0° → 180°. NaN and infinite angles give [`Rotation::Deg0`].
    pub fn from_angle(degrees: f32) -> Self {
        // Reducing modulo four quarter turns is exact and keeps parity
        let quarters = (degrees / 90.0) % 4.0;
        if !quarters.is_finite() {
            return Rotation::Deg0;
        }
        let whole = quarters as i32;
        let frac = quarters - whole as f32;
        let away = if quarters < 0.0 { -1 } else { 1 };
        let tie = frac == 0.5 || frac == -0.5;
        let quarter = if frac > 0.5 || frac < -0.5 || (tie && whole % 2 != 0) {
            whole + away
        } else {
            whole
        };
        Self::from_steps(quarter)
    }

    /// Quarter-turn count (0-3)
    pub const fn steps(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Angle in degrees (0, 90, 180 or 270)
    pub const fn degrees(self) -> i32 {
        self.steps() as i32 * 90
    }

    /// This rotation followed by `steps` more quarter turns
    pub const fn plus_steps(self, steps: i32) -> Self {
        Self::from_steps(self.steps() as i32 + steps.rem_euclid(4))
    }

    /// Whether width and height swap under this rotation
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}
