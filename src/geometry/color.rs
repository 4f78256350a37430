/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    #[must_use]
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Channels in `[red, green, blue, alpha]` order.
    #[must_use]
    pub const fn rgba(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip_through_getters() {
        let c = Color::new(255, 128, 0, 64);
        assert_eq!(c.red(), 255);
        assert_eq!(c.green(), 128);
        assert_eq!(c.blue(), 0);
        assert_eq!(c.alpha(), 64);
        assert_eq!(c.rgba(), [255, 128, 0, 64]);
    }
}
